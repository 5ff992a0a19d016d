use geosnap_application::PhotoIdGenerator;
use geosnap_domain::PhotoId;
use uuid::Uuid;

/// Random v4 identities in simple hex form. Every call is a fresh id,
/// so rebuilding a collection never reuses identities.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl PhotoIdGenerator for UuidGenerator {
    fn next_id(&self) -> PhotoId {
        PhotoId::new(Uuid::new_v4().simple().to_string())
    }
}
