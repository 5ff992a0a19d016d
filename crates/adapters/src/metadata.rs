use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{In, Tag, Value};
use geosnap_application::{ApplicationError, GpsDirectory, GpsMetadataReader};
use geosnap_domain::{DmsAngle, LatitudeRef, LongitudeRef, UnsignedRational};

/// Reads the GPS tag group out of a photo's EXIF segment. A file whose
/// metadata container cannot be parsed is an error; a readable file
/// without an EXIF segment or without GPS tags yields an empty
/// directory.
#[derive(Debug, Default)]
pub struct ExifGpsReader;

impl GpsMetadataReader for ExifGpsReader {
    fn read_gps(&self, path: &Path) -> Result<GpsDirectory, ApplicationError> {
        let file = File::open(path).map_err(|error| ApplicationError::Io(error.to_string()))?;
        let mut reader = BufReader::new(file);

        let exif = match exif::Reader::new().read_from_container(&mut reader) {
            Ok(exif) => exif,
            Err(exif::Error::NotFound(_)) => return Ok(GpsDirectory::default()),
            Err(error) => return Err(ApplicationError::Metadata(error.to_string())),
        };

        let latitude = match (
            dms_triple(&exif, Tag::GPSLatitude),
            hemisphere(&exif, Tag::GPSLatitudeRef),
        ) {
            (Some(angle), Some(gps_ref)) => {
                LatitudeRef::from_gps_ref(&gps_ref).map(|hemisphere| (angle, hemisphere))
            }
            _ => None,
        };

        let longitude = match (
            dms_triple(&exif, Tag::GPSLongitude),
            hemisphere(&exif, Tag::GPSLongitudeRef),
        ) {
            (Some(angle), Some(gps_ref)) => {
                LongitudeRef::from_gps_ref(&gps_ref).map(|hemisphere| (angle, hemisphere))
            }
            _ => None,
        };

        Ok(GpsDirectory {
            latitude,
            longitude,
        })
    }
}

fn dms_triple(exif: &exif::Exif, tag: Tag) -> Option<DmsAngle> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Rational(parts) if parts.len() >= 3 => Some(DmsAngle::new(
            UnsignedRational::new(parts[0].num, parts[0].denom),
            UnsignedRational::new(parts[1].num, parts[1].denom),
            UnsignedRational::new(parts[2].num, parts[2].denom),
        )),
        _ => None,
    }
}

fn hemisphere(exif: &exif::Exif, tag: Tag) -> Option<String> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    Some(
        field
            .display_value()
            .to_string()
            .trim_matches('"')
            .to_string(),
    )
}
