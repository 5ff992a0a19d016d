mod coords;
mod error;
mod photo;
mod srs;

pub use coords::{
    decimal_latitude, decimal_longitude, DmsAngle, LatitudeRef, LongitudeRef, UnsignedRational,
    LATITUDE_SLACK_DEGREES, LONGITUDE_SLACK_DEGREES,
};
pub use error::DomainError;
pub use photo::{display_name, is_photo_file, PhotoId, PhotoRecord};
pub use srs::SpatialRef;
