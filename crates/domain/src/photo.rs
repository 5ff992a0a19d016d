use std::path::Path;

use geo::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoId(String);

impl PhotoId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One photograph's identity and extracted location. Built once at
/// collection-build time and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub photo_id: PhotoId,
    pub name: String,
    pub path: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PhotoRecord {
    /// Point geometry, present only when both coordinates are present.
    pub fn geometry(&self) -> Option<Point<f64>> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Point::new(longitude, latitude)),
            _ => None,
        }
    }
}

pub fn is_photo_file(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    ext.eq_ignore_ascii_case("jpg")
}

pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}
