use serde::Serialize;

/// A coordinate reference system identified by its EPSG code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpatialRef {
    pub name: &'static str,
    pub epsg: u32,
}

impl SpatialRef {
    /// Geographic WGS84, the only reference system this crate assigns.
    pub const WGS84: SpatialRef = SpatialRef {
        name: "WGS 84",
        epsg: 4326,
    };

    pub fn code(&self) -> String {
        format!("EPSG:{}", self.epsg)
    }
}
