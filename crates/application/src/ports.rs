use std::path::{Path, PathBuf};

use geosnap_domain::{DmsAngle, LatitudeRef, LongitudeRef, PhotoId};

use crate::{ApplicationError, FeatureTable};

/// The GPS tag group of one photo, as surfaced by the metadata decoder.
/// Both fields absent models "no GPS section" — a normal outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GpsDirectory {
    pub latitude: Option<(DmsAngle, LatitudeRef)>,
    pub longitude: Option<(DmsAngle, LongitudeRef)>,
}

impl GpsDirectory {
    pub fn is_empty(&self) -> bool {
        self.latitude.is_none() && self.longitude.is_none()
    }
}

/// Per-file metadata decoder. Fails only when the metadata container
/// itself cannot be parsed; a readable file without GPS tags yields an
/// empty directory.
pub trait GpsMetadataReader {
    fn read_gps(&self, path: &Path) -> Result<GpsDirectory, ApplicationError>;
}

#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    pub scanned_files: usize,
    pub eligible: Vec<PathBuf>,
}

/// Non-recursive directory scan yielding eligible photo paths in
/// listing order.
pub trait PhotoScanner {
    fn scan_photos(&self, folder: &Path) -> Result<ScanSummary, ApplicationError>;
}

/// Fresh, opaque identity per call. Never content-addressed, so two
/// records built from the same file get distinct ids.
pub trait PhotoIdGenerator {
    fn next_id(&self) -> PhotoId;
}

/// Serialization backend for the assembled table.
pub trait FeatureExporter {
    fn write_csv(
        &self,
        table: &FeatureTable,
        output_path: &Path,
    ) -> Result<PathBuf, ApplicationError>;

    fn write_feature_class(
        &self,
        table: &FeatureTable,
        output_path: &Path,
    ) -> Result<PathBuf, ApplicationError>;
}
