mod csv;
mod feature_class;

use std::path::{Path, PathBuf};

use geosnap_application::{ApplicationError, FeatureExporter, FeatureTable};

/// Writes the assembled table to flat files: CSV for the tabular view,
/// a GeoJSON feature collection for the feature-class view.
#[derive(Debug, Default)]
pub struct FsFeatureExporter;

impl FeatureExporter for FsFeatureExporter {
    fn write_csv(
        &self,
        table: &FeatureTable,
        output_path: &Path,
    ) -> Result<PathBuf, ApplicationError> {
        csv::write_table(table, output_path)
    }

    fn write_feature_class(
        &self,
        table: &FeatureTable,
        output_path: &Path,
    ) -> Result<PathBuf, ApplicationError> {
        feature_class::write_feature_collection(table, output_path)
    }
}
