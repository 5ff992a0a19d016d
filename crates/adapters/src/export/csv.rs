use std::path::{Path, PathBuf};

use geo::Point;
use geosnap_application::{ApplicationError, FeatureTable};

const COLUMNS: [&str; 4] = ["name", "path", "photo_id", "geometry"];

pub(crate) fn write_table(
    table: &FeatureTable,
    output_path: &Path,
) -> Result<PathBuf, ApplicationError> {
    let mut writer = csv::Writer::from_path(output_path)
        .map_err(|error| ApplicationError::Export(error.to_string()))?;

    writer
        .write_record(COLUMNS)
        .map_err(|error| ApplicationError::Export(error.to_string()))?;

    for record in table.records() {
        let geometry = record
            .geometry()
            .map(|point| point_wkt(&point))
            .unwrap_or_default();
        writer
            .write_record([
                record.name.as_str(),
                record.path.as_str(),
                record.photo_id.as_str(),
                geometry.as_str(),
            ])
            .map_err(|error| ApplicationError::Export(error.to_string()))?;
    }

    writer
        .flush()
        .map_err(|error| ApplicationError::Export(error.to_string()))?;
    Ok(output_path.to_path_buf())
}

fn point_wkt(point: &Point<f64>) -> String {
    format!("POINT ({} {})", point.x(), point.y())
}
