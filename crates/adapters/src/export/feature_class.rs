use std::path::{Path, PathBuf};

use geojson::{feature::Id, Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue};
use geosnap_application::{ApplicationError, FeatureTable};
use geosnap_domain::{PhotoRecord, SpatialRef};

/// Writes a GeoJSON feature collection at the directory + leaf name
/// split from `output_path`. The directory must already exist and the
/// name must not collide with an existing feature class.
pub(crate) fn write_feature_collection(
    table: &FeatureTable,
    output_path: &Path,
) -> Result<PathBuf, ApplicationError> {
    let Some(name) = output_path.file_name().and_then(|name| name.to_str()) else {
        return Err(ApplicationError::Export(format!(
            "feature class path has no name: {}",
            output_path.display()
        )));
    };

    let parent = output_path.parent().unwrap_or_else(|| Path::new(""));
    if !parent.as_os_str().is_empty() && !parent.is_dir() {
        return Err(ApplicationError::Export(format!(
            "containing directory does not exist: {}",
            parent.display()
        )));
    }

    let target = if Path::new(name).extension().is_some() {
        output_path.to_path_buf()
    } else {
        output_path.with_extension("geojson")
    };
    if target.exists() {
        return Err(ApplicationError::Export(format!(
            "feature class name is already taken: {}",
            target.display()
        )));
    }

    let features = table.records().iter().map(feature).collect();
    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(crs_members(table.spatial_ref())),
    };

    std::fs::write(&target, GeoJson::from(collection).to_string())
        .map_err(|error| ApplicationError::Export(error.to_string()))?;
    Ok(target)
}

fn feature(record: &PhotoRecord) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), JsonValue::from(record.name.clone()));
    properties.insert("path".to_string(), JsonValue::from(record.path.clone()));
    properties.insert(
        "photo_id".to_string(),
        JsonValue::from(record.photo_id.as_str()),
    );

    Feature {
        bbox: None,
        geometry: record
            .geometry()
            .map(|point| Geometry::new(geojson::Value::from(&point))),
        id: Some(Id::String(record.photo_id.as_str().to_string())),
        properties: Some(properties),
        foreign_members: None,
    }
}

fn crs_members(spatial_ref: SpatialRef) -> JsonObject {
    let mut crs_properties = JsonObject::new();
    crs_properties.insert("name".to_string(), JsonValue::from(spatial_ref.code()));

    let mut crs = JsonObject::new();
    crs.insert("type".to_string(), JsonValue::from("name"));
    crs.insert("properties".to_string(), JsonValue::Object(crs_properties));

    let mut members = JsonObject::new();
    members.insert("crs".to_string(), JsonValue::Object(crs));
    members
}
