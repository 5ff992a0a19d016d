use std::path::{Path, PathBuf};

use geo::Point;
use geosnap_domain::{PhotoRecord, SpatialRef};
use serde_json::{Map, Value};

/// The assembled table: one row per eligible photo, in directory
/// listing order, indexed contiguously from zero by position.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    records: Vec<PhotoRecord>,
    spatial_ref: SpatialRef,
}

impl FeatureTable {
    pub fn new(records: Vec<PhotoRecord>, spatial_ref: SpatialRef) -> Self {
        Self {
            records,
            spatial_ref,
        }
    }

    pub fn records(&self) -> &[PhotoRecord] {
        &self.records
    }

    pub fn spatial_ref(&self) -> SpatialRef {
        self.spatial_ref
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A geometry-centric view of the table for mapping consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
    pub features: Vec<Feature>,
    pub spatial_ref: SpatialRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Option<Point<f64>>,
    pub attributes: Map<String, Value>,
}

/// An immutable photo collection over one source directory. Rebuilt
/// wholesale when the directory changes; there is no incremental update.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoCollection {
    source_directory: PathBuf,
    table: FeatureTable,
}

impl PhotoCollection {
    pub fn new(source_directory: PathBuf, table: FeatureTable) -> Self {
        Self {
            source_directory,
            table,
        }
    }

    pub fn source_directory(&self) -> &Path {
        &self.source_directory
    }

    pub fn table(&self) -> &FeatureTable {
        &self.table
    }

    pub fn feature_set(&self) -> FeatureSet {
        let features = self
            .table
            .records()
            .iter()
            .map(|record| {
                let mut attributes = Map::new();
                attributes.insert("name".to_string(), Value::from(record.name.clone()));
                attributes.insert("path".to_string(), Value::from(record.path.clone()));
                attributes.insert(
                    "photo_id".to_string(),
                    Value::from(record.photo_id.as_str()),
                );
                Feature {
                    geometry: record.geometry(),
                    attributes,
                }
            })
            .collect();

        FeatureSet {
            features,
            spatial_ref: self.table.spatial_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionBuildReport {
    pub scanned_files: usize,
    pub eligible_files: usize,
    pub located_records: usize,
    pub skipped: Vec<SkippedPhoto>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPhoto {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionBuild {
    pub collection: PhotoCollection,
    pub report: CollectionBuildReport,
}
