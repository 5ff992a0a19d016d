mod collection;
mod error;
mod ports;
mod service;
mod use_cases;

pub use collection::{
    CollectionBuild, CollectionBuildReport, Feature, FeatureSet, FeatureTable, PhotoCollection,
    SkippedPhoto,
};
pub use error::ApplicationError;
pub use ports::{
    FeatureExporter, GpsDirectory, GpsMetadataReader, PhotoIdGenerator, PhotoScanner, ScanSummary,
};
pub use service::CollectionService;
pub use use_cases::{
    BuildCollectionCommand, DecodePolicy, ExportCsvCommand, ExportFeatureClassCommand,
};
