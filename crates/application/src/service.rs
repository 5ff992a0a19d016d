use std::path::{Path, PathBuf};

use geosnap_domain::{decimal_latitude, decimal_longitude, display_name, PhotoRecord, SpatialRef};

use crate::{
    ApplicationError, BuildCollectionCommand, CollectionBuild, CollectionBuildReport, DecodePolicy,
    ExportCsvCommand, ExportFeatureClassCommand, FeatureExporter, FeatureTable, GpsMetadataReader,
    PhotoCollection, PhotoIdGenerator, PhotoScanner, SkippedPhoto,
};

pub struct CollectionService {
    scanner: Box<dyn PhotoScanner>,
    metadata: Box<dyn GpsMetadataReader>,
    ids: Box<dyn PhotoIdGenerator>,
    exporter: Box<dyn FeatureExporter>,
}

impl CollectionService {
    pub fn new(
        scanner: Box<dyn PhotoScanner>,
        metadata: Box<dyn GpsMetadataReader>,
        ids: Box<dyn PhotoIdGenerator>,
        exporter: Box<dyn FeatureExporter>,
    ) -> Self {
        Self {
            scanner,
            metadata,
            ids,
            exporter,
        }
    }

    pub fn build_collection(
        &self,
        command: BuildCollectionCommand,
    ) -> Result<CollectionBuild, ApplicationError> {
        let scan = self.scanner.scan_photos(&command.folder)?;

        let mut report = CollectionBuildReport {
            scanned_files: scan.scanned_files,
            eligible_files: scan.eligible.len(),
            ..CollectionBuildReport::default()
        };

        let mut records = Vec::with_capacity(scan.eligible.len());
        for path in &scan.eligible {
            match self.build_record(path) {
                Ok(record) => {
                    if record.geometry().is_some() {
                        report.located_records += 1;
                    }
                    records.push(record);
                }
                Err(error) => match command.decode_policy {
                    DecodePolicy::AbortOnUnreadable => return Err(error),
                    DecodePolicy::SkipUnreadable => report.skipped.push(SkippedPhoto {
                        path: path.clone(),
                        reason: error.to_string(),
                    }),
                },
            }
        }

        let table = FeatureTable::new(records, SpatialRef::WGS84);
        Ok(CollectionBuild {
            collection: PhotoCollection::new(command.folder, table),
            report,
        })
    }

    fn build_record(&self, path: &Path) -> Result<PhotoRecord, ApplicationError> {
        let gps = self.metadata.read_gps(path)?;

        let latitude = gps
            .latitude
            .map(|(angle, hemisphere)| decimal_latitude(&angle, hemisphere))
            .transpose()?
            .flatten();
        let longitude = gps
            .longitude
            .map(|(angle, hemisphere)| decimal_longitude(&angle, hemisphere))
            .transpose()?
            .flatten();

        Ok(PhotoRecord {
            photo_id: self.ids.next_id(),
            name: display_name(path),
            path: path.to_string_lossy().to_string(),
            latitude,
            longitude,
        })
    }

    pub fn export_csv(
        &self,
        collection: &PhotoCollection,
        command: ExportCsvCommand,
    ) -> Result<PathBuf, ApplicationError> {
        self.exporter.write_csv(collection.table(), &command.output_path)
    }

    pub fn export_feature_class(
        &self,
        collection: &PhotoCollection,
        command: ExportFeatureClassCommand,
    ) -> Result<PathBuf, ApplicationError> {
        self.exporter
            .write_feature_class(collection.table(), &command.output_path)
    }
}
