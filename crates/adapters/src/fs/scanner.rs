use std::path::Path;

use geosnap_application::{ApplicationError, PhotoScanner, ScanSummary};
use geosnap_domain::is_photo_file;
use walkdir::WalkDir;

/// Non-recursive scan of one directory, keeping eligible photo files in
/// the order the directory lists them.
#[derive(Debug, Default)]
pub struct DirectoryPhotoScanner;

impl PhotoScanner for DirectoryPhotoScanner {
    fn scan_photos(&self, folder: &Path) -> Result<ScanSummary, ApplicationError> {
        if !folder.is_dir() {
            return Err(ApplicationError::InvalidInput(format!(
                "folder does not exist or is not a directory: {}",
                folder.display()
            )));
        }

        let mut summary = ScanSummary::default();

        for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|error| ApplicationError::Io(error.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            summary.scanned_files += 1;
            if is_photo_file(entry.path()) {
                summary.eligible.push(entry.into_path());
            }
        }

        Ok(summary)
    }
}
