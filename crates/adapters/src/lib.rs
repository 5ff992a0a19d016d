pub mod export;
pub mod fs;
pub mod ids;
pub mod metadata;

#[cfg(test)]
mod test_support;

pub use export::FsFeatureExporter;
pub use fs::DirectoryPhotoScanner;
pub use ids::UuidGenerator;
pub use metadata::ExifGpsReader;
