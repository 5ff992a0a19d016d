use std::path::PathBuf;

/// What to do with a file whose metadata container cannot be decoded.
/// `AbortOnUnreadable` keeps the source's all-or-nothing build;
/// `SkipUnreadable` records the failure and returns a partial table,
/// leaving the accept/reject decision to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    #[default]
    AbortOnUnreadable,
    SkipUnreadable,
}

#[derive(Debug, Clone)]
pub struct BuildCollectionCommand {
    pub folder: PathBuf,
    pub decode_policy: DecodePolicy,
}

#[derive(Debug, Clone)]
pub struct ExportCsvCommand {
    pub output_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ExportFeatureClassCommand {
    pub output_path: PathBuf,
}
