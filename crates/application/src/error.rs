use std::fmt::{Display, Formatter};

use geosnap_domain::DomainError;

#[derive(Debug)]
pub enum ApplicationError {
    Domain(DomainError),
    InvalidInput(String),
    Metadata(String),
    Io(String),
    Export(String),
}

impl Display for ApplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(error) => write!(f, "{error}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Metadata(msg) => write!(f, "metadata unreadable: {msg}"),
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Export(msg) => write!(f, "export failed: {msg}"),
        }
    }
}

impl std::error::Error for ApplicationError {}

impl From<DomainError> for ApplicationError {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}
