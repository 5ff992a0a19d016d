use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    ZeroDenominator { numerator: u32 },
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDenominator { numerator } => {
                write!(f, "rational component {numerator}/0 has a zero denominator")
            }
        }
    }
}

impl std::error::Error for DomainError {}
