//! Domain errors

use chrono::NaiveDate;
use thiserror::Error;

/// Domain-level error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// No passages were supplied for a vehicle that is not exempt
    #[error("Invalid input: no passages recorded for the day")]
    NoPassages,

    /// Passages cover more than one calendar day
    #[error("Invalid input: passages span {first} to {last}, expected a single day")]
    SpansMultipleDays { first: NaiveDate, last: NaiveDate },

    /// A passage timestamp could not be parsed
    #[error("Invalid input: unrecognised timestamp '{0}'")]
    InvalidTimestamp(String),
}

impl DomainError {
    /// Whether the caller supplied input that violates the calculator's contract.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::NoPassages | Self::SpansMultipleDays { .. } | Self::InvalidTimestamp(_) => true,
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_both_dates() {
        let err = DomainError::SpansMultipleDays {
            first: NaiveDate::from_ymd_opt(2013, 2, 7).unwrap(),
            last: NaiveDate::from_ymd_opt(2013, 2, 8).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2013-02-07"));
        assert!(msg.contains("2013-02-08"));
    }

    #[test]
    fn all_variants_are_invalid_input() {
        assert!(DomainError::NoPassages.is_invalid_input());
        assert!(DomainError::InvalidTimestamp("x".into()).is_invalid_input());
    }
}
