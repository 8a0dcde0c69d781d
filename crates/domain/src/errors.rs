//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A low/high range had its bounds reversed
    #[error("Invalid range: low {low} is greater than high {high}")]
    InvalidRange { low: f64, high: f64 },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Date/time parsing error
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    /// Unknown page anchor identifier
    #[error("Unknown anchor: {0}")]
    UnknownAnchor(String),
}

impl DomainError {
    /// Create an invalid range error
    pub const fn invalid_range(low: f64, high: f64) -> Self {
        Self::InvalidRange { low, high }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_creates_correct_error() {
        let err = DomainError::invalid_range(30.0, 25.0);
        match err {
            DomainError::InvalidRange { low, high } => {
                assert!((low - 30.0).abs() < f64::EPSILON);
                assert!((high - 25.0).abs() < f64::EPSILON);
            },
            _ => unreachable!("Expected InvalidRange error"),
        }
    }

    #[test]
    fn invalid_range_error_message() {
        let err = DomainError::invalid_range(30.0, 25.0);
        assert_eq!(
            err.to_string(),
            "Invalid range: low 30 is greater than high 25"
        );
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("station id is empty".to_string());
        assert_eq!(err.to_string(), "Validation failed: station id is empty");
    }

    #[test]
    fn invalid_datetime_error_message() {
        let err = DomainError::InvalidDateTime("not a date".to_string());
        assert_eq!(err.to_string(), "Invalid date/time: not a date");
    }

    #[test]
    fn unknown_anchor_error_message() {
        let err = DomainError::UnknownAnchor("sidebar".to_string());
        assert_eq!(err.to_string(), "Unknown anchor: sidebar");
    }
}
