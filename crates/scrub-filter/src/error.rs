//! Error types for the contact filter.

use thiserror::Error;

/// Errors that stop a filter run before any row is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Schema columns are absent from the source header entirely.
    #[error("source header is missing expected column(s): {}", missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },
}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FilterError::SchemaMismatch {
            missing: vec!["Birthday".to_string(), "Zip code".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "source header is missing expected column(s): Birthday, Zip code"
        );
    }
}
