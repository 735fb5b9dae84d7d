//! Error types for the contact model.

use thiserror::Error;

/// Errors raised when a field schema is structurally invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The schema has no output columns.
    #[error("schema output order is empty")]
    EmptyOutputOrder,

    /// A field name is empty or whitespace only.
    #[error("blank field name in {list}")]
    BlankFieldName { list: &'static str },

    /// A field name appears twice in the same list.
    #[error("duplicate field '{field}' in {list}")]
    DuplicateField { list: &'static str, field: String },

    /// The at-least-one group has no members, so no row could qualify.
    #[error("at-least-one group is empty")]
    EmptyAtLeastOneGroup,
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::DuplicateField {
            list: "mandatory",
            field: "City".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate field 'City' in mandatory");
    }
}
