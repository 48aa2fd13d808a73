/**
 * Shared Error Types
 *
 * Errors that can arise on both sides of the wire: argument validation at
 * the API boundary and JSON (de)serialization of shared types. The backend
 * wraps these in its own error type for HTTP status mapping.
 */
use thiserror::Error;

/// Errors shared between client and server code
#[derive(Debug, Error)]
pub enum SharedError {
    /// An argument failed type/shape validation at the boundary
    #[error("Validation error on '{field}': {message}")]
    ValidationError {
        /// Name of the offending field
        field: String,
        /// Human-readable description of the problem
        message: String,
    },

    /// JSON serialization or deserialization failed
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable description of the problem
        message: String,
    },
}

impl SharedError {
    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = SharedError::validation("boardId", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Validation error on 'boardId': must not be empty"
        );
    }
}
