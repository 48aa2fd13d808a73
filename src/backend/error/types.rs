/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP
 * responses.
 *
 * # Error Taxonomy
 *
 * - `NotFound` - a mutation/query targets a nonexistent record id
 * - `Malformed` - an argument fails type/shape validation at the boundary
 * - `PartialCascade` - the cleanup sweep's multi-step delete sequence was
 *   interrupted, leaving orphaned notes/drawings for a partially processed
 *   board
 * - `Database` - the storage layer failed
 * - `Serialization` - JSON encoding/decoding failed
 *
 * No retry logic exists; failures propagate to the caller as-is.
 */

use crate::shared::SharedError;
use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant maps to an HTTP status code via [`BackendError::status_code`].
#[derive(Debug, Error)]
pub enum BackendError {
    /// A mutation or query targeted a record id that does not exist
    #[error("{resource} '{id}' not found")]
    NotFound {
        /// Kind of record ("board", "note", "drawing")
        resource: &'static str,
        /// The id that missed
        id: String,
    },

    /// An argument failed shape validation at the API boundary
    #[error("Malformed request: {message}")]
    Malformed {
        /// Human-readable error message
        message: String,
    },

    /// The cleanup cascade was interrupted mid-sweep
    ///
    /// The cascade (notes, then drawings, then the board row) is not
    /// transactional: `deleted` boards were fully removed before the
    /// failure, and the board named by `board_id` may have lost some of its
    /// content while its board row survives. No reconciliation pass repairs
    /// this; it surfaces as a latent inconsistency.
    #[error("cleanup interrupted after {deleted} boards while processing '{board_id}': {source}")]
    PartialCascade {
        /// Slug of the board whose cascade was interrupted
        board_id: String,
        /// Number of boards fully deleted before the failure
        deleted: u64,
        /// Underlying database error
        source: sqlx::Error,
    },

    /// Validation error from the shared module
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a not-found error for a record id
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a malformed-request error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - `Malformed` - 400 Bad Request
    /// - `PartialCascade` - 500 Internal Server Error
    /// - `SharedError::ValidationError` - 400 Bad Request
    /// - `Database` - 500 (404 for `RowNotFound`)
    /// - `Serialization` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Malformed { .. } => StatusCode::BAD_REQUEST,
            Self::PartialCascade { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = BackendError::not_found("note", "n-123");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.message(), "note 'n-123' not found");
    }

    #[test]
    fn test_malformed_error() {
        let error = BackendError::malformed("boardId must not be empty");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert!(error.message().contains("boardId must not be empty"));
    }

    #[test]
    fn test_partial_cascade_status() {
        let error = BackendError::PartialCascade {
            board_id: "stale".to_string(),
            deleted: 3,
            source: sqlx::Error::PoolClosed,
        };
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.message().contains("after 3 boards"));
        assert!(error.message().contains("'stale'"));
    }

    #[test]
    fn test_from_shared_validation_error() {
        let shared = SharedError::validation("color", "must not be empty");
        let error: BackendError = shared.into();
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_row_not_found_maps_to_404() {
        let error: BackendError = sqlx::Error::RowNotFound.into();
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }
}
