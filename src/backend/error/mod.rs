//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP
//! responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations (IntoResponse)
//! ```
//!
//! # Error Taxonomy
//!
//! - `NotFound` - mutation/query targets a nonexistent record id (404)
//! - `Malformed` - argument fails shape validation at the boundary (400)
//! - `PartialCascade` - the cleanup cascade was interrupted mid-sweep (500)
//! - `Database` / `Serialization` - infrastructure failures (500)
//!
//! All backend errors implement `IntoResponse` from Axum, allowing them to
//! be returned directly from handlers with `?`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
