//! Drawing Store
//!
//! Collection of freehand stroke polylines scoped to a board. A drawing is
//! an atomic, append-only stroke record: points are immutable once created
//! and only the whole stroke can be deleted.

/// Database operations for drawings
pub mod db;

/// HTTP handlers for drawing endpoints
pub mod handlers;
