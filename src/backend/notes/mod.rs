//! Note Store
//!
//! Collection of positioned, colored, editable text items scoped to a board.
//! Notes support partial updates: any subset of `{text, x, y, color}` may be
//! patched independently.

/// Database operations for notes
pub mod db;

/// HTTP handlers for note endpoints
pub mod handlers;
