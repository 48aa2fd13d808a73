//! Board Store
//!
//! Logical owner of a board's identity and freshness timestamp. Boards are
//! created on first lookup-miss, touched on every subsequent get-or-create,
//! and deleted only by the cleanup sweep once stale.

/// Database operations for boards
pub mod db;

/// HTTP handlers for board endpoints
pub mod handlers;
