//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! clients and the backend. These types are used for serialization and
//! communication over the HTTP/SSE surface.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code. All types are designed for serialization
//! and transmission over HTTP with camelCase JSON field names.

/// Board, note and drawing data structures
pub mod models;

/// Real-time board event system
pub mod event;

/// Shared error types
pub mod error;

/// Boundary argument validation
pub mod validate;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use event::{BoardEvent, EventType};
pub use models::{Board, Drawing, Note, NotePatch, Point};
