//! Backend Module
//!
//! This module contains all server-side code for the Inkboard whiteboard.
//! It provides a complete Axum HTTP server with real-time SSE fanout and
//! SQLite persistence.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - Board, note and drawing stores (sqlx over SQLite)
//! - Real-time event broadcasting to board subscribers
//! - The periodic stale-board cleanup task
//! - Route configuration and error types
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`boards`** - Board store: get-or-create-with-touch, lookup
//! - **`notes`** - Note store: list, create, patch, delete
//! - **`drawings`** - Drawing store: list, create, delete
//! - **`cleanup`** - Periodic stale-board sweep with cascade delete
//! - **`realtime`** - Board event broadcasting and SSE subscriptions
//! - **`error`** - Backend-specific error types
//!
//! # Concurrency Model
//!
//! Store operations are independent request/response units; per-record
//! writes are atomic at the storage layer (last write wins), and nothing
//! stronger is promised across records. The cleanup task runs concurrently
//! with client mutations against the same storage, without locking; see
//! the `cleanup` module for the documented consistency gap.

/// Server initialization and state
pub mod server;

/// HTTP route configuration
pub mod routes;

/// Board store
pub mod boards;

/// Note store
pub mod notes;

/// Drawing store
pub mod drawings;

/// Stale-board cleanup
pub mod cleanup;

/// Real-time event broadcasting
pub mod realtime;

/// Backend error types
pub mod error;
