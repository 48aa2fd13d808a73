//! Inkboard - Main Library
//!
//! Inkboard is a real-time collaborative whiteboard backend built with
//! Rust: users create or join a named board and see sticky notes and
//! freehand drawing strokes update live across all connected clients.
//!
//! # Overview
//!
//! This library provides the core functionality for Inkboard, including:
//! - Board, note and drawing stores over SQLite (sqlx)
//! - An RPC-style HTTP surface (axum) for queries and mutations
//! - Real-time update fanout to board subscribers via Server-Sent Events
//! - A periodic cleanup task that expires boards unseen for the staleness
//!   window, cascading deletion to their notes and drawings
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared between clients and the backend
//!   - Board/Note/Drawing models, the NotePatch, board events
//!   - Boundary validation and shared error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, route configuration, application state
//!   - sqlx store operations and the cleanup sweep
//!   - Broadcast channel and SSE subscription handling
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkboard::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let app = create_app().await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

/// Types shared between clients and the backend
pub mod shared;

/// Server-side code
pub mod backend;
