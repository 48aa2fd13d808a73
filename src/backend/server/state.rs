/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container for the
 * application, holding:
 * - The SQLite connection pool (all board/note/drawing state is persisted)
 * - The board event broadcast channel for real-time updates
 *
 * # Thread Safety
 *
 * Both fields are cheaply cloneable handles designed for concurrent use:
 * `SqlitePool` is an Arc-backed pool and `broadcast::Sender` is a
 * thread-safe multi-producer channel.
 */

use crate::backend::realtime::broadcast::BoardEventBroadcast;
use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Application state shared by every handler
///
/// # Fields
///
/// * `db_pool` - SQLite connection pool; every endpoint is a database
///   operation, so unlike optional side services this is always present
/// * `board_broadcast` - Broadcast channel carrying board events to all
///   SSE subscribers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Broadcast channel for notifying SSE subscribers of board mutations
    pub board_broadcast: BoardEventBroadcast,
}

/// Implement FromRef for the database pool
///
/// This allows Axum handlers that only need the pool to extract
/// `State(SqlitePool)` directly from `AppState`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for the board event broadcast sender
///
/// This allows the SSE subscription handler to extract
/// `State(BoardEventBroadcast)` directly from `AppState`.
impl FromRef<AppState> for BoardEventBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.board_broadcast.clone()
    }
}
