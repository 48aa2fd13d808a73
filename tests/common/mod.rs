//! Test fixtures and utilities
//!
//! Provides an in-memory SQLite database with migrations applied, plus a
//! helper for building application state for handler-level tests.

use inkboard::backend::server::state::AppState;
use inkboard::shared::BoardEvent;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tokio::sync::broadcast;

/// Test database fixture
///
/// Each fixture owns its own in-memory SQLite database with the schema
/// migrations applied, so tests are fully isolated from each other.
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new in-memory test database with migrations applied
    pub async fn new() -> Self {
        // A single connection keeps every query on the same in-memory
        // database; extra connections would each see an empty one.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database pool");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Build an application state around a test pool
///
/// Returns the state and a subscribed receiver for asserting on broadcast
/// events.
pub fn test_app_state(pool: SqlitePool) -> (AppState, broadcast::Receiver<BoardEvent>) {
    let (board_broadcast, rx) = broadcast::channel(100);
    (
        AppState {
            db_pool: pool,
            board_broadcast,
        },
        rx,
    )
}
