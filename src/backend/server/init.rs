/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, route configuration, and the
 * periodic cleanup task.
 *
 * # Initialization Process
 *
 * The server initialization follows these steps:
 * 1. Create the board event broadcast channel
 * 2. Load the database (connect + migrate)
 * 3. Create the application state
 * 4. Create and configure the router
 * 5. Spawn the periodic stale-board cleanup task
 */

use crate::backend::cleanup::spawn_cleanup_task;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_cleanup_config, load_database};
use crate::backend::server::state::AppState;
use crate::shared::BoardEvent;
use axum::Router;
use tokio::sync::broadcast;

/// Create and configure the Axum application
///
/// This function sets up the HTTP server with:
/// - Database connection pool (migrations applied)
/// - Board event broadcast channel
/// - Route configuration
/// - The periodic cleanup task
///
/// # Errors
///
/// Fails if the database cannot be connected or migrated; the server has
/// no degraded mode without its storage.
pub async fn create_app() -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing Inkboard backend server");

    // Step 1: Create the board event broadcast channel.
    // Capacity of 1000 covers bursts of drawing strokes from many boards;
    // a lagged SSE subscriber skips ahead rather than stalling the channel.
    let (board_broadcast, _) = broadcast::channel::<BoardEvent>(1000);

    tracing::info!("Board broadcast channel initialized");

    // Step 2: Load the database
    let db_pool = load_database().await?;

    // Step 3: Create app state
    let app_state = AppState {
        db_pool,
        board_broadcast,
    };

    // Step 4: Create router with all routes
    let app = create_router(app_state.clone());

    // Step 5: Start the periodic stale-board cleanup task
    let cleanup_config = load_cleanup_config();
    tracing::info!(
        "Starting cleanup task (ttl={:?}, interval={:?})",
        cleanup_config.ttl,
        cleanup_config.interval
    );
    // The task runs for the life of the process; dropping the handle
    // detaches it without cancelling.
    let _cleanup_task = spawn_cleanup_task(app_state, cleanup_config.ttl, cleanup_config.interval);

    tracing::info!("Router configured with periodic cleanup task");

    Ok(app)
}
