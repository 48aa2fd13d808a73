/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * Routes are added in a specific order to ensure proper matching:
 * 1. Real-time subscription route (SSE)
 * 2. API routes (boards, notes, drawings, cleanup)
 * 3. Static file serving (the client bundle)
 * 4. Fallback handler (404)
 */

use crate::backend::realtime::subscription::handle_board_subscription;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use axum::Router;
use tower_http::services::ServeDir;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the database pool and the
///   board event broadcast channel
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// ## Real-time Routes
///
/// - `GET /realtime/{board_id}` - SSE subscription to a board's events
///
/// ## API Routes
///
/// - `POST /api/boards` - get or create a board (touches it)
/// - `GET /api/boards/{board_id}` - board lookup
/// - `GET/POST /api/boards/{board_id}/notes` - list/add notes
/// - `PATCH/DELETE /api/notes/{note_id}` - patch/delete a note
/// - `GET/POST /api/boards/{board_id}/drawings` - list/add drawings
/// - `DELETE /api/drawings/{drawing_id}` - delete a drawing
/// - `POST /api/cleanup` - explicit stale-board sweep
///
/// ## Static Files
///
/// The client bundle is served from the public directory under `/static`.
///
/// ## Fallback
///
/// The fallback handler returns 404 for unknown routes.
pub fn create_router(app_state: AppState) -> Router<()> {
    // Start with the real-time subscription route
    let router = Router::new().route(
        "/realtime/{board_id}",
        axum::routing::get(handle_board_subscription),
    );

    // Add API routes
    let router = configure_api_routes(router);

    // Add static file serving
    let router = router.nest_service("/static", ServeDir::new("public"));

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    // Use AppState as router state
    router.with_state(app_state)
}
