/**
 * API Route Handlers
 *
 * This module wires the RPC-style whiteboard endpoints to their handlers:
 * board lookup/creation, note and drawing mutations, and the explicit
 * cleanup sweep.
 *
 * # Routes
 *
 * ## Boards
 * - `POST /api/boards` - get or create (and touch) a board
 * - `GET /api/boards/{board_id}` - pure lookup
 *
 * ## Notes
 * - `GET /api/boards/{board_id}/notes` - list a board's notes
 * - `POST /api/boards/{board_id}/notes` - add a note
 * - `PATCH /api/notes/{note_id}` - patch a subset of fields
 * - `DELETE /api/notes/{note_id}` - delete a note
 *
 * ## Drawings
 * - `GET /api/boards/{board_id}/drawings` - list a board's strokes
 * - `POST /api/boards/{board_id}/drawings` - add a finished stroke
 * - `DELETE /api/drawings/{drawing_id}` - delete a stroke
 *
 * ## Cleanup
 * - `POST /api/cleanup` - run the stale-board sweep with an explicit
 *   threshold
 */

use crate::backend::boards::handlers::{get_board, get_or_create_board};
use crate::backend::cleanup::handle_cleanup;
use crate::backend::drawings::handlers::{add_drawing, delete_drawing, get_drawings};
use crate::backend::notes::handlers::{add_note, delete_note, get_notes, update_note};
use crate::backend::server::state::AppState;
use axum::Router;

/// Configure API routes
///
/// Adds every whiteboard endpoint to the router. No endpoint requires
/// authentication; boards are shared by whoever knows the slug.
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Board endpoints
        .route("/api/boards", axum::routing::post(get_or_create_board))
        .route("/api/boards/{board_id}", axum::routing::get(get_board))
        // Note endpoints
        .route(
            "/api/boards/{board_id}/notes",
            axum::routing::get(get_notes).post(add_note),
        )
        .route(
            "/api/notes/{note_id}",
            axum::routing::patch(update_note).delete(delete_note),
        )
        // Drawing endpoints
        .route(
            "/api/boards/{board_id}/drawings",
            axum::routing::get(get_drawings).post(add_drawing),
        )
        .route(
            "/api/drawings/{drawing_id}",
            axum::routing::delete(delete_drawing),
        )
        // Cleanup endpoint
        .route("/api/cleanup", axum::routing::post(handle_cleanup))
}
