/**
 * Board HTTP Handlers
 *
 * Handlers for the board endpoints:
 * - `POST /api/boards` - get or create a board by slug (every call touches)
 * - `GET /api/boards/{board_id}` - pure lookup, 404 if absent
 */

use crate::backend::boards::db;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::models::now_ms;
use crate::shared::validate::validate_board_id;
use crate::shared::Board;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

/// Request body for `POST /api/boards`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOrCreateBoardRequest {
    /// User-chosen board slug
    pub board_id: String,
}

/// Handle get-or-create board (POST /api/boards)
///
/// Looks the board up by slug; if found, bumps `last_accessed_at` and
/// returns the existing record, otherwise inserts a fresh one. This is the
/// endpoint clients hit when opening a board URL, so every open counts as a
/// touch for expiry purposes.
///
/// # Errors
///
/// * `400 Bad Request` - if the slug fails validation
/// * `500 Internal Server Error` - if the database operation fails
pub async fn get_or_create_board(
    State(app_state): State<AppState>,
    Json(request): Json<GetOrCreateBoardRequest>,
) -> Result<Json<Board>, BackendError> {
    validate_board_id(&request.board_id)?;

    let board = db::get_or_create_board(&app_state.db_pool, &request.board_id, now_ms()).await?;

    tracing::info!(
        "[Boards] get_or_create '{}' (last_accessed_at={})",
        board.id,
        board.last_accessed_at
    );

    Ok(Json(board))
}

/// Handle board lookup (GET /api/boards/{board_id})
///
/// Pure read: does not touch `last_accessed_at`.
///
/// # Errors
///
/// * `404 Not Found` - if no board with that slug exists
pub async fn get_board(
    State(app_state): State<AppState>,
    Path(board_id): Path<String>,
) -> Result<Json<Board>, BackendError> {
    let board = db::get_board(&app_state.db_pool, &board_id)
        .await?
        .ok_or_else(|| BackendError::not_found("board", &board_id))?;

    Ok(Json(board))
}
