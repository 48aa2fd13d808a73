/**
 * Drawing HTTP Handlers
 *
 * Handlers for the drawing endpoints:
 * - `GET /api/boards/{board_id}/drawings` - list a board's strokes
 * - `POST /api/boards/{board_id}/drawings` - add a finished stroke
 * - `DELETE /api/drawings/{drawing_id}` - delete a stroke
 *
 * Every successful mutation broadcasts a board event to live subscribers.
 */

use crate::backend::drawings::db;
use crate::backend::error::BackendError;
use crate::backend::realtime::broadcast::broadcast_event;
use crate::backend::server::state::AppState;
use crate::shared::models::now_ms;
use crate::shared::validate::{validate_board_id, validate_color};
use crate::shared::{BoardEvent, Drawing, Point};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

/// Request body for `POST /api/boards/{board_id}/drawings`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDrawingRequest {
    /// Ordered polyline of the finished stroke
    pub points: Vec<Point>,
    /// Stroke color
    pub color: String,
    /// Stroke width in canvas units
    pub stroke_width: f64,
}

/// Handle drawing listing (GET /api/boards/{board_id}/drawings)
///
/// Returns all strokes for the board, in no guaranteed order.
pub async fn get_drawings(
    State(app_state): State<AppState>,
    Path(board_id): Path<String>,
) -> Result<Json<Vec<Drawing>>, BackendError> {
    let drawings = db::list_drawings(&app_state.db_pool, &board_id).await?;
    Ok(Json(drawings))
}

/// Handle drawing creation (POST /api/boards/{board_id}/drawings)
///
/// Inserts the complete stroke with `created_at = now` and broadcasts a
/// `drawing_created` event. The point list is accepted as-is; strokes with
/// fewer than two points are the producing client's problem.
///
/// # Errors
///
/// * `400 Bad Request` - if the slug or color fails validation
/// * `500 Internal Server Error` - if the database operation fails
pub async fn add_drawing(
    State(app_state): State<AppState>,
    Path(board_id): Path<String>,
    Json(request): Json<AddDrawingRequest>,
) -> Result<Json<Drawing>, BackendError> {
    validate_board_id(&board_id)?;
    validate_color(&request.color)?;

    let drawing = db::create_drawing(
        &app_state.db_pool,
        &board_id,
        request.points,
        &request.color,
        request.stroke_width,
        now_ms(),
    )
    .await?;

    tracing::info!(
        "[Drawings] Added stroke '{}' ({} points) to board '{}'",
        drawing.id,
        drawing.points.len(),
        board_id
    );

    broadcast_event(
        &app_state.board_broadcast,
        BoardEvent::drawing_created(&drawing),
    );

    Ok(Json(drawing))
}

/// Handle drawing deletion (DELETE /api/drawings/{drawing_id})
///
/// Broadcasts a `drawing_deleted` event carrying the drawing id.
///
/// # Errors
///
/// * `404 Not Found` - if no drawing with that id exists
pub async fn delete_drawing(
    State(app_state): State<AppState>,
    Path(drawing_id): Path<String>,
) -> Result<StatusCode, BackendError> {
    let drawing = db::delete_drawing(&app_state.db_pool, &drawing_id)
        .await?
        .ok_or_else(|| BackendError::not_found("drawing", &drawing_id))?;

    tracing::info!(
        "[Drawings] Deleted stroke '{}' from board '{}'",
        drawing.id,
        drawing.board_id
    );

    broadcast_event(
        &app_state.board_broadcast,
        BoardEvent::drawing_deleted(drawing.board_id.clone(), &drawing.id),
    );

    Ok(StatusCode::NO_CONTENT)
}
