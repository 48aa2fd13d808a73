/**
 * Note HTTP Handlers
 *
 * Handlers for the note endpoints:
 * - `GET /api/boards/{board_id}/notes` - list a board's notes
 * - `POST /api/boards/{board_id}/notes` - add a note
 * - `PATCH /api/notes/{note_id}` - patch a subset of a note's fields
 * - `DELETE /api/notes/{note_id}` - delete a note
 *
 * Every successful mutation broadcasts a board event to live subscribers.
 */

use crate::backend::error::BackendError;
use crate::backend::notes::db;
use crate::backend::realtime::broadcast::broadcast_event;
use crate::backend::server::state::AppState;
use crate::shared::models::now_ms;
use crate::shared::validate::{validate_board_id, validate_color, validate_note_text};
use crate::shared::{BoardEvent, Note, NotePatch};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

/// Request body for `POST /api/boards/{board_id}/notes`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNoteRequest {
    /// The note's text content
    pub text: String,
    /// Horizontal position on the canvas
    pub x: f64,
    /// Vertical position on the canvas
    pub y: f64,
    /// Note color
    pub color: String,
}

/// Handle note listing (GET /api/boards/{board_id}/notes)
///
/// Returns all notes for the board, in no guaranteed order. A board that
/// does not exist (or was expired) yields an empty list, not a 404: live
/// queries keep working while a client is mid-create.
pub async fn get_notes(
    State(app_state): State<AppState>,
    Path(board_id): Path<String>,
) -> Result<Json<Vec<Note>>, BackendError> {
    let notes = db::list_notes(&app_state.db_pool, &board_id).await?;
    Ok(Json(notes))
}

/// Handle note creation (POST /api/boards/{board_id}/notes)
///
/// Inserts a note with `created_at = now` and broadcasts a `note_created`
/// event to the board's subscribers.
///
/// # Errors
///
/// * `400 Bad Request` - if the slug, text or color fails validation
/// * `500 Internal Server Error` - if the database operation fails
pub async fn add_note(
    State(app_state): State<AppState>,
    Path(board_id): Path<String>,
    Json(request): Json<AddNoteRequest>,
) -> Result<Json<Note>, BackendError> {
    validate_board_id(&board_id)?;
    validate_note_text(&request.text)?;
    validate_color(&request.color)?;

    let note = db::create_note(
        &app_state.db_pool,
        &board_id,
        &request.text,
        request.x,
        request.y,
        &request.color,
        now_ms(),
    )
    .await?;

    tracing::info!("[Notes] Added note '{}' to board '{}'", note.id, board_id);

    broadcast_event(&app_state.board_broadcast, BoardEvent::note_created(&note));

    Ok(Json(note))
}

/// Handle note patching (PATCH /api/notes/{note_id})
///
/// Patches only the provided fields; absent fields are untouched. An empty
/// patch is a no-op but still 404s when the note does not exist. Broadcasts
/// a `note_updated` event carrying the patched note.
///
/// # Errors
///
/// * `400 Bad Request` - if a provided field fails validation
/// * `404 Not Found` - if no note with that id exists
pub async fn update_note(
    State(app_state): State<AppState>,
    Path(note_id): Path<String>,
    Json(patch): Json<NotePatch>,
) -> Result<StatusCode, BackendError> {
    if let Some(ref text) = patch.text {
        validate_note_text(text)?;
    }
    if let Some(ref color) = patch.color {
        validate_color(color)?;
    }

    let note = db::update_note(&app_state.db_pool, &note_id, &patch)
        .await?
        .ok_or_else(|| BackendError::not_found("note", &note_id))?;

    tracing::info!(
        "[Notes] Updated note '{}' on board '{}'",
        note.id,
        note.board_id
    );

    broadcast_event(&app_state.board_broadcast, BoardEvent::note_updated(&note));

    Ok(StatusCode::NO_CONTENT)
}

/// Handle note deletion (DELETE /api/notes/{note_id})
///
/// Broadcasts a `note_deleted` event carrying the note id.
///
/// # Errors
///
/// * `404 Not Found` - if no note with that id exists
pub async fn delete_note(
    State(app_state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<StatusCode, BackendError> {
    let note = db::delete_note(&app_state.db_pool, &note_id)
        .await?
        .ok_or_else(|| BackendError::not_found("note", &note_id))?;

    tracing::info!(
        "[Notes] Deleted note '{}' from board '{}'",
        note.id,
        note.board_id
    );

    broadcast_event(
        &app_state.board_broadcast,
        BoardEvent::note_deleted(note.board_id.clone(), &note.id),
    );

    Ok(StatusCode::NO_CONTENT)
}
