/**
 * Real-time Board Event System
 *
 * This module defines the event types broadcast to live subscribers of a
 * board. Every successful mutation produces one event; clients subscribed
 * to the board's SSE stream receive it and update their local view.
 */
use crate::shared::models::{Drawing, Note};
use serde::{Deserialize, Serialize};

/// Type of real-time board event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A note was added to the board
    NoteCreated,
    /// A note's fields were patched
    NoteUpdated,
    /// A note was removed
    NoteDeleted,
    /// A drawing stroke was added to the board
    DrawingCreated,
    /// A drawing stroke was removed
    DrawingDeleted,
    /// The board itself was deleted (cleanup sweep)
    BoardDeleted,
}

impl EventType {
    /// Event name used on the wire (SSE `event:` field and `types` filter)
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::NoteCreated => "note_created",
            EventType::NoteUpdated => "note_updated",
            EventType::NoteDeleted => "note_deleted",
            EventType::DrawingCreated => "drawing_created",
            EventType::DrawingDeleted => "drawing_deleted",
            EventType::BoardDeleted => "board_deleted",
        }
    }

    /// Parse an event name as used in the `types` query filter
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "note_created" => Some(EventType::NoteCreated),
            "note_updated" => Some(EventType::NoteUpdated),
            "note_deleted" => Some(EventType::NoteDeleted),
            "drawing_created" => Some(EventType::DrawingCreated),
            "drawing_deleted" => Some(EventType::DrawingDeleted),
            "board_deleted" => Some(EventType::BoardDeleted),
            _ => None,
        }
    }
}

/// Real-time event that can be broadcast to all board subscribers
///
/// The payload carries the affected record (or its id for deletions) as
/// JSON; `board_id` lets the subscription handler fan events out only to
/// clients watching that board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardEvent {
    /// Slug of the board this event belongs to
    pub board_id: String,
    /// Type of event
    pub event_type: EventType,
    /// Event payload (JSON-serializable data)
    pub payload: serde_json::Value,
    /// Timestamp when the event occurred (RFC3339)
    pub timestamp: String,
}

impl BoardEvent {
    /// Create a new board event with the current timestamp
    pub fn new(
        board_id: impl Into<String>,
        event_type: EventType,
        payload: serde_json::Value,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            event_type,
            payload,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a note-created event carrying the full note
    pub fn note_created(note: &Note) -> Self {
        let payload = serde_json::to_value(note).unwrap_or_default();
        Self::new(note.board_id.clone(), EventType::NoteCreated, payload)
    }

    /// Create a note-updated event carrying the patched note
    pub fn note_updated(note: &Note) -> Self {
        let payload = serde_json::to_value(note).unwrap_or_default();
        Self::new(note.board_id.clone(), EventType::NoteUpdated, payload)
    }

    /// Create a note-deleted event carrying the note id
    pub fn note_deleted(board_id: impl Into<String>, note_id: &str) -> Self {
        Self::new(
            board_id,
            EventType::NoteDeleted,
            serde_json::json!({ "noteId": note_id }),
        )
    }

    /// Create a drawing-created event carrying the full stroke
    pub fn drawing_created(drawing: &Drawing) -> Self {
        let payload = serde_json::to_value(drawing).unwrap_or_default();
        Self::new(drawing.board_id.clone(), EventType::DrawingCreated, payload)
    }

    /// Create a drawing-deleted event carrying the drawing id
    pub fn drawing_deleted(board_id: impl Into<String>, drawing_id: &str) -> Self {
        Self::new(
            board_id,
            EventType::DrawingDeleted,
            serde_json::json!({ "drawingId": drawing_id }),
        )
    }

    /// Create a board-deleted event (emitted by the cleanup sweep)
    pub fn board_deleted(board_id: impl Into<String>) -> Self {
        let board_id = board_id.into();
        let payload = serde_json::json!({ "boardId": board_id });
        Self::new(board_id, EventType::BoardDeleted, payload)
    }
}
