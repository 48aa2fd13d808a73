/**
 * Whiteboard Data Structures
 *
 * This module defines the Board, Note and Drawing structs that make up a
 * whiteboard, plus the NotePatch used for partial note updates.
 *
 * These structures are shared between the server (for storage and HTTP
 * responses) and any client (for display in the UI). They serialize to/from
 * JSON with camelCase field names, which is the wire format whiteboard
 * clients expect.
 *
 * # Timestamps
 *
 * All timestamps are integer milliseconds since the Unix epoch. This keeps
 * the wire format identical for every client platform and makes the
 * staleness comparison in the cleanup sweep a plain integer compare.
 */
use serde::{Deserialize, Serialize};

/// Maximum length of a board slug
pub const MAX_BOARD_ID_LENGTH: usize = 128;

/// Maximum length of a note's text content
pub const MAX_NOTE_TEXT_LENGTH: usize = 10_000;

/// Maximum length of a color string
pub const MAX_COLOR_LENGTH: usize = 64;

/// Current wall-clock time as epoch milliseconds
///
/// All persisted timestamps come from this, except where a caller injects
/// its own time (the store functions take `now_ms` explicitly).
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A named collaborative whiteboard
///
/// The `id` is a human-chosen slug (e.g. `"team-standup"`), not a generated
/// identifier. Boards are created on first access, touched on every
/// subsequent access, and deleted only by the cleanup sweep once stale.
///
/// # Fields
/// * `id` - User-chosen board slug, globally unique
/// * `created_at` - Creation time, epoch milliseconds
/// * `last_accessed_at` - Last touch time, epoch milliseconds; drives expiry
///
/// # Invariant
///
/// `last_accessed_at >= created_at` at all times.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// User-chosen board slug
    pub id: String,
    /// Creation time (epoch milliseconds)
    pub created_at: i64,
    /// Last access time (epoch milliseconds)
    pub last_accessed_at: i64,
}

/// A positioned, colored, editable sticky note on a board
///
/// Notes reference their board via `board_id`, which is the board's slug,
/// not an internal record identifier. Any subset of `{text, x, y, color}`
/// may be patched independently after creation; see [`NotePatch`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Server-generated note identifier (UUID v4)
    pub id: String,
    /// Slug of the owning board
    pub board_id: String,
    /// The note's text content
    pub text: String,
    /// Horizontal position on the canvas
    pub x: f64,
    /// Vertical position on the canvas
    pub y: f64,
    /// Note color (opaque string, e.g. "yellow" or "#ffd700")
    pub color: String,
    /// Creation time (epoch milliseconds)
    pub created_at: i64,
}

/// A single point of a drawing stroke
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An immutable freehand stroke on a board
///
/// A drawing is an atomic, append-only stroke record: the client captures
/// the complete polyline and submits it in one request. Points are never
/// modified or extended after creation, only the whole stroke deleted.
///
/// The ">= 2 points to be meaningful" rule is enforced by the producing
/// client, not by the store; the server accepts any point list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Drawing {
    /// Server-generated drawing identifier (UUID v4)
    pub id: String,
    /// Slug of the owning board
    pub board_id: String,
    /// Ordered polyline of the stroke
    pub points: Vec<Point>,
    /// Stroke color (opaque string)
    pub color: String,
    /// Stroke width in canvas units
    pub stroke_width: f64,
    /// Creation time (epoch milliseconds)
    pub created_at: i64,
}

/// Partial update for a note
///
/// Absent fields are left untouched; the empty patch is a permitted no-op.
/// This mirrors the wire format of `PATCH /api/notes/{note_id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl NotePatch {
    /// Whether the patch specifies no fields at all
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.x.is_none() && self.y.is_none() && self.color.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_serializes_camel_case() {
        let board = Board {
            id: "alpha".to_string(),
            created_at: 1000,
            last_accessed_at: 2000,
        };
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["id"], "alpha");
        assert_eq!(json["createdAt"], 1000);
        assert_eq!(json["lastAccessedAt"], 2000);
    }

    #[test]
    fn test_note_round_trip() {
        let note = Note {
            id: "n-1".to_string(),
            board_id: "alpha".to_string(),
            text: "hi".to_string(),
            x: 10.0,
            y: 20.0,
            color: "yellow".to_string(),
            created_at: 1234,
        };
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"boardId\":\"alpha\""));
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
    }

    #[test]
    fn test_drawing_points_preserve_order() {
        let drawing = Drawing {
            id: "d-1".to_string(),
            board_id: "alpha".to_string(),
            points: vec![
                Point { x: 0.0, y: 0.0 },
                Point { x: 1.0, y: 1.0 },
                Point { x: 2.0, y: 4.0 },
            ],
            color: "#000000".to_string(),
            stroke_width: 2.0,
            created_at: 1234,
        };
        let json = serde_json::to_string(&drawing).unwrap();
        let back: Drawing = serde_json::from_str(&json).unwrap();
        assert_eq!(back.points, drawing.points);
    }

    #[test]
    fn test_note_patch_absent_fields_deserialize_to_none() {
        let patch: NotePatch = serde_json::from_str(r#"{"x": 30.0}"#).unwrap();
        assert_eq!(patch.x, Some(30.0));
        assert_eq!(patch.text, None);
        assert_eq!(patch.y, None);
        assert_eq!(patch.color, None);
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_empty_note_patch() {
        let patch: NotePatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }
}
