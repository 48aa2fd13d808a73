/**
 * Database Operations for Notes
 *
 * This module provides the note store: listing by board, creation, partial
 * update, and deletion. Note ids are server-generated UUIDs; the owning
 * board is referenced by its slug.
 */

use crate::shared::{Note, NotePatch};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct NoteRow {
    id: String,
    board_id: String,
    text: String,
    x: f64,
    y: f64,
    color: String,
    created_at: i64,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Note {
            id: row.id,
            board_id: row.board_id,
            text: row.text,
            x: row.x,
            y: row.y,
            color: row.color,
            created_at: row.created_at,
        }
    }
}

/// List all notes for a board
///
/// No ordering is guaranteed to the caller.
pub async fn list_notes(pool: &SqlitePool, board_id: &str) -> Result<Vec<Note>, sqlx::Error> {
    let rows = sqlx::query_as::<_, NoteRow>(
        r#"
        SELECT id, board_id, text, x, y, color, created_at
        FROM notes
        WHERE board_id = ?
        "#,
    )
    .bind(board_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Note::from).collect())
}

/// Insert a new note
///
/// The note id is generated here (UUID v4). No validation is applied to
/// coordinate ranges or color values beyond what the boundary already did.
pub async fn create_note(
    pool: &SqlitePool,
    board_id: &str,
    text: &str,
    x: f64,
    y: f64,
    color: &str,
    now_ms: i64,
) -> Result<Note, sqlx::Error> {
    let note = Note {
        id: Uuid::new_v4().to_string(),
        board_id: board_id.to_string(),
        text: text.to_string(),
        x,
        y,
        color: color.to_string(),
        created_at: now_ms,
    };

    sqlx::query(
        r#"
        INSERT INTO notes (id, board_id, text, x, y, color, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&note.id)
    .bind(&note.board_id)
    .bind(&note.text)
    .bind(note.x)
    .bind(note.y)
    .bind(&note.color)
    .bind(note.created_at)
    .execute(pool)
    .await?;

    Ok(note)
}

/// Patch a note, updating only the fields the patch provides
///
/// The update is a single statement: unspecified fields keep their stored
/// value. An empty patch is a permitted no-op that still verifies the note
/// exists.
///
/// # Returns
///
/// The note as stored after the patch, or `None` if no note with that id
/// exists.
pub async fn update_note(
    pool: &SqlitePool,
    note_id: &str,
    patch: &NotePatch,
) -> Result<Option<Note>, sqlx::Error> {
    let row = sqlx::query_as::<_, NoteRow>(
        r#"
        UPDATE notes SET
            text = COALESCE(?, text),
            x = COALESCE(?, x),
            y = COALESCE(?, y),
            color = COALESCE(?, color)
        WHERE id = ?
        RETURNING id, board_id, text, x, y, color, created_at
        "#,
    )
    .bind(patch.text.as_deref())
    .bind(patch.x)
    .bind(patch.y)
    .bind(patch.color.as_deref())
    .bind(note_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Note::from))
}

/// Delete a note by id
///
/// # Returns
///
/// The deleted note (so the caller can broadcast its board), or `None` if
/// no note with that id exists.
pub async fn delete_note(pool: &SqlitePool, note_id: &str) -> Result<Option<Note>, sqlx::Error> {
    let row = sqlx::query_as::<_, NoteRow>(
        r#"
        DELETE FROM notes
        WHERE id = ?
        RETURNING id, board_id, text, x, y, color, created_at
        "#,
    )
    .bind(note_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Note::from))
}

/// Delete all notes belonging to a board
///
/// Used by the cleanup cascade. Returns the number of notes deleted.
pub async fn delete_notes_for_board(
    pool: &SqlitePool,
    board_id: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM notes WHERE board_id = ?")
        .bind(board_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
