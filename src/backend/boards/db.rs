/**
 * Database Operations for Boards
 *
 * This module provides the board store: lookup/creation with access-time
 * touching, pure lookup, and the queries used by the stale-board cleanup
 * sweep.
 *
 * All functions take the current time explicitly (epoch milliseconds) so
 * callers and tests control the clock.
 */

use crate::shared::Board;
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct BoardRow {
    id: String,
    created_at: i64,
    last_accessed_at: i64,
}

impl From<BoardRow> for Board {
    fn from(row: BoardRow) -> Self {
        Board {
            id: row.id,
            created_at: row.created_at,
            last_accessed_at: row.last_accessed_at,
        }
    }
}

/// Get a board by slug, creating it on first access
///
/// If the board exists, its `last_accessed_at` is bumped to `now_ms` and the
/// touched record is returned. If not, a new record is inserted with
/// `created_at = last_accessed_at = now_ms`. Every call is also a "touch".
///
/// This is lookup-then-insert, matching the original design: two
/// simultaneous first accesses to the same new slug race, and the loser's
/// insert fails on the primary key instead of producing a duplicate row.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `board_id` - User-chosen board slug
/// * `now_ms` - Current time, epoch milliseconds
pub async fn get_or_create_board(
    pool: &SqlitePool,
    board_id: &str,
    now_ms: i64,
) -> Result<Board, sqlx::Error> {
    let existing = sqlx::query_as::<_, BoardRow>(
        r#"
        SELECT id, created_at, last_accessed_at
        FROM boards
        WHERE id = ?
        "#,
    )
    .bind(board_id)
    .fetch_optional(pool)
    .await?;

    if let Some(row) = existing {
        sqlx::query(
            r#"
            UPDATE boards SET last_accessed_at = ? WHERE id = ?
            "#,
        )
        .bind(now_ms)
        .bind(board_id)
        .execute(pool)
        .await?;

        tracing::debug!("[Boards] Touched board '{}'", board_id);

        return Ok(Board {
            id: row.id,
            created_at: row.created_at,
            last_accessed_at: now_ms,
        });
    }

    sqlx::query(
        r#"
        INSERT INTO boards (id, created_at, last_accessed_at)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(board_id)
    .bind(now_ms)
    .bind(now_ms)
    .execute(pool)
    .await?;

    tracing::info!("[Boards] Created board '{}'", board_id);

    Ok(Board {
        id: board_id.to_string(),
        created_at: now_ms,
        last_accessed_at: now_ms,
    })
}

/// Get a board by slug without touching it
///
/// Pure lookup; `last_accessed_at` is not updated.
pub async fn get_board(pool: &SqlitePool, board_id: &str) -> Result<Option<Board>, sqlx::Error> {
    let row = sqlx::query_as::<_, BoardRow>(
        r#"
        SELECT id, created_at, last_accessed_at
        FROM boards
        WHERE id = ?
        "#,
    )
    .bind(board_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Board::from))
}

/// List all boards whose `last_accessed_at` is strictly before the threshold
///
/// Used by the cleanup sweep to select expiry candidates. Boards with
/// `last_accessed_at >= older_than_ms` are never returned.
pub async fn list_stale_boards(
    pool: &SqlitePool,
    older_than_ms: i64,
) -> Result<Vec<Board>, sqlx::Error> {
    let rows = sqlx::query_as::<_, BoardRow>(
        r#"
        SELECT id, created_at, last_accessed_at
        FROM boards
        WHERE last_accessed_at < ?
        "#,
    )
    .bind(older_than_ms)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Board::from).collect())
}

/// Delete a board record by slug
///
/// Deletes only the board row; the caller is responsible for deleting the
/// board's notes and drawings first (see the cleanup module).
pub async fn delete_board(pool: &SqlitePool, board_id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM boards WHERE id = ?")
        .bind(board_id)
        .execute(pool)
        .await?;
    Ok(())
}
