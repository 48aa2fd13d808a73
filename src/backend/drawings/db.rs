/**
 * Database Operations for Drawings
 *
 * This module provides the drawing store: listing by board, creation of
 * complete strokes, and deletion. A stroke's point list is stored as a JSON
 * array in a text column and is immutable once written.
 */

use crate::shared::{Drawing, Point};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct DrawingRow {
    id: String,
    board_id: String,
    points: String,
    color: String,
    stroke_width: f64,
    created_at: i64,
}

impl DrawingRow {
    /// Decode the JSON-encoded point column into a Drawing
    fn decode(self) -> Result<Drawing, sqlx::Error> {
        let points: Vec<Point> = serde_json::from_str(&self.points)
            .map_err(|e| sqlx::Error::Decode(format!("Failed to decode points: {}", e).into()))?;
        Ok(Drawing {
            id: self.id,
            board_id: self.board_id,
            points,
            color: self.color,
            stroke_width: self.stroke_width,
            created_at: self.created_at,
        })
    }
}

/// List all drawings for a board
///
/// No ordering is guaranteed to the caller; within a stroke, points come
/// back in the order they were captured.
pub async fn list_drawings(
    pool: &SqlitePool,
    board_id: &str,
) -> Result<Vec<Drawing>, sqlx::Error> {
    let rows = sqlx::query_as::<_, DrawingRow>(
        r#"
        SELECT id, board_id, points, color, stroke_width, created_at
        FROM drawings
        WHERE board_id = ?
        "#,
    )
    .bind(board_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(DrawingRow::decode).collect()
}

/// Insert a new drawing stroke
///
/// The points are supplied as a complete, finished stroke; there is no
/// incremental point appension after creation. The minimum-two-points rule
/// is a client concern, so any list is accepted here.
pub async fn create_drawing(
    pool: &SqlitePool,
    board_id: &str,
    points: Vec<Point>,
    color: &str,
    stroke_width: f64,
    now_ms: i64,
) -> Result<Drawing, sqlx::Error> {
    let encoded = serde_json::to_string(&points)
        .map_err(|e| sqlx::Error::Encode(format!("Failed to encode points: {}", e).into()))?;

    let drawing = Drawing {
        id: Uuid::new_v4().to_string(),
        board_id: board_id.to_string(),
        points,
        color: color.to_string(),
        stroke_width,
        created_at: now_ms,
    };

    sqlx::query(
        r#"
        INSERT INTO drawings (id, board_id, points, color, stroke_width, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&drawing.id)
    .bind(&drawing.board_id)
    .bind(&encoded)
    .bind(&drawing.color)
    .bind(drawing.stroke_width)
    .bind(drawing.created_at)
    .execute(pool)
    .await?;

    Ok(drawing)
}

/// Delete a drawing by id
///
/// # Returns
///
/// The deleted drawing, or `None` if no drawing with that id exists.
pub async fn delete_drawing(
    pool: &SqlitePool,
    drawing_id: &str,
) -> Result<Option<Drawing>, sqlx::Error> {
    let row = sqlx::query_as::<_, DrawingRow>(
        r#"
        DELETE FROM drawings
        WHERE id = ?
        RETURNING id, board_id, points, color, stroke_width, created_at
        "#,
    )
    .bind(drawing_id)
    .fetch_optional(pool)
    .await?;

    row.map(DrawingRow::decode).transpose()
}

/// Delete all drawings belonging to a board
///
/// Used by the cleanup cascade. Returns the number of drawings deleted.
pub async fn delete_drawings_for_board(
    pool: &SqlitePool,
    board_id: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM drawings WHERE board_id = ?")
        .bind(board_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
