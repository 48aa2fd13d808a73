/**
 * Stale Board Cleanup
 *
 * This module implements the periodic sweep that deletes boards (and their
 * notes and drawings) unseen for the configured staleness window.
 *
 * # Scheduling
 *
 * The sweep runs as a timer-driven background task spawned at server
 * startup, concurrently with ordinary client operations against the same
 * storage. The staleness threshold is recomputed as `now - ttl` at every
 * tick, and [`cleanup_old_boards`] takes the threshold explicitly so tests
 * and the `/api/cleanup` endpoint control time themselves.
 *
 * # Consistency
 *
 * The per-board cascade (notes, then drawings, then the board row) is not
 * transactional, and there is no locking against concurrent mutations: a
 * client can create a note for a board in the same instant the sweep
 * deletes that board, leaving an orphan. A failure mid-sweep likewise
 * leaves orphaned rows for the partially processed board; this surfaces as
 * a `PartialCascade` error and is not repaired by any reconciliation pass.
 */

use crate::backend::boards::db as boards_db;
use crate::backend::drawings::db as drawings_db;
use crate::backend::error::BackendError;
use crate::backend::notes::db as notes_db;
use crate::backend::realtime::broadcast::{broadcast_event, BoardEventBroadcast};
use crate::backend::server::state::AppState;
use crate::shared::models::now_ms;
use crate::shared::BoardEvent;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Request body for `POST /api/cleanup`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupRequest {
    /// Staleness threshold, epoch milliseconds: boards with
    /// `last_accessed_at < olderThan` are deleted
    pub older_than: i64,
}

/// Response body for `POST /api/cleanup`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupResponse {
    /// Number of boards deleted (with their notes and drawings)
    pub deleted: u64,
}

/// Delete every board whose `last_accessed_at` is before the threshold
///
/// For each stale board the cascade deletes its notes, then its drawings,
/// then the board row, and emits a `board_deleted` event so live clients
/// drop out. Boards with `last_accessed_at >= older_than_ms` and their
/// content are untouched.
///
/// # Returns
///
/// The number of boards deleted.
///
/// # Errors
///
/// A database failure mid-sweep returns [`BackendError::PartialCascade`]
/// carrying the count of boards already fully deleted and the board whose
/// cascade was interrupted.
pub async fn cleanup_old_boards(
    pool: &SqlitePool,
    older_than_ms: i64,
    broadcast_tx: &BoardEventBroadcast,
) -> Result<u64, BackendError> {
    let stale = boards_db::list_stale_boards(pool, older_than_ms).await?;

    if stale.is_empty() {
        tracing::debug!("[Cleanup] No boards older than {}", older_than_ms);
        return Ok(0);
    }

    tracing::info!(
        "[Cleanup] Sweeping {} boards older than {}",
        stale.len(),
        older_than_ms
    );

    let mut deleted: u64 = 0;
    for board in stale {
        // Notes first, then drawings, then the board row. No transaction:
        // an interruption here leaves orphans for this board.
        let cascade: Result<(u64, u64), sqlx::Error> = async {
            let notes = notes_db::delete_notes_for_board(pool, &board.id).await?;
            let drawings = drawings_db::delete_drawings_for_board(pool, &board.id).await?;
            boards_db::delete_board(pool, &board.id).await?;
            Ok((notes, drawings))
        }
        .await;

        let (notes_deleted, drawings_deleted) =
            cascade.map_err(|source| BackendError::PartialCascade {
                board_id: board.id.clone(),
                deleted,
                source,
            })?;

        tracing::info!(
            "[Cleanup] Deleted board '{}' ({} notes, {} drawings)",
            board.id,
            notes_deleted,
            drawings_deleted
        );

        broadcast_event(broadcast_tx, BoardEvent::board_deleted(board.id.clone()));
        deleted += 1;
    }

    tracing::info!("[Cleanup] Sweep complete, {} boards deleted", deleted);
    Ok(deleted)
}

/// Handle an explicit cleanup request (POST /api/cleanup)
///
/// Runs the sweep with a caller-provided threshold. This is the same
/// routine the periodic task runs; exposing it keeps the threshold
/// injectable for operators and tests.
pub async fn handle_cleanup(
    State(app_state): State<AppState>,
    Json(request): Json<CleanupRequest>,
) -> Result<Json<CleanupResponse>, BackendError> {
    let deleted = cleanup_old_boards(
        &app_state.db_pool,
        request.older_than,
        &app_state.board_broadcast,
    )
    .await?;

    Ok(Json(CleanupResponse { deleted }))
}

/// Spawn the periodic cleanup task
///
/// Ticks every `interval`, recomputing the threshold as `now - ttl` at each
/// tick. The original design computed the threshold once at schedule
/// registration; recomputing per run is the deliberate redesign here.
///
/// Sweep failures are logged and the task keeps ticking; a partial cascade
/// is a latent inconsistency, not a reason to stop expiring boards.
pub fn spawn_cleanup_task(
    app_state: AppState,
    ttl: std::time::Duration,
    interval: std::time::Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick fires immediately; skip it so startup isn't
        // dominated by a sweep.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let older_than_ms = now_ms() - ttl.as_millis() as i64;
            match cleanup_old_boards(&app_state.db_pool, older_than_ms, &app_state.board_broadcast)
                .await
            {
                Ok(0) => {}
                Ok(deleted) => {
                    tracing::info!("[Cleanup] Periodic sweep deleted {} boards", deleted);
                }
                Err(e) => {
                    tracing::error!("[Cleanup] Periodic sweep failed: {}", e);
                }
            }
        }
    })
}
