/**
 * Real-time Subscription Handler
 *
 * This module implements the Server-Sent Events (SSE) subscription handler
 * for the `/realtime/{board_id}` endpoint. A connected client receives
 * every event for its board as it happens: notes created/updated/deleted,
 * strokes added/removed, and the board's own deletion by the cleanup sweep.
 *
 * # Server-Sent Events (SSE)
 *
 * This endpoint uses SSE to provide a one-way stream of events from server
 * to client. SSE is simpler than WebSockets for one-way fanout and works
 * well with HTTP/2.
 *
 * # Event Filtering
 *
 * All events flow through one broadcast channel; this handler drops events
 * for other boards. Clients can additionally filter by event type with the
 * `types` query parameter:
 * - `?types=note_created,note_updated` - only note additions and edits
 * - No parameter - all event types for the board
 *
 * # Connection Management
 *
 * - Connections are kept alive using the SSE keep-alive mechanism
 * - Lagged receivers are logged and skip ahead; they don't drop the
 *   connection
 */

use crate::backend::realtime::broadcast::BoardEventBroadcast;
use crate::shared::EventType;
use axum::{
    extract::{Path, Query, State},
    response::sse::{Event, Sse},
};
use futures_util::stream;
use std::collections::HashMap;

/// Handle a board subscription (GET /realtime/{board_id})
///
/// Subscribes the client to the board's live event stream.
///
/// # Query Parameters
///
/// - `types` - Comma-separated list of event types to subscribe to
///   (optional). If not provided, the client receives all event types.
///
/// # Returns
///
/// Server-Sent Events stream; each SSE event is named after the board
/// event type and carries the JSON-serialized [`crate::shared::BoardEvent`]
/// as its data.
pub async fn handle_board_subscription(
    State(broadcast_tx): State<BoardEventBroadcast>,
    Path(board_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, axum::Error>>> {
    tracing::info!("[Realtime] Subscription request for board '{}'", board_id);

    // Parse the optional event type filter from query parameters
    let event_types_filter: Option<Vec<EventType>> = query
        .get("types")
        .map(|types_str| {
            types_str
                .split(',')
                .map(|s| s.trim())
                .filter_map(EventType::parse)
                .collect()
        })
        .filter(|v: &Vec<_>| !v.is_empty());

    if let Some(ref types) = event_types_filter {
        tracing::debug!(
            "[Realtime] Board '{}' subscriber filtering by types: {:?}",
            board_id,
            types
        );
    }

    // Subscribe to the broadcast channel
    let broadcast_rx = broadcast_tx.subscribe();

    // Create an SSE stream that listens to the broadcast channel and only
    // yields events for this board (and filter, if any). Axum's keep-alive
    // mechanism injects comment lines to maintain the connection, so the
    // loop never needs to emit empty events.
    let stream = stream::unfold(
        (broadcast_rx, board_id, event_types_filter),
        move |(mut rx, board_id, filter)| async move {
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        if event.board_id != board_id {
                            continue;
                        }
                        if let Some(ref filter_types) = filter {
                            if !filter_types.contains(&event.event_type) {
                                continue;
                            }
                        }

                        let event_name = event.event_type.as_str();
                        let event_data = match serde_json::to_string(&event) {
                            Ok(data) => data,
                            Err(e) => {
                                tracing::error!(
                                    "[Realtime] Failed to serialize event: {:?}",
                                    e
                                );
                                continue;
                            }
                        };

                        tracing::debug!(
                            "[Realtime] Sending '{}' to subscriber of board '{}'",
                            event_name,
                            board_id
                        );

                        let sse_event = Event::default().event(event_name).data(event_data);
                        return Some((Ok(sse_event), (rx, board_id, filter)));
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(
                            "[Realtime] Receiver for board '{}' lagged, skipped {} events",
                            board_id,
                            skipped
                        );
                        continue;
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                        tracing::warn!("[Realtime] Broadcast channel closed, ending stream");
                        return None;
                    }
                }
            }
        },
    );

    Sse::new(stream).keep_alive(axum::response::sse::KeepAlive::default())
}
