/**
 * Real-time Event Broadcasting
 *
 * This module provides utilities for broadcasting board events to all
 * subscribers. It includes the broadcast type definition and the broadcast
 * helper function.
 *
 * # Broadcasting
 *
 * Events are broadcast using `tokio::sync::broadcast`, which provides
 * a multi-producer, multi-consumer channel. All subscribers receive a copy
 * of each event; the SSE subscription handler then drops events for boards
 * the client is not watching.
 */

use crate::shared::BoardEvent;
use tokio::sync::broadcast;

/// Board event broadcast sender
///
/// This type represents the broadcast channel for board events. It can be
/// cloned and shared across handlers to allow broadcasting events from
/// anywhere in the application.
pub type BoardEventBroadcast = broadcast::Sender<BoardEvent>;

/// Broadcast a board event to all subscribers
///
/// # Arguments
///
/// * `broadcast_tx` - The broadcast sender
/// * `event` - The event to broadcast
///
/// # Returns
///
/// Number of active subscribers that received the event (0 if none).
pub fn broadcast_event(broadcast_tx: &BoardEventBroadcast, event: BoardEvent) -> usize {
    let event_name = event.event_type.as_str();
    let board_id = event.board_id.clone();
    match broadcast_tx.send(event) {
        Ok(subscriber_count) => {
            tracing::debug!(
                "[Realtime] Broadcast '{}' for board '{}' to {} subscribers",
                event_name,
                board_id,
                subscriber_count
            );
            subscriber_count
        }
        Err(_) => {
            // No subscribers, that's okay
            tracing::trace!(
                "[Realtime] No subscribers for '{}' on board '{}'",
                event_name,
                board_id
            );
            0
        }
    }
}
