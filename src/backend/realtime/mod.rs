//! Real-time Event Broadcasting
//!
//! This module provides the real-time update system: a single broadcast
//! channel of board events shared through the application state, and the
//! SSE subscription handler that fans events out to clients watching a
//! particular board.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Broadcast channel type and helper
//! └── subscription.rs - SSE subscription handler with board filtering
//! ```

/// Broadcast channel type and helper
pub mod broadcast;

/// SSE subscription handler
pub mod subscription;

// Re-export commonly used types
pub use broadcast::{broadcast_event, BoardEventBroadcast};
