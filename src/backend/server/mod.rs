//! Server Module
//!
//! This module contains the core server infrastructure: initialization,
//! application state, and configuration.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── init.rs   - Server initialization (create_app)
//! ├── state.rs  - Application state and FromRef impls
//! └── config.rs - Database and cleanup-schedule configuration
//! ```

/// Server initialization
pub mod init;

/// Application state management
pub mod state;

/// Server configuration
pub mod config;

// Re-export commonly used types
pub use state::AppState;
