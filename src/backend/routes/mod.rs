//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation
//! └── api_routes.rs - API endpoint route table
//! ```
//!
//! # Route Organization
//!
//! Routes are added in a specific order to ensure proper matching:
//!
//! 1. **Real-time Routes** - SSE board subscriptions
//! 2. **API Routes** - boards, notes, drawings, cleanup
//! 3. **Static Files** - the client bundle
//! 4. **Fallback Handler** - 404 errors

/// Main router creation
pub mod router;

/// API endpoint route table
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
