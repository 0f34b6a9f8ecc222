//! HTTP boundary for the fixed-fractional simulator.
//!
//! This crate exposes the simulation engine over JSON:
//! - `POST /simulate` runs one batch
//! - `POST /risk_curve` runs the 1%..20% risk sweep
//! - `GET /health` for liveness checks
//!
//! Whole-percent wire fields are converted to fractions here; the engine
//! never sees the wire format.

/// Prelude module for convenient imports.
pub mod prelude;

/// Error types.
pub mod error;
/// Request handlers.
pub mod handlers;
/// API request models.
pub mod models;
/// Route definitions.
pub mod routes;
/// Server configuration and startup.
pub mod server;
/// Application state.
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use server::{ApiServer, ServerConfig, ServerError};
pub use state::AppState;
