//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use ffsim_api::prelude::*;
//! ```

pub use crate::error::ApiError;
pub use crate::models::{RiskCurveRequest, SimulationRequest};
pub use crate::routes::create_router;
pub use crate::server::{ApiServer, ServerConfig, ServerError};
pub use crate::state::AppState;
