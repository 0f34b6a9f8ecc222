//! Shared application state.

use crate::error::ApiError;
use crate::server::ServerConfig;
use ffsim_simulation::monte_carlo::{ExecutionMode, MonteCarloRunner};
use std::sync::Arc;

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Creates the state from a server configuration.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Builds a runner honoring the configured execution mode.
    #[must_use]
    pub fn runner(&self) -> MonteCarloRunner {
        let mode = if self.config.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        };
        MonteCarloRunner::new(mode)
    }

    /// Picks the seed for a request: the request's own, else the configured one.
    #[must_use]
    pub fn seed_for(&self, requested: Option<u64>) -> Option<u64> {
        requested.or(self.config.seed)
    }

    /// Rejects work that would exceed the configured draw budget.
    pub fn check_draw_budget(&self, draws: u64) -> Result<(), ApiError> {
        if draws > self.config.max_draws {
            return Err(ApiError::InvalidParameter(format!(
                "request needs {draws} random draws, limit is {}",
                self.config.max_draws
            )));
        }
        Ok(())
    }
}
