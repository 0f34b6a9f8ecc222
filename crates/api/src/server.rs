//! Server configuration and startup.

use crate::routes::create_router;
use crate::state::AppState;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use tokio::net::TcpListener;
use tracing::info;

/// Environment variable holding the bind host.
pub const ENV_HOST: &str = "FFSIM_HOST";
/// Environment variable holding the bind port.
pub const ENV_PORT: &str = "FFSIM_PORT";
/// Environment variable holding the per-request draw budget.
pub const ENV_MAX_DRAWS: &str = "FFSIM_MAX_DRAWS";
/// Environment variable holding a fixed seed for every request.
pub const ENV_SEED: &str = "FFSIM_SEED";
/// Environment variable enabling parallel path evaluation.
pub const ENV_PARALLEL: &str = "FFSIM_PARALLEL";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Maximum random draws a single request may consume.
    ///
    /// Run time grows linearly with draws (a few nanoseconds each on current
    /// hardware), so this bounds how long a request can hold a worker.
    pub max_draws: u64,
    /// Seed applied to requests that do not carry their own.
    pub seed: Option<u64>,
    /// Evaluate paths on the rayon pool.
    pub parallel: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_draws: 200_000_000,
            seed: None,
            parallel: false,
        }
    }
}

impl ServerConfig {
    /// Builds a configuration from `FFSIM_*` environment variables, falling back
    /// to defaults for anything unset.
    ///
    /// # Errors
    /// Returns [`ServerError::InvalidConfig`] if a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns [`ServerError::InvalidConfig`] if a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup(ENV_HOST).unwrap_or(defaults.host),
            port: parse_var(&lookup, ENV_PORT)?.unwrap_or(defaults.port),
            max_draws: parse_var(&lookup, ENV_MAX_DRAWS)?.unwrap_or(defaults.max_draws),
            seed: parse_var(&lookup, ENV_SEED)?.or(defaults.seed),
            parallel: parse_var(&lookup, ENV_PARALLEL)?.unwrap_or(defaults.parallel),
        })
    }

    /// Address string to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ServerError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ServerError::InvalidConfig { key, value })
        })
        .transpose()
}

/// Errors raised while configuring or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable holds an unparsable value.
    #[error("invalid value for {key}: {value:?}")]
    InvalidConfig {
        /// Variable name.
        key: &'static str,
        /// Raw value.
        value: String,
    },
    /// Binding or serving failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP server wrapping the simulation router.
#[derive(Debug, Clone)]
pub struct ApiServer {
    config: ServerConfig,
}

impl ApiServer {
    /// Creates a server with the given configuration.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Binds the listener and serves until the process is stopped.
    ///
    /// # Errors
    /// Returns [`ServerError::Io`] if the address cannot be bound or serving
    /// fails.
    pub async fn run(self) -> Result<(), ServerError> {
        let address = self.config.bind_address();
        let listener = TcpListener::bind(&address).await?;
        let local: SocketAddr = listener.local_addr()?;

        info!(
            address = %local,
            max_draws = self.config.max_draws,
            parallel = self.config.parallel,
            seeded = self.config.seed.is_some(),
            "Simulation server listening"
        );

        let router = create_router(AppState::new(self.config));
        axum::serve(listener, router).await?;
        Ok(())
    }
}
