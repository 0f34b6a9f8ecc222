//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use ffsim_simulation::prelude::*;
//! ```

// Monte Carlo
pub use crate::monte_carlo::{ExecutionMode, MonteCarloRunner, run_risk_curve, run_simulation};

// Path simulation
pub use crate::path::{FixedFractionalPath, simulate_path};

// Random sources
pub use crate::random::rng_from_seed;

// Statistics
pub use crate::statistics::{
    BatchStatistics, TRADING_DAYS_PER_YEAR, UNDEFINED_SHARPE, annualize, mean, sample_std_dev,
    sharpe_ratio,
};

// Domain records
pub use ffsim_domain::{
    DomainError, RiskCurve, RiskSweepParameters, SimulationParameters, SimulationResult,
};
