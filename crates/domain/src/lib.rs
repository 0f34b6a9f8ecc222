//! Core domain types for the fixed-fractional Monte Carlo simulator.
//!
//! This crate holds the plain records exchanged with the simulation engine:
//! - Simulation and risk sweep parameters, with validation
//! - Batch results and risk curves
//! - Percentage and rounding helpers
//! - Domain error types

/// Domain error types.
pub mod error;
/// Numeric helpers.
pub mod math;
/// Simulation parameter records.
pub mod parameters;
/// Value objects produced and consumed by the engine.
pub mod value_objects;

pub use error::DomainError;
pub use parameters::{RiskSweepParameters, SimulationParameters};
pub use value_objects::{Percentage, RiskCurve, SimulationResult};
