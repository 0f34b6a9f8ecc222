//! Monte Carlo engine for the fixed-fractional betting model.
//!
//! This crate provides:
//! - Single equity path simulation
//! - Batch statistics (mean, spread, Sharpe-like ratio, annualization)
//! - Sequential and rayon-backed batch execution
//! - The 1%..20% risk sweep
//! - Seeding helpers for reproducible runs

/// Prelude module for convenient imports.
pub mod prelude;

/// Batch runner and risk sweep.
pub mod monte_carlo;
/// Single equity path simulation.
pub mod path;
/// Random source construction.
pub mod random;
/// Statistics over terminal returns.
pub mod statistics;

#[cfg(test)]
mod testing;
