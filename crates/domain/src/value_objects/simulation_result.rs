use serde::{Deserialize, Serialize};

/// Summary of one batch of simulated equity paths.
///
/// Every scalar statistic is rounded to two decimal places; `daily_results`
/// keeps the raw terminal returns in the order they were generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Mean terminal return, in percent.
    pub average: f64,
    /// Best terminal return, in percent.
    pub best: f64,
    /// Worst terminal return, in percent.
    pub worst: f64,
    /// Sharpe-like ratio. `0.0` when the batch has no dispersion.
    pub sharpe: f64,
    /// Sample standard deviation of the terminal returns.
    pub std_dev: f64,
    /// Mean return compounded over the configured trading days, in percent.
    pub annual_return: f64,
    /// Unrounded terminal return of every simulated path.
    pub daily_results: Vec<f64>,
}

impl SimulationResult {
    /// Number of paths that produced this result.
    #[must_use]
    pub fn num_paths(&self) -> usize {
        self.daily_results.len()
    }
}
