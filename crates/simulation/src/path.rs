//! Single equity path under the fixed-fractional model.
//!
//! Each trade risks `risk_fraction` of the current portfolio. A win adds the
//! risked amount scaled by the reward ratio, a loss removes the risked amount.
//! The portfolio is never floored: with a risk fraction of 1 a single loss
//! takes it to zero, and it keeps compounding from wherever it lands.

use ffsim_domain::SimulationParameters;
use rand::Rng;

/// Fixed parameters of one simulated equity path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedFractionalPath {
    /// Starting portfolio value.
    pub initial_portfolio: f64,
    /// Fraction of the current portfolio risked per trade.
    pub risk_fraction: f64,
    /// Reward multiplier applied on a win.
    pub risk_reward_ratio: f64,
    /// Probability that a trade wins.
    pub win_probability: f64,
    /// Number of sequential trades.
    pub trades: u32,
}

impl From<&SimulationParameters> for FixedFractionalPath {
    fn from(params: &SimulationParameters) -> Self {
        Self {
            initial_portfolio: params.initial_portfolio,
            risk_fraction: params.risk_fraction,
            risk_reward_ratio: params.risk_reward_ratio,
            win_probability: params.win_probability,
            trades: params.trades_per_day,
        }
    }
}

impl FixedFractionalPath {
    /// Runs the path and returns its terminal return in percent.
    ///
    /// Consumes exactly `trades` uniform draws from `rng`.
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let win_step = self.risk_reward_ratio * self.risk_fraction;
        let mut portfolio = self.initial_portfolio;

        for _ in 0..self.trades {
            let draw: f64 = rng.random();
            if draw < self.win_probability {
                portfolio += portfolio * win_step;
            } else {
                portfolio -= portfolio * self.risk_fraction;
            }
        }

        (portfolio - self.initial_portfolio) / self.initial_portfolio * 100.0
    }
}

/// Simulates one path and returns its terminal return in percent.
pub fn simulate_path<R: Rng + ?Sized>(
    initial_portfolio: f64,
    risk_fraction: f64,
    risk_reward_ratio: f64,
    win_probability: f64,
    trades_per_day: u32,
    rng: &mut R,
) -> f64 {
    FixedFractionalPath {
        initial_portfolio,
        risk_fraction,
        risk_reward_ratio,
        win_probability,
        trades: trades_per_day,
    }
    .simulate(rng)
}
