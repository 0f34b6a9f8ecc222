//! Simulation parameter records.
//!
//! Both records are plain values. They are validated once, up front, before
//! any random draw is taken; the engine assumes validated input afterwards.

use crate::error::DomainError;
use crate::value_objects::Percentage;
use std::ops::RangeInclusive;

/// Whole-percent risk levels visited by the risk sweep.
pub const SWEEP_RISK_LEVELS: RangeInclusive<u32> = 1..=20;

/// Inputs of a single batch simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    /// Starting portfolio value of every path.
    pub initial_portfolio: f64,
    /// Fraction of the current portfolio risked on each trade.
    pub risk_fraction: f64,
    /// Multiplier applied to the risked amount on a win.
    pub risk_reward_ratio: f64,
    /// Sequential trades per simulated path.
    pub trades_per_day: u32,
    /// Horizon used to compound the mean return into an annual figure.
    pub trading_days: u32,
    /// Number of independent paths.
    pub num_simulations: u32,
    /// Probability that a single trade wins.
    pub win_probability: f64,
    /// Annual risk-free rate as a plain fraction.
    pub risk_free_rate: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_portfolio: 10_000.0,
            risk_fraction: 0.01,
            risk_reward_ratio: 2.0,
            trades_per_day: 1,
            trading_days: 252,
            num_simulations: 1_000,
            win_probability: 0.5,
            risk_free_rate: 0.0,
        }
    }
}

impl SimulationParameters {
    /// Creates parameters with the given starting portfolio and default settings.
    #[must_use]
    pub fn new(initial_portfolio: f64) -> Self {
        Self {
            initial_portfolio,
            ..Self::default()
        }
    }

    /// Sets the risk per trade from a plain fraction.
    #[must_use]
    pub fn with_risk_fraction(mut self, risk_fraction: f64) -> Self {
        self.risk_fraction = risk_fraction;
        self
    }

    /// Sets the risk per trade.
    #[must_use]
    pub fn with_risk(mut self, risk: Percentage) -> Self {
        self.risk_fraction = risk.fraction();
        self
    }

    /// Sets the reward multiplier.
    #[must_use]
    pub fn with_risk_reward_ratio(mut self, ratio: f64) -> Self {
        self.risk_reward_ratio = ratio;
        self
    }

    /// Sets the number of trades per path.
    #[must_use]
    pub fn with_trades_per_day(mut self, trades: u32) -> Self {
        self.trades_per_day = trades;
        self
    }

    /// Sets the annualization horizon.
    #[must_use]
    pub fn with_trading_days(mut self, days: u32) -> Self {
        self.trading_days = days;
        self
    }

    /// Sets the number of simulated paths.
    #[must_use]
    pub fn with_num_simulations(mut self, simulations: u32) -> Self {
        self.num_simulations = simulations;
        self
    }

    /// Sets the win probability from a plain fraction.
    #[must_use]
    pub fn with_win_probability(mut self, probability: f64) -> Self {
        self.win_probability = probability;
        self
    }

    /// Sets the annual risk-free rate.
    #[must_use]
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Checks every field against its domain.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<(), DomainError> {
        check_positive("initialPortfolio", self.initial_portfolio)?;
        check_unit_interval("risk", self.risk_fraction)?;
        check_positive("riskRewardRatio", self.risk_reward_ratio)?;
        check_simulations(self.num_simulations)?;
        check_unit_interval("winProbability", self.win_probability)?;
        check_finite("riskFreeRate", self.risk_free_rate)
    }

    /// Number of uniform draws a batch with these parameters consumes.
    #[must_use]
    pub fn total_draws(&self) -> u64 {
        u64::from(self.num_simulations) * u64::from(self.trades_per_day)
    }
}

/// Inputs of a risk sweep: everything but the risk per trade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskSweepParameters {
    /// Starting portfolio value of every path.
    pub initial_portfolio: f64,
    /// Multiplier applied to the risked amount on a win.
    pub risk_reward_ratio: f64,
    /// Sequential trades per simulated path.
    pub trades_per_day: u32,
    /// Number of independent paths per risk level.
    pub num_simulations: u32,
    /// Probability that a single trade wins.
    pub win_probability: f64,
    /// Annual risk-free rate as a plain fraction.
    pub risk_free_rate: f64,
}

impl From<SimulationParameters> for RiskSweepParameters {
    fn from(params: SimulationParameters) -> Self {
        Self {
            initial_portfolio: params.initial_portfolio,
            risk_reward_ratio: params.risk_reward_ratio,
            trades_per_day: params.trades_per_day,
            num_simulations: params.num_simulations,
            win_probability: params.win_probability,
            risk_free_rate: params.risk_free_rate,
        }
    }
}

impl RiskSweepParameters {
    /// Builds the batch parameters for one whole-percent risk level.
    ///
    /// The sweep never annualizes, so `trading_days` is left at zero.
    #[must_use]
    pub fn at_risk_level(&self, risk_percent: u32) -> SimulationParameters {
        SimulationParameters {
            initial_portfolio: self.initial_portfolio,
            risk_fraction: Percentage::from_whole(f64::from(risk_percent)).fraction(),
            risk_reward_ratio: self.risk_reward_ratio,
            trades_per_day: self.trades_per_day,
            trading_days: 0,
            num_simulations: self.num_simulations,
            win_probability: self.win_probability,
            risk_free_rate: self.risk_free_rate,
        }
    }

    /// Checks every field against its domain.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<(), DomainError> {
        check_positive("initialPortfolio", self.initial_portfolio)?;
        check_positive("riskRewardRatio", self.risk_reward_ratio)?;
        check_simulations(self.num_simulations)?;
        check_unit_interval("winProbability", self.win_probability)?;
        check_finite("riskFreeRate", self.risk_free_rate)
    }

    /// Number of uniform draws the full sweep consumes, saturating at `u64::MAX`.
    #[must_use]
    pub fn total_draws(&self) -> u64 {
        let levels = u64::from(SWEEP_RISK_LEVELS.end() - SWEEP_RISK_LEVELS.start() + 1);
        levels
            .saturating_mul(u64::from(self.num_simulations))
            .saturating_mul(u64::from(self.trades_per_day))
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::invalid(field, "must be a finite number"))
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), DomainError> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::invalid(
            field,
            format!("must be greater than 0, got {value}"),
        ))
    }
}

fn check_unit_interval(field: &'static str, value: f64) -> Result<(), DomainError> {
    check_finite(field, value)?;
    if Percentage(value).is_unit_interval() {
        Ok(())
    } else {
        Err(DomainError::invalid(
            field,
            format!("must be between 0% and 100%, got {}%", value * 100.0),
        ))
    }
}

fn check_simulations(value: u32) -> Result<(), DomainError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(DomainError::invalid("numSimulations", "must be at least 1"))
    }
}
