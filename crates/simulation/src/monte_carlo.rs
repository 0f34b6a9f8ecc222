//! Batch Monte Carlo runner and risk sweep.
//!
//! A batch draws `num_simulations` independent paths from one random source
//! and reduces their terminal returns with [`BatchStatistics`]. The sweep
//! repeats a fresh batch for every whole-percent risk level in
//! [`SWEEP_RISK_LEVELS`].
//!
//! Both modes report a Sharpe-like ratio of [`UNDEFINED_SHARPE`] when the
//! batch has zero dispersion.
//!
//! [`UNDEFINED_SHARPE`]: crate::statistics::UNDEFINED_SHARPE

use crate::path::FixedFractionalPath;
use crate::statistics::{BatchStatistics, annualize};
use ffsim_domain::math::round2;
use ffsim_domain::parameters::SWEEP_RISK_LEVELS;
use ffsim_domain::{
    DomainError, RiskCurve, RiskSweepParameters, SimulationParameters, SimulationResult,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

/// How the paths of a batch are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Every path draws directly from the caller's random source, in order.
    #[default]
    Sequential,
    /// One seed per path is drawn from the caller's source, then paths run on
    /// the rayon pool, each with its own `StdRng`.
    Parallel,
}

/// Runs batches of fixed-fractional equity paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonteCarloRunner {
    /// Path evaluation strategy.
    pub mode: ExecutionMode,
}

impl MonteCarloRunner {
    /// Creates a runner with the given execution mode.
    #[must_use]
    pub fn new(mode: ExecutionMode) -> Self {
        Self { mode }
    }

    /// Runs a single batch and summarizes it.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidParameter`] before drawing anything if
    /// `params` fails validation.
    pub fn run_simulation<R: Rng + ?Sized>(
        &self,
        params: &SimulationParameters,
        rng: &mut R,
    ) -> Result<SimulationResult, DomainError> {
        params.validate()?;

        info!(
            simulations = params.num_simulations,
            trades_per_day = params.trades_per_day,
            draws = params.total_draws(),
            mode = ?self.mode,
            "Running batch simulation"
        );

        let returns = self.run_batch(params, rng);
        let stats = BatchStatistics::from_returns(&returns, params.risk_free_rate);

        if stats.sharpe.is_none() {
            debug!("Zero dispersion in batch, reporting sentinel ratio");
        }

        Ok(SimulationResult {
            average: round2(stats.average),
            best: round2(stats.best),
            worst: round2(stats.worst),
            sharpe: round2(stats.sharpe_or_sentinel()),
            std_dev: round2(stats.std_dev),
            annual_return: round2(annualize(stats.average, params.trading_days)),
            daily_results: returns,
        })
    }

    /// Sweeps the risk per trade from 1% to 20% and records the ratio at each
    /// level, each from a fresh batch.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidParameter`] before drawing anything if
    /// `params` fails validation.
    pub fn run_risk_curve<R: Rng + ?Sized>(
        &self,
        params: &RiskSweepParameters,
        rng: &mut R,
    ) -> Result<RiskCurve, DomainError> {
        params.validate()?;

        info!(
            simulations = params.num_simulations,
            trades_per_day = params.trades_per_day,
            draws = params.total_draws(),
            mode = ?self.mode,
            "Running risk sweep"
        );

        let mut curve = RiskCurve::with_capacity(SWEEP_RISK_LEVELS.clone().count());

        for risk in SWEEP_RISK_LEVELS {
            let level = params.at_risk_level(risk);
            let returns = self.run_batch(&level, rng);
            let stats = BatchStatistics::from_returns(&returns, level.risk_free_rate);
            let sharpe = round2(stats.sharpe_or_sentinel());

            debug!(
                risk,
                average = stats.average,
                std_dev = stats.std_dev,
                sharpe,
                "Sweep level"
            );
            curve.push(risk, sharpe);
        }

        Ok(curve)
    }

    /// Generates the raw terminal returns of one batch, in path order.
    ///
    /// Assumes `params` has already been validated.
    pub fn run_batch<R: Rng + ?Sized>(
        &self,
        params: &SimulationParameters,
        rng: &mut R,
    ) -> Vec<f64> {
        let path = FixedFractionalPath::from(params);
        let count = params.num_simulations as usize;

        match self.mode {
            ExecutionMode::Sequential => (0..count).map(|_| path.simulate(&mut *rng)).collect(),
            ExecutionMode::Parallel => {
                let seeds: Vec<u64> = (0..count).map(|_| rng.random()).collect();
                seeds
                    .into_par_iter()
                    .map(|seed| path.simulate(&mut StdRng::seed_from_u64(seed)))
                    .collect()
            }
        }
    }
}

/// Runs a single sequential batch. See [`MonteCarloRunner::run_simulation`].
///
/// # Errors
/// Returns [`DomainError::InvalidParameter`] if `params` fails validation.
pub fn run_simulation<R: Rng + ?Sized>(
    params: &SimulationParameters,
    rng: &mut R,
) -> Result<SimulationResult, DomainError> {
    MonteCarloRunner::default().run_simulation(params, rng)
}

/// Runs a sequential risk sweep. See [`MonteCarloRunner::run_risk_curve`].
///
/// # Errors
/// Returns [`DomainError::InvalidParameter`] if `params` fails validation.
pub fn run_risk_curve<R: Rng + ?Sized>(
    params: &RiskSweepParameters,
    rng: &mut R,
) -> Result<RiskCurve, DomainError> {
    MonteCarloRunner::default().run_risk_curve(params, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRng;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn base_params() -> SimulationParameters {
        SimulationParameters::new(10_000.0)
            .with_risk_fraction(0.01)
            .with_risk_reward_ratio(2.0)
            .with_trades_per_day(10)
            .with_trading_days(252)
            .with_num_simulations(500)
            .with_win_probability(0.5)
            .with_risk_free_rate(0.04)
    }

    #[test]
    fn test_single_path_win_scenario() {
        let params = SimulationParameters::new(10_000.0)
            .with_risk_fraction(0.01)
            .with_risk_reward_ratio(2.0)
            .with_trades_per_day(1)
            .with_num_simulations(1)
            .with_win_probability(0.5);

        let mut rng = ScriptedRng::new(&[ScriptedRng::WIN]);
        let result = run_simulation(&params, &mut rng).unwrap();

        assert_eq!(result.daily_results.len(), 1);
        assert!((result.daily_results[0] - 2.0).abs() < 1e-12);
        assert_eq!(result.average, 2.0);
        assert_eq!(result.best, 2.0);
        assert_eq!(result.worst, 2.0);
        assert_eq!(result.std_dev, 0.0);
        assert_eq!(result.sharpe, 0.0);
    }

    #[test]
    fn test_single_path_loss_scenario() {
        let params = SimulationParameters::new(10_000.0)
            .with_risk_fraction(0.01)
            .with_risk_reward_ratio(2.0)
            .with_trades_per_day(1)
            .with_trading_days(0)
            .with_num_simulations(1)
            .with_win_probability(0.5);

        let mut rng = ScriptedRng::new(&[ScriptedRng::LOSS]);
        let result = run_simulation(&params, &mut rng).unwrap();

        assert!((result.daily_results[0] + 1.0).abs() < 1e-12);
        assert_eq!(result.average, -1.0);
        assert_eq!(result.annual_return, 0.0);
    }

    #[test]
    fn test_scripted_batch_statistics() {
        let params = SimulationParameters::new(10_000.0)
            .with_risk_fraction(0.01)
            .with_risk_reward_ratio(2.0)
            .with_trades_per_day(1)
            .with_trading_days(2)
            .with_num_simulations(4)
            .with_win_probability(0.5);

        let mut rng = ScriptedRng::new(&[
            ScriptedRng::WIN,
            ScriptedRng::LOSS,
            ScriptedRng::WIN,
            ScriptedRng::LOSS,
        ]);
        let result = run_simulation(&params, &mut rng).unwrap();

        // Returns: [2, -1, 2, -1] -> mean 0.5, sample std sqrt(9/3) = 1.7320...
        assert_eq!(result.average, 0.5);
        assert_eq!(result.best, 2.0);
        assert_eq!(result.worst, -1.0);
        assert_eq!(result.std_dev, 1.73);
        assert_eq!(result.sharpe, 0.29);
        // (1.005^2 - 1) * 100 = 1.0025
        assert_eq!(result.annual_return, 1.0);
        assert_eq!(rng.draws(), 4);
    }

    #[test]
    fn test_daily_results_length_and_order_property() {
        let params = base_params();
        let result = run_simulation(&params, &mut seeded(1)).unwrap();

        assert_eq!(result.daily_results.len(), 500);
        assert!(result.worst <= result.average);
        assert!(result.average <= result.best);
        assert!(result.std_dev > 0.0);
    }

    #[test]
    fn test_zero_trades_yields_zero_statistics() {
        let params = base_params().with_trades_per_day(0);
        let result = run_simulation(&params, &mut ScriptedRng::new(&[])).unwrap();

        assert!(result.daily_results.iter().all(|r| *r == 0.0));
        assert_eq!(result.average, 0.0);
        assert_eq!(result.best, 0.0);
        assert_eq!(result.worst, 0.0);
        assert_eq!(result.std_dev, 0.0);
        assert_eq!(result.sharpe, 0.0);
        assert_eq!(result.annual_return, 0.0);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let params = base_params();
        let a = run_simulation(&params, &mut seeded(42)).unwrap();
        let b = run_simulation(&params, &mut seeded(42)).unwrap();
        assert_eq!(a, b);

        let c = run_simulation(&params, &mut seeded(43)).unwrap();
        assert_ne!(a.daily_results, c.daily_results);
    }

    #[test]
    fn test_parallel_runs_are_reproducible() {
        let runner = MonteCarloRunner::new(ExecutionMode::Parallel);
        let params = base_params();

        let a = runner.run_simulation(&params, &mut seeded(9)).unwrap();
        let b = runner.run_simulation(&params, &mut seeded(9)).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.daily_results.len(), 500);
    }

    #[test]
    fn test_parallel_and_sequential_agree_on_certain_outcomes() {
        let params = base_params().with_win_probability(1.0);
        let sequential = run_simulation(&params, &mut seeded(3)).unwrap();
        let parallel = MonteCarloRunner::new(ExecutionMode::Parallel)
            .run_simulation(&params, &mut seeded(3))
            .unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(sequential.std_dev, 0.0);
        assert_eq!(sequential.sharpe, 0.0);
    }

    #[test]
    fn test_invalid_parameters_consume_no_draws() {
        let params = base_params().with_num_simulations(0);
        let mut rng = ScriptedRng::new(&[]);

        let err = run_simulation(&params, &mut rng).unwrap_err();
        assert_eq!(err.field(), "numSimulations");
        assert_eq!(rng.draws(), 0);

        let sweep = RiskSweepParameters::from(base_params().with_win_probability(2.0));
        let err = run_risk_curve(&sweep, &mut rng).unwrap_err();
        assert_eq!(err.field(), "winProbability");
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_higher_reward_ratio_raises_average() {
        // p = 0.6 beats the breakeven 1 / (1 + rr) for both ratios.
        let low = base_params()
            .with_win_probability(0.6)
            .with_risk_reward_ratio(1.0)
            .with_num_simulations(5_000);
        let high = low.with_risk_reward_ratio(3.0);

        let low_result = run_simulation(&low, &mut seeded(11)).unwrap();
        let high_result = run_simulation(&high, &mut seeded(11)).unwrap();

        assert!(high_result.average > low_result.average);
    }

    #[test]
    fn test_risk_curve_levels() {
        let sweep = RiskSweepParameters::from(base_params().with_num_simulations(50));
        let curve = run_risk_curve(&sweep, &mut seeded(5)).unwrap();

        assert_eq!(curve.risk, (1..=20).collect::<Vec<u32>>());
        assert_eq!(curve.sharpe.len(), 20);
        assert!(curve.sharpe.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_risk_curve_zero_variance_guard() {
        let sweep = RiskSweepParameters::from(base_params().with_trades_per_day(0));
        let curve = run_risk_curve(&sweep, &mut ScriptedRng::new(&[])).unwrap();

        assert_eq!(curve.len(), 20);
        assert!(curve.sharpe.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_risk_curve_consumes_expected_draws() {
        let sweep = RiskSweepParameters::from(
            base_params().with_num_simulations(2).with_trades_per_day(3),
        );
        let words = vec![ScriptedRng::LOSS; 20 * 2 * 3];
        let mut rng = ScriptedRng::new(&words);

        let curve = run_risk_curve(&sweep, &mut rng).unwrap();
        assert_eq!(rng.draws(), 120);
        // Every path loses three times: identical returns, undefined ratio.
        assert!(curve.sharpe.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_risk_curve_is_reproducible() {
        let sweep = RiskSweepParameters::from(base_params().with_num_simulations(100));
        let a = run_risk_curve(&sweep, &mut seeded(21)).unwrap();
        let b = run_risk_curve(&sweep, &mut seeded(21)).unwrap();
        assert_eq!(a, b);
    }
}
