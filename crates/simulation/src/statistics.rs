//! Reduction of terminal returns into batch statistics.

/// Trading days per year used to de-annualize the risk-free rate.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Ratio reported when the batch has no dispersion and the ratio is undefined.
pub const UNDEFINED_SHARPE: f64 = 0.0;

/// Arithmetic mean. `None` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation with Bessel's correction (divides by `n - 1`).
///
/// `None` for fewer than two samples.
#[must_use]
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let avg = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - avg) * (v - avg)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Sharpe-like ratio of a single period.
///
/// The annual risk-free rate is de-annualized over
/// [`TRADING_DAYS_PER_YEAR`] before being subtracted from `average`.
/// Returns `None` when `std_dev` is zero or the ratio is not finite.
#[must_use]
pub fn sharpe_ratio(average: f64, std_dev: f64, risk_free_rate: f64) -> Option<f64> {
    if std_dev == 0.0 {
        return None;
    }
    let ratio = (average - risk_free_rate / TRADING_DAYS_PER_YEAR) / std_dev;
    ratio.is_finite().then_some(ratio)
}

/// Compounds a per-period percentage return over `periods` periods.
#[must_use]
pub fn annualize(average_pct: f64, periods: u32) -> f64 {
    ((1.0 + average_pct / 100.0).powf(f64::from(periods)) - 1.0) * 100.0
}

/// Unrounded statistics of one batch of terminal returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchStatistics {
    /// Mean terminal return.
    pub average: f64,
    /// Largest terminal return.
    pub best: f64,
    /// Smallest terminal return.
    pub worst: f64,
    /// Sample standard deviation. Zero when every return is identical or there
    /// is a single sample.
    pub std_dev: f64,
    /// Sharpe-like ratio, `None` when undefined.
    pub sharpe: Option<f64>,
}

impl BatchStatistics {
    /// Reduces a batch of terminal returns.
    ///
    /// An empty batch reduces to all zeros.
    #[must_use]
    pub fn from_returns(returns: &[f64], risk_free_rate: f64) -> Self {
        let Some(first) = returns.first().copied() else {
            return Self {
                average: 0.0,
                best: 0.0,
                worst: 0.0,
                std_dev: 0.0,
                sharpe: None,
            };
        };

        let (worst, best) = returns
            .iter()
            .fold((first, first), |(lo, hi), &r| (lo.min(r), hi.max(r)));

        // Identical samples would otherwise leave a rounding residue in the
        // deviation and blow the ratio up instead of leaving it undefined.
        let (average, std_dev) = if worst == best {
            (first, 0.0)
        } else {
            (
                mean(returns).unwrap_or(first),
                sample_std_dev(returns).unwrap_or(0.0),
            )
        };

        Self {
            average,
            best,
            worst,
            std_dev,
            sharpe: sharpe_ratio(average, std_dev, risk_free_rate),
        }
    }

    /// Sharpe-like ratio with [`UNDEFINED_SHARPE`] substituted when undefined.
    #[must_use]
    pub fn sharpe_or_sentinel(&self) -> f64 {
        self.sharpe.unwrap_or(UNDEFINED_SHARPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[10.0, 20.0, 30.0, 40.0]), Some(25.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_sample_std_dev() {
        let std = sample_std_dev(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        // sqrt(500 / 3)
        assert!((std - 12.909_944_487_358_056).abs() < 1e-12);
        assert_eq!(sample_std_dev(&[5.0]), None);
    }

    #[test]
    fn test_sharpe_ratio() {
        let ratio = sharpe_ratio(2.0, 4.0, 0.0).unwrap();
        assert_eq!(ratio, 0.5);

        let ratio = sharpe_ratio(2.0, 4.0, 2.52).unwrap();
        assert!((ratio - (2.0 - 0.01) / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_sharpe_ratio_zero_variance_is_undefined() {
        assert_eq!(sharpe_ratio(1.0, 0.0, 0.04), None);
        assert_eq!(sharpe_ratio(0.0, 0.0, 0.0), None);
    }

    #[test]
    fn test_annualize() {
        assert_eq!(annualize(0.0, 252), 0.0);
        assert_eq!(annualize(5.0, 0), 0.0);
        // 1.01^2 = 1.0201
        assert!((annualize(1.0, 2) - 2.01).abs() < 1e-9);
        assert!((annualize(-1.0, 1) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_batch_statistics_ordering() {
        let stats = BatchStatistics::from_returns(&[2.0, -1.0, 2.0, -1.0, 5.0], 0.0);
        assert_eq!(stats.best, 5.0);
        assert_eq!(stats.worst, -1.0);
        assert!((stats.average - 1.4).abs() < 1e-12);
        assert!(stats.worst <= stats.average && stats.average <= stats.best);
        assert!(stats.std_dev > 0.0);
        assert!(stats.sharpe.is_some());
    }

    #[test]
    fn test_batch_statistics_identical_returns() {
        let stats = BatchStatistics::from_returns(&[0.1; 7], 0.04);
        assert_eq!(stats.average, 0.1);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.sharpe, None);
        assert_eq!(stats.sharpe_or_sentinel(), UNDEFINED_SHARPE);
    }

    #[test]
    fn test_batch_statistics_single_sample() {
        let stats = BatchStatistics::from_returns(&[2.0], 0.0);
        assert_eq!(stats.average, 2.0);
        assert_eq!(stats.best, 2.0);
        assert_eq!(stats.worst, 2.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.sharpe, None);
    }

    #[test]
    fn test_batch_statistics_empty() {
        let stats = BatchStatistics::from_returns(&[], 0.0);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.sharpe, None);
    }
}
