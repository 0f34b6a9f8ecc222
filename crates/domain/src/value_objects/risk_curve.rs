use serde::{Deserialize, Serialize};

/// Sharpe-like ratio as a function of the whole-percent risk per trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskCurve {
    /// Whole-percent risk levels, ascending.
    pub risk: Vec<u32>,
    /// Ratio observed at the matching risk level, rounded to two decimals.
    pub sharpe: Vec<f64>,
}

impl RiskCurve {
    /// Creates an empty curve with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            risk: Vec::with_capacity(capacity),
            sharpe: Vec::with_capacity(capacity),
        }
    }

    /// Appends a point. Callers push risk levels in ascending order.
    pub fn push(&mut self, risk: u32, sharpe: f64) {
        self.risk.push(risk);
        self.sharpe.push(sharpe);
    }

    /// Number of points on the curve.
    #[must_use]
    pub fn len(&self) -> usize {
        self.risk.len()
    }

    /// Whether the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.risk.is_empty()
    }

    /// Iterates over `(risk, sharpe)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.risk.iter().copied().zip(self.sharpe.iter().copied())
    }

    /// Returns the point with the highest ratio.
    ///
    /// Ties resolve to the lowest risk level. NaN ratios are skipped.
    #[must_use]
    pub fn best(&self) -> Option<(u32, f64)> {
        self.points()
            .filter(|(_, sharpe)| !sharpe.is_nan())
            .fold(None, |best, point| match best {
                Some((_, best_sharpe)) if point.1 <= best_sharpe => best,
                _ => Some(point),
            })
    }
}
