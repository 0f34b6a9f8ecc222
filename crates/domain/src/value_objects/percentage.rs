use serde::{Deserialize, Serialize};

/// A ratio stored as a plain fraction (`0.05` means 5%).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Percentage(pub f64);

impl Percentage {
    /// Builds a percentage from a whole-percent figure such as `5.0` for 5%.
    #[must_use]
    pub fn from_whole(percent: f64) -> Self {
        Self(percent / 100.0)
    }

    /// Returns the whole-percent figure.
    #[must_use]
    pub fn to_whole(&self) -> f64 {
        self.0 * 100.0
    }

    /// Returns the plain fraction.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.0
    }

    /// Whether the fraction lies in the closed unit interval.
    #[must_use]
    pub fn is_unit_interval(&self) -> bool {
        (0.0..=1.0).contains(&self.0)
    }
}
