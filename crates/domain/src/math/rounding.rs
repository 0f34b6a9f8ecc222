use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to `dp` decimal places, resolving ties to the even neighbour.
///
/// The exact binary value is carried into [`Decimal`] before rounding, so a
/// literal such as `2.675` (stored as 2.67499999...) rounds down. Values that
/// cannot be represented as a `Decimal` (NaN, infinities, magnitudes above
/// ~7.9e28) are returned unchanged.
#[must_use]
pub fn round_dp(value: f64, dp: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Rounds a value to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    round_dp(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round2_basic() {
        assert_eq!(round2(1.234_567), 1.23);
        assert_eq!(round2(-1.005_1), -1.01);
        assert_eq!(round2(2.0), 2.0);
    }

    #[test]
    fn test_round2_ties_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
    }

    #[test]
    fn test_round2_uses_exact_binary_value() {
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(1.015), 1.01);
        assert_eq!(round2(-2.675), -2.67);
        assert_eq!(round2(0.285), 0.28);
    }

    #[test]
    fn test_round_dp_matches_decimal() {
        let expected = dec!(3.1416).to_f64().unwrap();
        assert_eq!(round_dp(std::f64::consts::PI, 4), expected);
    }

    #[test]
    fn test_round_non_finite_passthrough() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
        assert_eq!(round2(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_round_huge_value_passthrough() {
        let huge = 1.0e30;
        assert_eq!(round2(huge), huge);
    }
}
