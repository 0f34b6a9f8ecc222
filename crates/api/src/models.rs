//! Wire models for the simulation endpoints.
//!
//! `risk` and `winProbability` travel as whole percentages; `riskFreeRate` is
//! already a plain fraction. Every numeric field also accepts a numeric
//! string, as submitted by HTML forms, and the count fields accept JSON
//! floats such as `5.0`, truncated toward zero.

use ffsim_domain::{Percentage, RiskSweepParameters, SimulationParameters};
use serde::{Deserialize, Deserializer, Serialize, de};

/// Body of `POST /simulate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Starting portfolio value.
    #[serde(deserialize_with = "deserialize_f64")]
    pub initial_portfolio: f64,
    /// Risk per trade, in whole percent.
    #[serde(deserialize_with = "deserialize_f64")]
    pub risk: f64,
    /// Reward multiplier on a win.
    #[serde(deserialize_with = "deserialize_f64")]
    pub risk_reward_ratio: f64,
    /// Trades per simulated path.
    #[serde(deserialize_with = "deserialize_u32")]
    pub trades_per_day: u32,
    /// Annualization horizon.
    #[serde(deserialize_with = "deserialize_u32")]
    pub trading_days: u32,
    /// Number of simulated paths.
    #[serde(deserialize_with = "deserialize_u32")]
    pub num_simulations: u32,
    /// Win probability, in whole percent.
    #[serde(deserialize_with = "deserialize_f64")]
    pub win_probability: f64,
    /// Annual risk-free rate as a plain fraction.
    #[serde(deserialize_with = "deserialize_f64")]
    pub risk_free_rate: f64,
    /// Optional seed for a reproducible run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SimulationRequest {
    /// Converts the wire body into engine parameters.
    #[must_use]
    pub fn to_parameters(&self) -> SimulationParameters {
        SimulationParameters {
            initial_portfolio: self.initial_portfolio,
            risk_fraction: Percentage::from_whole(self.risk).fraction(),
            risk_reward_ratio: self.risk_reward_ratio,
            trades_per_day: self.trades_per_day,
            trading_days: self.trading_days,
            num_simulations: self.num_simulations,
            win_probability: Percentage::from_whole(self.win_probability).fraction(),
            risk_free_rate: self.risk_free_rate,
        }
    }
}

/// Body of `POST /risk_curve`.
///
/// Unknown fields such as `risk` or `tradingDays` are accepted and ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskCurveRequest {
    /// Starting portfolio value.
    #[serde(deserialize_with = "deserialize_f64")]
    pub initial_portfolio: f64,
    /// Reward multiplier on a win.
    #[serde(deserialize_with = "deserialize_f64")]
    pub risk_reward_ratio: f64,
    /// Trades per simulated path.
    #[serde(deserialize_with = "deserialize_u32")]
    pub trades_per_day: u32,
    /// Number of simulated paths per risk level.
    #[serde(deserialize_with = "deserialize_u32")]
    pub num_simulations: u32,
    /// Win probability, in whole percent.
    #[serde(deserialize_with = "deserialize_f64")]
    pub win_probability: f64,
    /// Annual risk-free rate as a plain fraction.
    #[serde(deserialize_with = "deserialize_f64")]
    pub risk_free_rate: f64,
    /// Optional seed for a reproducible run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl RiskCurveRequest {
    /// Converts the wire body into sweep parameters.
    #[must_use]
    pub fn to_parameters(&self) -> RiskSweepParameters {
        RiskSweepParameters {
            initial_portfolio: self.initial_portfolio,
            risk_reward_ratio: self.risk_reward_ratio,
            trades_per_day: self.trades_per_day,
            num_simulations: self.num_simulations,
            win_probability: Percentage::from_whole(self.win_probability).fraction(),
            risk_free_rate: self.risk_free_rate,
        }
    }
}

/// A JSON number or a string holding one.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn deserialize_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected a number, got \"{text}\""))),
    }
}

/// Counts truncate JSON floats toward zero; strings must hold a plain integer.
fn deserialize_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => {
            let whole = value.trunc();
            if value.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&whole) {
                Ok(whole as u32)
            } else {
                Err(de::Error::custom(format!(
                    "expected a non-negative integer, got {value}"
                )))
            }
        }
        NumberOrString::Text(text) => text.trim().parse().map_err(|_| {
            de::Error::custom(format!("expected a non-negative integer, got \"{text}\""))
        }),
    }
}
