//! Outlook labels and the result record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative outlook band, classified from the probability of a positive
/// final return.
///
/// Bands are evaluated first-match-wins with exclusive lower bounds:
/// `prob_up > 0.65` is Bullish, `> 0.55` Moderately Bullish, `> 0.45`
/// Neutral / Uncertain, anything else Bearish. A probability of exactly
/// 0.65 therefore lands in Moderately Bullish, not Bullish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutlookLabel {
    Bullish,
    ModeratelyBullish,
    NeutralUncertain,
    Bearish,
}

impl OutlookLabel {
    /// Classify a probability of positive return into a band.
    pub fn from_prob_up(prob_up: f64) -> Self {
        if prob_up > 0.65 {
            Self::Bullish
        } else if prob_up > 0.55 {
            Self::ModeratelyBullish
        } else if prob_up > 0.45 {
            Self::NeutralUncertain
        } else {
            Self::Bearish
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::ModeratelyBullish => "Moderately Bullish",
            Self::NeutralUncertain => "Neutral / Uncertain",
            Self::Bearish => "Bearish",
        }
    }
}

impl fmt::Display for OutlookLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one outlook computation.
///
/// Constructed fresh per call and immutable once returned; carries the input
/// parameters that produced it so a stored result is self-describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlookResult {
    pub symbol: String,
    pub label: OutlookLabel,
    /// Fraction of simulated paths ending above the last observed price.
    pub prob_up: f64,
    /// Mean simple return over the horizon across all paths.
    pub expected_return: f64,
    /// Sample standard deviation of final simple returns.
    pub volatility: f64,
    /// Annualized Sharpe estimate: (mu / sigma) * sqrt(252).
    pub sharpe: f64,
    /// Estimated mean daily log return.
    pub mu_daily: f64,
    /// Estimated sample standard deviation of daily log returns.
    pub sigma_daily: f64,
    /// Last observed close, the simulation anchor.
    pub last_price: f64,
    /// Horizon in trading days.
    pub days: usize,
    /// Number of simulated paths.
    pub sims: usize,
    /// Master RNG seed used for the ensemble.
    pub seed: u64,
}
