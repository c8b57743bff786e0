//! Structured error taxonomy for the outlook engine.
//!
//! Every variant is a data-availability or data-quality condition, never a
//! programming fault. Checks run in a fixed order and the first failure is
//! the terminal outcome; callers are expected to surface the message to the
//! end consumer rather than retry, since none of these are transient.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlookError {
    /// A zero-path or zero-day simulation has no defined statistics.
    #[error("invalid simulation parameters (days={days}, sims={sims})")]
    InvalidParameters { days: usize, sims: usize },

    /// The provider returned nothing for this symbol.
    #[error("no price data found for {symbol}")]
    NoData { symbol: String },

    /// Every row was missing or unusable after cleaning.
    #[error("close price series is empty")]
    EmptySeries,

    /// Below the minimum sample-size floor for a trustworthy estimate.
    #[error("not enough historical data for simulation ({observed} closes, need {required})")]
    InsufficientHistory { observed: usize, required: usize },

    /// One-step differencing left no usable log returns.
    #[error("log returns are empty")]
    EmptyReturns,

    /// Estimation produced a non-finite drift or volatility.
    #[error("mu or sigma is NaN (mu={mu}, sigma={sigma})")]
    InvalidStats { mu: f64, sigma: f64 },

    /// Zero variance: the GBM model and the Sharpe ratio are undefined.
    #[error("standard deviation is zero (flat price series)")]
    DegenerateVolatility,
}
