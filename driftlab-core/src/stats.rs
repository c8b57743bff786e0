//! Return statistics — pure functions over price and return series.
//!
//! All standard deviations use the sample estimator (n−1 denominator). The
//! same convention applies to historical log returns and to simulated final
//! returns, so every sigma in the crate is comparable.

use serde::{Deserialize, Serialize};

/// Day-over-day log returns: `ln(p[t] / p[t-1])` for consecutive pairs.
///
/// Non-finite results are dropped, mirroring the missing-value cleaning the
/// close column already went through.
pub fn log_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .map(|w| (w[1] / w[0]).ln())
        .filter(|r| r.is_finite())
        .collect()
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n−1 denominator). NaN below two observations.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Estimated drift and volatility of daily log returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnStats {
    /// Mean daily log return.
    pub mu: f64,
    /// Sample standard deviation of daily log returns.
    pub sigma: f64,
}

impl ReturnStats {
    /// Estimate from a log-return series.
    pub fn estimate(returns: &[f64]) -> Self {
        Self {
            mu: mean(returns),
            sigma: std_dev(returns),
        }
    }
}
