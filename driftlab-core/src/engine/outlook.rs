//! Outlook computation: validation pipeline, statistics, classification.

use tracing::{debug, warn};

use crate::domain::{OutlookLabel, OutlookResult, PriceSeries};
use crate::rng::RngHierarchy;
use crate::stats::{self, ReturnStats};

use super::config::SimulationConfig;
use super::error::OutlookError;
use super::simulate::simulate_final_returns;

/// Assumed trading days per year, used to annualize the daily Sharpe estimate.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Compute a Monte-Carlo outlook for one price series.
///
/// Validation conditions run in a fixed order and the first failure is
/// returned; nothing downstream executes. The series is only read — the
/// caller keeps ownership, and nothing is cached between invocations.
pub fn compute_outlook(
    series: &PriceSeries,
    config: &SimulationConfig,
) -> Result<OutlookResult, OutlookError> {
    debug!(
        symbol = %series.symbol,
        days = config.days,
        sims = config.sims,
        seed = config.seed,
        "computing outlook"
    );

    if config.days == 0 || config.sims == 0 {
        warn!(days = config.days, sims = config.sims, "degenerate simulation parameters");
        return Err(OutlookError::InvalidParameters {
            days: config.days,
            sims: config.sims,
        });
    }

    if series.is_empty() {
        warn!(symbol = %series.symbol, "provider returned no rows");
        return Err(OutlookError::NoData {
            symbol: series.symbol.clone(),
        });
    }

    let closes = series.clean_closes();
    if closes.is_empty() {
        warn!(symbol = %series.symbol, "close series empty after cleaning");
        return Err(OutlookError::EmptySeries);
    }

    if closes.len() < config.min_history {
        warn!(
            symbol = %series.symbol,
            observed = closes.len(),
            required = config.min_history,
            "insufficient history"
        );
        return Err(OutlookError::InsufficientHistory {
            observed: closes.len(),
            required: config.min_history,
        });
    }

    let returns = stats::log_returns(&closes);
    if returns.is_empty() {
        warn!(symbol = %series.symbol, "log return series empty");
        return Err(OutlookError::EmptyReturns);
    }

    let est = ReturnStats::estimate(&returns);
    if est.mu.is_nan() || est.sigma.is_nan() {
        warn!(symbol = %series.symbol, mu = est.mu, sigma = est.sigma, "non-finite statistics");
        return Err(OutlookError::InvalidStats {
            mu: est.mu,
            sigma: est.sigma,
        });
    }
    if est.sigma == 0.0 {
        warn!(symbol = %series.symbol, "flat price series");
        return Err(OutlookError::DegenerateVolatility);
    }

    // Cleaned closes are non-empty past validation step 2.
    let last_price = *closes.last().unwrap();

    let hierarchy = RngHierarchy::new(config.seed);
    let final_returns = simulate_final_returns(
        &series.symbol,
        est,
        last_price,
        config.days,
        config.sims,
        &hierarchy,
    );

    let prob_up =
        final_returns.iter().filter(|&&r| r > 0.0).count() as f64 / final_returns.len() as f64;
    let expected_return = stats::mean(&final_returns);
    let volatility = stats::std_dev(&final_returns);
    let sharpe = if est.sigma > 0.0 {
        (est.mu / est.sigma) * TRADING_DAYS_PER_YEAR.sqrt()
    } else {
        0.0
    };

    Ok(OutlookResult {
        symbol: series.symbol.clone(),
        label: OutlookLabel::from_prob_up(prob_up),
        prob_up,
        expected_return,
        volatility,
        sharpe,
        mu_daily: est.mu,
        sigma_daily: est.sigma,
        last_price,
        days: config.days,
        sims: config.sims,
        seed: config.seed,
    })
}
