//! Geometric-Brownian-motion path simulation.
//!
//! Each path draws `days` i.i.d. Normal(mu, sigma) daily log returns,
//! accumulates them, and keeps only the final cumulative value — the full
//! `sims × days` matrix is never materialized, which gives identical numbers
//! to cumsum-then-take-last in O(sims) memory. Paths get independent RNG
//! streams from the [`RngHierarchy`], so the ensemble is bit-identical for a
//! fixed master seed regardless of rayon worker count.

use rand_distr::{Distribution, Normal};
use rayon::prelude::*;

use crate::rng::RngHierarchy;
use crate::stats::ReturnStats;

/// Simulate `sims` GBM paths over `days` trading days and return each path's
/// final simple return relative to `last_price`.
///
/// Callers must have validated their inputs already: sigma finite and
/// positive, `days` and `sims` nonzero. Output is ordered by path index, so
/// downstream reductions are order-independent by construction.
pub fn simulate_final_returns(
    symbol: &str,
    stats: ReturnStats,
    last_price: f64,
    days: usize,
    sims: usize,
    hierarchy: &RngHierarchy,
) -> Vec<f64> {
    // Invariant: sigma was checked finite and > 0 by the validation pipeline.
    let normal = Normal::new(stats.mu, stats.sigma).expect("sigma validated before simulation");

    (0..sims as u64)
        .into_par_iter()
        .map(|path| {
            let mut rng = hierarchy.rng_for(symbol, path);
            let mut cum_log_return = 0.0;
            for _ in 0..days {
                cum_log_return += normal.sample(&mut rng);
            }
            let final_price = last_price * cum_log_return.exp();
            (final_price - last_price) / last_price
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> ReturnStats {
        ReturnStats {
            mu: 0.001,
            sigma: 0.02,
        }
    }

    #[test]
    fn one_return_per_path() {
        let hierarchy = RngHierarchy::new(42);
        let returns = simulate_final_returns("SPY", stats(), 100.0, 30, 250, &hierarchy);
        assert_eq!(returns.len(), 250);
        assert!(returns.iter().all(|r| r.is_finite()));
    }

    #[test]
    fn fixed_seed_is_bit_identical() {
        let hierarchy = RngHierarchy::new(42);
        let a = simulate_final_returns("SPY", stats(), 100.0, 30, 100, &hierarchy);
        let b = simulate_final_returns("SPY", stats(), 100.0, 30, 100, &hierarchy);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = simulate_final_returns("SPY", stats(), 100.0, 30, 100, &RngHierarchy::new(1));
        let b = simulate_final_returns("SPY", stats(), 100.0, 30, 100, &RngHierarchy::new(2));
        assert_ne!(a, b);
    }

    #[test]
    fn returns_are_bounded_below_by_total_loss() {
        // exp(x) > 0, so a simple return can never go below -1.
        let hierarchy = RngHierarchy::new(42);
        let wild = ReturnStats {
            mu: -0.5,
            sigma: 1.0,
        };
        let returns = simulate_final_returns("SPY", wild, 100.0, 30, 500, &hierarchy);
        assert!(returns.iter().all(|&r| r > -1.0));
    }
}
