//! Synthetic price provider — deterministic GBM walk for offline and test use.
//!
//! Seeded from the symbol name via BLAKE3, so `FAKE` always produces the same
//! series and different symbols produce different ones. Weekends are skipped
//! to mimic a daily-bar calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use super::provider::{DataError, PriceProvider};
use crate::domain::{ClosingPrice, PriceSeries};

/// Generates a deterministic synthetic close series per symbol.
pub struct SyntheticProvider {
    /// Daily log-return drift of the generated walk.
    pub mu: f64,
    /// Daily log-return volatility of the generated walk.
    pub sigma: f64,
    /// First close of the walk.
    pub start_price: f64,
}

impl Default for SyntheticProvider {
    fn default() -> Self {
        Self {
            mu: 0.0003,
            sigma: 0.015,
            start_price: 100.0,
        }
    }
}

impl SyntheticProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PriceProvider for SyntheticProvider {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, DataError> {
        // Deterministic seed from the symbol name.
        let seed: [u8; 32] = *blake3::hash(symbol.as_bytes()).as_bytes();
        let mut rng = StdRng::from_seed(seed);
        let normal = Normal::new(self.mu, self.sigma)
            .map_err(|e| DataError::Other(format!("bad synthetic parameters: {e}")))?;

        let mut rows = Vec::new();
        let mut price = self.start_price;
        let mut current = start;

        while current <= end {
            let weekday = current.weekday();
            if weekday == Weekday::Sat || weekday == Weekday::Sun {
                current += chrono::Duration::days(1);
                continue;
            }

            price *= normal.sample(&mut rng).exp();
            rows.push(ClosingPrice {
                date: current,
                close: price,
            });
            current += chrono::Duration::days(1);
        }

        Ok(PriceSeries::new(symbol, rows))
    }
}
