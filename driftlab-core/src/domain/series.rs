//! Closing-price series — the engine's only input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated closing price as delivered by a provider.
///
/// The close may be NaN when the provider had a row for the date but no
/// usable value; cleaning happens inside the engine's validation, not here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClosingPrice {
    pub date: NaiveDate,
    pub close: f64,
}

/// Ordered, time-ascending closing prices for one symbol.
///
/// Rows are kept exactly as the provider delivered them. The engine only
/// reads the series; `clean_closes` is the missing-row filter that every
/// downstream computation operates on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    pub rows: Vec<ClosingPrice>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, rows: Vec<ClosingPrice>) -> Self {
        Self {
            symbol: symbol.into(),
            rows,
        }
    }

    /// Build a series from bare closes on consecutive dates starting at `start`.
    ///
    /// Convenience for synthetic data and tests where only the close column
    /// matters.
    pub fn from_closes(symbol: impl Into<String>, start: NaiveDate, closes: &[f64]) -> Self {
        let rows = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| ClosingPrice {
                date: start + chrono::Duration::days(i as i64),
                close,
            })
            .collect();
        Self::new(symbol, rows)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Close column with non-finite and non-positive entries dropped.
    ///
    /// Order is preserved; a price of zero or below has no log return and is
    /// treated the same as a missing row.
    pub fn clean_closes(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|r| r.close)
            .filter(|c| c.is_finite() && *c > 0.0)
            .collect()
    }

    /// Date range of the raw rows, if any.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    #[test]
    fn clean_closes_drops_nan_and_nonpositive() {
        let series =
            PriceSeries::from_closes("SPY", start(), &[100.0, f64::NAN, 101.0, 0.0, -5.0, 102.0]);
        assert_eq!(series.clean_closes(), vec![100.0, 101.0, 102.0]);
    }

    #[test]
    fn clean_closes_preserves_order() {
        let series = PriceSeries::from_closes("SPY", start(), &[103.0, 101.0, 102.0]);
        assert_eq!(series.clean_closes(), vec![103.0, 101.0, 102.0]);
    }

    #[test]
    fn date_range_spans_rows() {
        let series = PriceSeries::from_closes("SPY", start(), &[100.0, 101.0, 102.0]);
        let (first, last) = series.date_range().unwrap();
        assert_eq!(first, start());
        assert_eq!(last, start() + chrono::Duration::days(2));
    }

    #[test]
    fn empty_series_has_no_range() {
        let series = PriceSeries::new("SPY", vec![]);
        assert!(series.is_empty());
        assert!(series.date_range().is_none());
    }
}
