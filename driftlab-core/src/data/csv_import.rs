//! CSV price import — the offline path.
//!
//! Expects a header row and `date,close` columns with ISO dates
//! (`YYYY-MM-DD`). Extra columns are ignored, so a full OHLCV export works
//! unmodified. Rows outside the requested window are dropped; rows with an
//! unparsable close become NaN and are left for the engine's cleaning step.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

use super::provider::{DataError, PriceProvider};
use crate::domain::{ClosingPrice, PriceSeries};

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: NaiveDate,
    close: Option<f64>,
}

/// Reads dated closes from a local CSV file.
pub struct CsvProvider {
    path: PathBuf,
}

impl CsvProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PriceProvider for CsvProvider {
    fn name(&self) -> &str {
        "csv_import"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries, DataError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| DataError::CsvImport(format!("{}: {e}", self.path.display())))?;

        let mut rows = Vec::new();
        for record in reader.deserialize::<CsvRow>() {
            let row = record.map_err(|e| DataError::CsvImport(e.to_string()))?;
            if row.date < start || row.date > end {
                continue;
            }
            rows.push(ClosingPrice {
                date: row.date,
                close: row.close.unwrap_or(f64::NAN),
            });
        }

        rows.sort_by_key(|r| r.date);
        Ok(PriceSeries::new(symbol, rows))
    }
}
