//! Price-provider trait and structured error types.
//!
//! The PriceProvider trait abstracts over history sources (Yahoo Finance,
//! CSV import, synthetic walks) so the engine can be fed from any of them
//! and tests can run without a network.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::PriceSeries;

/// Default historical window: three years of daily bars.
pub const DEFAULT_WINDOW_DAYS: i64 = 3 * 365;

/// Structured error types for price-history operations.
///
/// Distinct from [`crate::engine::OutlookError`]: these describe the fetch
/// failing, not the fetched data being statistically unusable.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("csv import error: {0}")]
    CsvImport(String),

    #[error("data error: {0}")]
    Other(String),
}

/// Trait for price-history providers.
///
/// Implementations deliver the raw close column in time-ascending order.
/// Rows with missing values pass through untouched; cleaning is the engine's
/// first validation step, not the provider's job.
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily closes for a symbol over a date range.
    fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate)
        -> Result<PriceSeries, DataError>;
}
