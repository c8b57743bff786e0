//! Price-history providers.

pub mod csv_import;
pub mod provider;
pub mod synthetic;
pub mod yahoo;

pub use csv_import::CsvProvider;
pub use provider::{DataError, PriceProvider, DEFAULT_WINDOW_DAYS};
pub use synthetic::SyntheticProvider;
pub use yahoo::YahooProvider;
