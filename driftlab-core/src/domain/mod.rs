//! Domain types: price series and outlook results.

pub mod outlook;
pub mod series;

pub use outlook::{OutlookLabel, OutlookResult};
pub use series::{ClosingPrice, PriceSeries};
