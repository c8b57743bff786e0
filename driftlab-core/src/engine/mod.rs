//! Monte-Carlo outlook engine.
//!
//! Pipeline, run once per invocation with no shared state:
//!
//! 1. Clean the close column (drop missing rows)
//! 2. Estimate daily log-return drift and volatility (sample estimators)
//! 3. Simulate an ensemble of GBM price paths with per-path RNG streams
//! 4. Aggregate final-day simple returns into probability/return/risk stats
//! 5. Classify the probability of a positive return into a qualitative band
//!
//! Every validation failure is terminal and surfaces before any simulation
//! work; no partial result is ever returned.

pub mod config;
pub mod error;
pub mod outlook;
pub mod simulate;

pub use config::SimulationConfig;
pub use error::OutlookError;
pub use outlook::{compute_outlook, TRADING_DAYS_PER_YEAR};
pub use simulate::simulate_final_returns;
