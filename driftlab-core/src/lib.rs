//! DriftLab Core — Monte-Carlo price outlook engine.
//!
//! This crate contains the numerical heart of the outlook pipeline:
//! - Domain types (closing-price series, outlook results and labels)
//! - Return statistics (daily log-return drift and volatility, sample estimators)
//! - Geometric-Brownian-motion path simulation with a deterministic RNG hierarchy
//! - Classification of simulated outcomes into four qualitative bands
//! - Price-history providers (Yahoo chart API, CSV import, synthetic walks)

pub mod data;
pub mod domain;
pub mod engine;
pub mod rng;
pub mod stats;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: engine inputs and outputs are Send + Sync, so
    /// callers can move them across worker threads freely.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::PriceSeries>();
        require_sync::<domain::PriceSeries>();
        require_send::<domain::OutlookResult>();
        require_sync::<domain::OutlookResult>();
        require_send::<engine::SimulationConfig>();
        require_sync::<engine::SimulationConfig>();
        require_send::<engine::OutlookError>();
        require_sync::<engine::OutlookError>();
        require_send::<data::DataError>();
        require_sync::<data::DataError>();
    }
}
