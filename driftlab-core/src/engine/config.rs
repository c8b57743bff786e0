//! Simulation parameters.

use serde::{Deserialize, Serialize};

/// Immutable input parameters for one outlook computation.
///
/// Deserializable from TOML/JSON; missing fields fall back to the defaults,
/// so a config file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Horizon in trading days.
    pub days: usize,
    /// Number of simulated price paths.
    pub sims: usize,
    /// Minimum cleaned observations required before estimating statistics.
    pub min_history: usize,
    /// Master RNG seed for the path ensemble.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 30,
            sims: 5000,
            min_history: 60,
            seed: 42,
        }
    }
}
