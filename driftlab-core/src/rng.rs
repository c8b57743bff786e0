//! Deterministic RNG hierarchy.
//!
//! A master seed generates deterministic sub-seeds for each `(symbol, path)`
//! pair. Sub-seeds are derived via BLAKE3 hashing, independently of thread
//! scheduling order, so a simulation ensemble is bit-identical for a fixed
//! master seed regardless of rayon worker count.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic RNG hierarchy for simulation ensembles.
///
/// Because sub-seed derivation is hash-based (not order-dependent), path 7
/// draws the same variates whether it is simulated first, last, or on a
/// different thread.
#[derive(Debug, Clone)]
pub struct RngHierarchy {
    master_seed: u64,
}

impl RngHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive a deterministic sub-seed for one simulated path of one symbol.
    pub fn sub_seed(&self, symbol: &str, path: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(symbol.as_bytes());
        hasher.update(&path.to_le_bytes());
        let hash = hasher.finalize();
        u64::from_le_bytes(hash.as_bytes()[..8].try_into().unwrap())
    }

    /// Create a seeded StdRng for one simulated path.
    pub fn rng_for(&self, symbol: &str, path: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(symbol, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_seeds_are_deterministic() {
        let hierarchy = RngHierarchy::new(42);
        assert_eq!(hierarchy.sub_seed("SPY", 0), hierarchy.sub_seed("SPY", 0));
    }

    #[test]
    fn different_paths_different_seeds() {
        let hierarchy = RngHierarchy::new(42);
        assert_ne!(hierarchy.sub_seed("SPY", 0), hierarchy.sub_seed("SPY", 1));
    }

    #[test]
    fn different_symbols_different_seeds() {
        let hierarchy = RngHierarchy::new(42);
        assert_ne!(hierarchy.sub_seed("SPY", 0), hierarchy.sub_seed("QQQ", 0));
    }

    #[test]
    fn different_master_seeds_different_output() {
        assert_ne!(
            RngHierarchy::new(42).sub_seed("SPY", 0),
            RngHierarchy::new(43).sub_seed("SPY", 0)
        );
    }

    #[test]
    fn derivation_order_independent() {
        let hierarchy = RngHierarchy::new(42);

        let a_first = hierarchy.sub_seed("SPY", 0);
        let b_second = hierarchy.sub_seed("SPY", 1);

        let b_first = hierarchy.sub_seed("SPY", 1);
        let a_second = hierarchy.sub_seed("SPY", 0);

        assert_eq!(a_first, a_second);
        assert_eq!(b_first, b_second);
    }
}
