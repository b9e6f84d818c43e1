//! Seed derivation for independent replicas.

use scalefree_core::derive_substream_seed;

/// Derives the deterministic seed used for a specific replica.
pub fn replica_seed(master_seed: u64, replica_index: usize) -> u64 {
    derive_substream_seed(master_seed, replica_index as u64)
}
