#![deny(missing_docs)]

//! Mutable graph store implementing the `scalefree-core` query contract.

mod context;
mod flags;
mod hash;
mod stats;
mod store;

pub use context::{edge_contexts, vertex_contexts, Context};
pub use flags::GraphConfig;
pub use hash::canonical_hash;
pub use stats::{degree_bounds, degree_histogram, max_degree, DegreeBounds};
pub use store::GraphStore;
