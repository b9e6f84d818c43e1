#![deny(missing_docs)]

//! Scale-free graph generators built on the `scalefree-graph` store.
//!
//! [`GrowthGenerator`] grows a graph by preferential attachment one vertex
//! per time step. [`RewireGenerator`] produces a whole graph at once by
//! rewiring a uniformly random graph towards a power-law degree profile.

pub mod config;
pub mod determinism;
mod growth;
mod rewire;

pub use config::{load_config, GrowthConfig, RewireConfig};
pub use determinism::replica_seed;
pub use growth::GrowthGenerator;
pub use rewire::{RewireGenerator, RewireStats};
pub use scalefree_core::EvolvingGenerator;
