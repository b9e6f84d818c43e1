//! Generator configuration documents and their validation.

use std::fs;
use std::path::Path;

use scalefree_core::{codes, ErrorInfo, GenError, SamplingBudget};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Parameters of the preferential-attachment growth generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Number of unconnected seed vertices created at initialization.
    #[serde(default = "default_seed_vertices")]
    pub seed_vertices: usize,
    /// Number of edges attached from each new vertex.
    #[serde(default = "default_edges_per_step")]
    pub edges_per_step: usize,
    /// Whether new edges point from the new vertex to its targets.
    #[serde(default)]
    pub directed: bool,
    /// Whether one step may attach the new vertex to the same target twice.
    #[serde(default)]
    pub parallel_edges: bool,
    /// Seed of the random stream; reapplied on every reset.
    #[serde(default)]
    pub seed: u64,
    /// Retry policy for target selection.
    #[serde(default)]
    pub budget: SamplingBudget,
}

fn default_seed_vertices() -> usize {
    1
}

fn default_edges_per_step() -> usize {
    1
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            seed_vertices: default_seed_vertices(),
            edges_per_step: default_edges_per_step(),
            directed: false,
            parallel_edges: false,
            seed: 0,
            budget: SamplingBudget::default(),
        }
    }
}

impl GrowthConfig {
    /// Checks the configuration contract before any graph is built.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.seed_vertices == 0 {
            return Err(GenError::invalid_configuration(
                "number of seed vertices must be positive",
            ));
        }
        if self.edges_per_step == 0 {
            return Err(GenError::invalid_configuration(
                "number of edges attached per step must be positive",
            ));
        }
        if !self.parallel_edges && self.seed_vertices < self.edges_per_step {
            return Err(GenError::invalid_configuration(
                "without parallel edges the seed vertex count must cover the edges per step",
            )
            .with_context("seed_vertices", self.seed_vertices)
            .with_context("edges_per_step", self.edges_per_step)
            .with_hint("allow parallel edges or add seed vertices"));
        }
        self.budget.validate()
    }
}

/// Parameters of the power-law rewiring generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewireConfig {
    /// Number of vertices in the generated graph.
    pub num_vertices: usize,
    /// Number of edges in the generated graph; should be on the order of `num_vertices`.
    pub num_edges: usize,
    /// Number of rewiring iterations; larger values skew degrees further.
    #[serde(default)]
    pub iterations: usize,
    /// Seed of the random stream at construction.
    #[serde(default)]
    pub seed: u64,
    /// Retry policy for the rejection-sampling loops.
    #[serde(default)]
    pub budget: SamplingBudget,
}

impl Default for RewireConfig {
    fn default() -> Self {
        Self {
            num_vertices: 50,
            num_edges: 100,
            iterations: 200,
            seed: 0,
            budget: SamplingBudget::default(),
        }
    }
}

impl RewireConfig {
    /// Returns how many distinct undirected edges (self-loops included) fit on the vertices.
    pub fn edge_capacity(&self) -> usize {
        let n = self.num_vertices;
        n.saturating_mul(n.saturating_add(1)) / 2
    }

    /// Checks the configuration contract before any graph is built.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.num_vertices == 0 {
            return Err(GenError::invalid_configuration(
                "number of vertices must be positive",
            ));
        }
        if self.num_edges == 0 {
            return Err(GenError::invalid_configuration(
                "number of edges must be positive",
            )
            .with_hint("a graph without edges has no degree to smooth against"));
        }
        if self.num_edges > self.edge_capacity() {
            return Err(GenError::invalid_configuration(
                "more edges requested than distinct vertex pairs exist",
            )
            .with_context("num_vertices", self.num_vertices)
            .with_context("num_edges", self.num_edges)
            .with_context("capacity", self.edge_capacity()));
        }
        self.budget.validate()
    }
}

/// Loads a configuration document; `.json` files are parsed as JSON, anything else as YAML.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, GenError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        GenError::Serde(
            ErrorInfo::new(codes::CONFIG_READ, err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed = if is_json {
        serde_json::from_str(&contents).map_err(|err| err.to_string())
    } else {
        serde_yaml::from_str(&contents).map_err(|err| err.to_string())
    };
    parsed.map_err(|message| {
        GenError::Serde(
            ErrorInfo::new(codes::CONFIG_PARSE, message)
                .with_context("path", path.display().to_string()),
        )
    })
}
