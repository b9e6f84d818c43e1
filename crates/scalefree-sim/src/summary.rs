use std::collections::BTreeMap;

use scalefree_core::{ElementId, GenError, GraphView};
use scalefree_gen::RewireStats;
use scalefree_graph::{canonical_hash, degree_bounds, degree_histogram, DegreeBounds, GraphStore};
use serde::Serialize;

/// JSON document printed for every generated graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub generator: &'static str,
    pub seed: u64,
    pub vertices: usize,
    pub edges: usize,
    /// Time steps taken; absent for single-shot generators.
    pub elapsed_steps: Option<usize>,
    pub hash: String,
    pub degree_bounds: DegreeBounds,
    /// Number of vertices per degree.
    pub histogram: BTreeMap<usize, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewire: Option<RewireReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RewireReport {
    pub smoothing_max_degree: Option<usize>,
    pub stats: RewireStats,
}

impl GraphSummary {
    pub fn describe<V: ElementId, E: ElementId>(
        generator: &'static str,
        seed: u64,
        graph: &GraphStore<V, E>,
        elapsed_steps: Option<usize>,
    ) -> Result<Self, GenError> {
        Ok(Self {
            generator,
            seed,
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            elapsed_steps,
            hash: canonical_hash(graph)?,
            degree_bounds: degree_bounds(graph)?,
            histogram: degree_histogram(graph)?,
            rewire: None,
        })
    }

    pub fn with_rewire(mut self, report: RewireReport) -> Self {
        self.rewire = Some(report);
        self
    }
}
