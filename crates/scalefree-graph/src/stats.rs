use std::collections::BTreeMap;

use scalefree_core::{GenError, GraphView};
use serde::{Deserialize, Serialize};

use crate::context::vertex_contexts;

/// Bounds on total and inbound degrees across all vertices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeBounds {
    /// Minimum degree observed across all vertices.
    pub min_degree: Option<usize>,
    /// Maximum degree observed across all vertices.
    pub max_degree: Option<usize>,
    /// Minimum in-degree observed across all vertices.
    pub min_in_degree: Option<usize>,
    /// Maximum in-degree observed across all vertices.
    pub max_in_degree: Option<usize>,
}

impl DegreeBounds {
    /// Creates an empty descriptor where no degree information is known yet.
    pub fn unknown() -> Self {
        Self {
            min_degree: None,
            max_degree: None,
            min_in_degree: None,
            max_in_degree: None,
        }
    }
}

/// Scans every vertex once and reports degree bounds.
pub fn degree_bounds<G: GraphView + ?Sized>(graph: &G) -> Result<DegreeBounds, GenError> {
    let mut bounds = DegreeBounds::unknown();
    for context in vertex_contexts(graph) {
        let degree = context.degree()?;
        let in_degree = context.in_degree()?;
        bounds.min_degree = Some(bounds.min_degree.map_or(degree, |v| v.min(degree)));
        bounds.max_degree = Some(bounds.max_degree.map_or(degree, |v| v.max(degree)));
        bounds.min_in_degree = Some(bounds.min_in_degree.map_or(in_degree, |v| v.min(in_degree)));
        bounds.max_in_degree = Some(bounds.max_in_degree.map_or(in_degree, |v| v.max(in_degree)));
    }
    Ok(bounds)
}

/// Returns the largest vertex degree, or zero for an empty graph.
pub fn max_degree<G: GraphView + ?Sized>(graph: &G) -> Result<usize, GenError> {
    let mut best = 0;
    for context in vertex_contexts(graph) {
        best = best.max(context.degree()?);
    }
    Ok(best)
}

/// Counts vertices per degree value.
pub fn degree_histogram<G: GraphView + ?Sized>(
    graph: &G,
) -> Result<BTreeMap<usize, usize>, GenError> {
    let mut histogram = BTreeMap::new();
    for context in vertex_contexts(graph) {
        *histogram.entry(context.degree()?).or_insert(0) += 1;
    }
    Ok(histogram)
}
