use scalefree_core::{codes, ElementId, GenError, GraphView};
use sha2::{Digest, Sha256};

use crate::store::GraphStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct EdgeSignature {
    source: u64,
    target: u64,
    directed: bool,
}

/// Computes the canonical structural hash for the provided graph.
///
/// Vertices are identified by insertion position rather than identity, so
/// two graphs built by the same sequence of operations hash equally even when
/// their identity factories minted different tokens.
pub fn canonical_hash<V: ElementId, E: ElementId>(
    graph: &GraphStore<V, E>,
) -> Result<String, GenError> {
    let mut hasher = Sha256::new();
    if graph.config().allow_parallel_edges {
        hasher.update(b"parallel:allowed");
    } else {
        hasher.update(b"parallel:rejected");
    }
    hasher.update((graph.vertex_count() as u64).to_le_bytes());

    let mut signatures = Vec::with_capacity(graph.edge_count());
    for edge in graph.edges() {
        let ends = graph.endpoints(edge)?;
        let source = position(graph, &ends.source)?;
        let target = position(graph, &ends.target)?;
        let (source, target) = if ends.directed {
            (source, target)
        } else {
            (source.min(target), source.max(target))
        };
        signatures.push(EdgeSignature {
            source,
            target,
            directed: ends.directed,
        });
    }
    signatures.sort();
    hasher.update((signatures.len() as u64).to_le_bytes());
    for signature in signatures {
        hasher.update(signature.source.to_le_bytes());
        hasher.update(signature.target.to_le_bytes());
        hasher.update([u8::from(signature.directed)]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

fn position<V: ElementId, E: ElementId>(
    graph: &GraphStore<V, E>,
    vertex: &V,
) -> Result<u64, GenError> {
    graph
        .vertex_position(vertex)
        .map(|index| index as u64)
        .ok_or_else(|| {
            GenError::graph(codes::UNKNOWN_VERTEX, "edge endpoint is not a vertex")
                .with_context("vertex", format!("{vertex:?}"))
        })
}
