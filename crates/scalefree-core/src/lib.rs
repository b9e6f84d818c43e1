#![deny(missing_docs)]
#![doc = "Core contracts and data types shared by the scalefree graph store and generators."]

use serde::{Deserialize, Serialize};

pub mod budget;
pub mod errors;
pub mod ids;
pub mod rng;

pub use budget::{AttemptCounter, SamplingBudget};
pub use errors::{codes, ErrorInfo, GenError};
pub use ids::{EdgeId, ElementId, IdFactory, RawId, SequentialIds, VertexId};
pub use rng::{derive_substream_seed, RandomSource, RngHandle};

/// Endpoints of an edge as recorded when it was added to a graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoints<V> {
    /// First endpoint; the tail for directed edges.
    pub source: V,
    /// Second endpoint; the head for directed edges.
    pub target: V,
    /// Whether the edge is directed from `source` to `target`.
    pub directed: bool,
}

impl<V: PartialEq> Endpoints<V> {
    /// Returns whether `vertex` is one of the endpoints.
    pub fn contains(&self, vertex: &V) -> bool {
        self.source == *vertex || self.target == *vertex
    }

    /// Returns the endpoint across from `vertex`, if `vertex` is an endpoint.
    pub fn opposite(&self, vertex: &V) -> Option<&V> {
        if self.source == *vertex {
            Some(&self.target)
        } else if self.target == *vertex {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Returns whether the edge realises the successor relation `from -> to`.
    ///
    /// Undirected edges connect their endpoints in both directions.
    pub fn leads(&self, from: &V, to: &V) -> bool {
        if self.directed {
            self.source == *from && self.target == *to
        } else {
            (self.source == *from && self.target == *to)
                || (self.source == *to && self.target == *from)
        }
    }
}

/// Read-only query surface of a graph.
///
/// Renderers, serializers, and statistics consume graphs only through this
/// trait. The provided methods are derived from the required primitives and
/// hold no state of their own.
pub trait GraphView {
    /// Vertex identity type.
    type Vertex: ElementId;
    /// Edge identity type.
    type Edge: ElementId;

    /// Returns an iterator over all vertices in insertion order.
    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = &Self::Vertex> + '_>;

    /// Returns an iterator over all edges.
    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = &Self::Edge> + '_>;

    /// Returns the distinct vertices sharing an edge with `vertex`.
    fn neighbors(&self, vertex: &Self::Vertex) -> Result<Vec<Self::Vertex>, GenError>;

    /// Returns the edges touching `vertex`.
    fn incident_edges(
        &self,
        vertex: &Self::Vertex,
    ) -> Result<Box<dyn ExactSizeIterator<Item = &Self::Edge> + '_>, GenError>;

    /// Returns the endpoints recorded for `edge`.
    fn endpoints(&self, edge: &Self::Edge) -> Result<Endpoints<Self::Vertex>, GenError>;

    /// Returns the number of edges touching `vertex`; a self-loop counts once.
    fn degree(&self, vertex: &Self::Vertex) -> Result<usize, GenError>;

    /// Returns the number of directed edges pointing at `vertex`.
    fn in_degree(&self, vertex: &Self::Vertex) -> Result<usize, GenError>;

    /// Returns whether an edge `from -> to` exists (or `from -- to` if undirected).
    fn is_successor(&self, from: &Self::Vertex, to: &Self::Vertex) -> Result<bool, GenError>;

    /// Returns an edge realising `from -> to`, if any.
    fn find_edge(
        &self,
        from: &Self::Vertex,
        to: &Self::Vertex,
    ) -> Result<Option<&Self::Edge>, GenError>;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Returns the number of edges.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Returns whether `a` and `b` share an edge in either direction.
    fn are_neighbors(&self, a: &Self::Vertex, b: &Self::Vertex) -> Result<bool, GenError> {
        Ok(self.neighbors(a)?.contains(b))
    }

    /// Returns whether `vertex` is an endpoint of `edge`.
    fn are_incident(&self, vertex: &Self::Vertex, edge: &Self::Edge) -> Result<bool, GenError> {
        Ok(self.endpoints(edge)?.contains(vertex))
    }

    /// Returns the number of distinct neighbours of `vertex`.
    fn num_neighbors(&self, vertex: &Self::Vertex) -> Result<usize, GenError> {
        Ok(self.neighbors(vertex)?.len())
    }
}

/// Contract shared by generators that grow a graph in discrete time steps.
pub trait EvolvingGenerator {
    /// Graph type produced by the generator.
    type Graph: GraphView;

    /// Advances the generator by `steps` time steps; zero is a no-op.
    fn evolve_graph(&mut self, steps: usize) -> Result<(), GenError>;

    /// Returns the number of time steps elapsed since construction or reset.
    fn num_elapsed_time_steps(&self) -> usize;

    /// Returns a read-only view of the current graph.
    fn generate_graph(&self) -> &Self::Graph;

    /// Discards all graph state and returns to the post-construction state.
    fn reset(&mut self) -> Result<(), GenError>;
}
