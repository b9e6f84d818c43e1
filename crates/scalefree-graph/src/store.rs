use std::fmt::Debug;

use indexmap::{IndexMap, IndexSet};
use scalefree_core::{codes, EdgeId, ElementId, Endpoints, GenError, GraphView, VertexId};
use tracing::trace;

use crate::context::Context;
use crate::flags::GraphConfig;

#[derive(Debug, Clone)]
pub(crate) struct VertexRecord<E> {
    /// Every edge touching the vertex; a self-loop appears once.
    incident: IndexSet<E>,
    /// Directed edges whose target is the vertex.
    incoming: IndexSet<E>,
}

impl<E: ElementId> VertexRecord<E> {
    fn new() -> Self {
        Self {
            incident: IndexSet::new(),
            incoming: IndexSet::new(),
        }
    }
}

/// Mutable graph with an adjacency index supporting O(degree) queries.
///
/// Vertices iterate in insertion order, which keeps index-based sampling
/// reproducible. Edges iterate in insertion order until the first removal;
/// removal moves the most recently inserted edge into the vacated slot.
#[derive(Debug, Clone)]
pub struct GraphStore<V = VertexId, E = EdgeId> {
    config: GraphConfig,
    vertices: IndexMap<V, VertexRecord<E>>,
    edges: IndexMap<E, Endpoints<V>>,
}

impl<V: ElementId, E: ElementId> GraphStore<V, E> {
    /// Creates an empty graph with the provided configuration.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
        }
    }

    /// Returns the configuration used by this graph.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns whether `vertex` belongs to the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// Returns whether `edge` belongs to the graph.
    pub fn contains_edge(&self, edge: &E) -> bool {
        self.edges.contains_key(edge)
    }

    /// Returns the vertex at `index` in insertion order.
    pub fn vertex_at(&self, index: usize) -> Option<&V> {
        self.vertices.get_index(index).map(|(vertex, _)| vertex)
    }

    /// Returns the insertion-order position of `vertex`.
    pub fn vertex_position(&self, vertex: &V) -> Option<usize> {
        self.vertices.get_index_of(vertex)
    }

    /// Returns whether `edge` is directed.
    pub fn is_directed(&self, edge: &E) -> Result<bool, GenError> {
        Ok(self.edge(edge)?.directed)
    }

    /// Returns the number of directed edges leaving `vertex`.
    pub fn out_degree(&self, vertex: &V) -> Result<usize, GenError> {
        let record = self.vertex(vertex)?;
        Ok(record
            .incident
            .iter()
            .filter_map(|edge| self.edges.get(edge))
            .filter(|ends| ends.directed && ends.source == *vertex)
            .count())
    }

    /// Pairs this graph with `element` for a single call.
    pub fn context<T>(&self, element: T) -> Context<'_, Self, T> {
        Context::new(self, element)
    }

    /// Adds an isolated vertex; fails if the identity is already present.
    pub fn add_vertex(&mut self, vertex: V) -> Result<(), GenError> {
        if self.vertices.contains_key(&vertex) {
            return Err(
                GenError::graph(codes::DUPLICATE_VERTEX, "vertex already exists")
                    .with_context("vertex", format!("{vertex:?}")),
            );
        }
        self.vertices.insert(vertex, VertexRecord::new());
        Ok(())
    }

    /// Removes a vertex together with every edge touching it.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<(), GenError> {
        let incident: Vec<E> = self.vertex(vertex)?.incident.iter().cloned().collect();
        for edge in &incident {
            self.remove_edge(edge)?;
        }
        self.vertices.shift_remove(vertex);
        trace!(removed_edges = incident.len(), "vertex removed");
        Ok(())
    }

    /// Adds `edge` between `source` and `target`.
    ///
    /// Directed edges run from `source` to `target`; undirected edges join
    /// the pair symmetrically. Both endpoints must already be present.
    pub fn add_edge(&mut self, edge: E, source: V, target: V, directed: bool) -> Result<(), GenError> {
        if self.edges.contains_key(&edge) {
            return Err(GenError::graph(codes::DUPLICATE_EDGE, "edge already exists")
                .with_context("edge", format!("{edge:?}")));
        }
        self.vertex(&source)?;
        self.vertex(&target)?;
        let endpoints = Endpoints {
            source,
            target,
            directed,
        };
        if !self.config.allow_parallel_edges && self.has_parallel(&endpoints)? {
            return Err(
                GenError::graph(codes::PARALLEL_EDGE, "graph does not allow parallel edges")
                    .with_context("source", format!("{:?}", endpoints.source))
                    .with_context("target", format!("{:?}", endpoints.target))
                    .with_context("directed", directed),
            );
        }
        if let Some(record) = self.vertices.get_mut(&endpoints.source) {
            record.incident.insert(edge.clone());
        }
        if let Some(record) = self.vertices.get_mut(&endpoints.target) {
            record.incident.insert(edge.clone());
            if directed {
                record.incoming.insert(edge.clone());
            }
        }
        self.edges.insert(edge, endpoints);
        Ok(())
    }

    /// Removes `edge` and detaches it from both endpoints.
    pub fn remove_edge(&mut self, edge: &E) -> Result<(), GenError> {
        let endpoints = self
            .edges
            .swap_remove(edge)
            .ok_or_else(|| unknown_edge(edge))?;
        for vertex in [&endpoints.source, &endpoints.target] {
            if let Some(record) = self.vertices.get_mut(vertex) {
                record.incident.shift_remove(edge);
                record.incoming.shift_remove(edge);
            }
        }
        Ok(())
    }

    fn has_parallel(&self, candidate: &Endpoints<V>) -> Result<bool, GenError> {
        let record = self.vertex(&candidate.source)?;
        Ok(record.incident.iter().any(|edge| {
            self.edges.get(edge).is_some_and(|ends| {
                ends.directed == candidate.directed
                    && ends.leads(&candidate.source, &candidate.target)
            })
        }))
    }

    fn vertex(&self, vertex: &V) -> Result<&VertexRecord<E>, GenError> {
        self.vertices
            .get(vertex)
            .ok_or_else(|| unknown_vertex(vertex))
    }

    fn edge(&self, edge: &E) -> Result<&Endpoints<V>, GenError> {
        self.edges.get(edge).ok_or_else(|| unknown_edge(edge))
    }
}

impl<V: ElementId, E: ElementId> Default for GraphStore<V, E> {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl<V: ElementId, E: ElementId> GraphView for GraphStore<V, E> {
    type Vertex = V;
    type Edge = E;

    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = &V> + '_> {
        Box::new(self.vertices.keys())
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = &E> + '_> {
        Box::new(self.edges.keys())
    }

    fn neighbors(&self, vertex: &V) -> Result<Vec<V>, GenError> {
        let record = self.vertex(vertex)?;
        let mut seen: IndexSet<V> = IndexSet::with_capacity(record.incident.len());
        for edge in &record.incident {
            if let Some(other) = self.edges.get(edge).and_then(|ends| ends.opposite(vertex)) {
                seen.insert(other.clone());
            }
        }
        Ok(seen.into_iter().collect())
    }

    fn incident_edges(
        &self,
        vertex: &V,
    ) -> Result<Box<dyn ExactSizeIterator<Item = &E> + '_>, GenError> {
        Ok(Box::new(self.vertex(vertex)?.incident.iter()))
    }

    fn endpoints(&self, edge: &E) -> Result<Endpoints<V>, GenError> {
        self.edge(edge).cloned()
    }

    fn degree(&self, vertex: &V) -> Result<usize, GenError> {
        Ok(self.vertex(vertex)?.incident.len())
    }

    fn in_degree(&self, vertex: &V) -> Result<usize, GenError> {
        Ok(self.vertex(vertex)?.incoming.len())
    }

    fn is_successor(&self, from: &V, to: &V) -> Result<bool, GenError> {
        Ok(self.find_edge(from, to)?.is_some())
    }

    fn find_edge(&self, from: &V, to: &V) -> Result<Option<&E>, GenError> {
        self.vertex(to)?;
        let record = self.vertex(from)?;
        Ok(record.incident.iter().find(|edge| {
            self.edges
                .get(*edge)
                .is_some_and(|ends| ends.leads(from, to))
        }))
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

fn unknown_vertex<V: Debug>(vertex: &V) -> GenError {
    GenError::graph(codes::UNKNOWN_VERTEX, "vertex does not exist")
        .with_context("vertex", format!("{vertex:?}"))
}

fn unknown_edge<E: Debug>(edge: &E) -> GenError {
    GenError::graph(codes::UNKNOWN_EDGE, "edge does not exist")
        .with_context("edge", format!("{edge:?}"))
}
