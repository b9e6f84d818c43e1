use std::fmt::{self, Debug};
use std::ptr;

use scalefree_core::{Endpoints, GenError, GraphView};

/// A graph paired with one of its elements for the duration of a single call.
///
/// Contexts are built fresh for every call and never mutated afterwards, so
/// two callers can never observe each other's pairing.
pub struct Context<'a, G: ?Sized, T> {
    /// Graph the element belongs to.
    pub graph: &'a G,
    /// Vertex or edge being described.
    pub element: T,
}

impl<'a, G: ?Sized, T> Context<'a, G, T> {
    /// Pairs `graph` with `element`.
    pub fn new(graph: &'a G, element: T) -> Self {
        Self { graph, element }
    }
}

impl<'a, G: GraphView + ?Sized> Context<'a, G, G::Vertex> {
    /// Degree of the vertex.
    pub fn degree(&self) -> Result<usize, GenError> {
        self.graph.degree(&self.element)
    }

    /// In-degree of the vertex.
    pub fn in_degree(&self) -> Result<usize, GenError> {
        self.graph.in_degree(&self.element)
    }

    /// Distinct neighbours of the vertex.
    pub fn neighbors(&self) -> Result<Vec<G::Vertex>, GenError> {
        self.graph.neighbors(&self.element)
    }
}

impl<'a, G: GraphView + ?Sized> Context<'a, G, G::Edge> {
    /// Endpoints of the edge.
    pub fn endpoints(&self) -> Result<Endpoints<G::Vertex>, GenError> {
        self.graph.endpoints(&self.element)
    }
}

impl<'a, G: ?Sized, T: Clone> Clone for Context<'a, G, T> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            element: self.element.clone(),
        }
    }
}

impl<'a, G: ?Sized, T: PartialEq> PartialEq for Context<'a, G, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.graph, other.graph) && self.element == other.element
    }
}

impl<'a, G: ?Sized, T: Debug> Debug for Context<'a, G, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("element", &self.element)
            .finish_non_exhaustive()
    }
}

/// Iterates over a fresh vertex context for every vertex of `graph`.
pub fn vertex_contexts<G: GraphView + ?Sized>(
    graph: &G,
) -> impl Iterator<Item = Context<'_, G, G::Vertex>> + '_ {
    graph
        .vertices()
        .map(move |vertex| Context::new(graph, vertex.clone()))
}

/// Iterates over a fresh edge context for every edge of `graph`.
pub fn edge_contexts<G: GraphView + ?Sized>(
    graph: &G,
) -> impl Iterator<Item = Context<'_, G, G::Edge>> + '_ {
    graph
        .edges()
        .map(move |edge| Context::new(graph, edge.clone()))
}
