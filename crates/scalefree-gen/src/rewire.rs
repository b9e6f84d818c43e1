use std::fmt;

use scalefree_core::{
    codes, EdgeId, ElementId, GenError, GraphView, IdFactory, RandomSource, RngHandle,
    SequentialIds, VertexId,
};
use scalefree_graph::{max_degree, GraphConfig, GraphStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::config::RewireConfig;

/// Outcome counters of the most recent rewiring run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewireStats {
    /// Iterations that moved an edge.
    pub rewired: usize,
    /// Iterations rejected because the new pair was a self-loop or already joined.
    pub skipped: usize,
}

/// Power-law generator that rewires a uniformly random graph.
///
/// Each call to [`generate_graph`](Self::generate_graph) builds a fresh
/// undirected simple graph with uniformly chosen edges, then repeatedly moves
/// an edge incident to a random vertex onto a pair whose second member is
/// drawn with probability proportional to its degree plus one. The random
/// stream continues across calls; use [`set_seed`](Self::set_seed) to
/// restart it.
pub struct RewireGenerator<V = VertexId, E = EdgeId, R = RngHandle> {
    config: RewireConfig,
    rng: R,
    vertex_ids: Box<dyn IdFactory<V>>,
    edge_ids: Box<dyn IdFactory<E>>,
    smoothing: Option<usize>,
    stats: RewireStats,
}

impl RewireGenerator {
    /// Creates a generator with a seeded [`RngHandle`] and sequential identities.
    pub fn new(config: RewireConfig) -> Result<Self, GenError> {
        let rng = RngHandle::from_seed(config.seed);
        Self::with_sources(config, rng, SequentialIds::new(), SequentialIds::new())
    }
}

impl<V: ElementId, E: ElementId, R: RandomSource> RewireGenerator<V, E, R> {
    /// Creates a generator from explicit randomness and identity sources.
    ///
    /// The random source is reseeded from `config.seed`.
    pub fn with_sources(
        config: RewireConfig,
        mut rng: R,
        vertex_ids: impl IdFactory<V> + 'static,
        edge_ids: impl IdFactory<E> + 'static,
    ) -> Result<Self, GenError> {
        config.validate()?;
        rng.reseed(config.seed);
        Ok(Self {
            config,
            rng,
            vertex_ids: Box::new(vertex_ids),
            edge_ids: Box::new(edge_ids),
            smoothing: None,
            stats: RewireStats::default(),
        })
    }

    /// Returns the validated configuration.
    pub fn config(&self) -> &RewireConfig {
        &self.config
    }

    /// Restarts the random stream from `seed`.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    /// Maximum degree of the initial graph built by the last run.
    pub fn smoothing_max_degree(&self) -> Option<usize> {
        self.smoothing
    }

    /// Counters from the last completed run.
    pub fn last_stats(&self) -> RewireStats {
        self.stats
    }

    /// Builds a new graph and rewires it for the configured number of iterations.
    #[instrument(
        level = "debug",
        name = "rewire.generate",
        skip(self),
        fields(
            vertices = self.config.num_vertices,
            edges = self.config.num_edges,
            iterations = self.config.iterations
        ),
        err
    )]
    pub fn generate_graph(&mut self) -> Result<GraphStore<V, E>, GenError> {
        let (mut graph, vertices) = self.initial_graph()?;
        let smoothing = max_degree(&graph)?;
        if smoothing == 0 {
            return Err(GenError::degenerate("initial graph has no edges to rewire")
                .with_context("edges", graph.edge_count()));
        }
        self.smoothing = Some(smoothing);

        let mut stats = RewireStats::default();
        for _ in 0..self.config.iterations {
            if self.rewire_once(&mut graph, &vertices, smoothing)? {
                stats.rewired += 1;
            } else {
                stats.skipped += 1;
            }
        }
        self.stats = stats;
        debug!(
            rewired = stats.rewired,
            skipped = stats.skipped,
            smoothing,
            "rewiring finished"
        );
        Ok(graph)
    }

    /// Uniform random simple graph; self-loops are allowed.
    fn initial_graph(&mut self) -> Result<(GraphStore<V, E>, Vec<V>), GenError> {
        let count = self.config.num_vertices;
        let mut graph = GraphStore::new(GraphConfig::simple());
        let mut vertices = Vec::with_capacity(count);
        for _ in 0..count {
            let vertex = self.vertex_ids.next_id();
            graph.add_vertex(vertex.clone())?;
            vertices.push(vertex);
        }

        let mut attempts = self
            .config
            .budget
            .counter("initial-fill", count.saturating_mul(count));
        while graph.edge_count() < self.config.num_edges {
            attempts.tick()?;
            let source = pick(&mut self.rng, &vertices)?.clone();
            let target = pick(&mut self.rng, &vertices)?.clone();
            if !graph.is_successor(&source, &target)? {
                graph.add_edge(self.edge_ids.next_id(), source, target, false)?;
            }
        }
        trace!(attempts = attempts.used(), "initial graph filled");
        Ok((graph, vertices))
    }

    /// Performs one rewiring iteration; returns whether an edge moved.
    fn rewire_once(
        &mut self,
        graph: &mut GraphStore<V, E>,
        vertices: &[V],
        smoothing: usize,
    ) -> Result<bool, GenError> {
        let scale = graph.vertex_count() + graph.edge_count();

        let mut attempts = self.config.budget.counter("positive-degree", scale);
        let (hub, degree) = loop {
            attempts.tick()?;
            let candidate = pick(&mut self.rng, vertices)?;
            let degree = graph.degree(candidate)?;
            if degree > 0 {
                break (candidate.clone(), degree);
            }
        };

        let slot = self.rng.next_index(degree)?;
        let moved = graph
            .incident_edges(&hub)?
            .nth(slot)
            .cloned()
            .ok_or_else(|| {
                GenError::graph(codes::UNKNOWN_EDGE, "incident edge slot out of range")
                    .with_context("slot", slot)
                    .with_context("degree", degree)
            })?;

        let first = pick(&mut self.rng, vertices)?.clone();
        let mut attempts = self.config.budget.counter("preferential-target", scale);
        let second = loop {
            attempts.tick()?;
            let candidate = pick(&mut self.rng, vertices)?;
            let acceptance = (graph.degree(candidate)? + 1) as f64 / smoothing as f64;
            if self.rng.next_f64() <= acceptance {
                break candidate.clone();
            }
        };

        if first == second || graph.is_successor(&first, &second)? {
            trace!("rewire rejected");
            return Ok(false);
        }
        graph.remove_edge(&moved)?;
        graph.add_edge(self.edge_ids.next_id(), first, second, false)?;
        Ok(true)
    }
}

impl<V, E, R> fmt::Debug for RewireGenerator<V, E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RewireGenerator")
            .field("config", &self.config)
            .field("smoothing", &self.smoothing)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

fn pick<'a, V, R: RandomSource>(rng: &mut R, vertices: &'a [V]) -> Result<&'a V, GenError> {
    let index = rng.next_index(vertices.len())?;
    vertices.get(index).ok_or_else(|| {
        GenError::degenerate("vertex index out of range").with_context("index", index)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_cover_every_iteration() {
        let config = RewireConfig {
            num_vertices: 20,
            num_edges: 30,
            iterations: 75,
            seed: 3,
            ..RewireConfig::default()
        };
        let mut generator = RewireGenerator::new(config).unwrap();
        assert_eq!(generator.smoothing_max_degree(), None);
        generator.generate_graph().unwrap();
        let stats = generator.last_stats();
        assert_eq!(stats.rewired + stats.skipped, 75);
        assert!(generator.smoothing_max_degree().unwrap() > 0);
    }

    #[test]
    fn pick_rejects_empty_slice() {
        let mut rng = RngHandle::from_seed(1);
        let empty: [u32; 0] = [];
        let err = pick(&mut rng, &empty).unwrap_err();
        assert_eq!(err.code(), codes::EMPTY_RANGE);
    }
}
