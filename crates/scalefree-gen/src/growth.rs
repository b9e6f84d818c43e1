use std::fmt;

use indexmap::IndexSet;
use scalefree_core::{
    EdgeId, ElementId, EvolvingGenerator, GenError, GraphView, IdFactory, RandomSource,
    RngHandle, SequentialIds, VertexId,
};
use scalefree_graph::{GraphConfig, GraphStore};
use tracing::{debug, instrument, trace};

use crate::config::GrowthConfig;

/// Preferential-attachment generator.
///
/// Initialization creates `seed_vertices` unconnected vertices. Each time
/// step adds one vertex and attaches it to `edges_per_step` existing
/// vertices, favouring those with a higher degree (in-degree when edges are
/// directed).
///
/// The random source is reseeded from the configured seed on construction
/// and on every [`reset`](EvolvingGenerator::reset). Identity factories keep
/// counting across resets, so a reset graph matches the original up to the
/// identities it carries.
pub struct GrowthGenerator<V = VertexId, E = EdgeId, R = RngHandle> {
    config: GrowthConfig,
    rng: R,
    vertex_ids: Box<dyn IdFactory<V>>,
    edge_ids: Box<dyn IdFactory<E>>,
    graph: GraphStore<V, E>,
    /// Vertices in the order they were added; sampled by position.
    vertex_index: IndexSet<V>,
    seed_vertices: Vec<V>,
    elapsed: usize,
}

impl GrowthGenerator {
    /// Creates a generator with a seeded [`RngHandle`] and sequential identities.
    pub fn new(config: GrowthConfig) -> Result<Self, GenError> {
        let rng = RngHandle::from_seed(config.seed);
        Self::with_sources(config, rng, SequentialIds::new(), SequentialIds::new())
    }
}

impl<V: ElementId, E: ElementId, R: RandomSource> GrowthGenerator<V, E, R> {
    /// Creates a generator from explicit randomness and identity sources.
    pub fn with_sources(
        config: GrowthConfig,
        rng: R,
        vertex_ids: impl IdFactory<V> + 'static,
        edge_ids: impl IdFactory<E> + 'static,
    ) -> Result<Self, GenError> {
        config.validate()?;
        let store_config = store_config(&config);
        let mut generator = Self {
            config,
            rng,
            vertex_ids: Box::new(vertex_ids),
            edge_ids: Box::new(edge_ids),
            graph: GraphStore::new(store_config),
            vertex_index: IndexSet::new(),
            seed_vertices: Vec::new(),
            elapsed: 0,
        };
        generator.initialize()?;
        Ok(generator)
    }

    /// Returns the validated configuration.
    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Returns the vertices created at initialization, in creation order.
    pub fn seed_vertices(&self) -> &[V] {
        &self.seed_vertices
    }

    /// Returns the position at which `vertex` entered the graph.
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.vertex_index.get_index_of(vertex)
    }

    /// Returns an owned copy of the current graph.
    pub fn snapshot(&self) -> GraphStore<V, E> {
        self.graph.clone()
    }

    fn initialize(&mut self) -> Result<(), GenError> {
        self.rng.reseed(self.config.seed);
        let count = self.config.seed_vertices;
        self.graph = GraphStore::new(store_config(&self.config));
        self.vertex_index = IndexSet::with_capacity(count);
        self.seed_vertices = Vec::with_capacity(count);
        self.elapsed = 0;
        for _ in 0..count {
            let vertex = self.vertex_ids.next_id();
            self.graph.add_vertex(vertex.clone())?;
            self.vertex_index.insert(vertex.clone());
            self.seed_vertices.push(vertex);
        }
        debug!(seed_vertices = count, "growth generator initialized");
        Ok(())
    }

    /// Adds one vertex and its edges, or leaves the graph untouched on failure.
    fn step(&mut self) -> Result<(), GenError> {
        let vertex = self.vertex_ids.next_id();
        self.graph.add_vertex(vertex.clone())?;
        let targets = match self.choose_targets() {
            Ok(targets) => targets,
            Err(err) => {
                self.graph.remove_vertex(&vertex)?;
                return Err(err);
            }
        };
        for target in targets {
            let edge = self.edge_ids.next_id();
            if let Err(err) =
                self.graph
                    .add_edge(edge, vertex.clone(), target, self.config.directed)
            {
                self.graph.remove_vertex(&vertex)?;
                return Err(err);
            }
        }
        self.vertex_index.insert(vertex);
        Ok(())
    }

    /// Draws the targets of the vertex added in the current step.
    ///
    /// Weights are fixed at step entry: the denominator counts the new
    /// vertex but none of its edges.
    fn choose_targets(&mut self) -> Result<Vec<V>, GenError> {
        let vertex_count = self.graph.vertex_count();
        let edge_count = self.graph.edge_count();
        let weight_total = (vertex_count + edge_count).saturating_sub(1);
        if weight_total == 0 || self.vertex_index.is_empty() {
            return Err(GenError::degenerate("attachment weights sum to zero")
                .with_context("vertices", vertex_count)
                .with_context("edges", edge_count));
        }
        let denominator = weight_total as f64;
        let wanted = self.config.edges_per_step;
        let mut targets: Vec<V> = Vec::with_capacity(wanted);
        while targets.len() < wanted {
            let scale = self.attachment_scale(weight_total, targets.len());
            let mut attempts = self.config.budget.counter("attachment", scale);
            let target = loop {
                attempts.tick()?;
                let position = self.rng.next_index(self.vertex_index.len())?;
                let Some(candidate) = self.vertex_index.get_index(position) else {
                    continue;
                };
                if !self.config.parallel_edges && targets.contains(candidate) {
                    trace!(position, "target already chosen in this step");
                    continue;
                }
                let weight = if self.config.directed {
                    self.graph.in_degree(candidate)?
                } else {
                    self.graph.degree(candidate)?
                };
                let probability = (weight as f64 + 1.0) / denominator;
                if probability >= self.rng.next_f64() {
                    break candidate.clone();
                }
            };
            trace!(attempts = attempts.used(), "attachment target accepted");
            targets.push(target);
        }
        Ok(targets)
    }

    /// Expected draws per accepted target, bounded above.
    ///
    /// Every candidate is accepted with probability at least
    /// `1 / weight_total`; without parallel edges only the candidates not yet
    /// chosen in this step can be accepted at all.
    fn attachment_scale(&self, weight_total: usize, chosen: usize) -> usize {
        let candidates = self.vertex_index.len();
        let open = if self.config.parallel_edges {
            candidates
        } else {
            candidates.saturating_sub(chosen).max(1)
        };
        weight_total.saturating_mul(candidates).div_ceil(open)
    }
}

impl<V: ElementId, E: ElementId, R: RandomSource> EvolvingGenerator for GrowthGenerator<V, E, R> {
    type Graph = GraphStore<V, E>;

    #[instrument(
        level = "debug",
        name = "growth.evolve",
        skip(self),
        fields(elapsed = self.elapsed),
        err
    )]
    fn evolve_graph(&mut self, steps: usize) -> Result<(), GenError> {
        for _ in 0..steps {
            self.step()?;
            self.elapsed += 1;
        }
        debug!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            elapsed = self.elapsed,
            "growth steps applied"
        );
        Ok(())
    }

    fn num_elapsed_time_steps(&self) -> usize {
        self.elapsed
    }

    fn generate_graph(&self) -> &GraphStore<V, E> {
        &self.graph
    }

    fn reset(&mut self) -> Result<(), GenError> {
        self.initialize()
    }
}

impl<V: fmt::Debug, E, R> fmt::Debug for GrowthGenerator<V, E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowthGenerator")
            .field("config", &self.config)
            .field("seed_vertices", &self.seed_vertices)
            .field("vertices", &self.vertex_index.len())
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}

fn store_config(config: &GrowthConfig) -> GraphConfig {
    GraphConfig {
        allow_parallel_edges: config.parallel_edges,
    }
}
