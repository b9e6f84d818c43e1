use std::collections::BTreeSet;

use scalefree_core::{codes, ErrorInfo, GenError, GraphView, RandomSource, RngHandle, SamplingBudget};
use scalefree_gen::{EvolvingGenerator, GrowthConfig, GrowthGenerator};

fn config(seed_vertices: usize, edges_per_step: usize) -> GrowthConfig {
    GrowthConfig {
        seed_vertices,
        edges_per_step,
        seed: 17,
        ..GrowthConfig::default()
    }
}

#[test]
fn counts_follow_steps() {
    let mut generator = GrowthGenerator::new(GrowthConfig {
        parallel_edges: true,
        ..config(3, 2)
    })
    .unwrap();
    generator.evolve_graph(5).unwrap();
    let graph = generator.generate_graph();
    assert_eq!(graph.vertex_count(), 8);
    assert_eq!(graph.edge_count(), 10);
    assert_eq!(generator.num_elapsed_time_steps(), 5);
}

#[test]
fn zero_steps_is_noop() {
    let mut generator = GrowthGenerator::new(config(2, 1)).unwrap();
    generator.evolve_graph(0).unwrap();
    assert_eq!(generator.num_elapsed_time_steps(), 0);
    assert_eq!(generator.generate_graph().vertex_count(), 2);
    assert_eq!(generator.generate_graph().edge_count(), 0);
}

#[test]
fn new_vertices_attach_to_earlier_vertices() {
    let mut generator = GrowthGenerator::new(config(4, 3)).unwrap();
    generator.evolve_graph(40).unwrap();
    let graph = generator.generate_graph();
    for edge in graph.edges() {
        let ends = graph.endpoints(edge).unwrap();
        let source = generator.index_of(&ends.source).unwrap();
        let target = generator.index_of(&ends.target).unwrap();
        assert!(target < source, "edge {edge} points forward in time");
        assert!(source >= 4, "seed vertices never originate edges");
    }
}

#[test]
fn simple_growth_never_repeats_a_target_within_a_step() {
    let mut generator = GrowthGenerator::new(config(3, 3)).unwrap();
    generator.evolve_graph(60).unwrap();
    let graph = generator.generate_graph();
    let mut pairs = BTreeSet::new();
    for edge in graph.edges() {
        let ends = graph.endpoints(edge).unwrap();
        assert!(pairs.insert((ends.source, ends.target)));
    }
    for vertex in graph.vertices().skip(3) {
        let outgoing = graph
            .incident_edges(vertex)
            .unwrap()
            .filter(|edge| graph.endpoints(edge).unwrap().source == *vertex)
            .count();
        assert_eq!(outgoing, 3);
    }
}

#[test]
fn directed_growth_orients_edges_from_new_vertex() {
    let mut generator = GrowthGenerator::new(GrowthConfig {
        directed: true,
        ..config(2, 2)
    })
    .unwrap();
    generator.evolve_graph(25).unwrap();
    let graph = generator.generate_graph();
    let mut incoming = 0;
    for vertex in graph.vertices() {
        let position = generator.index_of(vertex).unwrap();
        let out = graph.out_degree(vertex).unwrap();
        if position < 2 {
            assert_eq!(out, 0);
        } else {
            assert_eq!(out, 2);
        }
        incoming += graph.in_degree(vertex).unwrap();
    }
    assert_eq!(incoming, graph.edge_count());
    for edge in graph.edges() {
        assert!(graph.is_directed(edge).unwrap());
    }
}

#[test]
fn first_step_with_single_seed_targets_it() {
    let mut generator = GrowthGenerator::new(config(1, 1)).unwrap();
    generator.evolve_graph(1).unwrap();
    let graph = generator.generate_graph();
    let seed = generator.seed_vertices()[0];
    assert_eq!(graph.degree(&seed).unwrap(), 1);
    let newcomer = graph.vertices().nth(1).copied().unwrap();
    assert!(graph.is_successor(&newcomer, &seed).unwrap());
    assert!(graph.is_successor(&seed, &newcomer).unwrap());
}

/// Always offers the first candidate and always draws a value above any
/// attachment probability below one.
struct Stubborn;

impl RandomSource for Stubborn {
    fn next_f64(&mut self) -> f64 {
        0.999
    }

    fn next_index(&mut self, bound: usize) -> Result<usize, GenError> {
        if bound == 0 {
            return Err(GenError::Sampling(ErrorInfo::new(codes::EMPTY_RANGE, "empty")));
        }
        Ok(0)
    }

    fn reseed(&mut self, _seed: u64) {}
}

#[test]
fn exhausted_budget_fails_step_atomically() {
    let config = GrowthConfig {
        budget: SamplingBudget {
            min_attempts: 5,
            attempts_per_element: 0,
        },
        ..config(2, 1)
    };
    let mut generator = GrowthGenerator::<u32, u32, Stubborn>::with_sources(
        config,
        Stubborn,
        {
            let mut next = 0u32;
            move || {
                next += 1;
                next
            }
        },
        {
            let mut next = 0u32;
            move || {
                next += 1;
                next
            }
        },
    )
    .unwrap();
    let err = generator.evolve_graph(1).unwrap_err();
    assert_eq!(err.code(), codes::DEGENERATE_PROBABILITY);
    assert_eq!(err.info().context.get("loop"), Some(&"attachment".to_string()));
    assert_eq!(generator.num_elapsed_time_steps(), 0);
    assert_eq!(generator.generate_graph().vertex_count(), 2);
    assert_eq!(generator.generate_graph().edge_count(), 0);
}

#[test]
fn custom_identity_sources_are_used() {
    let mut generator = GrowthGenerator::<String, String, RngHandle>::with_sources(
        config(2, 1),
        RngHandle::from_seed(0),
        {
            let mut next = 0;
            move || {
                next += 1;
                format!("node-{next}")
            }
        },
        {
            let mut next = 0;
            move || {
                next += 1;
                format!("link-{next}")
            }
        },
    )
    .unwrap();
    generator.evolve_graph(3).unwrap();
    let graph = generator.generate_graph();
    let names: Vec<&String> = graph.vertices().collect();
    assert_eq!(names, ["node-1", "node-2", "node-3", "node-4", "node-5"]);
    assert!(graph.edges().all(|edge| edge.starts_with("link-")));
}

fn assert_distinct_targets_per_step(generator: &GrowthGenerator, edges_per_step: usize) {
    let graph = generator.generate_graph();
    let seeds = generator.seed_vertices().len();
    for vertex in graph.vertices().skip(seeds) {
        let targets: BTreeSet<_> = graph
            .incident_edges(vertex)
            .unwrap()
            .map(|edge| graph.endpoints(edge).unwrap())
            .filter(|ends| ends.source == *vertex)
            .map(|ends| ends.target)
            .collect();
        assert_eq!(targets.len(), edges_per_step);
    }
}

#[test]
fn saturated_simple_growth_commits_every_step() {
    for seed in 0..10 {
        let mut generator = GrowthGenerator::new(GrowthConfig {
            seed,
            ..config(100, 100)
        })
        .unwrap();
        generator.evolve_graph(2).unwrap();
        assert_eq!(generator.num_elapsed_time_steps(), 2);
        assert_eq!(generator.generate_graph().edge_count(), 200);
        assert_distinct_targets_per_step(&generator, 100);
    }
}

#[test]
fn single_seed_single_edge_growth_commits_every_step() {
    for seed in 0..20 {
        let mut generator = GrowthGenerator::new(GrowthConfig {
            seed,
            ..config(1, 1)
        })
        .unwrap();
        generator.evolve_graph(5).unwrap();
        assert_eq!(generator.generate_graph().edge_count(), 5);
        assert_distinct_targets_per_step(&generator, 1);
    }
}
