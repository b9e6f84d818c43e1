use proptest::prelude::*;
use scalefree_core::{GraphView, VertexId};
use scalefree_gen::{EvolvingGenerator, GrowthConfig, GrowthGenerator};
use scalefree_graph::canonical_hash;

fn edge_list(generator: &GrowthGenerator) -> Vec<(VertexId, VertexId)> {
    let graph = generator.generate_graph();
    graph
        .edges()
        .map(|edge| {
            let ends = graph.endpoints(edge).unwrap();
            (ends.source, ends.target)
        })
        .collect()
}

#[test]
fn same_seed_same_graph() {
    let config = GrowthConfig {
        seed_vertices: 3,
        edges_per_step: 2,
        seed: 2024,
        ..GrowthConfig::default()
    };
    let mut a = GrowthGenerator::new(config.clone()).unwrap();
    let mut b = GrowthGenerator::new(config).unwrap();
    a.evolve_graph(50).unwrap();
    b.evolve_graph(50).unwrap();
    assert_eq!(edge_list(&a), edge_list(&b));
    assert_eq!(
        canonical_hash(a.generate_graph()).unwrap(),
        canonical_hash(b.generate_graph()).unwrap()
    );
}

#[test]
fn split_evolution_matches_single_call() {
    let config = GrowthConfig {
        seed_vertices: 2,
        edges_per_step: 2,
        seed: 5,
        ..GrowthConfig::default()
    };
    let mut whole = GrowthGenerator::new(config.clone()).unwrap();
    let mut split = GrowthGenerator::new(config).unwrap();
    whole.evolve_graph(30).unwrap();
    split.evolve_graph(12).unwrap();
    split.evolve_graph(18).unwrap();
    assert_eq!(edge_list(&whole), edge_list(&split));
    assert_eq!(split.num_elapsed_time_steps(), 30);
}

#[test]
fn reset_replays_the_same_structure() {
    let mut generator = GrowthGenerator::new(GrowthConfig {
        seed_vertices: 4,
        edges_per_step: 2,
        seed: 99,
        ..GrowthConfig::default()
    })
    .unwrap();
    generator.evolve_graph(20).unwrap();
    let first = canonical_hash(generator.generate_graph()).unwrap();
    let first_seeds = generator.seed_vertices().to_vec();

    generator.reset().unwrap();
    assert_eq!(generator.num_elapsed_time_steps(), 0);
    assert_eq!(generator.generate_graph().vertex_count(), 4);
    assert_eq!(generator.generate_graph().edge_count(), 0);
    assert_ne!(generator.seed_vertices(), first_seeds.as_slice());

    generator.evolve_graph(20).unwrap();
    assert_eq!(canonical_hash(generator.generate_graph()).unwrap(), first);
}

#[test]
fn snapshot_is_detached_from_later_growth() {
    let mut generator = GrowthGenerator::new(GrowthConfig::default()).unwrap();
    generator.evolve_graph(5).unwrap();
    let snapshot = generator.snapshot();
    generator.evolve_graph(5).unwrap();
    assert_eq!(snapshot.vertex_count(), 6);
    assert_eq!(generator.generate_graph().vertex_count(), 11);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn growth_invariants_hold(
        seed in any::<u64>(),
        seed_vertices in 1usize..6,
        extra in 0usize..3,
        steps in 0usize..40,
        directed in any::<bool>(),
    ) {
        let edges_per_step = (seed_vertices.saturating_sub(extra)).max(1);
        let mut generator = GrowthGenerator::new(GrowthConfig {
            seed_vertices,
            edges_per_step,
            directed,
            seed,
            ..GrowthConfig::default()
        }).unwrap();
        generator.evolve_graph(steps).unwrap();
        let graph = generator.generate_graph();
        prop_assert_eq!(graph.vertex_count(), seed_vertices + steps);
        prop_assert_eq!(graph.edge_count(), edges_per_step * steps);
        for edge in graph.edges() {
            let ends = graph.endpoints(edge).unwrap();
            prop_assert_eq!(ends.directed, directed);
            let source = generator.index_of(&ends.source).unwrap();
            let target = generator.index_of(&ends.target).unwrap();
            prop_assert!(target < source);
        }
    }
}
