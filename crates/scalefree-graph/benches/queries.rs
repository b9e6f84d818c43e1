use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scalefree_core::{GraphView, RandomSource, RngHandle};
use scalefree_graph::{GraphConfig, GraphStore};

fn random_graph(vertices: u32, edges: u32, seed: u64) -> GraphStore<u32, u32> {
    let mut rng = RngHandle::from_seed(seed);
    let mut graph = GraphStore::new(GraphConfig::multigraph());
    for vertex in 0..vertices {
        graph.add_vertex(vertex).unwrap();
    }
    for edge in 0..edges {
        let source = rng.next_index(vertices as usize).unwrap() as u32;
        let target = rng.next_index(vertices as usize).unwrap() as u32;
        graph.add_edge(edge, source, target, false).unwrap();
    }
    graph
}

fn queries_bench(c: &mut Criterion) {
    let graph = Arc::new(random_graph(2_000, 8_000, 7));
    let vertices: Vec<_> = graph.vertices().copied().collect();

    c.bench_function("degree_queries", |b| {
        b.iter(|| {
            for vertex in &vertices {
                black_box(graph.degree(vertex).unwrap());
                black_box(graph.in_degree(vertex).unwrap());
            }
        });
    });

    c.bench_function("successor_lookup", |b| {
        b.iter(|| {
            for pair in vertices.windows(2) {
                black_box(graph.is_successor(&pair[0], &pair[1]).unwrap());
            }
        });
    });
}

criterion_group!(benches, queries_bench);
criterion_main!(benches);
