use scalefree_core::GraphView;
use scalefree_graph::{canonical_hash, GraphConfig, GraphStore};

fn path(offset: u32, config: GraphConfig) -> GraphStore<u32, u32> {
    let mut graph = GraphStore::new(config);
    for vertex in 0..4 {
        graph.add_vertex(offset + vertex).unwrap();
    }
    for (index, (a, b)) in [(0, 1), (1, 2), (2, 3)].into_iter().enumerate() {
        graph
            .add_edge(offset + index as u32, offset + a, offset + b, false)
            .unwrap();
    }
    graph
}

#[test]
fn hash_ignores_identity_tokens() {
    let a = path(0, GraphConfig::simple());
    let b = path(1_000, GraphConfig::simple());
    assert_eq!(canonical_hash(&a).unwrap(), canonical_hash(&b).unwrap());
}

#[test]
fn hash_ignores_undirected_endpoint_order() {
    let a = path(0, GraphConfig::simple());
    let mut b: GraphStore<u32, u32> = GraphStore::new(GraphConfig::simple());
    for vertex in 0..4 {
        b.add_vertex(vertex).unwrap();
    }
    b.add_edge(0, 3, 2, false).unwrap();
    b.add_edge(1, 1, 0, false).unwrap();
    b.add_edge(2, 2, 1, false).unwrap();
    assert_eq!(canonical_hash(&a).unwrap(), canonical_hash(&b).unwrap());
}

#[test]
fn hash_tracks_structure_and_config() {
    let a = path(0, GraphConfig::simple());
    let mut b = path(0, GraphConfig::simple());
    let edge = *b.edges().next().unwrap();
    b.remove_edge(&edge).unwrap();
    assert_ne!(canonical_hash(&a).unwrap(), canonical_hash(&b).unwrap());

    let c = path(0, GraphConfig::multigraph());
    assert_ne!(canonical_hash(&a).unwrap(), canonical_hash(&c).unwrap());

    let mut d: GraphStore<u32, u32> = GraphStore::new(GraphConfig::simple());
    for vertex in 0..4 {
        d.add_vertex(vertex).unwrap();
    }
    d.add_edge(0, 0, 1, true).unwrap();
    d.add_edge(1, 1, 2, false).unwrap();
    d.add_edge(2, 2, 3, false).unwrap();
    assert_ne!(canonical_hash(&a).unwrap(), canonical_hash(&d).unwrap());
}
