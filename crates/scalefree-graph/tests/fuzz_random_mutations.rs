use proptest::prelude::*;
use scalefree_core::GraphView;
use scalefree_graph::{GraphConfig, GraphStore};

#[derive(Debug, Clone)]
enum Op {
    AddVertex,
    RemoveVertex(usize),
    AddEdge(usize, usize, bool),
    RemoveEdge(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::AddVertex),
        1 => any::<usize>().prop_map(Op::RemoveVertex),
        5 => (any::<usize>(), any::<usize>(), any::<bool>())
            .prop_map(|(a, b, directed)| Op::AddEdge(a, b, directed)),
        2 => any::<usize>().prop_map(Op::RemoveEdge),
    ]
}

fn check_invariants(graph: &GraphStore<u32, u32>) {
    for edge in graph.edges() {
        let ends = graph.endpoints(edge).unwrap();
        assert!(graph.contains_vertex(&ends.source));
        assert!(graph.contains_vertex(&ends.target));
        assert!(graph.are_incident(&ends.source, edge).unwrap());
        assert!(graph.is_successor(&ends.source, &ends.target).unwrap());
        if !ends.directed {
            assert!(graph.is_successor(&ends.target, &ends.source).unwrap());
        }
    }
    for vertex in graph.vertices() {
        let touching = graph
            .edges()
            .filter(|edge| graph.endpoints(edge).unwrap().contains(vertex))
            .count();
        let incoming = graph
            .edges()
            .map(|edge| graph.endpoints(edge).unwrap())
            .filter(|ends| ends.directed && ends.target == *vertex)
            .count();
        assert_eq!(graph.degree(vertex).unwrap(), touching);
        assert_eq!(graph.in_degree(vertex).unwrap(), incoming);
        assert_eq!(graph.incident_edges(vertex).unwrap().len(), touching);
        assert_eq!(
            graph.num_neighbors(vertex).unwrap(),
            graph.neighbors(vertex).unwrap().len()
        );
    }
}

proptest! {
    #[test]
    fn random_mutations_keep_adjacency_consistent(
        ops in proptest::collection::vec(op_strategy(), 1..80),
        parallel in any::<bool>(),
    ) {
        let config = GraphConfig { allow_parallel_edges: parallel };
        let mut graph: GraphStore<u32, u32> = GraphStore::new(config);
        let mut next_vertex = 0u32;
        let mut next_edge = 0u32;
        for op in ops {
            match op {
                Op::AddVertex => {
                    graph.add_vertex(next_vertex).unwrap();
                    next_vertex += 1;
                }
                Op::RemoveVertex(pick) => {
                    if graph.vertex_count() > 0 {
                        let vertex = *graph.vertex_at(pick % graph.vertex_count()).unwrap();
                        graph.remove_vertex(&vertex).unwrap();
                        prop_assert!(!graph.contains_vertex(&vertex));
                    }
                }
                Op::AddEdge(a, b, directed) => {
                    if graph.vertex_count() > 0 {
                        let source = *graph.vertex_at(a % graph.vertex_count()).unwrap();
                        let target = *graph.vertex_at(b % graph.vertex_count()).unwrap();
                        let before = graph.edge_count();
                        match graph.add_edge(next_edge, source, target, directed) {
                            Ok(()) => prop_assert_eq!(graph.edge_count(), before + 1),
                            Err(err) => {
                                prop_assert!(!parallel);
                                prop_assert_eq!(err.code(), "parallel-edge");
                                prop_assert_eq!(graph.edge_count(), before);
                            }
                        }
                        next_edge += 1;
                    }
                }
                Op::RemoveEdge(pick) => {
                    let edges: Vec<u32> = graph.edges().copied().collect();
                    if !edges.is_empty() {
                        let edge = edges[pick % edges.len()];
                        graph.remove_edge(&edge).unwrap();
                        prop_assert!(!graph.contains_edge(&edge));
                    }
                }
            }
            check_invariants(&graph);
        }
    }
}
