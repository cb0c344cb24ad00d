//! Property checks over seeded random graphs.
//!
//! Every test draws a few dozen graphs from a fixed-seed `StdRng`, so failures
//! are reproducible, and checks an invariant that must hold for all of them.

use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};

use graphkit::{
    algorithms,
    graph::{Distance, Graph, GraphKind, NodeId, Weight},
    Error,
};

const ROUNDS: usize = 40;

/// Random graph over vertices `0..n`, all inserted up front so ids equal keys.
fn random_graph(
    rng: &mut StdRng,
    kind: GraphKind,
    max_vertices: usize,
    max_weight: Weight,
) -> Graph<usize> {
    let vertices = rng.gen_range(1..=max_vertices);
    let edges = rng.gen_range(0..=vertices * 2);

    let mut graph = Graph::new(kind);
    for v in 0..vertices {
        graph.add_vertex(v);
    }
    for _ in 0..edges {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        let weight = rng.gen_range(0..=max_weight);
        graph.add_edge(u, v, weight).unwrap();
    }
    graph
}

/// Random DAG: arcs only go from lower to higher ids.
fn random_dag(rng: &mut StdRng, max_vertices: usize) -> Graph<usize> {
    let vertices = rng.gen_range(2..=max_vertices);
    let mut graph = Graph::directed();
    for v in 0..vertices {
        graph.add_vertex(v);
    }
    for _ in 0..vertices * 2 {
        let u = rng.gen_range(0..vertices - 1);
        let v = rng.gen_range(u + 1..vertices);
        graph.add_unit_edge(u, v).unwrap();
    }
    graph
}

/// Random connected undirected graph: a random spanning tree plus extra edges.
fn random_connected(rng: &mut StdRng, max_vertices: usize) -> Graph<usize> {
    let vertices = rng.gen_range(1..=max_vertices);
    let mut graph = Graph::undirected();
    graph.add_vertex(0);
    for v in 1..vertices {
        let parent = rng.gen_range(0..v);
        graph.add_edge(parent, v, rng.gen_range(1..=20)).unwrap();
    }
    for _ in 0..vertices {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        graph.add_edge(u, v, rng.gen_range(1..=20)).unwrap();
    }
    graph
}

/// Reachable set computed straight from the adjacency lists.
fn reachable(graph: &Graph<usize>, start: NodeId) -> HashSet<NodeId> {
    let mut seen = HashSet::new();
    let mut stack = vec![start.index()];
    while let Some(vertex) = stack.pop() {
        if seen.insert(NodeId::new(vertex)) {
            stack.extend(graph.neighbors(&vertex).map(|(next, _)| *next));
        }
    }
    seen
}

fn has_arc(graph: &Graph<usize>, from: NodeId, to: NodeId) -> bool {
    graph
        .arcs()
        .iter()
        .any(|edge| edge.source == from && edge.target == to)
}

#[test]
fn traversals_visit_reachable_vertices_once() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0001);
    for _ in 0..ROUNDS {
        let graph = random_graph(&mut rng, GraphKind::Directed, 12, 9);
        let start = NodeId::new(rng.gen_range(0..graph.vertex_count()));
        let expected = reachable(&graph, start);

        let bfs: Vec<NodeId> = algorithms::bfs(&graph, start).collect();
        let dfs: Vec<NodeId> = algorithms::dfs(&graph, start).collect();

        for order in [&bfs, &dfs] {
            assert_eq!(order.first(), Some(&start));
            let unique: HashSet<NodeId> = order.iter().copied().collect();
            assert_eq!(unique.len(), order.len(), "duplicate visit in {order:?}");
            assert_eq!(unique, expected);
        }
    }
}

#[test]
fn topological_sorts_respect_every_arc() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0002);
    for _ in 0..ROUNDS {
        let graph = random_dag(&mut rng, 12);
        for order in [
            algorithms::topological_sort_dfs(&graph).unwrap(),
            algorithms::topological_sort_kahn(&graph).unwrap(),
        ] {
            assert_eq!(order.len(), graph.vertex_count());
            let mut position = vec![0; order.len()];
            for (i, node) in order.iter().enumerate() {
                position[node.index()] = i;
            }
            for edge in graph.arcs() {
                assert!(position[edge.source.index()] < position[edge.target.index()]);
            }
        }
    }
}

#[test]
fn topological_sorts_reject_cycles() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0003);
    for _ in 0..ROUNDS {
        let mut graph = random_dag(&mut rng, 10);
        // Two opposite arcs always close a cycle
        let last = graph.vertex_count() - 1;
        graph.add_unit_edge(last, 0).unwrap();
        graph.add_unit_edge(0, last).unwrap();

        for result in [
            algorithms::topological_sort_dfs(&graph),
            algorithms::topological_sort_kahn(&graph),
        ] {
            match result {
                Err(Error::CycleDetected(cycle)) => {
                    assert!(cycle.len() >= 2);
                    assert_eq!(cycle.first(), cycle.last());
                    // Consecutive cycle vertices must be joined by arcs
                    for pair in cycle.windows(2) {
                        assert!(has_arc(&graph, pair[0], pair[1]));
                    }
                }
                other => panic!("expected CycleDetected, got {other:?}"),
            }
        }
    }
}

#[test]
fn dijkstra_matches_bellman_ford() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0004);
    for kind in [GraphKind::Directed, GraphKind::Undirected] {
        for _ in 0..ROUNDS {
            let graph = random_graph(&mut rng, kind, 15, 25);
            let start = NodeId::new(rng.gen_range(0..graph.vertex_count()));

            let dijkstra = algorithms::dijkstra(&graph, start).unwrap();
            let bellman =
                algorithms::bellman_ford(&graph.arcs(), graph.vertex_count(), start).unwrap();
            assert_eq!(dijkstra.distances(), bellman.distances());
        }
    }
}

#[test]
fn floyd_warshall_matches_dijkstra_rows() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0005);
    for _ in 0..ROUNDS {
        let graph = random_graph(&mut rng, GraphKind::Directed, 10, 30);
        let matrix = graph.floyd_warshall().unwrap();

        assert!(matrix.diagonal().all(|d| d == Distance::ZERO));
        for source in 0..graph.vertex_count() {
            let paths = algorithms::dijkstra(&graph, NodeId::new(source)).unwrap();
            assert_eq!(matrix.row(source), Some(paths.distances()));
        }
    }
}

#[test]
fn dijkstra_paths_have_reported_length() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0006);
    for _ in 0..ROUNDS {
        let graph = random_graph(&mut rng, GraphKind::Directed, 12, 15);
        let matrix = graph.to_matrix();
        let paths = algorithms::dijkstra(&graph, NodeId::new(0)).unwrap();

        for target in (0..graph.vertex_count()).map(NodeId::new) {
            let Some(path) = paths.path_to(target) else {
                assert_eq!(paths.distance(target), Distance::Infinite);
                continue;
            };
            let length = path
                .windows(2)
                .map(|pair| matrix[(pair[0].index(), pair[1].index())])
                .fold(Distance::ZERO, |acc, step| acc + step);
            assert_eq!(length, paths.distance(target));
        }
    }
}

#[test]
fn kruskal_total_equals_prim_total() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0007);
    for _ in 0..ROUNDS {
        let graph = random_connected(&mut rng, 14);
        let kruskal = graph.kruskal().unwrap();
        let start = rng.gen_range(0..graph.vertex_count());
        let prim = graph.prim(&start).unwrap();

        assert_eq!(kruskal.total_weight, prim.total_weight);
        assert_eq!(kruskal.len(), graph.vertex_count() - 1);
        assert_eq!(prim.len(), graph.vertex_count() - 1);
    }
}

#[test]
fn components_partition_vertices() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0008);
    for kind in [GraphKind::Directed, GraphKind::Undirected] {
        for _ in 0..ROUNDS {
            let graph = random_graph(&mut rng, kind, 16, 1);
            let components = graph.connected_components();

            let mut seen = HashSet::new();
            for component in &components {
                for vertex in component {
                    assert!(seen.insert(*vertex), "{vertex} in two components");
                }
            }
            assert_eq!(seen.len(), graph.vertex_count());

            // No edge crosses two components
            let mut owner = vec![0; graph.vertex_count()];
            for (i, component) in components.iter().enumerate() {
                for &vertex in component {
                    owner[vertex] = i;
                }
            }
            for edge in graph.arcs() {
                assert_eq!(owner[edge.source.index()], owner[edge.target.index()]);
            }
        }
    }
}

#[test]
fn undirected_forest_has_no_cycle() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0009);
    for _ in 0..ROUNDS {
        let vertices = rng.gen_range(1..=15);
        let mut forest: Graph<usize> = Graph::undirected();
        forest.add_vertex(0);
        for v in 1..vertices {
            // Attach to an earlier vertex, or start a new tree
            if rng.gen_bool(0.8) {
                forest.add_unit_edge(rng.gen_range(0..v), v).unwrap();
            } else {
                forest.add_vertex(v);
            }
        }
        assert!(!forest.has_cycle());

        if vertices >= 3 {
            let components = forest.connected_components();
            if let Some(tree) = components.iter().find(|c| c.len() >= 3) {
                // Joining two non-adjacent tree vertices closes a cycle
                let (u, v) = (tree[0], tree[tree.len() - 1]);
                let adjacent = forest.neighbors(&u).any(|(n, _)| *n == v);
                if !adjacent {
                    forest.add_unit_edge(u, v).unwrap();
                    assert!(forest.has_cycle());
                }
            }
        }
    }
}
