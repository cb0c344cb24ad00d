//! Dijkstra's single-source shortest paths.
//!
//! The frontier is a binary min-heap of `(distance, node)` entries with lazy
//! deletion: improving a distance pushes a new entry instead of updating the
//! old one, and entries that no longer match the recorded distance are skipped
//! when popped.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    graph::{algorithms::ShortestPaths, Distance, NodeId, WeightedSuccessors},
    Error, Result,
};

/// Computes shortest distances from `start` to every vertex.
///
/// Vertices unreachable from `start` keep [`Distance::Infinite`]. Ties in the
/// heap are broken by node id.
///
/// # Arguments
///
/// * `graph` - A graph with non-negative arc weights
/// * `start` - The source vertex
///
/// # Errors
///
/// - [`Error::InvalidNode`] if `start` is not a vertex of the graph
/// - [`Error::NegativeWeight`] if any arc of the graph has a negative weight.
///   The whole graph is checked before the search starts.
/// - [`Error::Overflow`] if a path length exceeds [`Weight::MAX`](crate::graph::Weight)
///
/// # Complexity
///
/// - Time: O((V + E) log E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{Distance, DirectedGraph, algorithms::dijkstra};
///
/// let mut graph: DirectedGraph<&str, i64> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_edge(a, b, 4)?;
/// graph.add_edge(a, c, 1)?;
/// graph.add_edge(c, b, 2)?;
///
/// let paths = dijkstra(&graph, a)?;
/// assert_eq!(paths.distance(b), Distance::Finite(3));
/// assert_eq!(paths.path_to(b), Some(vec![a, c, b]));
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn dijkstra<G: WeightedSuccessors>(graph: &G, start: NodeId) -> Result<ShortestPaths> {
    let node_count = graph.node_count();
    if start.index() >= node_count {
        return Err(Error::InvalidNode(start));
    }

    if let Some(edge) = graph.weighted_arcs().find(|edge| edge.weight < 0) {
        return Err(Error::NegativeWeight {
            from: edge.source,
            to: edge.target,
            weight: edge.weight,
        });
    }

    let mut paths = ShortestPaths::new(node_count, start);
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((Distance::ZERO, start)));

    let mut settled = 0usize;
    while let Some(Reverse((distance, node))) = heap.pop() {
        if distance > paths.distance(node) {
            log::trace!("skipping stale heap entry {node} at {distance}");
            continue;
        }
        settled += 1;

        for (target, weight) in graph.weighted_successors(node) {
            if paths.relax(node, target, weight)? {
                log::trace!("relaxed {node} -> {target} to {}", paths.distance(target));
                heap.push(Reverse((paths.distance(target), target)));
            }
        }
    }

    log::debug!(
        "dijkstra from {start} settled {settled} of {node_count} vertices"
    );
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, Graph, Weight};

    fn directed(edges: &[(usize, usize, Weight)], nodes: usize) -> DirectedGraph<(), Weight> {
        let mut graph = DirectedGraph::new();
        for _ in 0..nodes {
            graph.add_node(());
        }
        for &(u, v, w) in edges {
            graph.add_edge(NodeId::new(u), NodeId::new(v), w).unwrap();
        }
        graph
    }

    #[test]
    fn test_worked_example() {
        let mut graph: Graph<&str> = Graph::undirected();
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("A", "C", 4).unwrap();
        graph.add_edge("B", "C", 2).unwrap();
        graph.add_edge("B", "D", 7).unwrap();
        graph.add_edge("C", "D", 3).unwrap();

        let paths = dijkstra(&graph, NodeId::new(0)).unwrap();
        let expected = [0, 1, 3, 8].map(Distance::Finite);
        assert_eq!(paths.distances(), &expected);
        assert_eq!(
            paths.path_to(NodeId::new(3)),
            Some(vec![NodeId::new(0), NodeId::new(1), NodeId::new(2), NodeId::new(3)])
        );
    }

    #[test]
    fn test_unreachable_stays_infinite() {
        let graph = directed(&[(0, 1, 5)], 3);
        let paths = dijkstra(&graph, NodeId::new(0)).unwrap();
        assert_eq!(paths.distance(NodeId::new(1)), Distance::Finite(5));
        assert_eq!(paths.distance(NodeId::new(2)), Distance::Infinite);
        assert_eq!(paths.path_to(NodeId::new(2)), None);
    }

    #[test]
    fn test_directed_edges_one_way() {
        let graph = directed(&[(1, 0, 5)], 2);
        let paths = dijkstra(&graph, NodeId::new(0)).unwrap();
        assert_eq!(paths.distance(NodeId::new(1)), Distance::Infinite);
    }

    #[test]
    fn test_stale_entries_skipped() {
        // 0 -> 2 costs 10 directly but 3 via 1, leaving a stale entry for 2
        let graph = directed(&[(0, 2, 10), (0, 1, 1), (1, 2, 2), (2, 3, 1)], 4);
        let paths = dijkstra(&graph, NodeId::new(0)).unwrap();
        assert_eq!(paths.distance(NodeId::new(2)), Distance::Finite(3));
        assert_eq!(paths.distance(NodeId::new(3)), Distance::Finite(4));
        assert_eq!(paths.predecessor(NodeId::new(2)), Some(NodeId::new(1)));
    }

    #[test]
    fn test_parallel_edges_use_cheapest() {
        let graph = directed(&[(0, 1, 9), (0, 1, 2)], 2);
        let paths = dijkstra(&graph, NodeId::new(0)).unwrap();
        assert_eq!(paths.distance(NodeId::new(1)), Distance::Finite(2));
    }

    #[test]
    fn test_zero_weights() {
        let graph = directed(&[(0, 1, 0), (1, 2, 0)], 3);
        let paths = dijkstra(&graph, NodeId::new(0)).unwrap();
        assert_eq!(paths.distance(NodeId::new(2)), Distance::ZERO);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let graph = directed(&[(0, 1, 3), (2, 1, -1)], 3);
        let result = dijkstra(&graph, NodeId::new(0));
        assert!(matches!(
            result,
            Err(Error::NegativeWeight { from, to, weight: -1 })
                if from == NodeId::new(2) && to == NodeId::new(1)
        ));
    }

    #[test]
    fn test_path_length_overflow() {
        let graph = directed(&[(0, 1, Weight::MAX), (1, 2, Weight::MAX)], 3);
        assert!(matches!(
            dijkstra(&graph, NodeId::new(0)),
            Err(Error::Overflow { from, to }) if from == NodeId::new(1) && to == NodeId::new(2)
        ));
    }

    #[test]
    fn test_weight_max_without_overflow() {
        let graph = directed(&[(0, 1, Weight::MAX), (1, 2, 0)], 3);
        let paths = dijkstra(&graph, NodeId::new(0)).unwrap();
        assert_eq!(paths.distance(NodeId::new(2)), Distance::Finite(Weight::MAX));
    }

    #[test]
    fn test_invalid_start() {
        let graph = directed(&[(0, 1, 1)], 2);
        assert!(matches!(
            dijkstra(&graph, NodeId::new(2)),
            Err(Error::InvalidNode(n)) if n == NodeId::new(2)
        ));
    }
}
