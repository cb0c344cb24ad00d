//! Kruskal's minimum spanning forest.

use crate::{
    graph::{
        algorithms::{DisjointSet, SpanningTree},
        WeightedEdge,
    },
    Error, Result,
};

/// Computes a minimum spanning forest of an undirected edge list.
///
/// Edges are considered in ascending weight order; the sort is stable, so
/// equal weights keep their input order. An edge is accepted iff its endpoints
/// are still in different partitions, which are then merged. On disconnected
/// input the result spans every component (a forest with `V - C` edges for `C`
/// components). Self-loops are never accepted.
///
/// # Arguments
///
/// * `edges` - One entry per undirected edge between the vertices `0..vertex_count`
/// * `vertex_count` - Number of vertices
///
/// # Errors
///
/// - [`Error::InvalidNode`] if an edge endpoint is not below `vertex_count`
/// - [`Error::Overflow`] if the total tree weight overflows
///
/// # Complexity
///
/// - Time: O(E log E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{WeightedEdge, algorithms::kruskal};
///
/// let edges = [
///     WeightedEdge::from_indices(0, 1, 1),
///     WeightedEdge::from_indices(0, 2, 4),
///     WeightedEdge::from_indices(1, 2, 2),
///     WeightedEdge::from_indices(1, 3, 7),
///     WeightedEdge::from_indices(2, 3, 3),
/// ];
///
/// let tree = kruskal(&edges, 4)?;
/// assert_eq!(tree.total_weight, 6);
/// assert_eq!(tree.len(), 3);
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn kruskal(edges: &[WeightedEdge], vertex_count: usize) -> Result<SpanningTree> {
    for edge in edges {
        for node in [edge.source, edge.target] {
            if node.index() >= vertex_count {
                return Err(Error::InvalidNode(node));
            }
        }
    }

    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|edge| edge.weight);

    let mut partitions = DisjointSet::new(vertex_count);
    let mut tree = SpanningTree::new();

    for edge in sorted {
        if partitions.union(edge.source, edge.target) {
            log::trace!("kruskal accepted {edge}");
            tree.push(edge.source, edge.target, edge.weight)?;
        }
    }

    log::debug!(
        "kruskal selected {} edges over {} components, total weight {}",
        tree.len(),
        partitions.set_count(),
        tree.total_weight
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeId;

    fn edges(list: &[(usize, usize, i64)]) -> Vec<WeightedEdge> {
        list.iter().copied().map(WeightedEdge::from).collect()
    }

    fn n(index: usize) -> NodeId {
        NodeId::new(index)
    }

    #[test]
    fn test_worked_example() {
        let edges = edges(&[(0, 1, 1), (0, 2, 4), (1, 2, 2), (1, 3, 7), (2, 3, 3)]);
        let tree = kruskal(&edges, 4).unwrap();

        assert_eq!(tree.total_weight, 6);
        assert_eq!(
            tree.edges,
            vec![(n(0), n(1), 1), (n(1), n(2), 2), (n(2), n(3), 3)]
        );
    }

    #[test]
    fn test_input_not_reordered() {
        let input = edges(&[(0, 1, 5), (1, 2, 1)]);
        let before = input.clone();
        let _ = kruskal(&input, 3).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn test_stable_tie_break() {
        // Triangle with equal weights: the first two edges in input order win
        let edges = edges(&[(0, 1, 1), (1, 2, 1), (0, 2, 1)]);
        let tree = kruskal(&edges, 3).unwrap();
        assert_eq!(tree.edges, vec![(n(0), n(1), 1), (n(1), n(2), 1)]);
    }

    #[test]
    fn test_disconnected_forest() {
        let edges = edges(&[(0, 1, 3), (2, 3, 4)]);
        let tree = kruskal(&edges, 5).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.total_weight, 7);
    }

    #[test]
    fn test_self_loop_and_parallel_edges() {
        let edges = edges(&[(0, 0, -5), (0, 1, 4), (0, 1, 2)]);
        let tree = kruskal(&edges, 2).unwrap();
        assert_eq!(tree.edges, vec![(n(0), n(1), 2)]);
    }

    #[test]
    fn test_negative_weights() {
        let edges = edges(&[(0, 1, -3), (1, 2, 4), (0, 2, 1)]);
        let tree = kruskal(&edges, 3).unwrap();
        assert_eq!(tree.total_weight, -2);
    }

    #[test]
    fn test_invalid_endpoint() {
        let edges = edges(&[(0, 3, 1)]);
        assert!(matches!(kruskal(&edges, 2), Err(Error::InvalidNode(x)) if x == n(3)));
    }

    #[test]
    fn test_empty() {
        let tree = kruskal(&[], 0).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.total_weight, 0);
    }

    #[test]
    fn test_total_weight_overflow() {
        let edges = edges(&[(0, 1, i64::MAX), (1, 2, i64::MAX)]);
        assert!(matches!(kruskal(&edges, 3), Err(Error::Overflow { .. })));
    }
}
