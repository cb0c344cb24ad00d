//! Bellman-Ford single-source shortest paths over an edge list.
//!
//! Unlike [`dijkstra`](super::dijkstra), Bellman-Ford accepts negative edge
//! weights. It relaxes every edge up to `V - 1` times and then checks once more:
//! an edge that still relaxes proves a negative cycle reachable from the source.

use crate::{
    graph::{algorithms::ShortestPaths, NodeId, WeightedEdge},
    Error, Result,
};

/// Computes shortest distances from `start` over the arcs in `edges`.
///
/// Each [`WeightedEdge`] is a directed arc; pass both directions for undirected
/// edges (see [`Graph::arcs`](crate::graph::Graph::arcs)). Relaxation passes stop
/// early once a full pass changes nothing.
///
/// # Arguments
///
/// * `edges` - Arcs between the vertices `0..vertex_count`
/// * `vertex_count` - Number of vertices
/// * `start` - The source vertex
///
/// # Errors
///
/// - [`Error::InvalidNode`] if `start` or an edge endpoint is not below `vertex_count`
/// - [`Error::NegativeCycle`] if a negative cycle is reachable from `start`; the
///   node is the target of an edge that could still be relaxed
/// - [`Error::Overflow`] if a relaxation pass produces a distance outside the
///   range of [`Weight`](crate::graph::Weight)
///
/// # Complexity
///
/// - Time: O(V * E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{Distance, NodeId, WeightedEdge, algorithms::bellman_ford};
///
/// let edges = [
///     WeightedEdge::from_indices(0, 1, 4),
///     WeightedEdge::from_indices(0, 2, 1),
///     WeightedEdge::from_indices(1, 3, -3),
///     WeightedEdge::from_indices(2, 3, 2),
/// ];
///
/// let paths = bellman_ford(&edges, 4, NodeId::new(0))?;
/// assert_eq!(paths.distance(NodeId::new(3)), Distance::Finite(1));
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn bellman_ford(
    edges: &[WeightedEdge],
    vertex_count: usize,
    start: NodeId,
) -> Result<ShortestPaths> {
    if start.index() >= vertex_count {
        return Err(Error::InvalidNode(start));
    }
    for edge in edges {
        for node in [edge.source, edge.target] {
            if node.index() >= vertex_count {
                return Err(Error::InvalidNode(node));
            }
        }
    }

    let mut paths = ShortestPaths::new(vertex_count, start);

    let mut passes = 0usize;
    for _ in 1..vertex_count {
        passes += 1;
        let mut changed = false;
        for edge in edges {
            if paths.relax(edge.source, edge.target, edge.weight)? {
                log::trace!("relaxed {edge}");
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    for edge in edges {
        let from = paths.distance(edge.source);
        if !from.is_finite() {
            continue;
        }
        // Falling below Weight::MIN here would still relax the edge
        let relaxes = match from.checked_add(edge.weight) {
            Some(through) => through < paths.distance(edge.target),
            None => edge.weight < 0,
        };
        if relaxes {
            log::warn!("negative weight cycle detected through {edge}");
            return Err(Error::NegativeCycle(edge.target));
        }
    }

    log::debug!(
        "bellman-ford from {start} converged after {passes} passes over {} edges",
        edges.len()
    );
    Ok(paths)
}
