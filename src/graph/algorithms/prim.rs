//! Prim's minimum spanning tree.
//!
//! Grows a single tree from a start vertex, always attaching the cheapest arc
//! that leaves the tree. The heap holds `(weight, vertex, parent)` candidates
//! with lazy deletion: candidates for vertices already in the tree are skipped
//! when popped.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    graph::{algorithms::SpanningTree, NodeId, Weight, WeightedSuccessors},
    Error, Result,
};

/// Computes a minimum spanning tree of the component containing `start`.
///
/// Vertices that cannot be reached from `start` are not part of the result,
/// so on a disconnected graph the tree covers only `start`'s component; use
/// [`kruskal`](super::kruskal) for a spanning forest. Equal-weight candidates
/// are taken in ascending vertex id order. Edges are recorded as
/// `(parent, vertex, weight)` in the order vertices join the tree.
///
/// The graph is expected to be undirected (every edge stored as two arcs);
/// on a directed graph only outgoing arcs are followed.
///
/// # Errors
///
/// - [`Error::InvalidNode`] if `start` is not a vertex of the graph
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
/// use graphkit::graph::{Graph, NodeId, algorithms::prim};
///
/// let mut graph: Graph<&str> = Graph::undirected();
/// graph.add_edge("A", "B", 1)?;
/// graph.add_edge("B", "C", 2)?;
/// graph.add_edge("A", "C", 4)?;
///
/// let tree = prim(&graph, NodeId::new(0))?;
/// assert_eq!(tree.total_weight, 3);
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn prim<G: WeightedSuccessors>(graph: &G, start: NodeId) -> Result<SpanningTree> {
    let node_count = graph.node_count();
    if start.index() >= node_count {
        return Err(Error::InvalidNode(start));
    }

    let mut included = vec![false; node_count];
    let mut tree = SpanningTree::new();
    let mut heap: BinaryHeap<Reverse<(Weight, NodeId, Option<NodeId>)>> = BinaryHeap::new();
    heap.push(Reverse((0, start, None)));

    while let Some(Reverse((weight, node, parent))) = heap.pop() {
        if included[node.index()] {
            continue;
        }
        included[node.index()] = true;

        if let Some(parent) = parent {
            log::trace!("prim includes {node} via {parent} with weight {weight}");
            tree.push(parent, node, weight)?;
        }

        for (target, weight) in graph.weighted_successors(node) {
            if !included[target.index()] {
                heap.push(Reverse((weight, target, Some(node))));
            }
        }
    }

    let spanned = included.iter().filter(|&&inside| inside).count();
    if spanned < node_count {
        log::debug!(
            "prim from {start} spans {spanned} of {node_count} vertices, graph is disconnected"
        );
    }
    log::debug!(
        "prim selected {} edges, total weight {}",
        tree.len(),
        tree.total_weight
    );
    Ok(tree)
}
