use thiserror::Error;

use crate::graph::{NodeId, Weight};

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Error::InvalidNode`] - A node id outside the graph or edge list
/// - [`Error::VertexNotFound`] - A keyed lookup did not match any vertex
/// - [`Error::NegativeWeight`] - Negative edge handed to an algorithm that cannot handle it
/// - [`Error::MalformedMatrix`] - A distance matrix that is not square
///
/// ## Structural Errors
/// - [`Error::NegativeCycle`] - A negative-weight cycle makes shortest paths undefined
/// - [`Error::CycleDetected`] - A cycle prevents a topological ordering
/// - [`Error::Overflow`] - A path length or tree weight does not fit in a [`Weight`]
///
/// ## Description Loading
/// - [`Error::Io`], [`Error::Json`], [`Error::Toml`], [`Error::UnsupportedFormat`]
///
/// # Examples
///
/// ```rust
/// use graphkit::{algorithms::bellman_ford, graph::{NodeId, WeightedEdge}, Error};
///
/// let edges = [
///     WeightedEdge::new(NodeId::new(0), NodeId::new(1), 1),
///     WeightedEdge::new(NodeId::new(1), NodeId::new(0), -2),
/// ];
///
/// match bellman_ford(&edges, 2, NodeId::new(0)) {
///     Err(Error::NegativeCycle(node)) => println!("negative cycle through {node}"),
///     Err(e) => eprintln!("other error: {e}"),
///     Ok(paths) => println!("{paths:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A node id does not refer to a vertex of the graph.
    ///
    /// Raised when an algorithm is started from, or an edge refers to, an index
    /// that is not below the vertex count.
    #[error("Node {0} does not exist in the graph")]
    InvalidNode(NodeId),

    /// A vertex key could not be resolved.
    ///
    /// The associated string is the `Debug` rendering of the missing key.
    #[error("Vertex {0} not found in the graph")]
    VertexNotFound(String),

    /// An edge with a negative weight was given to Dijkstra's algorithm.
    ///
    /// Dijkstra's greedy settling order is only correct for non-negative weights;
    /// use Bellman-Ford for graphs with negative edges.
    #[error("Edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        /// Source vertex of the offending edge
        from: NodeId,
        /// Target vertex of the offending edge
        to: NodeId,
        /// The negative weight
        weight: Weight,
    },

    /// A negative-weight cycle was found.
    ///
    /// The associated node lies on, or is reachable from, the cycle. No distance
    /// map is returned because shortest distances are unbounded below.
    #[error("Negative weight cycle detected at {0}")]
    NegativeCycle(NodeId),

    /// The graph contains a cycle, so no topological ordering exists.
    ///
    /// The associated path is closed: its first and last entries are the same node.
    #[error("Cycle detected: {}", format_cycle(.0))]
    CycleDetected(Vec<NodeId>),

    /// A path length or spanning tree weight overflowed [`Weight`].
    ///
    /// Raised when extending a distance along the arc `from -> to` leaves the
    /// range of `i64`, in either direction.
    #[error("Path length overflows along {from} -> {to}")]
    Overflow {
        /// Source vertex of the arc being added
        from: NodeId,
        /// Target vertex of the arc being added
        to: NodeId,
    },

    /// A distance matrix row does not match the matrix dimension.
    #[error("Malformed distance matrix - row {row} has {len} entries, expected {expected}")]
    MalformedMatrix {
        /// Index of the offending row
        row: usize,
        /// Number of entries in that row
        len: usize,
        /// Number of rows (and therefore expected columns)
        expected: usize,
    },

    /// File I/O error while loading a graph description.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A JSON graph description could not be parsed.
    #[error("Invalid JSON graph description - {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML graph description could not be parsed.
    #[error("Invalid TOML graph description - {0}")]
    Toml(#[from] toml::de::Error),

    /// The description file extension is not recognised.
    #[error("Unsupported graph description format: {0}")]
    UnsupportedFormat(String),
}

fn format_cycle(cycle: &[NodeId]) -> String {
    if cycle.is_empty() {
        return "<unknown>".to_string();
    }

    cycle
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_display() {
        let err = Error::CycleDetected(vec![NodeId::new(0), NodeId::new(1), NodeId::new(0)]);
        assert_eq!(err.to_string(), "Cycle detected: n0 -> n1 -> n0");
    }

    #[test]
    fn test_cycle_display_empty() {
        let err = Error::CycleDetected(Vec::new());
        assert_eq!(err.to_string(), "Cycle detected: <unknown>");
    }

    #[test]
    fn test_negative_weight_display() {
        let err = Error::NegativeWeight {
            from: NodeId::new(2),
            to: NodeId::new(3),
            weight: -4,
        };
        assert_eq!(err.to_string(), "Edge n2 -> n3 has negative weight -4");
    }

    #[test]
    fn test_overflow_display() {
        let err = Error::Overflow {
            from: NodeId::new(1),
            to: NodeId::new(2),
        };
        assert_eq!(err.to_string(), "Path length overflows along n1 -> n2");
    }

    #[test]
    fn test_malformed_matrix_display() {
        let err = Error::MalformedMatrix {
            row: 1,
            len: 2,
            expected: 3,
        };
        assert_eq!(
            err.to_string(),
            "Malformed distance matrix - row 1 has 2 entries, expected 3"
        );
    }
}
