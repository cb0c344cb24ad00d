//! Node identifier for graph vertices.
//!
//! This module provides the [`NodeId`] type, a strongly-typed dense index for
//! vertices. Every graph in this crate numbers its vertices `0..node_count` in
//! insertion order, so per-vertex algorithm state can live in plain vectors
//! indexed by [`NodeId::index`].

use std::fmt;

use serde::Serialize;

/// A strongly-typed identifier for vertices within a graph.
///
/// `NodeId` wraps a `usize` index, providing type safety to prevent
/// accidental mixing of vertex indices with weights, counts or edge indices.
/// Node IDs are assigned sequentially starting from 0 as vertices are added.
///
/// # Usage
///
/// Node IDs are created by [`DirectedGraph::add_node`](crate::graph::DirectedGraph::add_node)
/// and [`Graph::add_vertex`](crate::graph::Graph::add_vertex). They are used to:
///
/// - Start traversals and shortest-path searches
/// - Describe edges in edge lists ([`WeightedEdge`](crate::graph::WeightedEdge))
/// - Index per-vertex results such as distances
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{Graph, NodeId};
///
/// let mut graph: Graph<&str> = Graph::directed();
/// let a: NodeId = graph.add_vertex("A");
/// let b: NodeId = graph.add_vertex("B");
///
/// assert_ne!(a, b);
/// assert_eq!(a.index(), 0);
/// assert_eq!(b.index(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// Mostly useful with index-based inputs such as the edge lists taken by
    /// [`bellman_ford`](crate::algorithms::bellman_ford) and
    /// [`kruskal`](crate::algorithms::kruskal), where vertices are simply `0..n`.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this node identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
