//! Edge identifiers and weighted edge records.
//!
//! This module provides two edge representations:
//!
//! - [`EdgeId`] - a strongly-typed index of an arc stored in a
//!   [`DirectedGraph`](crate::graph::DirectedGraph)
//! - [`WeightedEdge`] - a free-standing `(source, target, weight)` triple, the
//!   edge-list input of [`bellman_ford`](crate::algorithms::bellman_ford) and
//!   [`kruskal`](crate::algorithms::kruskal)

use std::fmt;

use crate::graph::{NodeId, Weight};

/// A strongly-typed identifier for arcs within a directed graph.
///
/// `EdgeId` wraps a `usize` index, providing type safety to prevent
/// accidental mixing of edge indices with node indices. Edge IDs are assigned
/// sequentially starting from 0 as arcs are added to a graph.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{DirectedGraph, EdgeId};
///
/// let mut graph: DirectedGraph<&str, i64> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let edge: EdgeId = graph.add_edge(a, b, 5)?;
///
/// assert_eq!(graph.edge(edge), Some(&5));
/// assert_eq!(graph.edge_endpoints(edge), Some((a, b)));
/// # Ok::<(), graphkit::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw index value of this edge identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

/// A weighted edge between two vertices, independent of any graph storage.
///
/// Edge lists of `WeightedEdge` are the input format of the edge-centric
/// algorithms. Vertices are plain indices `0..vertex_count`; the algorithms
/// validate every endpoint against the vertex count they are given.
///
/// For undirected inputs (Kruskal) the direction of `source` and `target`
/// carries no meaning. For directed inputs (Bellman-Ford) the edge runs from
/// `source` to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightedEdge {
    /// Tail of the edge
    pub source: NodeId,
    /// Head of the edge
    pub target: NodeId,
    /// Edge weight (may be negative)
    pub weight: Weight,
}

impl WeightedEdge {
    /// Creates a new weighted edge.
    #[must_use]
    pub const fn new(source: NodeId, target: NodeId, weight: Weight) -> Self {
        WeightedEdge {
            source,
            target,
            weight,
        }
    }

    /// Creates a weighted edge from raw vertex indices.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphkit::graph::{NodeId, WeightedEdge};
    ///
    /// let edge = WeightedEdge::from_indices(0, 1, -2);
    /// assert_eq!(edge.source, NodeId::new(0));
    /// assert_eq!(edge.weight, -2);
    /// ```
    #[must_use]
    pub const fn from_indices(source: usize, target: usize, weight: Weight) -> Self {
        WeightedEdge::new(NodeId::new(source), NodeId::new(target), weight)
    }

    /// Returns the edge with its endpoints swapped.
    #[must_use]
    pub const fn reversed(self) -> Self {
        WeightedEdge::new(self.target, self.source, self.weight)
    }
}

impl From<(usize, usize, Weight)> for WeightedEdge {
    fn from((source, target, weight): (usize, usize, Weight)) -> Self {
        WeightedEdge::from_indices(source, target, weight)
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id_roundtrip_usize() {
        let edge: EdgeId = 456usize.into();
        assert_eq!(edge.index(), 456);
        let raw: usize = edge.into();
        assert_eq!(raw, 456);
    }

    #[test]
    fn test_edge_id_formatting() {
        let edge = EdgeId::new(7);
        assert_eq!(format!("{edge:?}"), "EdgeId(7)");
        assert_eq!(format!("{edge}"), "e7");
    }

    #[test]
    fn test_edge_id_distinct_from_node_id() {
        // Same raw index, different types: only comparable through index()
        let node = NodeId::new(5);
        let edge = EdgeId::new(5);
        assert_eq!(node.index(), edge.index());
    }

    #[test]
    fn test_weighted_edge_from_tuple() {
        let edge: WeightedEdge = (0, 1, 7).into();
        assert_eq!(edge.source, NodeId::new(0));
        assert_eq!(edge.target, NodeId::new(1));
        assert_eq!(edge.weight, 7);
    }

    #[test]
    fn test_weighted_edge_reversed() {
        let edge = WeightedEdge::from_indices(2, 3, -1).reversed();
        assert_eq!(edge, WeightedEdge::from_indices(3, 2, -1));
    }

    #[test]
    fn test_weighted_edge_display() {
        let edge = WeightedEdge::from_indices(0, 4, 9);
        assert_eq!(edge.to_string(), "n0 -> n4 (9)");
    }
}
