//! Graph data structures and traits.
//!
//! This module provides the graph representations used by every algorithm in
//! the crate, together with the small trait vocabulary the algorithms are
//! written against.
//!
//! # Representations
//!
//! - [`DirectedGraph`] - Index-based directed multigraph with arbitrary node
//!   and arc payloads. Nodes and arcs are addressed by [`NodeId`] and [`EdgeId`].
//! - [`Graph`] - Keyed adjacency-list container. Vertices are identified by
//!   domain keys (strings, chars, integers) and created implicitly when edges
//!   are added. Undirected graphs store each edge as two arcs.
//!
//! # Traits
//!
//! Algorithms only need a handful of capabilities, expressed as traits:
//!
//! - [`GraphBase`] - vertex count and vertex enumeration
//! - [`Successors`] - outgoing neighbours
//! - [`Predecessors`] - incoming neighbours
//! - [`WeightedSuccessors`] - outgoing neighbours with edge weights
//!
//! Vertices are always numbered densely `0..node_count()`, so algorithms keep
//! their per-vertex state in vectors indexed by [`NodeId::index`].

pub mod algorithms;

mod directed;
mod distance;
mod dot;
mod edge;
mod keyed;
mod matrix;
mod node;

pub use directed::DirectedGraph;
pub use distance::{Distance, Weight, DEFAULT_WEIGHT};
pub use dot::escape_dot;
pub use edge::{EdgeId, WeightedEdge};
pub use keyed::{Graph, GraphKind};
pub use matrix::DistanceMatrix;
pub use node::NodeId;

/// Basic information shared by all graph representations.
pub trait GraphBase {
    /// Returns the number of vertices. Valid node ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Iterates over all vertex ids in ascending order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Graphs that can enumerate the outgoing neighbours of a vertex.
///
/// A neighbour reached through several parallel arcs is yielded once per arc.
/// Unknown vertices have no successors.
pub trait Successors: GraphBase {
    /// Iterates over the targets of the arcs leaving `node`, in insertion order.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Graphs that can enumerate the incoming neighbours of a vertex.
pub trait Predecessors: GraphBase {
    /// Iterates over the sources of the arcs entering `node`, in insertion order.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Graphs whose arcs carry a [`Weight`].
pub trait WeightedSuccessors: GraphBase {
    /// Iterates over `(target, weight)` for every arc leaving `node`.
    fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Weight)>;

    /// Iterates over every arc of the graph as a [`WeightedEdge`], grouped by source vertex.
    fn weighted_arcs(&self) -> impl Iterator<Item = WeightedEdge> {
        self.node_ids().flat_map(move |source| {
            self.weighted_successors(source)
                .map(move |(target, weight)| WeightedEdge::new(source, target, weight))
        })
    }
}
