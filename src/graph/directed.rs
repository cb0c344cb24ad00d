//! Index-based directed graph storage.
//!
//! [`DirectedGraph`] is the storage layer underneath every graph in this crate.
//! Nodes and arcs live in dense vectors addressed by [`NodeId`] and [`EdgeId`];
//! each node keeps its outgoing and incoming arc lists in insertion order, so
//! neighbour iteration is deterministic and O(degree).
//!
//! Parallel arcs and self-loops are allowed. Nothing is ever removed, which
//! keeps identifiers stable for the lifetime of the graph.

use crate::{
    graph::{EdgeId, GraphBase, NodeId, Predecessors, Successors, Weight, WeightedSuccessors},
    Error, Result,
};

/// An arc together with its payload.
#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    source: NodeId,
    target: NodeId,
    data: E,
}

/// A directed multigraph with node payloads `N` and arc payloads `E`.
///
/// # Type Parameters
///
/// * `N` - Data stored with each node
/// * `E` - Data stored with each arc (a [`Weight`] for weighted graphs)
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{DirectedGraph, Successors};
///
/// let mut graph: DirectedGraph<&str, i64> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_edge(a, b, 2)?;
/// graph.add_edge(a, c, 5)?;
///
/// let successors: Vec<_> = graph.successors(a).collect();
/// assert_eq!(successors, vec![b, c]);
/// assert_eq!(graph.in_degree(b), 1);
/// # Ok::<(), graphkit::Error>(())
/// ```
///
/// # Thread Safety
///
/// `DirectedGraph<N, E>` is `Send` and `Sync` when both `N` and `E` are.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, E> {
    nodes: Vec<N>,
    edges: Vec<EdgeEntry<E>>,
    outgoing: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
}

impl<N, E> Default for DirectedGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> DirectedGraph<N, E> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Creates a new graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        DirectedGraph {
            nodes: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
            outgoing: Vec::with_capacity(node_capacity),
            incoming: Vec::with_capacity(node_capacity),
        }
    }

    /// Adds a node and returns its identifier.
    ///
    /// Identifiers are assigned sequentially, so the `n`-th node added has index `n - 1`.
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(data);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        id
    }

    /// Adds an arc from `source` to `target` and returns its identifier.
    ///
    /// Parallel arcs are kept as separate arcs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNode`] if either endpoint is not a node of this graph.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, data: E) -> Result<EdgeId> {
        for node in [source, target] {
            if !self.contains_node(node) {
                return Err(Error::InvalidNode(node));
            }
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(EdgeEntry {
            source,
            target,
            data,
        });
        self.outgoing[source.index()].push(id);
        self.incoming[target.index()].push(id);
        Ok(id)
    }

    /// Returns `true` if `node` refers to a node of this graph.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }

    /// Returns the payload of a node.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&N> {
        self.nodes.get(node.index())
    }

    /// Iterates over `(NodeId, &N)` pairs in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, data)| (NodeId::new(index), data))
    }

    /// Returns the payload of an arc.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&E> {
        self.edges.get(edge.index()).map(|entry| &entry.data)
    }

    /// Returns the `(source, target)` endpoints of an arc.
    #[must_use]
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges
            .get(edge.index())
            .map(|entry| (entry.source, entry.target))
    }

    /// Iterates over all arcs as `(EdgeId, source, target, &E)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, NodeId, NodeId, &E)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, entry)| (EdgeId::new(index), entry.source, entry.target, &entry.data))
    }

    /// Iterates over the outgoing arcs of `node` as `(EdgeId, target, &E)`.
    ///
    /// An unknown node has no outgoing arcs.
    pub fn outgoing_edges(&self, node: NodeId) -> impl Iterator<Item = (EdgeId, NodeId, &E)> {
        self.outgoing
            .get(node.index())
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(move |&id| {
                let entry = &self.edges[id.index()];
                (id, entry.target, &entry.data)
            })
    }

    /// Iterates over the incoming arcs of `node` as `(EdgeId, source, &E)`.
    pub fn incoming_edges(&self, node: NodeId) -> impl Iterator<Item = (EdgeId, NodeId, &E)> {
        self.incoming
            .get(node.index())
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(move |&id| {
                let entry = &self.edges[id.index()];
                (id, entry.source, &entry.data)
            })
    }

    /// Number of arcs leaving `node`.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.outgoing.get(node.index()).map_or(0, Vec::len)
    }

    /// Number of arcs entering `node`.
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.incoming.get(node.index()).map_or(0, Vec::len)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of arcs.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<N, E> GraphBase for DirectedGraph<N, E> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }
}

impl<N, E> Successors for DirectedGraph<N, E> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.outgoing_edges(node).map(|(_, target, _)| target)
    }
}

impl<N, E> Predecessors for DirectedGraph<N, E> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.incoming_edges(node).map(|(_, source, _)| source)
    }
}

impl<N> WeightedSuccessors for DirectedGraph<N, Weight> {
    fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Weight)> {
        self.outgoing_edges(node)
            .map(|(_, target, &weight)| (target, weight))
    }
}
