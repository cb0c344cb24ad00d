//! Keyed adjacency-list graph.
//!
//! This module provides [`Graph`], the main container of the crate. It wraps a
//! [`DirectedGraph`] and maintains the mapping between domain keys (like `"A"`
//! or `42`) and internal [`NodeId`] indices.
//!
//! # Motivation
//!
//! Algorithm code works on dense `NodeId`s, while callers think in terms of
//! their own vertex names. `Graph` encapsulates the usual pattern:
//! 1. Build a graph from domain keys
//! 2. Run algorithms that work with `NodeId`
//! 3. Map results back to domain keys
//!
//! # Directed and Undirected Graphs
//!
//! An undirected graph stores every edge as two arcs, one per endpoint, so
//! `neighbors(u)` lists `v` and `neighbors(v)` lists `u`. Adding the same edge
//! twice creates a parallel edge rather than replacing the weight.
//!
//! # Examples
//!
//! ```rust
//! use graphkit::graph::Graph;
//!
//! let mut graph: Graph<&str> = Graph::undirected();
//! graph.add_unit_edge("A", "B")?;
//! graph.add_unit_edge("A", "C")?;
//! graph.add_unit_edge("B", "D")?;
//! graph.add_unit_edge("C", "D")?;
//!
//! assert_eq!(graph.bfs(&"A")?, vec!["A", "B", "C", "D"]);
//! assert_eq!(graph.dfs(&"A")?, vec!["A", "B", "D", "C"]);
//! assert!(graph.has_cycle());
//! # Ok::<(), graphkit::Error>(())
//! ```

use std::{collections::HashMap, fmt, hash::Hash};

use serde::{Deserialize, Serialize};

use crate::{
    graph::{
        algorithms::{self, SpanningTree},
        dot, DirectedGraph, Distance, DistanceMatrix, EdgeId, GraphBase, NodeId, Predecessors,
        Successors, Weight, WeightedEdge, WeightedSuccessors, DEFAULT_WEIGHT,
    },
    Error, Result,
};

/// Whether edges are one-way arcs or symmetric connections.
///
/// Parses from and displays as `"directed"` / `"undirected"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Each edge is a single arc from source to target
    Directed,
    /// Each edge is stored as two mirrored arcs
    #[default]
    Undirected,
}

/// A weighted multigraph whose vertices are identified by keys of type `K`.
///
/// Vertices get [`NodeId`]s in insertion order, which is also the order every
/// algorithm uses when it has to pick among vertices (traversal roots,
/// Kahn's initial queue, component enumeration).
///
/// # Type Parameters
///
/// * `K` - The vertex key type
///
/// # Thread Safety
///
/// `Graph<K>` is `Send` and `Sync` when `K` is.
#[derive(Debug, Clone)]
pub struct Graph<K>
where
    K: Hash + Eq + Clone,
{
    kind: GraphKind,
    /// Node payloads are the keys themselves, arcs carry weights
    graph: DirectedGraph<K, Weight>,
    key_to_node: HashMap<K, NodeId>,
    /// One arc per logical edge (the forward arc of undirected pairs)
    primary: Vec<EdgeId>,
}

impl<K> Default for Graph<K>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new(GraphKind::default())
    }
}

impl<K> Graph<K>
where
    K: Hash + Eq + Clone,
{
    /// Creates a new empty graph of the given kind.
    #[must_use]
    pub fn new(kind: GraphKind) -> Self {
        Graph {
            kind,
            graph: DirectedGraph::new(),
            key_to_node: HashMap::new(),
            primary: Vec::new(),
        }
    }

    /// Creates a new empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Creates a new empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Creates a new graph with pre-allocated capacity for vertices and logical edges.
    #[must_use]
    pub fn with_capacity(kind: GraphKind, vertex_capacity: usize, edge_capacity: usize) -> Self {
        let arc_capacity = match kind {
            GraphKind::Directed => edge_capacity,
            GraphKind::Undirected => edge_capacity * 2,
        };
        Graph {
            kind,
            graph: DirectedGraph::with_capacity(vertex_capacity, arc_capacity),
            key_to_node: HashMap::with_capacity(vertex_capacity),
            primary: Vec::with_capacity(edge_capacity),
        }
    }

    /// Returns the kind of this graph.
    #[must_use]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Returns `true` for directed graphs.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    /// Adds a vertex, or returns the existing `NodeId` if the key is already present.
    ///
    /// Vertices are also created implicitly by [`Graph::add_edge`]; adding them
    /// explicitly is only needed for isolated vertices or to control numbering.
    pub fn add_vertex(&mut self, key: K) -> NodeId {
        if let Some(&node) = self.key_to_node.get(&key) {
            return node;
        }

        let node = self.graph.add_node(key.clone());
        self.key_to_node.insert(key, node);
        node
    }

    /// Adds an edge from `from` to `to` with the given weight.
    ///
    /// Missing vertices are created. On undirected graphs the mirrored arc
    /// `to -> from` is added as well. Adding an edge that already exists
    /// creates a parallel edge.
    ///
    /// # Returns
    ///
    /// The `EdgeId` of the `from -> to` arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying graph rejects the arc, which cannot
    /// happen for vertices created through this graph.
    pub fn add_edge(&mut self, from: K, to: K, weight: Weight) -> Result<EdgeId> {
        let source = self.add_vertex(from);
        let target = self.add_vertex(to);

        let id = self.graph.add_edge(source, target, weight)?;
        if self.kind == GraphKind::Undirected {
            self.graph.add_edge(target, source, weight)?;
        }
        self.primary.push(id);
        Ok(id)
    }

    /// Adds an edge with [`DEFAULT_WEIGHT`].
    ///
    /// # Errors
    ///
    /// See [`Graph::add_edge`].
    pub fn add_unit_edge(&mut self, from: K, to: K) -> Result<EdgeId> {
        self.add_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Returns the `NodeId` for a given key, if it exists.
    #[must_use]
    pub fn node_id(&self, key: &K) -> Option<NodeId> {
        self.key_to_node.get(key).copied()
    }

    /// Returns the key for a given `NodeId`, if it exists.
    #[must_use]
    pub fn key(&self, node: NodeId) -> Option<&K> {
        self.graph.node(node)
    }

    /// Returns `true` if the graph has a vertex with this key.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.key_to_node.contains_key(key)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of logical edges; an undirected edge counts once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.primary.len()
    }

    /// Returns the number of stored arcs; an undirected edge counts twice.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Iterates over all vertex keys in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &K> {
        self.graph.nodes().map(|(_, key)| key)
    }

    /// Iterates over the `(neighbor, weight)` adjacency entries of a vertex.
    ///
    /// An unknown key has no neighbours.
    pub fn neighbors<'g>(&'g self, key: &K) -> impl Iterator<Item = (&'g K, Weight)> + 'g {
        self.node_id(key)
            .into_iter()
            .flat_map(move |node| self.graph.outgoing_edges(node))
            .filter_map(move |(_, target, &weight)| {
                self.graph.node(target).map(|key| (key, weight))
            })
    }

    /// Returns a reference to the underlying `DirectedGraph`.
    #[must_use]
    pub fn inner(&self) -> &DirectedGraph<K, Weight> {
        &self.graph
    }

    /// Returns one [`WeightedEdge`] per logical edge, in insertion order.
    ///
    /// This is the edge-list view expected by [`algorithms::kruskal`].
    #[must_use]
    pub fn edge_list(&self) -> Vec<WeightedEdge> {
        self.primary
            .iter()
            .filter_map(|&id| {
                let (source, target) = self.graph.edge_endpoints(id)?;
                let weight = *self.graph.edge(id)?;
                Some(WeightedEdge::new(source, target, weight))
            })
            .collect()
    }

    /// Returns every stored arc as a [`WeightedEdge`], in insertion order.
    ///
    /// This is the edge-list view expected by [`algorithms::bellman_ford`]:
    /// undirected edges appear in both directions.
    #[must_use]
    pub fn arcs(&self) -> Vec<WeightedEdge> {
        self.graph
            .edges()
            .map(|(_, source, target, &weight)| WeightedEdge::new(source, target, weight))
            .collect()
    }

    /// Builds the adjacency matrix used by [`algorithms::floyd_warshall`].
    ///
    /// The diagonal is zero, parallel arcs collapse to their minimum weight and
    /// absent arcs are [`Distance::Infinite`]. A negative self-loop overrides the
    /// zero diagonal so that it is reported as a negative cycle.
    #[must_use]
    pub fn to_matrix(&self) -> DistanceMatrix {
        let mut matrix = DistanceMatrix::new(self.vertex_count());
        for (_, source, target, &weight) in self.graph.edges() {
            let cell = &mut matrix[(source.index(), target.index())];
            *cell = (*cell).min(Distance::Finite(weight));
        }
        matrix
    }

    /// Maps a slice of `NodeId`s back to domain keys.
    ///
    /// Nodes that don't have a corresponding key are skipped.
    #[must_use]
    pub fn map_nodes_to_keys(&self, nodes: &[NodeId]) -> Vec<K> {
        nodes
            .iter()
            .filter_map(|&node| self.graph.node(node).cloned())
            .collect()
    }

    /// Maps groups of `NodeId`s (components) back to domain keys.
    #[must_use]
    pub fn map_groups_to_keys(&self, groups: &[Vec<NodeId>]) -> Vec<Vec<K>> {
        groups
            .iter()
            .map(|group| self.map_nodes_to_keys(group))
            .collect()
    }

    fn map_tree_to_keys(&self, tree: SpanningTree) -> SpanningTree<K> {
        // Node ids are dense and assigned in insertion order
        let keys: Vec<&K> = self.vertices().collect();
        tree.map(|node| keys[node.index()].clone())
    }
}

impl<K> Graph<K>
where
    K: Hash + Eq + Clone + fmt::Display,
{
    /// Renders the graph in Graphviz DOT format.
    ///
    /// Directed graphs render as `digraph` with `->` arcs; undirected graphs
    /// render as `graph` with one `--` line per logical edge. Weights become
    /// edge labels.
    #[must_use]
    pub fn to_dot(&self, title: Option<&str>) -> String {
        dot::render(self, title)
    }
}

// Algorithm convenience methods
impl<K> Graph<K>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    fn require(&self, key: &K) -> Result<NodeId> {
        self.node_id(key)
            .ok_or_else(|| Error::VertexNotFound(format!("{key:?}")))
    }

    fn keyed_distances(&self, paths: &algorithms::ShortestPaths) -> HashMap<K, Distance> {
        paths
            .iter()
            .filter_map(|(node, distance)| self.key(node).map(|key| (key.clone(), distance)))
            .collect()
    }

    /// Breadth-first visitation order starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `start` is not a vertex.
    pub fn bfs(&self, start: &K) -> Result<Vec<K>> {
        let start = self.require(start)?;
        let order: Vec<NodeId> = algorithms::bfs(self, start).collect();
        Ok(self.map_nodes_to_keys(&order))
    }

    /// Depth-first (pre-order) visitation order starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `start` is not a vertex.
    pub fn dfs(&self, start: &K) -> Result<Vec<K>> {
        let start = self.require(start)?;
        let order: Vec<NodeId> = algorithms::dfs(self, start).collect();
        Ok(self.map_nodes_to_keys(&order))
    }

    /// Topological order computed by depth-first search.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] if the graph has a cycle. Note that every
    /// edge of an undirected graph forms a two-arc cycle.
    pub fn topological_sort_dfs(&self) -> Result<Vec<K>> {
        let order = algorithms::topological_sort_dfs(self)?;
        Ok(self.map_nodes_to_keys(&order))
    }

    /// Topological order computed by Kahn's algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] if the graph has a cycle.
    pub fn topological_sort_kahn(&self) -> Result<Vec<K>> {
        let order = algorithms::topological_sort_kahn(self)?;
        Ok(self.map_nodes_to_keys(&order))
    }

    /// Shortest distances from `start` to every vertex, by Dijkstra's algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] for an unknown start,
    /// [`Error::NegativeWeight`] if any edge weight is negative and
    /// [`Error::Overflow`] if a path length leaves the `i64` range.
    pub fn dijkstra(&self, start: &K) -> Result<HashMap<K, Distance>> {
        let paths = algorithms::dijkstra(self, self.require(start)?)?;
        Ok(self.keyed_distances(&paths))
    }

    /// Shortest distances from `start` to every vertex, by Bellman-Ford.
    ///
    /// Runs over every stored arc, so undirected edges relax in both directions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] for an unknown start,
    /// [`Error::NegativeCycle`] if a negative cycle is reachable from `start` and
    /// [`Error::Overflow`] if a path length leaves the `i64` range.
    pub fn bellman_ford(&self, start: &K) -> Result<HashMap<K, Distance>> {
        let start = self.require(start)?;
        let paths = algorithms::bellman_ford(&self.arcs(), self.vertex_count(), start)?;
        Ok(self.keyed_distances(&paths))
    }

    /// Shortest path from `from` to `to` as a list of keys plus its length.
    ///
    /// Uses Dijkstra when all weights are non-negative and Bellman-Ford otherwise.
    /// Returns `Ok(None)` when `to` is unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] for unknown endpoints and
    /// [`Error::NegativeCycle`] if negative weights produce a reachable negative cycle.
    /// Path length overflow is reported as [`Error::Overflow`].
    pub fn shortest_path(&self, from: &K, to: &K) -> Result<Option<(Vec<K>, Weight)>> {
        let source = self.require(from)?;
        let target = self.require(to)?;

        let has_negative = self.graph.edges().any(|(_, _, _, &weight)| weight < 0);
        let paths = if has_negative {
            log::debug!("negative weights present, using Bellman-Ford for shortest path");
            algorithms::bellman_ford(&self.arcs(), self.vertex_count(), source)?
        } else {
            algorithms::dijkstra(self, source)?
        };

        let Some(length) = paths.distance(target).finite() else {
            return Ok(None);
        };
        Ok(paths
            .path_to(target)
            .map(|nodes| (self.map_nodes_to_keys(&nodes), length)))
    }

    /// All-pairs shortest distances by Floyd-Warshall.
    ///
    /// Row and column `i` of the result correspond to the `i`-th vertex in
    /// insertion order (see [`Graph::vertices`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCycle`] if the graph contains a negative cycle
    /// and [`Error::Overflow`] if a path length leaves the `i64` range.
    pub fn floyd_warshall(&self) -> Result<DistanceMatrix> {
        algorithms::floyd_warshall(&self.to_matrix())
    }

    /// Minimum spanning forest by Kruskal's algorithm.
    ///
    /// Covers every component of the graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the total weight leaves the `i64` range.
    /// Edge-list validation errors cannot occur for edges produced by this graph.
    pub fn kruskal(&self) -> Result<SpanningTree<K>> {
        let tree = algorithms::kruskal(&self.edge_list(), self.vertex_count())?;
        Ok(self.map_tree_to_keys(tree))
    }

    /// Minimum spanning tree of the component containing `start`, by Prim's algorithm.
    ///
    /// Vertices outside `start`'s component are not part of the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `start` is not a vertex and
    /// [`Error::Overflow`] if the total weight leaves the `i64` range.
    pub fn prim(&self, start: &K) -> Result<SpanningTree<K>> {
        let tree = algorithms::prim(self, self.require(start)?)?;
        Ok(self.map_tree_to_keys(tree))
    }

    /// Returns `true` if the graph has a cycle, using the detector matching its kind.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        match self.kind {
            GraphKind::Directed => algorithms::detect_cycle_directed(self),
            GraphKind::Undirected => algorithms::detect_cycle_undirected(self),
        }
    }

    /// Finds a directed cycle and returns it as a closed path of keys.
    ///
    /// Only meaningful for directed graphs: on undirected graphs this returns
    /// `None`, since every edge would trivially qualify. Use [`Graph::has_cycle`]
    /// for undirected cycle detection.
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<K>> {
        if self.kind == GraphKind::Undirected {
            return None;
        }
        let cycle = algorithms::find_any_cycle(self)?;
        Some(self.map_nodes_to_keys(&cycle))
    }

    /// Connected components as groups of keys.
    ///
    /// On directed graphs edge direction is ignored (weakly connected components).
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<K>> {
        let components = algorithms::connected_components(self);
        self.map_groups_to_keys(&components)
    }
}

impl<K> fmt::Display for Graph<K>
where
    K: Hash + Eq + Clone + fmt::Display,
{
    /// Renders the adjacency list, one vertex per line: `A -> [(B, 1), (C, 4)]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, key) in self.graph.nodes() {
            let entries: Vec<String> = self
                .graph
                .outgoing_edges(node)
                .filter_map(|(_, target, weight)| {
                    self.graph
                        .node(target)
                        .map(|neighbor| format!("({neighbor}, {weight})"))
                })
                .collect();
            writeln!(f, "{key} -> [{}]", entries.join(", "))?;
        }
        Ok(())
    }
}

impl<K> GraphBase for Graph<K>
where
    K: Hash + Eq + Clone,
{
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        GraphBase::node_ids(&self.graph)
    }
}

impl<K> Successors for Graph<K>
where
    K: Hash + Eq + Clone,
{
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.successors(node)
    }
}

impl<K> Predecessors for Graph<K>
where
    K: Hash + Eq + Clone,
{
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.predecessors(node)
    }
}

impl<K> WeightedSuccessors for Graph<K>
where
    K: Hash + Eq + Clone,
{
    fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Weight)> {
        self.graph.weighted_successors(node)
    }
}
