//! Graph algorithms.
//!
//! Every algorithm is a free function generic over the graph traits in
//! [`crate::graph`], so it works on [`DirectedGraph`](crate::graph::DirectedGraph),
//! [`Graph`](crate::graph::Graph) or any other implementation. Algorithms that
//! are naturally defined on edge lists or matrices take those instead.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`dfs`] - Depth-first search traversal (pre-order)
//! - [`bfs`] - Breadth-first search traversal
//! - [`postorder`] - Postorder traversal
//! - [`reverse_postorder`] - Reverse postorder traversal
//!
//! ## Topological Ordering
//!
//! - [`topological_sort_dfs`] - Reverse post-order of a depth-first search
//! - [`topological_sort_kahn`] - Kahn's in-degree algorithm
//!
//! ## Shortest Paths
//!
//! - [`dijkstra`] - Single source, non-negative weights
//! - [`bellman_ford`] - Single source, negative weights, negative cycle detection
//! - [`floyd_warshall`] - All pairs over a [`DistanceMatrix`](crate::graph::DistanceMatrix)
//!
//! ## Minimum Spanning Trees
//!
//! - [`kruskal`] - Spanning forest of an edge list, using [`DisjointSet`]
//! - [`prim`] - Spanning tree of the start vertex's component
//!
//! ## Structure
//!
//! - [`detect_cycle_directed`] / [`detect_cycle_undirected`] - Cycle checks
//! - [`find_cycle`] / [`find_any_cycle`] - Concrete directed cycles
//! - [`connected_components`] - Connected (weakly, for directed graphs) components
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | General traversal |
//! | Topological Sort | O(V + E) | Dependency ordering |
//! | Dijkstra | O((V + E) log E) | Shortest paths, non-negative weights |
//! | Bellman-Ford | O(V * E) | Shortest paths, negative weights |
//! | Floyd-Warshall | O(V³) | All-pairs shortest paths on small graphs |
//! | Kruskal / Prim | O(E log E) | Minimum spanning trees |
//!
//! # Examples
//!
//! ```rust
//! use graphkit::graph::{DirectedGraph, NodeId, algorithms};
//!
//! let mut graph: DirectedGraph<&str, i64> = DirectedGraph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_edge(a, b, 1)?;
//! graph.add_edge(b, c, 1)?;
//!
//! let order: Vec<NodeId> = algorithms::dfs(&graph, a).collect();
//! assert_eq!(order, vec![a, b, c]);
//! assert!(!algorithms::detect_cycle_directed(&graph));
//! assert_eq!(algorithms::topological_sort_kahn(&graph)?, vec![a, b, c]);
//! # Ok::<(), graphkit::Error>(())
//! ```

mod bellman_ford;
mod components;
mod cycles;
mod dijkstra;
mod floyd_warshall;
mod kruskal;
mod prim;
mod shortest_paths;
mod spanning_tree;
mod topological;
mod traversal;
mod union_find;

pub use bellman_ford::bellman_ford;
pub use components::connected_components;
pub use cycles::{detect_cycle_directed, detect_cycle_undirected, find_any_cycle, find_cycle};
pub use dijkstra::dijkstra;
pub use floyd_warshall::floyd_warshall;
pub use kruskal::kruskal;
pub use prim::prim;
pub use shortest_paths::ShortestPaths;
pub use spanning_tree::SpanningTree;
pub use topological::{topological_sort_dfs, topological_sort_kahn};
pub use traversal::{bfs, dfs, postorder, reverse_postorder, BfsIterator, DfsIterator};
pub use union_find::DisjointSet;
