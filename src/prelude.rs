//! # graphkit Prelude
//!
//! This module provides a convenient prelude for the most commonly used types, traits
//! and algorithms of the graphkit library. Import this module to get quick access to
//! everything needed to build a graph and run an algorithm on it.
//!
//! ```rust
//! use graphkit::prelude::*;
//!
//! let mut graph: Graph<char> = Graph::directed();
//! graph.add_unit_edge('a', 'b')?;
//! assert_eq!(topological_sort_kahn(&graph)?, vec![NodeId::new(0), NodeId::new(1)]);
//! # Ok::<(), graphkit::Error>(())
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphkit operations
pub use crate::Error;

/// The result type used throughout graphkit
pub use crate::Result;

// ================================================================================================
// Graph Representations
// ================================================================================================

/// Keyed adjacency-list graph and its kind
pub use crate::graph::{Graph, GraphKind};

/// Index-based directed multigraph
pub use crate::graph::DirectedGraph;

/// Strongly-typed identifiers and edge-list entries
pub use crate::graph::{EdgeId, NodeId, WeightedEdge};

/// Weights, distances and distance matrices
pub use crate::graph::{Distance, DistanceMatrix, Weight, DEFAULT_WEIGHT};

/// Traits algorithms are written against
pub use crate::graph::{GraphBase, Predecessors, Successors, WeightedSuccessors};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Traversals
pub use crate::algorithms::{bfs, dfs, postorder, reverse_postorder};

/// Topological ordering
pub use crate::algorithms::{topological_sort_dfs, topological_sort_kahn};

/// Shortest paths
pub use crate::algorithms::{bellman_ford, dijkstra, floyd_warshall, ShortestPaths};

/// Minimum spanning trees
pub use crate::algorithms::{kruskal, prim, DisjointSet, SpanningTree};

/// Cycles and components
pub use crate::algorithms::{
    connected_components, detect_cycle_directed, detect_cycle_undirected, find_any_cycle,
    find_cycle,
};

// ================================================================================================
// Graph Descriptions
// ================================================================================================

/// Serializable graph descriptions
pub use crate::description::{EdgeDescription, GraphDescription};
