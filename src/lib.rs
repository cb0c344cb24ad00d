// Copyright 2025 The graphkit Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![warn(missing_docs)]

//! # graphkit
//!
//! Classic graph algorithms over weighted adjacency-list graphs, built on an
//! index-based graph core with strongly-typed node and edge identifiers.
//!
//! ## Features
//!
//! - **Graph container** - Directed and undirected multigraphs keyed by any `Hash + Eq` type
//! - **Traversal** - Lazy breadth-first and depth-first iterators, postorder, reverse postorder
//! - **Topological ordering** - DFS-based and Kahn's algorithm, both reporting cycles as errors
//! - **Shortest paths** - Dijkstra, Bellman-Ford (negative edges, cycle detection), Floyd-Warshall
//! - **Spanning trees** - Kruskal (union-find) and Prim (lazy-deletion heap)
//! - **Structure** - Directed and undirected cycle detection, connected components
//! - **Descriptions** - Load graphs from JSON or TOML files
//!
//! All traversals use explicit stacks and queues, so deep graphs never exhaust
//! the call stack.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphkit::prelude::*;
//!
//! let mut graph: Graph<&str> = Graph::undirected();
//! graph.add_edge("A", "B", 1)?;
//! graph.add_edge("A", "C", 4)?;
//! graph.add_edge("B", "C", 2)?;
//! graph.add_edge("B", "D", 7)?;
//! graph.add_edge("C", "D", 3)?;
//!
//! let distances = graph.dijkstra(&"A")?;
//! assert_eq!(distances[&"D"], Distance::Finite(8));
//!
//! let tree = graph.prim(&"A")?;
//! assert_eq!(tree.total_weight, 6);
//! # Ok::<(), graphkit::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - Identifiers, distances, the index-based [`graph::DirectedGraph`]
//!   and the keyed [`graph::Graph`] container
//! - [`algorithms`] - Every algorithm, generic over the graph traits
//! - [`description`] - Serializable graph descriptions
//! - [`Error`] and [`Result`] - Error handling
//!
//! Algorithms work on [`graph::NodeId`]s and accept anything implementing
//! [`graph::Successors`] (and [`graph::WeightedSuccessors`] where weights matter).
//! [`graph::Graph`] implements those traits and also offers keyed convenience
//! methods that map results back to vertex keys.

pub mod description;
pub mod graph;
pub mod prelude;

mod error;

pub use error::Error;
pub use graph::algorithms;

/// The result type used throughout graphkit.
pub type Result<T> = std::result::Result<T, Error>;
