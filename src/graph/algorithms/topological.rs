//! Topological ordering of directed acyclic graphs.
//!
//! Two classic algorithms are provided and both produce a valid order for any
//! DAG: for every arc `u -> v`, `u` is placed before `v`. Orders may differ
//! between the two.
//!
//! - [`topological_sort_dfs`] - reverse post-order of a depth-first search
//! - [`topological_sort_kahn`] - repeated removal of zero in-degree vertices
//!
//! On a cyclic graph neither order exists. Both functions then return
//! [`Error::CycleDetected`] carrying one concrete cycle as evidence.

use std::collections::VecDeque;

use crate::{
    graph::{algorithms::find_any_cycle, NodeId, Successors},
    Error, Result,
};

/// Builds the error returned for cyclic input.
fn cycle_error<G: Successors>(graph: &G) -> Error {
    let cycle = find_any_cycle(graph).unwrap_or_default();
    log::warn!(
        "topological sort impossible, graph has a cycle through {} vertices",
        cycle.len().saturating_sub(1)
    );
    Error::CycleDetected(cycle)
}

/// Computes a topological order using depth-first search.
///
/// Every vertex is used as a DFS root in id order. A vertex is appended to the
/// post-order once all of its successors are finished, and the post-order is
/// reversed at the end. Meeting an arc into a vertex on the active path means
/// the graph has a cycle.
///
/// # Arguments
///
/// * `graph` - The graph to order
///
/// # Returns
///
/// All vertices in topological order.
///
/// # Errors
///
/// Returns [`Error::CycleDetected`] if the graph contains a cycle.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{DirectedGraph, algorithms::topological_sort_dfs};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(a, c, ())?;
/// graph.add_edge(b, c, ())?;
///
/// assert_eq!(topological_sort_dfs(&graph)?, vec![a, b, c]);
/// # Ok::<(), graphkit::Error>(())
/// ```
#[allow(clippy::items_after_statements)]
pub fn topological_sort_dfs<G: Successors>(graph: &G) -> Result<Vec<NodeId>> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Color {
        White,
        Grey,
        Black,
    }

    #[derive(Clone, Copy)]
    enum State {
        Enter,
        Exit,
    }

    let node_count = graph.node_count();
    let mut colors = vec![Color::White; node_count];
    let mut order = Vec::with_capacity(node_count);
    let mut stack = Vec::new();

    for root in graph.node_ids() {
        if colors[root.index()] != Color::White {
            continue;
        }
        stack.push((root, State::Enter));

        while let Some((node, state)) = stack.pop() {
            match state {
                State::Enter => {
                    // Stale entry: the node was reached through another path first
                    if colors[node.index()] != Color::White {
                        continue;
                    }
                    colors[node.index()] = Color::Grey;
                    stack.push((node, State::Exit));

                    let successors: Vec<NodeId> = graph.successors(node).collect();
                    for &succ in successors.iter().rev() {
                        match colors[succ.index()] {
                            Color::White => stack.push((succ, State::Enter)),
                            Color::Grey => return Err(cycle_error(graph)),
                            Color::Black => {}
                        }
                    }
                }
                State::Exit => {
                    colors[node.index()] = Color::Black;
                    order.push(node);
                }
            }
        }
    }

    order.reverse();
    log::debug!("dfs topological sort ordered {} vertices", order.len());
    Ok(order)
}

/// Computes a topological order using Kahn's algorithm.
///
/// In-degrees are counted per arc, so parallel arcs are honoured. All vertices
/// with in-degree zero are queued in id order; each dequeued vertex is emitted
/// and its successors' in-degrees are decremented, queueing those that reach
/// zero. If fewer than `V` vertices are emitted, the rest lie on or behind a
/// cycle.
///
/// # Errors
///
/// Returns [`Error::CycleDetected`] if the graph contains a cycle.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{DirectedGraph, algorithms::topological_sort_kahn};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_edge(a, c, ())?;
/// graph.add_edge(b, c, ())?;
///
/// assert_eq!(topological_sort_kahn(&graph)?, vec![a, b, c]);
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn topological_sort_kahn<G: Successors>(graph: &G) -> Result<Vec<NodeId>> {
    let node_count = graph.node_count();
    let mut in_degree = vec![0usize; node_count];
    for node in graph.node_ids() {
        for succ in graph.successors(node) {
            in_degree[succ.index()] += 1;
        }
    }

    let mut queue: VecDeque<NodeId> = graph
        .node_ids()
        .filter(|node| in_degree[node.index()] == 0)
        .collect();
    let mut order = Vec::with_capacity(node_count);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for succ in graph.successors(node) {
            in_degree[succ.index()] -= 1;
            if in_degree[succ.index()] == 0 {
                queue.push_back(succ);
            }
        }
    }

    if order.len() != node_count {
        log::debug!(
            "kahn emitted {} of {} vertices before stalling",
            order.len(),
            node_count
        );
        return Err(cycle_error(graph));
    }

    log::debug!("kahn topological sort ordered {} vertices", order.len());
    Ok(order)
}
