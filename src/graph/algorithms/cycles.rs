//! Cycle detection for directed and undirected graphs.
//!
//! Both detectors run an iterative depth-first search with an explicit frame
//! stack, so deep graphs cannot overflow the call stack.
//!
//! # Directed vs Undirected
//!
//! In a directed graph a cycle exists iff the search meets an arc into a vertex
//! that is still on the active path (a back edge). Arcs into finished vertices
//! are cross or forward edges and are harmless.
//!
//! An undirected graph stores every edge as two arcs, so arcs leading back to
//! the DFS parent must not count. Any other visited neighbour closes a cycle.
//! Parallel edges to the parent are therefore not cycles, while a self-loop is.

use crate::graph::{NodeId, Successors};

/// DFS colours for directed cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not discovered yet
    White,
    /// On the active DFS path
    Grey,
    /// Finished
    Black,
}

/// One level of the explicit DFS stack.
struct Frame {
    node: NodeId,
    parent: Option<NodeId>,
    successors: Vec<NodeId>,
    cursor: usize,
}

impl Frame {
    fn new<G: Successors>(graph: &G, node: NodeId, parent: Option<NodeId>) -> Self {
        Frame {
            node,
            parent,
            successors: graph.successors(node).collect(),
            cursor: 0,
        }
    }

    fn next_successor(&mut self) -> Option<NodeId> {
        let next = self.successors.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(next)
    }
}

/// Runs a coloured DFS from `root` and returns the first back-edge cycle as a closed path.
///
/// Vertices finished by this call are left black in `colors`, so callers can
/// share the colour vector across several roots.
fn search_cycle<G: Successors>(graph: &G, root: NodeId, colors: &mut [Color]) -> Option<Vec<NodeId>> {
    if colors[root.index()] != Color::White {
        return None;
    }

    colors[root.index()] = Color::Grey;
    let mut stack = vec![Frame::new(graph, root, None)];

    while let Some(frame) = stack.last_mut() {
        let Some(next) = frame.next_successor() else {
            colors[frame.node.index()] = Color::Black;
            stack.pop();
            continue;
        };

        match colors[next.index()] {
            Color::White => {
                colors[next.index()] = Color::Grey;
                let node = frame.node;
                stack.push(Frame::new(graph, next, Some(node)));
            }
            Color::Grey => {
                // The frames from `next` upwards form the cycle
                let start = stack.iter().position(|f| f.node == next)?;
                let mut cycle: Vec<NodeId> = stack[start..].iter().map(|f| f.node).collect();
                cycle.push(next);
                return Some(cycle);
            }
            Color::Black => {}
        }
    }

    None
}

/// Returns `true` if the directed graph contains a cycle.
///
/// Every vertex is used as a DFS root in id order until a back edge is found.
/// Self-loops count as cycles.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{DirectedGraph, algorithms::detect_cycle_directed};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, c, ())?;
/// assert!(!detect_cycle_directed(&graph));
///
/// graph.add_edge(c, a, ())?;
/// assert!(detect_cycle_directed(&graph));
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn detect_cycle_directed<G: Successors>(graph: &G) -> bool {
    find_any_cycle(graph).is_some()
}

/// Returns `true` if the undirected graph contains a cycle.
///
/// The graph is expected to store each undirected edge as a pair of mirrored
/// arcs, as [`Graph`](crate::graph::Graph) does. Neighbours equal to the DFS
/// parent are skipped; any other visited neighbour closes a cycle.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
pub fn detect_cycle_undirected<G: Successors>(graph: &G) -> bool {
    let mut visited = vec![false; graph.node_count()];

    for root in graph.node_ids() {
        if visited[root.index()] {
            continue;
        }
        visited[root.index()] = true;

        let mut stack = vec![Frame::new(graph, root, None)];

        while let Some(frame) = stack.last_mut() {
            let Some(next) = frame.next_successor() else {
                stack.pop();
                continue;
            };

            if Some(next) == frame.parent {
                continue;
            }

            if visited[next.index()] {
                log::debug!("undirected cycle closed by edge {} - {next}", frame.node);
                return true;
            }

            visited[next.index()] = true;
            let node = frame.node;
            stack.push(Frame::new(graph, next, Some(node)));
        }
    }

    false
}

/// Finds a directed cycle reachable from `start`.
///
/// # Returns
///
/// The cycle as a closed path whose first and last elements are equal, e.g.
/// `[a, b, c, a]`, or `None` if no cycle is reachable from `start` (or `start`
/// is not part of the graph).
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{DirectedGraph, algorithms::find_cycle};
///
/// let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(b, a, ())?;
///
/// assert_eq!(find_cycle(&graph, a), Some(vec![a, b, a]));
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn find_cycle<G: Successors>(graph: &G, start: NodeId) -> Option<Vec<NodeId>> {
    if start.index() >= graph.node_count() {
        return None;
    }

    let mut colors = vec![Color::White; graph.node_count()];
    search_cycle(graph, start, &mut colors)
}

/// Finds any directed cycle, trying every vertex as a root in id order.
///
/// # Returns
///
/// The first cycle found, as a closed path, or `None` if the graph is acyclic.
pub fn find_any_cycle<G: Successors>(graph: &G) -> Option<Vec<NodeId>> {
    let mut colors = vec![Color::White; graph.node_count()];

    for root in graph.node_ids() {
        if let Some(cycle) = search_cycle(graph, root, &mut colors) {
            log::debug!("directed cycle of length {} found", cycle.len() - 1);
            return Some(cycle);
        }
    }

    None
}
