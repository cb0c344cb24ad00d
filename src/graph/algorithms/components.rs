//! Connected components.
//!
//! Edge direction is ignored: the search follows both successors and
//! predecessors, so on directed graphs the result is the weakly connected
//! components. On undirected graphs, which store each edge in both directions,
//! this is the ordinary notion of connectivity.

use crate::graph::{NodeId, Predecessors, Successors};

/// Partitions the vertices into connected components.
///
/// Components are discovered by repeated depth-first searches from every
/// unvisited vertex in id order, so they are ordered by their smallest vertex.
/// Within a component, vertices are listed in DFS pre-order from that smallest
/// vertex. Every vertex appears in exactly one component; isolated vertices
/// form singleton components.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{DirectedGraph, algorithms::connected_components};
///
/// let mut graph: DirectedGraph<char, ()> = DirectedGraph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
/// graph.add_edge(b, a, ())?;
///
/// assert_eq!(connected_components(&graph), vec![vec![a, b], vec![c]]);
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn connected_components<G>(graph: &G) -> Vec<Vec<NodeId>>
where
    G: Successors + Predecessors,
{
    let mut visited = vec![false; graph.node_count()];
    let mut components = Vec::new();
    let mut stack = Vec::new();

    for root in graph.node_ids() {
        if visited[root.index()] {
            continue;
        }

        let mut component = Vec::new();
        stack.push(root);

        while let Some(node) = stack.pop() {
            if visited[node.index()] {
                continue;
            }
            visited[node.index()] = true;
            component.push(node);

            let neighbors: Vec<NodeId> = graph
                .successors(node)
                .chain(graph.predecessors(node))
                .collect();
            for &next in neighbors.iter().rev() {
                if !visited[next.index()] {
                    stack.push(next);
                }
            }
        }

        components.push(component);
    }

    log::debug!(
        "found {} connected components over {} vertices",
        components.len(),
        graph.node_count()
    );
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, Graph};

    fn ids(indices: &[usize]) -> Vec<NodeId> {
        indices.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_undirected_components() {
        let mut graph: Graph<&str> = Graph::undirected();
        graph.add_unit_edge("A", "B").unwrap();
        graph.add_unit_edge("B", "C").unwrap();
        graph.add_unit_edge("D", "E").unwrap();
        graph.add_vertex("F");

        assert_eq!(
            connected_components(&graph),
            vec![ids(&[0, 1, 2]), ids(&[3, 4]), ids(&[5])]
        );
    }

    #[test]
    fn test_directed_weak_components() {
        // 0 -> 1 <- 2, 3 -> 4
        let mut graph: DirectedGraph<(), ()> = DirectedGraph::new();
        for _ in 0..5 {
            graph.add_node(());
        }
        graph.add_edge(NodeId::new(0), NodeId::new(1), ()).unwrap();
        graph.add_edge(NodeId::new(2), NodeId::new(1), ()).unwrap();
        graph.add_edge(NodeId::new(3), NodeId::new(4), ()).unwrap();

        assert_eq!(
            connected_components(&graph),
            vec![ids(&[0, 1, 2]), ids(&[3, 4])]
        );
    }

    #[test]
    fn test_partition_property() {
        let mut graph: Graph<u32> = Graph::undirected();
        for (u, v) in [(0, 1), (2, 3), (3, 4), (6, 7), (7, 6)] {
            graph.add_unit_edge(u, v).unwrap();
        }
        graph.add_vertex(5);

        let components = connected_components(&graph);
        let mut all: Vec<NodeId> = components.iter().flatten().copied().collect();
        all.sort();
        assert_eq!(all.len(), graph.vertex_count());
        all.dedup();
        assert_eq!(all.len(), graph.vertex_count());
        assert_eq!(components.len(), 4);
    }

    #[test]
    fn test_empty_graph() {
        let graph: DirectedGraph<(), ()> = DirectedGraph::new();
        assert!(connected_components(&graph).is_empty());
    }
}
