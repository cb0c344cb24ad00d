//! Minimum spanning tree results.

use serde::Serialize;

use crate::{
    graph::{NodeId, Weight},
    Error, Result,
};

/// Edges selected by a minimum spanning tree (or forest) algorithm.
///
/// Edges are kept in the order the algorithm selected them. The vertex type
/// defaults to [`NodeId`]; keyed graphs map it to their own keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree<V = NodeId> {
    /// Selected `(u, v, weight)` edges in selection order
    pub edges: Vec<(V, V, Weight)>,
    /// Sum of the selected edge weights
    pub total_weight: Weight,
}

impl<V> Default for SpanningTree<V> {
    fn default() -> Self {
        SpanningTree {
            edges: Vec::new(),
            total_weight: 0,
        }
    }
}

impl<V> SpanningTree<V> {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if no edge was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Converts the vertex type of every edge.
    #[must_use]
    pub fn map<W>(self, mut f: impl FnMut(V) -> W) -> SpanningTree<W> {
        SpanningTree {
            edges: self
                .edges
                .into_iter()
                .map(|(u, v, weight)| (f(u), f(v), weight))
                .collect(),
            total_weight: self.total_weight,
        }
    }
}

impl SpanningTree {
    /// Records a selected edge, failing if the total weight overflows.
    pub(crate) fn push(&mut self, u: NodeId, v: NodeId, weight: Weight) -> Result<()> {
        self.total_weight = self
            .total_weight
            .checked_add(weight)
            .ok_or(Error::Overflow { from: u, to: v })?;
        self.edges.push((u, v, weight));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_accumulates() {
        let mut tree: SpanningTree = SpanningTree::new();
        assert!(tree.is_empty());
        tree.push(NodeId::new(0), NodeId::new(1), 3).unwrap();
        tree.push(NodeId::new(1), NodeId::new(2), -1).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.total_weight, 2);
    }

    #[test]
    fn test_push_overflow() {
        let mut tree: SpanningTree = SpanningTree::new();
        tree.push(NodeId::new(0), NodeId::new(1), Weight::MAX).unwrap();
        assert!(matches!(
            tree.push(NodeId::new(1), NodeId::new(2), 1),
            Err(Error::Overflow { .. })
        ));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.total_weight, Weight::MAX);
    }

    #[test]
    fn test_map() {
        let mut tree: SpanningTree = SpanningTree::new();
        tree.push(NodeId::new(0), NodeId::new(1), 3).unwrap();
        let names = ["A", "B"];
        let mapped = tree.map(|n| names[n.index()]);
        assert_eq!(mapped.edges, vec![("A", "B", 3)]);
        assert_eq!(mapped.total_weight, 3);
    }

    #[test]
    fn test_serialize() {
        let mut tree: SpanningTree = SpanningTree::new();
        tree.push(NodeId::new(0), NodeId::new(1), 1).unwrap();
        let tree = tree.map(|n| ["A", "B"][n.index()]);
        assert_eq!(
            serde_json::to_string(&tree).unwrap(),
            r#"{"edges":[["A","B",1]],"total_weight":1}"#
        );
    }
}
