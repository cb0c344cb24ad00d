//! Union-Find (Disjoint Set) data structure.
//!
//! Tracks a partition of the vertices `0..n` into disjoint sets and supports:
//! - `find(x)`: Find the representative of x's set
//! - `union(x, y)`: Merge the sets containing x and y
//!
//! `find` compresses paths, pointing every visited node straight at its root.
//! `union` always links the root of `x` under the root of `y`.

use crate::graph::NodeId;

/// Disjoint-set forest over the vertices `0..n`.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{NodeId, algorithms::DisjointSet};
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(NodeId::new(0), NodeId::new(1)));
/// assert!(!sets.union(NodeId::new(1), NodeId::new(0)));
/// assert_eq!(sets.find(NodeId::new(0)), sets.find(NodeId::new(1)));
/// assert_ne!(sets.find(NodeId::new(0)), sets.find(NodeId::new(2)));
/// assert_eq!(sets.set_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// `parent[i] == i` for roots
    parent: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            sets: n,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Finds the representative of `x`'s set, compressing the path on the way.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not below [`DisjointSet::len`].
    pub fn find(&mut self, x: NodeId) -> NodeId {
        let mut root = x.index();
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Point all nodes on the path directly to the root
        let mut node = x.index();
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        NodeId::new(root)
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `true` if a merge occurred, `false` if both were already in the same set.
    ///
    /// # Panics
    ///
    /// Panics if either element is not below [`DisjointSet::len`].
    pub fn union(&mut self, x: NodeId, y: NodeId) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        self.parent[root_x.index()] = root_y.index();
        self.sets -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(index: usize) -> NodeId {
        NodeId::new(index)
    }

    #[test]
    fn test_singletons() {
        let mut sets = DisjointSet::new(3);
        assert_eq!(sets.len(), 3);
        assert_eq!(sets.set_count(), 3);
        for i in 0..3 {
            assert_eq!(sets.find(n(i)), n(i));
        }
    }

    #[test]
    fn test_union_links_x_under_y() {
        let mut sets = DisjointSet::new(2);
        assert!(sets.union(n(0), n(1)));
        assert_eq!(sets.find(n(0)), n(1));
        assert_eq!(sets.find(n(1)), n(1));
    }

    #[test]
    fn test_union_same_set() {
        let mut sets = DisjointSet::new(3);
        sets.union(n(0), n(1));
        sets.union(n(1), n(2));
        assert!(!sets.union(n(0), n(2)));
        assert_eq!(sets.set_count(), 1);
    }

    #[test]
    fn test_path_compression() {
        // Build a chain 0 -> 1 -> 2 -> 3
        let mut sets = DisjointSet::new(4);
        sets.union(n(0), n(1));
        sets.union(n(1), n(2));
        sets.union(n(2), n(3));

        assert_eq!(sets.find(n(0)), n(3));
        // After compression every node points at the root
        assert_eq!(sets.parent, vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_separate_sets() {
        let mut sets = DisjointSet::new(5);
        sets.union(n(0), n(1));
        sets.union(n(3), n(4));
        assert_eq!(sets.find(n(1)), sets.find(n(0)));
        assert_eq!(sets.find(n(4)), sets.find(n(3)));
        assert_ne!(sets.find(n(0)), sets.find(n(4)));
        assert_eq!(sets.set_count(), 3);
    }

    #[test]
    fn test_empty() {
        let sets = DisjointSet::new(0);
        assert!(sets.is_empty());
        assert_eq!(sets.set_count(), 0);
    }
}
