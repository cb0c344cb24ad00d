//! Single-source shortest path results.

use serde::Serialize;

use crate::{
    graph::{Distance, NodeId, Weight},
    Error, Result,
};

/// Distances and predecessor links computed from a single source vertex.
///
/// Produced by [`dijkstra`](super::dijkstra) and
/// [`bellman_ford`](super::bellman_ford). Every vertex starts at
/// [`Distance::Infinite`] except the source, which starts at zero. Relaxation
/// only ever lowers a distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    source: NodeId,
    distances: Vec<Distance>,
    #[serde(skip)]
    predecessors: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    pub(crate) fn new(vertex_count: usize, source: NodeId) -> Self {
        let mut distances = vec![Distance::Infinite; vertex_count];
        if let Some(slot) = distances.get_mut(source.index()) {
            *slot = Distance::ZERO;
        }
        ShortestPaths {
            source,
            distances,
            predecessors: vec![None; vertex_count],
        }
    }

    /// Tries to improve `target` via the arc `from -> target` of weight `weight`.
    ///
    /// Returns `Ok(true)` if the distance of `target` decreased, and
    /// [`Error::Overflow`] if the candidate distance does not fit in a [`Weight`].
    pub(crate) fn relax(&mut self, from: NodeId, target: NodeId, weight: Weight) -> Result<bool> {
        let current = self.distances[from.index()];
        if !current.is_finite() {
            return Ok(false);
        }

        let candidate = current
            .checked_add(weight)
            .ok_or(Error::Overflow { from, to: target })?;
        if candidate < self.distances[target.index()] {
            self.distances[target.index()] = candidate;
            self.predecessors[target.index()] = Some(from);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// The vertex distances were computed from.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance of `node` from the source; [`Distance::Infinite`] for unknown nodes.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Distance {
        self.distances
            .get(node.index())
            .copied()
            .unwrap_or(Distance::Infinite)
    }

    /// All distances, indexed by [`NodeId::index`].
    #[must_use]
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// The vertex preceding `node` on its shortest path, if any.
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node.index()).copied().flatten()
    }

    /// Returns `true` if `node` is reachable from the source.
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_finite()
    }

    /// Rebuilds the shortest path from the source to `target`.
    ///
    /// Returns `None` if `target` is unreachable. The path to the source itself
    /// is `[source]`.
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessor(current) {
            if path.len() > self.distances.len() {
                // Predecessor links only loop when a negative cycle was left in place
                return None;
            }
            path.push(previous);
            current = previous;
        }

        path.reverse();
        (path.first() == Some(&self.source)).then_some(path)
    }

    /// Iterates over `(node, distance)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Distance)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .map(|(index, &distance)| (NodeId::new(index), distance))
    }
}
