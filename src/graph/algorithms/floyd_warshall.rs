//! Floyd-Warshall all-pairs shortest paths.

use crate::{
    graph::{DistanceMatrix, NodeId},
    Error, Result,
};

/// Computes all-pairs shortest distances from an adjacency matrix.
///
/// Entry `(i, j)` of the input is the weight of the arc `i -> j` (or
/// [`Distance::Infinite`](crate::graph::Distance::Infinite) when there is none,
/// and normally zero on the diagonal). The input is left untouched; a new
/// matrix is returned in which entry `(i, j)` is the length of the shortest path
/// from `i` to `j`.
///
/// # Errors
///
/// - [`Error::NegativeCycle`] naming the first vertex whose distance to itself
///   ended up negative
/// - [`Error::Overflow`] if a path length leaves the range of
///   [`Weight`](crate::graph::Weight) and no negative cycle explains it
///
/// # Complexity
///
/// - Time: O(V³)
/// - Space: O(V²)
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{Distance, DistanceMatrix, algorithms::floyd_warshall};
///
/// let inf = None;
/// let matrix = DistanceMatrix::from_weights(vec![
///     vec![Some(0), Some(3), inf, Some(7)],
///     vec![Some(8), Some(0), Some(2), inf],
///     vec![Some(5), inf, Some(0), Some(1)],
///     vec![Some(2), inf, inf, Some(0)],
/// ])?;
///
/// let shortest = floyd_warshall(&matrix)?;
/// assert_eq!(shortest[(0, 2)], Distance::Finite(5));
/// assert_eq!(shortest[(1, 0)], Distance::Finite(5));
/// # Ok::<(), graphkit::Error>(())
/// ```
pub fn floyd_warshall(matrix: &DistanceMatrix) -> Result<DistanceMatrix> {
    let size = matrix.size();
    let mut dist = matrix.clone();

    for k in 0..size {
        for i in 0..size {
            let through_k = dist[(i, k)];
            if !through_k.is_finite() {
                continue;
            }
            for j in 0..size {
                let Some(weight) = dist[(k, j)].finite() else {
                    continue;
                };
                let Some(candidate) = through_k.checked_add(weight) else {
                    // A closed walk below Weight::MIN is a negative cycle
                    if i == j && weight < 0 {
                        return Err(negative_cycle(i));
                    }
                    if let Some(vertex) = negative_diagonal(&dist) {
                        return Err(negative_cycle(vertex));
                    }
                    return Err(Error::Overflow {
                        from: NodeId::new(i),
                        to: NodeId::new(j),
                    });
                };
                if candidate < dist[(i, j)] {
                    dist[(i, j)] = candidate;
                }
            }
        }
    }

    if let Some(vertex) = negative_diagonal(&dist) {
        return Err(negative_cycle(vertex));
    }

    log::debug!("floyd-warshall computed {size}x{size} distances");
    Ok(dist)
}

fn negative_diagonal(dist: &DistanceMatrix) -> Option<usize> {
    dist.diagonal().position(|d| d.is_negative())
}

fn negative_cycle(vertex: usize) -> Error {
    log::warn!("negative weight cycle detected through vertex {vertex}");
    Error::NegativeCycle(NodeId::new(vertex))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Distance;

    #[test]
    fn test_classic_example() {
        let inf = None;
        let matrix = DistanceMatrix::from_weights(vec![
            vec![Some(0), Some(3), inf, Some(7)],
            vec![Some(8), Some(0), Some(2), inf],
            vec![Some(5), inf, Some(0), Some(1)],
            vec![Some(2), inf, inf, Some(0)],
        ])
        .unwrap();

        let shortest = floyd_warshall(&matrix).unwrap();
        let expected = DistanceMatrix::from_weights(vec![
            vec![Some(0), Some(3), Some(5), Some(6)],
            vec![Some(5), Some(0), Some(2), Some(3)],
            vec![Some(3), Some(6), Some(0), Some(1)],
            vec![Some(2), Some(5), Some(7), Some(0)],
        ])
        .unwrap();
        assert_eq!(shortest, expected);
    }

    #[test]
    fn test_input_not_mutated() {
        let matrix =
            DistanceMatrix::from_weights(vec![vec![Some(0), Some(1)], vec![None, Some(0)]])
                .unwrap();
        let before = matrix.clone();
        let _ = floyd_warshall(&matrix).unwrap();
        assert_eq!(matrix, before);
    }

    #[test]
    fn test_unreachable_stays_infinite() {
        let matrix =
            DistanceMatrix::from_weights(vec![vec![Some(0), Some(4)], vec![None, Some(0)]])
                .unwrap();
        let shortest = floyd_warshall(&matrix).unwrap();
        assert_eq!(shortest[(1, 0)], Distance::Infinite);
        assert_eq!(shortest[(0, 1)], Distance::Finite(4));
    }

    #[test]
    fn test_negative_edge_without_cycle() {
        let matrix = DistanceMatrix::from_weights(vec![
            vec![Some(0), Some(4), Some(1)],
            vec![None, Some(0), None],
            vec![None, Some(-2), Some(0)],
        ])
        .unwrap();
        let shortest = floyd_warshall(&matrix).unwrap();
        assert_eq!(shortest[(0, 1)], Distance::Finite(-1));
        assert!(shortest.diagonal().all(|d| d == Distance::ZERO));
    }

    #[test]
    fn test_negative_cycle() {
        let matrix = DistanceMatrix::from_weights(vec![
            vec![Some(0), Some(1)],
            vec![Some(-2), Some(0)],
        ])
        .unwrap();
        assert!(matches!(
            floyd_warshall(&matrix),
            Err(Error::NegativeCycle(n)) if n == NodeId::new(0)
        ));
    }

    #[test]
    fn test_overflow_reported() {
        let inf = None;
        let matrix = DistanceMatrix::from_weights(vec![
            vec![Some(0), Some(i64::MIN), inf],
            vec![inf, Some(0), Some(-1)],
            vec![inf, inf, Some(0)],
        ])
        .unwrap();
        assert!(matches!(
            floyd_warshall(&matrix),
            Err(Error::Overflow { from, to }) if from == NodeId::new(0) && to == NodeId::new(2)
        ));
    }

    #[test]
    fn test_negative_cycle_below_weight_min() {
        let matrix = DistanceMatrix::from_weights(vec![
            vec![Some(0), Some(i64::MIN)],
            vec![Some(-1), Some(0)],
        ])
        .unwrap();
        assert!(matches!(
            floyd_warshall(&matrix),
            Err(Error::NegativeCycle(n)) if n == NodeId::new(1)
        ));
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = DistanceMatrix::new(0);
        assert!(floyd_warshall(&matrix).unwrap().is_empty());
    }
}
