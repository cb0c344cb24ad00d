//! Dense square distance matrices.
//!
//! [`DistanceMatrix`] is the input and output of
//! [`floyd_warshall`](crate::algorithms::floyd_warshall). Entry `(i, j)` holds the
//! length of the best known path from vertex `i` to vertex `j`, or
//! [`Distance::Infinite`] when there is none.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use serde::{ser::SerializeSeq, Serialize, Serializer};

use crate::{
    graph::{Distance, Weight},
    Error, Result,
};

/// A square `n x n` matrix of [`Distance`] values stored in row-major order.
///
/// Squareness is enforced at construction, so algorithms can index any
/// `(i, j)` with `i, j < size()` without further checks.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::{Distance, DistanceMatrix};
///
/// let inf = None;
/// let matrix = DistanceMatrix::from_weights(vec![
///     vec![Some(0), Some(3), inf],
///     vec![inf, Some(0), Some(1)],
///     vec![Some(2), inf, Some(0)],
/// ])?;
///
/// assert_eq!(matrix.size(), 3);
/// assert_eq!(matrix[(0, 1)], Distance::Finite(3));
/// assert_eq!(matrix[(0, 2)], Distance::Infinite);
/// # Ok::<(), graphkit::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    /// Creates an `n x n` matrix with zeros on the diagonal and infinity elsewhere.
    ///
    /// This is the starting point of an all-pairs computation on a graph without edges.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let mut cells = vec![Distance::Infinite; size * size];
        for i in 0..size {
            cells[i * size + i] = Distance::ZERO;
        }
        DistanceMatrix { size, cells }
    }

    /// Builds a matrix from rows of distances.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedMatrix`] if any row length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<Distance>>) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(Error::MalformedMatrix {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            cells.extend(values);
        }
        Ok(DistanceMatrix { size, cells })
    }

    /// Builds a matrix from rows of optional weights, `None` meaning "no edge".
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedMatrix`] if the rows do not form a square.
    pub fn from_weights(rows: Vec<Vec<Option<Weight>>>) -> Result<Self> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Distance::from).collect())
                .collect(),
        )
    }

    /// Returns the dimension `n` of this `n x n` matrix.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the entry at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Distance> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Returns one row as a slice, or `None` if out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Distance]> {
        if row < self.size {
            Some(&self.cells[row * self.size..(row + 1) * self.size])
        } else {
            None
        }
    }

    /// Iterates over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[Distance]> {
        // chunks() panics on a zero chunk size, so guard the empty matrix
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    /// Iterates over the diagonal entries.
    pub fn diagonal(&self) -> impl Iterator<Item = Distance> + '_ {
        (0..self.size).map(move |i| self.cells[i * self.size + i])
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = Distance;

    fn index(&self, (row, col): (usize, usize)) -> &Distance {
        assert!(
            row < self.size && col < self.size,
            "matrix index ({row}, {col}) out of bounds for size {}",
            self.size
        );
        &self.cells[row * self.size + col]
    }
}

impl IndexMut<(usize, usize)> for DistanceMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Distance {
        assert!(
            row < self.size && col < self.size,
            "matrix index ({row}, {col}) out of bounds for size {}",
            self.size
        );
        &mut self.cells[row * self.size + col]
    }
}

impl fmt::Display for DistanceMatrix {
    /// One bracketed row per line, e.g. `[0, 3, inf]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}

impl Serialize for DistanceMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.size))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
