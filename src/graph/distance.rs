//! Edge weights and path distances.
//!
//! Weights are signed integers so that Bellman-Ford and Floyd-Warshall can be
//! fed negative edges. Distances extend weights with an explicit infinity for
//! unreachable vertices: [`Distance::Infinite`] compares greater than every
//! finite distance and absorbs any addition.

use std::{fmt, ops::Add};

use serde::{Serialize, Serializer};

/// Weight of a single edge.
pub type Weight = i64;

/// Weight assigned to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: Weight = 1;

/// A path length that may be infinite.
///
/// The derived ordering places every `Finite` value below `Infinite`, which is
/// exactly the ordering relaxation needs: an unreached vertex is improved by
/// any finite path.
///
/// # Examples
///
/// ```rust
/// use graphkit::graph::Distance;
///
/// assert!(Distance::Finite(1_000) < Distance::Infinite);
/// assert_eq!(Distance::Finite(3) + 4, Distance::Finite(7));
/// assert_eq!(Distance::Infinite + -10, Distance::Infinite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Distance {
    /// A reachable vertex at the given path length
    Finite(Weight),
    /// An unreachable vertex
    #[default]
    Infinite,
}

impl Distance {
    /// Distance of the source vertex to itself.
    pub const ZERO: Distance = Distance::Finite(0);

    /// Returns `true` for [`Distance::Finite`].
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite path length, or `None` when unreachable.
    #[must_use]
    pub const fn finite(self) -> Option<Weight> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Infinite => None,
        }
    }

    /// Returns `true` if this distance is finite and below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Distance::Finite(value) if value < 0)
    }

    /// Adds `weight`, returning `None` if a finite sum overflows [`Weight`].
    ///
    /// Infinity absorbs the addition. Relaxation goes through this method so
    /// an out-of-range path length is reported instead of clamped.
    ///
    /// ```rust
    /// use graphkit::graph::{Distance, Weight};
    ///
    /// assert_eq!(Distance::Finite(3).checked_add(4), Some(Distance::Finite(7)));
    /// assert_eq!(Distance::Infinite.checked_add(Weight::MAX), Some(Distance::Infinite));
    /// assert_eq!(Distance::Finite(Weight::MAX).checked_add(1), None);
    /// ```
    #[must_use]
    pub fn checked_add(self, weight: Weight) -> Option<Distance> {
        match self {
            Distance::Finite(value) => value.checked_add(weight).map(Distance::Finite),
            Distance::Infinite => Some(Distance::Infinite),
        }
    }
}

/// Saturating addition, for display and test arithmetic.
///
/// Algorithms use [`Distance::checked_add`].

impl Add<Weight> for Distance {
    type Output = Distance;

    fn add(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(value) => Distance::Finite(value.saturating_add(weight)),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, other: Distance) -> Distance {
        match other {
            Distance::Finite(value) => self + value,
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl From<Weight> for Distance {
    fn from(value: Weight) -> Self {
        Distance::Finite(value)
    }
}

impl From<Option<Weight>> for Distance {
    fn from(value: Option<Weight>) -> Self {
        value.map_or(Distance::Infinite, Distance::Finite)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{value}"),
            Distance::Infinite => f.write_str("inf"),
        }
    }
}

impl Serialize for Distance {
    /// Finite distances serialize as numbers, infinite ones as `null`.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(value) => serializer.serialize_i64(*value),
            Distance::Infinite => serializer.serialize_none(),
        }
    }
}
