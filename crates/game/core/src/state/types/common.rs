use std::fmt;

use crate::grid::DistanceMetric;

/// Unique identifier for any object tracked in the snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
///
/// `North` is `+y` and `East` is `+x`. Positions are not bounded; use
/// [`crate::MapDimensions::contains`] to ask whether one lies on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by `(dx, dy)`.
    ///
    /// Wraps at the `i32` limits, so neighbours of the extreme coordinates
    /// are still four distinct tiles. Such tiles are never on the board.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Movement cost between two tiles for 4-directional stepping.
    ///
    /// Equivalent to `self.distance(other, DistanceMetric::Manhattan)`.
    #[inline]
    pub fn walking_distance_to(self, other: Position) -> u64 {
        self.distance(other, DistanceMetric::Manhattan)
    }

    /// Distance between two tiles under the given metric.
    ///
    /// Widened to `u64` so any pair of coordinates has a distance.
    pub fn distance(self, other: Position, metric: DistanceMetric) -> u64 {
        let dx = u64::from(self.x.abs_diff(other.x));
        let dy = u64::from(self.y.abs_diff(other.y));
        match metric {
            DistanceMetric::Manhattan => dx + dy,
            DistanceMetric::Chebyshev => dx.max(dy),
        }
    }

    /// True when `other` shares an edge with this tile.
    #[inline]
    pub fn is_orthogonally_adjacent(self, other: Position) -> bool {
        self.walking_distance_to(other) == 1
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
