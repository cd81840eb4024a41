//! Grid position and plateau types.
//!
//! This module defines strong types for locations on the plateau grid to prevent
//! accidental mixing of coordinates and bounds. It provides the following:
//! 1. **Type Safety:** Distinguishes a rover's location from the plateau's extent at compile time.
//! 2. **Coordinate Arithmetic:** Helper methods for applying unit translations.
//! 3. **Bounds Checking:** A single predicate deciding whether a position lies on the plateau.

use std::fmt;

/// A coordinate pair on the plateau grid.
///
/// Coordinates are signed: a westward or southward step off the grid must
/// produce a representable out-of-range value rather than wrapping, so that
/// boundary enforcement can observe it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Easting, in grid cells from the south-west corner.
    pub x: i64,
    /// Northing, in grid cells from the south-west corner.
    pub y: i64,
}

impl Position {
    /// Creates a new position from raw coordinates.
    ///
    /// # Arguments
    ///
    /// * `x` - The easting coordinate.
    /// * `y` - The northing coordinate.
    ///
    /// # Returns
    ///
    /// A new `Position` at the given cell.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by a unit translation.
    ///
    /// # Arguments
    ///
    /// * `dx` - Easting delta, in cells.
    /// * `dy` - Northing delta, in cells.
    ///
    /// # Returns
    ///
    /// The translated `Position`; the original is unchanged.
    #[inline]
    pub const fn translated(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The rectangular grid the rovers traverse.
///
/// A plateau is described by its north-east corner `(x_max, y_max)`; the
/// south-west corner is always `(0, 0)`. Both bounds are inclusive, so a
/// `5 x 5` plateau contains 36 cells. The bounds are immutable for the
/// lifetime of a simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plateau {
    x_max: i64,
    y_max: i64,
}

impl Plateau {
    /// Creates a plateau from its north-east corner.
    ///
    /// Callers must supply non-negative bounds; the mission parser rejects
    /// negative header tokens before this constructor runs.
    ///
    /// # Arguments
    ///
    /// * `x_max` - Inclusive upper easting bound.
    /// * `y_max` - Inclusive upper northing bound.
    ///
    /// # Returns
    ///
    /// A new `Plateau` with the given extent.
    #[inline]
    pub const fn new(x_max: i64, y_max: i64) -> Self {
        Self { x_max, y_max }
    }

    /// Returns the inclusive upper easting bound.
    #[inline]
    pub const fn x_max(&self) -> i64 {
        self.x_max
    }

    /// Returns the inclusive upper northing bound.
    #[inline]
    pub const fn y_max(&self) -> i64 {
        self.y_max
    }

    /// Reports whether a position lies on the plateau.
    ///
    /// A valid position satisfies `0 <= x <= x_max` and `0 <= y <= y_max`.
    /// This predicate is the single bounds rule used at mission construction
    /// and during deployment.
    ///
    /// # Arguments
    ///
    /// * `position` - The cell to test.
    ///
    /// # Returns
    ///
    /// `true` if the position is within bounds on both axes.
    #[inline]
    pub const fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x <= self.x_max && position.y <= self.y_max
    }
}

impl fmt::Display for Plateau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.x_max, self.y_max)
    }
}
