//! Heading and command semantics.
//!
//! This module is the single source of truth for rover movement. It provides:
//! 1. **Headings:** The four cardinal directions with their cyclic ordering.
//! 2. **Commands:** The instruction alphabet (`L`, `R`, `M`) and its decoding.
//! 3. **Compass Table:** A fixed lookup giving, for each heading, its left and
//!    right successors and the unit translation of a forward move.
//!
//! Rotation and translation are pure lookups into the compass table; no
//! branching logic elsewhere duplicates these semantics.

use std::fmt;
use std::str::FromStr;

use crate::common::SimulationError;

/// Cardinal heading of a rover.
///
/// Headings form a cyclic group of order 4 in clockwise order
/// `North -> East -> South -> West -> North`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Facing north (`N`); a forward move increments `y`.
    North,
    /// Facing east (`E`); a forward move increments `x`.
    East,
    /// Facing south (`S`); a forward move decrements `y`.
    South,
    /// Facing west (`W`); a forward move decrements `x`.
    West,
}

/// One row of the compass table: turn successors and the unit translation of
/// a forward move while on this heading.
#[derive(Clone, Copy, Debug)]
struct CompassEntry {
    /// Heading after a counter-clockwise quarter turn.
    left: Heading,
    /// Heading after a clockwise quarter turn.
    right: Heading,
    /// Easting delta of a forward move.
    dx: i64,
    /// Northing delta of a forward move.
    dy: i64,
}

/// Rotation and translation semantics for all four headings, indexed by
/// [`Heading::index`].
///
/// This table is the only place the quarter-turn cycle and the per-heading
/// movement deltas are written down.
const COMPASS: [CompassEntry; 4] = [
    // North
    CompassEntry {
        left: Heading::West,
        right: Heading::East,
        dx: 0,
        dy: 1,
    },
    // East
    CompassEntry {
        left: Heading::North,
        right: Heading::South,
        dx: 1,
        dy: 0,
    },
    // South
    CompassEntry {
        left: Heading::East,
        right: Heading::West,
        dx: 0,
        dy: -1,
    },
    // West
    CompassEntry {
        left: Heading::South,
        right: Heading::North,
        dx: -1,
        dy: 0,
    },
];

impl Heading {
    /// Row index of this heading in [`COMPASS`].
    #[inline]
    const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Returns the heading after a counter-clockwise quarter turn (`L`).
    #[inline]
    pub const fn turn_left(self) -> Self {
        COMPASS[self.index()].left
    }

    /// Returns the heading after a clockwise quarter turn (`R`).
    #[inline]
    pub const fn turn_right(self) -> Self {
        COMPASS[self.index()].right
    }

    /// Returns the `(dx, dy)` unit translation of a forward move (`M`) while
    /// on this heading.
    #[inline]
    pub const fn delta(self) -> (i64, i64) {
        let entry = &COMPASS[self.index()];
        (entry.dx, entry.dy)
    }

    /// Returns the single-letter mission file representation.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = char;

    /// Decodes a heading letter; the offending character is returned on
    /// failure so callers can report it in context.
    fn try_from(value: char) -> std::result::Result<Self, char> {
        match value {
            'N' => Ok(Self::North),
            'E' => Ok(Self::East),
            'S' => Ok(Self::South),
            'W' => Ok(Self::West),
            other => Err(other),
        }
    }
}

impl FromStr for Heading {
    type Err = SimulationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c).map_err(|found| {
                SimulationError::invalid_input(format!("invalid heading letter '{found}'"))
            }),
            _ => Err(SimulationError::invalid_input(format!(
                "expected a single heading letter, found '{s}'"
            ))),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single movement instruction drawn from the mission file alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// `L`: rotate one quarter turn counter-clockwise.
    Left,
    /// `R`: rotate one quarter turn clockwise.
    Right,
    /// `M`: advance one cell along the current heading.
    Move,
}

impl Command {
    /// Returns the single-letter mission file representation.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Move => 'M',
        }
    }
}

impl TryFrom<char> for Command {
    type Error = char;

    /// Decodes an instruction character; the offending character is returned
    /// on failure so callers can raise `InvalidCommand` with rover context.
    fn try_from(value: char) -> std::result::Result<Self, char> {
        match value {
            'L' => Ok(Self::Left),
            'R' => Ok(Self::Right),
            'M' => Ok(Self::Move),
            other => Err(other),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
