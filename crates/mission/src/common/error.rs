//! Simulation error definitions.
//!
//! This module defines the failure modes of the mission pipeline. It provides:
//! 1. **Error Representation:** One enum covering every way a run can abort, from
//!    unreadable input through mid-deployment collisions.
//! 2. **Error Kinds:** A coarse classification used by callers that map failures
//!    to exit codes or reports without matching on variant payloads.
//! 3. **Error Handling:** Integration with standard Rust error traits for
//!    system-level reporting.

use std::path::PathBuf;

use thiserror::Error;

use super::position::Position;

/// Convenience alias used throughout the simulator.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Coarse classification of a [`SimulationError`].
///
/// Every error the pipeline can raise belongs to exactly one kind. The CLI
/// maps kinds to distinct process exit codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The mission source is missing, unreadable, or textually malformed.
    InvalidInput,
    /// A rover's position lies outside the plateau.
    OutOfBounds,
    /// An instruction character outside the command alphabet.
    InvalidCommand,
    /// Two rovers occupy the same cell.
    RoverCollision,
}

impl ErrorKind {
    /// Returns the canonical name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid input",
            Self::OutOfBounds => "out of bounds",
            Self::InvalidCommand => "invalid command",
            Self::RoverCollision => "rover collision",
        }
    }
}

/// Errors raised while parsing, validating, or deploying a mission.
///
/// All variants are fail-fast and non-recoverable for the current run:
/// construction aborts on the first input or bounds failure, deployment on
/// the first collision. Rover state is left exactly as far as it advanced.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The mission file could not be read from disk.
    #[error("mission file '{path}' could not be read: {source}")]
    MissionRead {
        /// Path the loader attempted to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The mission text is malformed (line count, header, or position line).
    #[error("{reason}")]
    InvalidInput {
        /// Human-readable description of the defect, including the line
        /// number where one applies.
        reason: String,
    },

    /// A rover's position lies outside the plateau bounds.
    ///
    /// Raised when validating starting positions at construction and, under
    /// strict bounds, after every forward move during deployment.
    #[error("rover {rover} at {position} is outside the plateau (0..={x_max}, 0..={y_max})")]
    OutOfBounds {
        /// Zero-based input order of the offending rover.
        rover: usize,
        /// The out-of-range position.
        position: Position,
        /// Inclusive upper easting bound of the plateau.
        x_max: i64,
        /// Inclusive upper northing bound of the plateau.
        y_max: i64,
    },

    /// An instruction character outside `{L, R, M}`.
    #[error("rover {rover}: invalid command character '{found}'")]
    InvalidCommand {
        /// Zero-based input order of the rover whose stream held the character.
        rover: usize,
        /// The offending character.
        found: char,
    },

    /// Two distinct rovers occupy the same cell.
    #[error("rover {active} collided with rover {other} at {position}")]
    RoverCollision {
        /// The rover that was moving when the collision was observed.
        active: usize,
        /// The rover already occupying the cell.
        other: usize,
        /// The contested cell.
        position: Position,
    },
}

impl SimulationError {
    /// Builds an [`SimulationError::InvalidInput`] from any displayable reason.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns the coarse classification of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissionRead { .. } | Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            Self::InvalidCommand { .. } => ErrorKind::InvalidCommand,
            Self::RoverCollision { .. } => ErrorKind::RoverCollision,
        }
    }
}
