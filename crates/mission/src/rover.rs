//! Rover state machine.
//!
//! A [`Rover`] owns its position, heading, and pending command stream. It is
//! created once from a parsed mission pair, mutated in place by each applied
//! command, and never destroyed during a run.

use std::fmt;

use crate::common::{Plateau, Position, Result, SimulationError};
use crate::compass::{Command, Heading};

/// A single rover: grid position, heading, and its pending command stream.
///
/// The `id` is the rover's zero-based position in the mission file; it is
/// significant for deterministic collision reporting and output ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rover {
    id: usize,
    position: Position,
    heading: Heading,
    commands: Vec<Command>,
}

impl Rover {
    /// Creates a rover from parsed mission data.
    ///
    /// # Arguments
    ///
    /// * `id` - Zero-based input order.
    /// * `position` - Starting cell.
    /// * `heading` - Starting heading.
    /// * `commands` - Decoded command stream, applied in order at deployment.
    pub const fn new(
        id: usize,
        position: Position,
        heading: Heading,
        commands: Vec<Command>,
    ) -> Self {
        Self {
            id,
            position,
            heading,
            commands,
        }
    }

    /// Zero-based input order of this rover.
    #[inline]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Current position.
    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Current heading.
    #[inline]
    pub const fn heading(&self) -> Heading {
        self.heading
    }

    /// Pending command stream; empty once the rover has been deployed.
    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Removes and returns the pending command stream.
    ///
    /// Deployment consumes the stream through this method so the rover can be
    /// mutated while its commands are iterated.
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Applies a single command to the rover.
    ///
    /// `Move` advances one cell along the compass delta for the current
    /// heading; `Left` and `Right` rotate via the compass table. The command
    /// alphabet is validated at parse time, so application itself cannot
    /// fail; bounds are enforced separately by [`Rover::enforce_boundary`].
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Move => {
                let (dx, dy) = self.heading.delta();
                self.position = self.position.translated(dx, dy);
            }
            Command::Left => self.heading = self.heading.turn_left(),
            Command::Right => self.heading = self.heading.turn_right(),
        }
    }

    /// Checks the rover's position against the plateau bounds.
    ///
    /// Called for every rover after construction, and after every forward
    /// move during deployment when strict bounds are enabled.
    ///
    /// # Arguments
    ///
    /// * `plateau` - The plateau the rover must remain on.
    ///
    /// # Returns
    ///
    /// `Ok(())` while the rover is on the plateau, otherwise
    /// [`SimulationError::OutOfBounds`] naming the rover and its position.
    pub fn enforce_boundary(&self, plateau: &Plateau) -> Result<()> {
        if plateau.contains(self.position) {
            Ok(())
        } else {
            Err(SimulationError::OutOfBounds {
                rover: self.id,
                position: self.position,
                x_max: plateau.x_max(),
                y_max: plateau.y_max(),
            })
        }
    }
}

impl fmt::Display for Rover {
    /// Renders the rover in mission output format: `x y H`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}
