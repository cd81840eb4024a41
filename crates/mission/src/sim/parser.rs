//! Mission file loading and parsing.
//!
//! This module turns raw mission text into validated simulator input. It performs:
//! 1. **Loading:** Reads the mission file from disk into a string.
//! 2. **Parsing:** Decodes the plateau header and each rover's position and
//!    instruction lines into typed values.
//! 3. **Validation:** Enforces the line-count rule, checks every starting
//!    position against the plateau, and rejects duplicate starting cells.
//!
//! Parsing is pure given the text: reparsing the same input yields rovers
//! with identical initial state.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::{Plateau, Position, Result, SimulationError};
use crate::compass::{Command, Heading};
use crate::rover::Rover;

/// A fully parsed and validated mission: the plateau plus the rover fleet in
/// input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mission {
    /// Plateau bounds from the header line.
    pub plateau: Plateau,
    /// Rovers in input order; `id` equals the index.
    pub rovers: Vec<Rover>,
}

/// Reads a mission file from disk.
///
/// # Arguments
///
/// * `path` - Path to the mission file.
///
/// # Returns
///
/// The file contents, or [`SimulationError::MissionRead`] if the path is
/// missing or unreadable.
pub fn load_mission(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SimulationError::MissionRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses mission text into a validated [`Mission`].
///
/// The text must hold an odd number of lines greater than one: the plateau
/// header, then one position line and one instruction line per rover. All
/// decoding and validation happens here, before any rover moves; deployment
/// operates on typed values only.
pub fn parse_mission(text: &str) -> Result<Mission> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() <= 1 || lines.len() % 2 == 0 {
        return Err(SimulationError::invalid_input(format!(
            "expected an odd number of lines greater than one, found {}",
            lines.len()
        )));
    }

    let plateau = parse_plateau(lines[0])?;

    let mut rovers = Vec::with_capacity((lines.len() - 1) / 2);
    for (id, pair) in lines[1..].chunks_exact(2).enumerate() {
        // 1-based line number of this rover's position line.
        let line = 2 + id * 2;
        let (position, heading) = parse_position_line(pair[0], line)?;
        let commands = parse_command_line(pair[1], id)?;
        rovers.push(Rover::new(id, position, heading, commands));
    }

    validate_starting_state(&plateau, &rovers)?;

    debug!(
        rovers = rovers.len(),
        x_max = plateau.x_max(),
        y_max = plateau.y_max(),
        "mission parsed"
    );
    Ok(Mission { plateau, rovers })
}

/// Parses the header line: two whitespace-separated non-negative integers.
fn parse_plateau(line: &str) -> Result<Plateau> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [x_max, y_max] => Ok(Plateau::new(parse_bound(x_max)?, parse_bound(y_max)?)),
        _ => Err(SimulationError::invalid_input(format!(
            "line 1: expected two plateau bounds, found {} token(s)",
            tokens.len()
        ))),
    }
}

/// Parses one plateau bound token, rejecting non-integers and negatives.
fn parse_bound(token: &str) -> Result<i64> {
    let bound: i64 = token.parse().map_err(|_| {
        SimulationError::invalid_input(format!("line 1: malformed plateau bound '{token}'"))
    })?;
    if bound < 0 {
        return Err(SimulationError::invalid_input(format!(
            "line 1: plateau bound '{token}' must be non-negative"
        )));
    }
    Ok(bound)
}

/// Parses a position line: `x y H` with two integers and a heading letter.
///
/// Negative coordinates parse successfully here; they are rejected as
/// `OutOfBounds` by the starting-state sweep, which owns the bounds rule.
fn parse_position_line(line: &str, line_no: usize) -> Result<(Position, Heading)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y, heading] = tokens.as_slice() else {
        return Err(SimulationError::invalid_input(format!(
            "line {line_no}: expected 'x y heading', found {} token(s)",
            tokens.len()
        )));
    };
    let x: i64 = x.parse().map_err(|_| {
        SimulationError::invalid_input(format!("line {line_no}: malformed x coordinate '{x}'"))
    })?;
    let y: i64 = y.parse().map_err(|_| {
        SimulationError::invalid_input(format!("line {line_no}: malformed y coordinate '{y}'"))
    })?;
    let heading: Heading = heading.parse().map_err(|_| {
        SimulationError::invalid_input(format!("line {line_no}: invalid heading '{heading}'"))
    })?;
    Ok((Position::new(x, y), heading))
}

/// Decodes an instruction line into typed commands.
///
/// The line may be empty. Any character outside `{L, R, M}` aborts the parse
/// with [`SimulationError::InvalidCommand`] naming the rover.
fn parse_command_line(line: &str, rover: usize) -> Result<Vec<Command>> {
    line.chars()
        .map(|c| Command::try_from(c).map_err(|found| SimulationError::InvalidCommand {
            rover,
            found,
        }))
        .collect()
}

/// Validates the freshly constructed fleet against the plateau.
///
/// Fails fast on the first rover outside the bounds, then on the first pair
/// of rovers sharing a starting cell; the collision invariant holds whenever
/// the simulator observes rover state, including construction.
fn validate_starting_state(plateau: &Plateau, rovers: &[Rover]) -> Result<()> {
    for rover in rovers {
        rover.enforce_boundary(plateau)?;
    }
    for (index, rover) in rovers.iter().enumerate() {
        if let Some(other) = rovers[..index]
            .iter()
            .find(|other| other.position() == rover.position())
        {
            return Err(SimulationError::RoverCollision {
                active: rover.id(),
                other: other.id(),
                position: rover.position(),
            });
        }
    }
    Ok(())
}
