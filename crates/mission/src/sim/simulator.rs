//! Simulator: owns the plateau and the rover fleet side-by-side.
//!
//! Construction takes a parsed [`Mission`] (or a path/text convenience
//! route through the parser) plus a [`Config`]; deployment replays each
//! rover's command stream strictly in input order and produces the final
//! [`MissionReport`].

use std::fmt;
use std::path::Path;

use tracing::{debug, trace};

use crate::common::{Plateau, Position, Result, SimulationError};
use crate::compass::{Command, Heading};
use crate::config::Config;
use crate::rover::Rover;
use crate::sim::parser::{self, Mission};
use crate::stats::MissionStats;

/// Top-level simulator: plateau bounds + rover fleet + run statistics.
///
/// The simulator exclusively owns all rover state for the duration of a run.
/// Every rover it observes is within the plateau bounds: starting positions
/// are validated by the parser, and (under strict bounds) every forward move
/// is re-checked during deployment.
#[derive(Debug)]
pub struct Simulator {
    plateau: Plateau,
    rovers: Vec<Rover>,
    strict_bounds: bool,
    stats: MissionStats,
}

impl Simulator {
    /// Creates a simulator from a parsed mission and configuration.
    pub fn new(mission: Mission, config: &Config) -> Self {
        Self {
            plateau: mission.plateau,
            rovers: mission.rovers,
            strict_bounds: config.simulation.strict_bounds,
            stats: MissionStats::new(),
        }
    }

    /// Loads, parses, and constructs in one step from a mission file path.
    pub fn from_path(path: &Path, config: &Config) -> Result<Self> {
        let text = parser::load_mission(path)?;
        Self::from_text(&text, config)
    }

    /// Parses and constructs in one step from mission text.
    pub fn from_text(text: &str, config: &Config) -> Result<Self> {
        Ok(Self::new(parser::parse_mission(text)?, config))
    }

    /// Plateau bounds for this run.
    #[inline]
    pub const fn plateau(&self) -> Plateau {
        self.plateau
    }

    /// The rover fleet in input order.
    #[inline]
    pub fn rovers(&self) -> &[Rover] {
        &self.rovers
    }

    /// Statistics collected so far.
    #[inline]
    pub const fn stats(&self) -> &MissionStats {
        &self.stats
    }

    /// Replays every rover's command stream and reports final positions.
    ///
    /// Rovers are processed strictly in construction order, and each rover's
    /// commands strictly in stream order; the streams are never interleaved.
    /// After every applied command the active rover is checked against all
    /// others for a collision, and after every forward move against the
    /// plateau bounds when strict bounds are enabled. The first failure
    /// aborts the run, leaving rover state exactly as far as it advanced.
    pub fn deploy(&mut self) -> Result<MissionReport> {
        for index in 0..self.rovers.len() {
            debug!(rover = index, start = %self.rovers[index], "deploying rover");
            let commands = self.rovers[index].take_commands();
            for command in commands {
                self.rovers[index].apply(command);
                self.stats.record(command);
                trace!(rover = index, command = %command, state = %self.rovers[index], "command applied");
                if self.strict_bounds && command == Command::Move {
                    self.rovers[index].enforce_boundary(&self.plateau)?;
                }
                self.detect_collision(index)?;
            }
            self.stats.rovers_deployed += 1;
        }
        Ok(self.report())
    }

    /// Fails if any other rover occupies the active rover's cell.
    fn detect_collision(&mut self, active: usize) -> Result<()> {
        self.stats.collision_checks += 1;
        let position = self.rovers[active].position();
        match self
            .rovers
            .iter()
            .find(|other| other.id() != active && other.position() == position)
        {
            Some(other) => Err(SimulationError::RoverCollision {
                active,
                other: other.id(),
                position,
            }),
            None => Ok(()),
        }
    }

    /// Snapshots the fleet's current state in input order.
    fn report(&self) -> MissionReport {
        MissionReport {
            states: self
                .rovers
                .iter()
                .map(|rover| RoverState {
                    position: rover.position(),
                    heading: rover.heading(),
                })
                .collect(),
        }
    }
}

/// Final state of a single rover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoverState {
    /// Final cell.
    pub position: Position,
    /// Final heading.
    pub heading: Heading,
}

impl fmt::Display for RoverState {
    /// Renders the mission output line format: `x y H`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.position.x, self.position.y, self.heading
        )
    }
}

/// Final state of every rover, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionReport {
    states: Vec<RoverState>,
}

impl MissionReport {
    /// Per-rover final states in input order.
    #[inline]
    pub fn states(&self) -> &[RoverState] {
        &self.states
    }
}

impl fmt::Display for MissionReport {
    /// Renders one `x y H` line per rover, in input order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.states {
            writeln!(f, "{state}")?;
        }
        Ok(())
    }
}
