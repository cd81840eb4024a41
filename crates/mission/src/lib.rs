//! Mars rover mission simulator library.
//!
//! This crate implements a deterministic plateau mission simulator with the following:
//! 1. **Common:** Strong position/plateau types and the simulation error enum.
//! 2. **Compass:** Headings, commands, and the fixed rotation/translation table.
//! 3. **Rover:** The per-rover state machine and boundary enforcement.
//! 4. **Simulation:** Mission loading, parsing/validation, and sequential deployment
//!    with collision detection.
//! 5. **Configuration & Statistics:** Run policy (JSON or defaults) and command-mix
//!    reporting.

/// Common types (positions, plateau bounds, errors).
pub mod common;
/// Heading/command semantics and the compass table.
pub mod compass;
/// Simulator configuration (defaults and JSON loading).
pub mod config;
/// Rover state machine.
pub mod rover;
/// Mission loading, parsing, and deployment.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Per-rover state machine; constructed by the mission parser.
pub use crate::rover::Rover;
/// Top-level simulator; construct with `Simulator::from_path` or `Simulator::new`.
pub use crate::sim::simulator::{MissionReport, Simulator};
/// Crate-wide error and result types.
pub use crate::common::{Result, SimulationError};
