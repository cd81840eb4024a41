//! Common types used throughout the rover mission simulator.
//!
//! This module provides the building blocks shared across all components of
//! the simulator. It includes:
//! 1. **Position Types:** Strong types for grid coordinates and plateau bounds.
//! 2. **Error Handling:** The simulation error enum and its kind classification.

/// Grid position and plateau bound types.
pub mod position;

/// Error types and result alias.
pub mod error;

pub use error::{ErrorKind, Result, SimulationError};
pub use position::{Plateau, Position};
