//! Mission statistics collection and reporting.
//!
//! This module tracks run metrics for the simulator. It provides:
//! 1. **Command mix:** Counts of moves and left/right turns applied.
//! 2. **Fleet progress:** Rovers fully deployed and collision checks performed.
//! 3. **Timing:** Wall-clock duration since simulator construction.

use std::time::Instant;

use crate::compass::Command;

/// Run statistics tracked by the simulator.
#[derive(Clone, Debug)]
pub struct MissionStats {
    start_time: Instant,
    /// Rovers whose full command stream has been replayed.
    pub rovers_deployed: u64,
    /// Forward moves applied.
    pub moves: u64,
    /// Counter-clockwise turns applied.
    pub left_turns: u64,
    /// Clockwise turns applied.
    pub right_turns: u64,
    /// Collision scans performed (one per applied command).
    pub collision_checks: u64,
}

impl MissionStats {
    /// Creates zeroed statistics with the clock started now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            rovers_deployed: 0,
            moves: 0,
            left_turns: 0,
            right_turns: 0,
            collision_checks: 0,
        }
    }

    /// Records one applied command in the mix counters.
    pub const fn record(&mut self, command: Command) {
        match command {
            Command::Move => self.moves += 1,
            Command::Left => self.left_turns += 1,
            Command::Right => self.right_turns += 1,
        }
    }

    /// Total commands applied across the fleet.
    #[inline]
    pub const fn commands_applied(&self) -> u64 {
        self.moves + self.left_turns + self.right_turns
    }

    /// Prints the statistics block to stdout.
    pub fn print(&self) {
        let elapsed = self.start_time.elapsed();
        println!();
        println!("--- Mission Statistics ---");
        println!("Rovers deployed:   {}", self.rovers_deployed);
        println!(
            "Commands applied:  {} ({} moves, {} left, {} right)",
            self.commands_applied(),
            self.moves,
            self.left_turns,
            self.right_turns
        );
        println!("Collision checks:  {}", self.collision_checks);
        println!("Elapsed:           {:.3?}", elapsed);
    }
}

impl Default for MissionStats {
    fn default() -> Self {
        Self::new()
    }
}
