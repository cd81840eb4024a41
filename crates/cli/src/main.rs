//! Mars rover mission simulator CLI.
//!
//! This binary is the single entry point for running missions. It performs:
//! 1. **Setup:** Loads configuration (JSON file or defaults) and installs the
//!    tracing subscriber.
//! 2. **Run:** Loads and parses the mission file, deploys the rovers, and prints
//!    one `x y H` line per rover in input order.
//! 3. **Reporting:** Prints the statistics block after a successful run and maps
//!    each failure kind to a distinct non-zero exit code.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::{EnvFilter, Registry, fmt as subscriber_fmt, prelude::*};

use roversim_core::Config;
use roversim_core::Simulator;
use roversim_core::common::ErrorKind;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "Mars rover plateau mission simulator",
    long_about = "Replay a mission file: a plateau bounds header followed by position/instruction \
line pairs, one pair per rover.\n\nRovers are deployed sequentially and deterministically; the run \
aborts on the first malformed line, boundary violation, or collision.\n\nExamples:\n  \
sim missions/5_by_5_two_rovers.txt\n  sim missions/5_by_5_two_rovers.txt --config sim.json\n  \
sim missions/5_by_5_collision.txt --permissive-bounds"
)]
struct Cli {
    /// Mission file: plateau bounds line, then a position line and an
    /// instruction line per rover.
    mission: PathBuf,

    /// JSON configuration file (defaults are used when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not re-check the plateau boundary during deployment; rovers may
    /// then finish off-plateau (boundary is still checked at construction).
    #[arg(long)]
    permissive_bounds: bool,

    /// Suppress the banner and statistics block; print only final rover states.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::from_json_file(path).unwrap_or_else(|e| {
            eprintln!("[!] {}: {e}", e.kind().as_str());
            process::exit(exit_code(e.kind()));
        }),
        None => Config::default(),
    };
    if cli.permissive_bounds {
        config.simulation.strict_bounds = false;
    }

    init_tracing(&config);

    let mut simulator = match Simulator::from_path(&cli.mission, &config) {
        Ok(simulator) => simulator,
        Err(e) => {
            eprintln!("[!] {}: {e}", e.kind().as_str());
            process::exit(exit_code(e.kind()));
        }
    };

    if !cli.quiet {
        println!(
            "[*] Mission: {}  Plateau: {}  Rovers: {}  Strict bounds: {}",
            cli.mission.display(),
            simulator.plateau(),
            simulator.rovers().len(),
            config.simulation.strict_bounds
        );
        println!();
    }

    match simulator.deploy() {
        Ok(final_states) => {
            print!("{final_states}");
            if !cli.quiet {
                simulator.stats().print();
            }
        }
        Err(e) => {
            eprintln!("\n[!] {}: {e}", e.kind().as_str());
            process::exit(exit_code(e.kind()));
        }
    }
}

/// Distinct exit code per error kind, so scripted callers can branch on the
/// failure category without parsing stderr.
const fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::InvalidInput => 2,
        ErrorKind::OutOfBounds => 3,
        ErrorKind::InvalidCommand => 4,
        ErrorKind::RoverCollision => 5,
    }
}

/// Installs the global tracing subscriber.
///
/// An explicit `RUST_LOG` wins; otherwise the configured log level is used.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    let _ = Registry::default()
        .with(filter)
        .with(subscriber_fmt::layer())
        .try_init();
}
