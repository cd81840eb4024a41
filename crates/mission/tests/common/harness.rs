//! Mission-text builders and configuration helpers shared by the unit tests.

use roversim_core::Config;
use tracing_subscriber::EnvFilter;

/// Builds mission text from a plateau header and `(position, instructions)`
/// line pairs.
pub fn mission_text(plateau: &str, rovers: &[(&str, &str)]) -> String {
    let mut text = String::from(plateau);
    for (position, instructions) in rovers {
        text.push('\n');
        text.push_str(position);
        text.push('\n');
        text.push_str(instructions);
    }
    text.push('\n');
    text
}

/// The classic two-rover reference mission.
pub fn classic_mission() -> String {
    mission_text(
        "5 5",
        &[("1 2 N", "LMLMLMLMM"), ("3 3 E", "MMRMMRMRRM")],
    )
}

/// Default configuration with strict bounds disabled.
pub fn permissive_config() -> Config {
    let mut config = Config::default();
    config.simulation.strict_bounds = false;
    config
}

/// Installs a quiet test subscriber; safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
