// ABOUTME: Tracing subscriber setup for the CLI
// ABOUTME: Honors RUST_LOG and stays quiet by default so command output is readable

use blogroll_config::constants::RUST_LOG;
use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is unset
pub const DEFAULT_FILTER: &str = "warn";

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
