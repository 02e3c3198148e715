//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "TARA_LOG";

/// Build the filter: TARA_LOG wins, otherwise `default_level`.
pub fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber. Diagnostics go to stderr so command output
/// on stdout stays clean. A second call is a no-op.
pub fn init_logging(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Whether `directive` parses as a tracing filter
pub fn is_valid_filter(directive: &str) -> bool {
    EnvFilter::try_new(directive).is_ok()
}
