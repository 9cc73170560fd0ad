//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";
/// Filter used with `--quiet`
pub const QUIET_FILTER: &str = "warn";

/// Filter directive for the requested verbosity
pub const fn default_directive(quiet: bool) -> &'static str {
    if quiet { QUIET_FILTER } else { DEFAULT_FILTER }
}

/// Install a formatted stderr subscriber, honouring `RUST_LOG`
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing(quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));
    // A subscriber installed earlier (e.g. by a test harness) wins
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::debug!(%err, "Tracing subscriber already installed");
    }
}
