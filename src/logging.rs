//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so the tree printed on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a full filter directive, e.g. `dirtree=debug`.
pub const LOG_ENV: &str = "DIRTREE_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `DIRTREE_LOG` wins over the `-v` count.
fn build_env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)))
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
