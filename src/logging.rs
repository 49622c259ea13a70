//! Structured logging on stderr.
//!
//! Filter precedence: `RWORKDAY_LOG` (EnvFilter syntax), then `debug` when
//! `--verbose` is given, then `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RWORKDAY_LOG";

pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "rworkday=debug" } else { "warn" })
    })
}

/// Install the global subscriber; a second call is a no-op.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
