//! Logging bootstrap.
//!
//! Structured logging via `tracing`; consumers opt in by calling
//! [`init_logging`] once at startup.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr.
///
/// Filter precedence: the `STRATA_LOG` environment variable (full
/// `EnvFilter` directive syntax), then `level`, then `error`. Subsequent
/// calls are no-ops, so libraries and tests can call this freely.
pub fn init_logging(level: Option<&str>) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("STRATA_LOG")
            .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("error")));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
