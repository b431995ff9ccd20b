//! Tracing setup for the blogpad binary

use crate::error::{BlogpadError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "BLOGPAD_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install a global subscriber logging to stderr.
///
/// Stdout is left to command output.
pub fn init() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| {
            BlogpadError::Config(format!("failed to install tracing subscriber: {}", e))
        })
}
