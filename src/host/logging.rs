//! Logging subscriber initialisation.
//!
//! Logs go to stderr; stdout carries the decision document.

use std::io;

use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

use crate::host::{
    HostError,
    config::{LogFormat, LoggingConfig},
};

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns a [`HostError::Logging`] if a global subscriber is already installed.
pub fn init_subscriber(config: &LoggingConfig) -> Result<(), HostError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config))
        .with_writer(io::stderr)
        .with_target(true);

    match config.log_format {
        LogFormat::Compact => builder.compact().finish().try_init()?,
        LogFormat::Json => builder.json().with_current_span(true).finish().try_init()?,
    }

    Ok(())
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"))
}
