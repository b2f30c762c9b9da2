//! Host
//!
//! Adapter between the function host and the evaluator: read the input document, evaluate it
//! and write the decision as JSON.

use std::{
    fs,
    io::{self, Read, Write},
};

use thiserror::Error;
use tracing::info;

use crate::{discounts::DiscountDecision, evaluator::evaluate_json};

pub mod config;
pub mod logging;

pub use config::{HostConfig, LogFormat, LoggingConfig};

/// Errors raised by the host adapter.
#[derive(Debug, Error)]
pub enum HostError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The decision could not be serialized.
    #[error("Failed to serialize decision: {0}")]
    Json(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

/// Read the input document from the configured file, or from `stdin` when none is set.
///
/// # Errors
///
/// Returns a [`HostError::Io`] if the document cannot be read.
pub fn read_document(config: &HostConfig, mut stdin: impl Read) -> Result<String, HostError> {
    if let Some(path) = config.input.as_deref() {
        return Ok(fs::read_to_string(path)?);
    }

    let mut document = String::new();

    stdin.read_to_string(&mut document)?;

    Ok(document)
}

/// Evaluate a document and write the decision to `output`.
///
/// Unreadable documents still produce the empty decision; only output failures are errors.
///
/// # Errors
///
/// Returns a [`HostError`] if the decision cannot be serialized or written.
pub fn respond(
    document: &str,
    pretty: bool,
    mut output: impl Write,
) -> Result<DiscountDecision, HostError> {
    let decision = evaluate_json(document);

    let json = if pretty {
        decision.to_json_pretty()?
    } else {
        decision.to_json()?
    };

    writeln!(output, "{json}")?;
    output.flush()?;

    info!(discounts = decision.discounts().len(), "decision written");

    Ok(decision)
}

/// Read, evaluate and respond using the given configuration.
///
/// # Errors
///
/// Returns a [`HostError`] if the input cannot be read or the output cannot be written.
pub fn run(
    config: &HostConfig,
    stdin: impl Read,
    output: impl Write,
) -> Result<DiscountDecision, HostError> {
    let document = read_document(config, stdin)?;

    respond(&document, config.pretty, output)
}
