//! Host configuration

use std::path::PathBuf;

use clap::{Args, Parser};

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Discount function host configuration
#[derive(Debug, Parser)]
#[command(
    name = "bess-discount",
    about = "Evaluate honey jar discounts for a cart snapshot",
    long_about = None
)]
pub struct HostConfig {
    /// Input document path; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write indented JSON
    #[arg(short, long, default_value_t = false)]
    pub pretty: bool,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl HostConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_read_stdin_compactly() -> TestResult {
        let config = HostConfig::try_parse_from(["bess-discount"])?;

        assert!(config.input.is_none());
        assert!(!config.pretty);
        assert_eq!(config.logging.log_format, LogFormat::Compact);

        Ok(())
    }

    #[test]
    fn flags_are_parsed() -> TestResult {
        let config = HostConfig::try_parse_from([
            "bess-discount",
            "--input",
            "cart.json",
            "--pretty",
            "--log-format",
            "json",
            "--log-level",
            "debug",
        ])?;

        assert_eq!(config.input, Some(PathBuf::from("cart.json")));
        assert!(config.pretty);
        assert_eq!(config.logging.log_format, LogFormat::Json);
        assert_eq!(config.logging.log_level, "debug");

        Ok(())
    }

    #[test]
    fn only_logging_reads_the_environment() {
        let command = HostConfig::command();

        let env_backed: Vec<&str> = command
            .get_arguments()
            .filter(|arg| arg.get_env().is_some())
            .map(|arg| arg.get_id().as_str())
            .collect();

        assert_eq!(env_backed, vec!["log_level", "log_format"]);
    }
}
