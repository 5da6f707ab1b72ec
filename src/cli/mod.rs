//! Command-line interface for the marketplace validator.
//!
//! The binary takes exactly one positional argument, the manifest to check:
//!
//! ```bash
//! validate-marketplace .claude-plugin/marketplace.json
//! ```
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Document is valid |
//! | 1 | Bad arguments, unreadable file, invalid JSON, or schema violations |
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug logging on stderr
//! - `--quiet` - Disable logging entirely
//!
//! stdout carries only the validation report, so CI jobs can capture and grep
//! it without filtering log noise.
//!
//! Paths in the report are printed exactly as given on the command line, with
//! no normalization: `validate-marketplace ./marketplace.json` prints
//! `✓ ./marketplace.json is valid`, not `✓ marketplace.json is valid`.

pub mod validate;


use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::constants::{MARKETPLACE_SCHEMA_URL, SCHEMA_FETCH_TIMEOUT};
use validate::ValidateCommand;

/// Runtime configuration for CLI execution.
///
/// Built from the parsed flags by [`Cli::build_config`]. Tests construct it
/// directly to point the schema fetch at a local server or to change the
/// timeout without touching process state.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Tracing filter directive (`"debug"`, `"info"`, ...).
    ///
    /// `None` disables logging. `RUST_LOG`, when set, takes precedence.
    pub log_level: Option<String>,

    /// Where the optional remote schema is fetched from.
    pub schema_url: String,

    /// Upper bound on the remote schema fetch.
    pub schema_timeout: Duration,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            schema_url: MARKETPLACE_SCHEMA_URL.to_string(),
            schema_timeout: SCHEMA_FETCH_TIMEOUT,
        }
    }
}

impl CliConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber.
    ///
    /// Logs go to stderr without timestamps or targets. Calling this more
    /// than once is harmless; only the first subscriber is kept.
    pub fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if let Some(level) = &self.log_level {
            EnvFilter::new(level)
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .try_init();
    }
}

/// Validate a Claude Code plugin marketplace manifest.
#[derive(Parser, Debug)]
#[command(
    name = "validate-marketplace",
    about = "Validate a Claude Code plugin marketplace.json file",
    version,
    author,
    long_about = "Checks a marketplace.json manifest for required fields, field types, \
                  and unrecognized plugin fields. Exits with status 1 if any problem is found."
)]
pub struct Cli {
    #[command(flatten)]
    validate: ValidateCommand,

    /// Enable verbose output (debug logging on stderr)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all logging; only the validation report is printed
    #[arg(short, long, global = true)]
    quiet: bool,
}

impl Cli {
    /// Execute with a configuration derived from the parsed flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate the flags into a [`CliConfig`].
    ///
    /// `--verbose` selects `debug`, `--quiet` turns logging off, and the
    /// default is `info`.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("info".to_string())
        };

        CliConfig {
            log_level,
            ..CliConfig::default()
        }
    }

    /// Execute with an injected configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();
        self.validate.execute_with_config(&config).await
    }
}

/// Returns `true` if a clap parse error should be answered with the usage
/// line and exit code 1.
///
/// `--help` and `--version` also surface as errors from `try_parse`, but they
/// are successful requests and keep clap's own output and exit code.
#[must_use]
pub fn is_usage_error(error: &clap::Error) -> bool {
    !matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}
