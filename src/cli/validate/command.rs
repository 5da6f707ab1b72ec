//! Command structure and output format definitions for validation.

use clap::Args;
use std::path::PathBuf;

/// Arguments of the validate operation.
///
/// # Examples
///
/// ```rust,ignore
/// use marketplace_validator::cli::validate::{OutputFormat, ValidateCommand};
///
/// // CI run without network access
/// let cmd = ValidateCommand {
///     file: "marketplace.json".into(),
///     format: OutputFormat::Text,
///     offline: true,
/// };
/// ```
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Path to the marketplace.json file to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format: text or json
    ///
    /// - `text`: the report lines CI tooling greps for
    /// - `json`: a single object with `valid`, `file`, `schema_loaded`, `errors`
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Skip fetching the published schema
    ///
    /// Validation always uses the built-in rules; this only avoids the
    /// network round-trip (and its timeout) in sandboxed environments.
    #[arg(long)]
    pub offline: bool,
}

/// Output format options for validation results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    Text,

    /// Structured JSON report for automation.
    Json,
}
