//! Global constants used throughout the marketplace validator.
//!
//! This module contains the remote schema endpoint, the network timeout
//! applied when fetching it, and the usage line printed on bad arguments.

use std::time::Duration;

/// Canonical location of the marketplace JSON schema.
///
/// The endpoint is fixed and intentionally not configurable.
pub const MARKETPLACE_SCHEMA_URL: &str = "https://anthropic.com/claude-code/marketplace.schema.json";

/// Timeout for the remote schema fetch (10 seconds).
///
/// The fetch is best-effort: on timeout it is not retried and validation
/// continues with the built-in rules.
pub const SCHEMA_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Name of the installed binary, used in usage output.
pub const BIN_NAME: &str = "validate-marketplace";

/// Usage line printed to stdout when the argument list is malformed.
pub fn usage_line() -> String {
    format!("Usage: {BIN_NAME} <marketplace.json>")
}
