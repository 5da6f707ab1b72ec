//! marketplace-validator - structural checks for Claude Code plugin marketplaces
//!
//! A marketplace manifest (`marketplace.json`) names a registry, its owner, and
//! the plugins it publishes. This crate checks such a document against a fixed
//! rule set (required fields present, field types correct, no unrecognized
//! plugin fields) and reports every violation in one pass. It is meant to run
//! in CI before a marketplace is published.
//!
//! # Core Modules
//!
//! - [`marketplace`] - Document loading and the built-in validation rules
//! - [`schema`] - Best-effort fetch of the published schema (informational only)
//! - [`cli`] - Argument parsing, report rendering, and exit-code mapping
//! - [`core`] - Fatal error types and user-facing error rendering
//! - [`constants`] - Schema endpoint and timeout
//!
//! # Library Usage
//!
//! ```rust
//! use marketplace_validator::marketplace::validate;
//! use serde_json::json;
//!
//! let document = json!({
//!     "name": "team-tools",
//!     "description": "Internal plugins",
//!     "owner": { "name": "Platform Team" },
//!     "plugins": [{
//!         "name": "reviewer",
//!         "description": "Reviews code",
//!         "author": { "name": "Jane" },
//!         "source": "ftp://example.com/reviewer"
//!     }]
//! });
//!
//! assert_eq!(
//!     validate(&document),
//!     vec!["plugins[0].source: should be a valid URL, relative path, or local path"]
//! );
//! ```
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Validate, fetching the published schema first
//! validate-marketplace .claude-plugin/marketplace.json
//!
//! # Sandboxed CI without network access
//! validate-marketplace --offline .claude-plugin/marketplace.json
//!
//! # Machine-readable report
//! validate-marketplace --format json --offline marketplace.json
//! ```

pub mod cli;
pub mod constants;
pub mod core;
pub mod marketplace;
pub mod schema;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
