//! Validate a marketplace manifest.
//!
//! This module implements the single operation of the binary: load one
//! `marketplace.json`, optionally fetch the published schema, run the
//! built-in rules, and report.
//!
//! # Examples
//!
//! ```bash
//! validate-marketplace marketplace.json
//! validate-marketplace --offline marketplace.json
//! validate-marketplace --format json marketplace.json
//! ```
//!
//! # Output Formats
//!
//! ## Text Format (Default)
//! ```text
//! Validation failed for marketplace.json:
//!   - Missing required field: owner
//!   - plugins[0].source: is required
//! ```
//!
//! or, for a valid document:
//!
//! ```text
//! ✓ marketplace.json is valid
//! ```
//!
//! ## JSON Format
//! ```json
//! {
//!   "valid": false,
//!   "file": "marketplace.json",
//!   "schema_loaded": false,
//!   "errors": ["Missing required field: owner"]
//! }
//! ```

mod command;
mod executor;
mod results;

#[cfg(test)]
mod tests;

pub use command::{OutputFormat, ValidateCommand};
pub use results::ValidationResults;
