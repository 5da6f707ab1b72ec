//! Test utilities for the marketplace validator
//!
//! This module provides logging setup and document fixtures shared by the
//! unit tests and the integration tests under `tests/`. It is compiled for
//! `cfg(test)` and when the `test-utils` feature is enabled.
//!
//! # Example
//!
//! ```rust,no_run
//! use marketplace_validator::marketplace::validate;
//! use marketplace_validator::test_utils::MarketplaceFixture;
//!
//! let fixture = MarketplaceFixture::valid();
//! assert!(validate(&fixture.value()).is_empty());
//! ```

pub mod fixtures;

pub use fixtures::{MarketplaceFixture, minimal_plugin};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. Uses the provided level, falling back
/// to `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
