//! Core types for the marketplace validator
//!
//! This module holds the error types shared by the document loader and the
//! CLI driver. Schema violations found inside a document are *not* errors in
//! this sense: they are accumulated as plain strings by
//! [`crate::marketplace::validate`]. Everything here represents the fatal tier,
//! where the process reports once and exits non-zero.
//!
//! # Modules
//!
//! ## `error` - Error Handling
//!
//! - [`ValidatorError`] - Enumerated fatal failure modes (missing file, bad JSON, ...)
//! - [`ErrorContext`] - User-facing wrapper that adds an optional suggestion
//! - [`user_friendly_error`] - Convert any [`anyhow::Error`] into an [`ErrorContext`]

pub mod error;

pub use error::{ErrorContext, ValidatorError, is_already_reported, user_friendly_error};
