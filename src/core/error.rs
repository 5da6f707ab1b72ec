//! Error handling for the marketplace validator
//!
//! The validator distinguishes two tiers of failure:
//!
//! 1. **Fatal errors** ([`ValidatorError`]) - bad arguments, a missing or
//!    unreadable file, or a document that is not valid JSON. These are
//!    reported once and the process exits with status 1. No partial
//!    validation is attempted.
//! 2. **Schema violations** - content-level problems inside a parsed
//!    document. These are accumulated by [`crate::marketplace::validate`] and
//!    never surface as a [`ValidatorError`] (except the summary
//!    [`ValidatorError::ValidationFailed`], which only carries the count).
//!
//! Use [`user_friendly_error`] at the CLI boundary to turn any
//! [`anyhow::Error`] into an [`ErrorContext`] with a suggestion.
//!
//! # Examples
//!
//! ```rust,no_run
//! use marketplace_validator::core::{ValidatorError, user_friendly_error};
//!
//! let error = ValidatorError::FileNotFound {
//!     path: "marketplace.json".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // "Error: File marketplace.json does not exist" on stdout
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Fatal failure modes of a validation run.
///
/// The `Display` text of each variant (prefixed with `Error: `) is exactly
/// what the CLI prints on stdout, so downstream tooling can grep for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    /// The target path does not exist.
    #[error("File {path} does not exist")]
    FileNotFound {
        /// Path as given on the command line
        path: String,
    },

    /// The target path exists but is a directory or other non-regular file.
    #[error("{path} is not a file")]
    NotAFile {
        /// Path as given on the command line
        path: String,
    },

    /// The file exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("Could not read {path}: {reason}")]
    ReadError {
        /// Path as given on the command line
        path: String,
        /// Underlying I/O diagnostic
        reason: String,
    },

    /// The file content is not parseable JSON.
    #[error("Invalid JSON in {path}: {reason}")]
    InvalidJson {
        /// Path as given on the command line
        path: String,
        /// Parser diagnostic including line and column
        reason: String,
    },

    /// The document parsed but had schema violations.
    ///
    /// The individual violations have already been printed by the time this
    /// error is returned; it exists only to drive the exit code.
    #[error("Validation failed for {path}: {error_count} error(s)")]
    ValidationFailed {
        /// Path as given on the command line
        path: String,
        /// Number of violations reported
        error_count: usize,
    },

    /// Any other failure, carrying its full cause chain.
    #[error("{message}")]
    Other {
        /// Rendered message
        message: String,
    },
}

/// A [`ValidatorError`] plus an optional hint for the user.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: ValidatorError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion.
    #[must_use]
    pub const fn new(error: ValidatorError) -> Self {
        Self {
            error,
            suggestion: None,
        }
    }

    /// Attach an actionable suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Print the error for a CLI user.
    ///
    /// The `Error: ...` line goes to stdout, where CI pipelines capture the
    /// validator's report. The suggestion, if any, goes to stderr in green.
    pub fn display(&self) {
        println!("Error: {}", self.error);

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Returns `true` when the error has already been reported to the user.
///
/// [`ValidatorError::ValidationFailed`] is returned after the violation list
/// (or the JSON report) has been printed, so `main` must not print it again.
#[must_use]
pub fn is_already_reported(error: &anyhow::Error) -> bool {
    matches!(error.downcast_ref::<ValidatorError>(), Some(ValidatorError::ValidationFailed { .. }))
}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// [`ValidatorError`] variants get a tailored suggestion. Anything else
/// becomes [`ValidatorError::Other`] with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(validator_error) = error.downcast_ref::<ValidatorError>() {
        return create_error_context(validator_error.clone());
    }

    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(ValidatorError::Other {
        message,
    })
}

fn create_error_context(error: ValidatorError) -> ErrorContext {
    match error {
        ValidatorError::FileNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Check the path; it is resolved relative to the current directory"),

        ValidatorError::NotAFile { .. } => ErrorContext::new(error)
            .with_suggestion("Pass the path of the marketplace.json file, not its directory"),

        ValidatorError::ReadError { .. } => ErrorContext::new(error)
            .with_suggestion(match cfg!(windows) {
                true => "Check file permissions in File Explorer and that the file is UTF-8",
                false => "Check file permissions with 'ls -la' and that the file is UTF-8",
            }),

        ValidatorError::InvalidJson { .. } => ErrorContext::new(error).with_suggestion(
            "Common issues: trailing commas, unquoted keys, single quotes, unbalanced brackets",
        ),

        ValidatorError::ValidationFailed { .. } | ValidatorError::Other { .. } => {
            ErrorContext::new(error)
        }
    }
}
