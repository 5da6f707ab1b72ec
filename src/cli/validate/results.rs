//! Validation results structure for aggregating validation outcomes.

use serde::Serialize;

/// Outcome of one validation run.
///
/// Serialized as-is for `--format json`; rendered by
/// [`ValidationResults::render_text`] otherwise.
///
/// # JSON Output Example
///
/// ```json
/// {
///   "valid": false,
///   "file": "marketplace.json",
///   "schema_loaded": true,
///   "errors": ["plugins[0].author: is required"]
/// }
/// ```
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResults {
    /// True when `errors` is empty
    pub valid: bool,
    /// Path of the validated file, as given on the command line
    pub file: String,
    /// Whether the published schema was fetched (it is not applied)
    pub schema_loaded: bool,
    /// Violations in report order
    pub errors: Vec<String>,
}

impl ValidationResults {
    /// Build results for `file` from the validator's error list.
    #[must_use]
    pub fn new(file: impl Into<String>, errors: Vec<String>, schema_loaded: bool) -> Self {
        Self {
            valid: errors.is_empty(),
            file: file.into(),
            schema_loaded,
            errors,
        }
    }

    /// Render the text report, without a trailing newline.
    #[must_use]
    pub fn render_text(&self) -> String {
        if self.valid {
            return format!("✓ {} is valid", self.file);
        }

        let mut out = format!("Validation failed for {}:", self.file);
        for error in &self.errors {
            out.push_str("\n  - ");
            out.push_str(error);
        }
        out
    }
}
