//! Marketplace manifest model and structural validation.
//!
//! A marketplace manifest (`marketplace.json`) lists a registry owner and a
//! set of installable plugin entries:
//!
//! ```json
//! {
//!   "name": "team-tools",
//!   "description": "Internal Claude Code plugins",
//!   "owner": { "name": "Platform Team" },
//!   "plugins": [
//!     {
//!       "name": "code-reviewer",
//!       "description": "Reviews pull requests",
//!       "author": { "name": "Jane", "email": "jane@example.com" },
//!       "source": "./plugins/code-reviewer",
//!       "version": "1.2.0"
//!     }
//!   ]
//! }
//! ```
//!
//! The document is checked directly as a [`serde_json::Value`] rather than
//! deserialized into structs: every problem in the document has to be
//! reported, and a typed deserializer stops at the first one.
//!
//! # Rule Cascade
//!
//! [`validate`] runs these checks in order, accumulating errors:
//!
//! 1. Root fields `name`, `description`, `owner`, `plugins` are present
//! 2. `owner` is an object with a string `name`
//! 3. `plugins` is an array
//! 4. Each plugin entry has `name`, `description`, `author`, `source`; the
//!    author is an object with a string `name` (and string `email`/`url` if
//!    given); the source is a URL, explicit path, or bare filename; and no
//!    unrecognized keys are present
//!
//! Error messages are stable strings; CI tooling greps for them.

mod marketplace_io;
mod marketplace_validation;


pub use marketplace_io::load_document;
pub use marketplace_validation::{is_valid_source, validate, validate_plugin};

/// Fields every marketplace document must define, in reporting order.
pub const REQUIRED_ROOT_FIELDS: &[&str] = &["name", "description", "owner", "plugins"];

/// Fields every plugin entry must define, in reporting order.
pub const REQUIRED_PLUGIN_FIELDS: &[&str] = &["name", "description", "author", "source"];

/// Every field a plugin entry may carry. Anything else is reported.
pub const RECOGNIZED_PLUGIN_FIELDS: &[&str] = &[
    "name",
    "version",
    "description",
    "author",
    "source",
    "homepage",
    "license",
    "keywords",
    "category",
    "repository",
];

/// Source prefixes accepted as URLs or explicit paths.
pub const SOURCE_PREFIXES: &[&str] = &["http://", "https://", "./", "/"];

/// Returns `true` if `field` is allowed on a plugin entry.
#[must_use]
pub fn is_recognized_plugin_field(field: &str) -> bool {
    RECOGNIZED_PLUGIN_FIELDS.contains(&field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_plugin_fields_are_recognized() {
        for field in REQUIRED_PLUGIN_FIELDS {
            assert!(is_recognized_plugin_field(field), "{field} should be recognized");
        }
    }

    #[test]
    fn test_unknown_plugin_fields() {
        assert!(!is_recognized_plugin_field("banana"));
        assert!(!is_recognized_plugin_field("Name"));
        assert!(!is_recognized_plugin_field(""));
        assert!(!is_recognized_plugin_field("tags"));
    }
}
