//! Structural validation of marketplace documents.
//!
//! None of the functions here fail: malformed shapes become entries in the
//! returned error list, and an empty list means the document is valid.

use serde_json::{Map, Value};
use tracing::debug;

use super::{REQUIRED_PLUGIN_FIELDS, REQUIRED_ROOT_FIELDS, SOURCE_PREFIXES};

/// Validate a parsed marketplace document against the built-in rules.
///
/// Every applicable check runs; a failure in one section does not stop the
/// next. Errors are ordered root fields first, then owner, then the
/// `plugins` type check, then each plugin entry by ascending index.
///
/// A document whose root is not an object yields a single
/// `"root must be an object"` error.
///
/// # Examples
///
/// ```rust
/// use marketplace_validator::marketplace::validate;
/// use serde_json::json;
///
/// let errors = validate(&json!({ "name": "m", "description": "d", "owner": { "name": "o" } }));
/// assert_eq!(errors, vec!["Missing required field: plugins".to_string()]);
/// ```
#[must_use]
pub fn validate(document: &Value) -> Vec<String> {
    let Some(root) = document.as_object() else {
        return vec!["root must be an object".to_string()];
    };

    let mut errors = Vec::new();

    for field in REQUIRED_ROOT_FIELDS {
        if !root.contains_key(*field) {
            errors.push(format!("Missing required field: {field}"));
        }
    }

    if let Some(owner) = root.get("owner") {
        validate_owner(owner, &mut errors);
    }

    if let Some(plugins) = root.get("plugins") {
        match plugins.as_array() {
            Some(entries) => {
                debug!("Validating {} plugin entries", entries.len());
                for (index, plugin) in entries.iter().enumerate() {
                    errors.extend(validate_plugin(plugin, index));
                }
            }
            None => errors.push("plugins must be an array".to_string()),
        }
    }

    errors
}

fn validate_owner(owner: &Value, errors: &mut Vec<String>) {
    let Some(owner) = owner.as_object() else {
        errors.push("owner must be an object".to_string());
        return;
    };

    match owner.get("name") {
        None => errors.push("owner.name is required".to_string()),
        Some(name) if !name.is_string() => errors.push("owner.name must be a string".to_string()),
        Some(_) => {}
    }
}

/// Validate a single entry of the `plugins` array.
///
/// Messages are prefixed with `plugins[<index>]`. A non-object entry yields
/// only `"<prefix>: must be an object"`.
#[must_use]
pub fn validate_plugin(plugin: &Value, index: usize) -> Vec<String> {
    let prefix = format!("plugins[{index}]");
    let mut errors = Vec::new();

    let Some(plugin) = plugin.as_object() else {
        errors.push(format!("{prefix}: must be an object"));
        return errors;
    };

    for field in REQUIRED_PLUGIN_FIELDS {
        if !plugin.contains_key(*field) {
            errors.push(format!("{prefix}.{field}: is required"));
        }
    }

    if let Some(author) = plugin.get("author") {
        validate_author(&prefix, author, &mut errors);
    }

    if let Some(source) = plugin.get("source") {
        match source.as_str() {
            None => errors.push(format!("{prefix}.source: must be a string (URL or path)")),
            Some(source) if !is_valid_source(source) => errors.push(format!(
                "{prefix}.source: should be a valid URL, relative path, or local path"
            )),
            Some(_) => {}
        }
    }

    check_unrecognized_fields(&prefix, plugin, &mut errors);

    errors
}

fn validate_author(prefix: &str, author: &Value, errors: &mut Vec<String>) {
    let Some(author) = author.as_object() else {
        errors.push(format!("{prefix}.author: must be an object"));
        return;
    };

    match author.get("name") {
        None => errors.push(format!("{prefix}.author.name: is required")),
        Some(name) if !name.is_string() => {
            errors.push(format!("{prefix}.author.name: must be a string"));
        }
        Some(_) => {}
    }

    for optional in ["email", "url"] {
        if author.get(optional).is_some_and(|value| !value.is_string()) {
            errors.push(format!("{prefix}.author.{optional}: must be a string"));
        }
    }
}

fn check_unrecognized_fields(prefix: &str, plugin: &Map<String, Value>, errors: &mut Vec<String>) {
    // Map iteration follows document order (serde_json `preserve_order`)
    for key in plugin.keys() {
        if !super::is_recognized_plugin_field(key) {
            errors.push(format!(
                "{prefix}: Unrecognized field '{key}' - may not be supported in current schema"
            ));
        }
    }
}

/// Returns `true` if `source` is an accepted plugin source.
///
/// Accepted forms are absolute URLs (`http://`, `https://`), explicit paths
/// (`./...`, `/...`), and bare filenames containing no `/` at all. Anything
/// else, such as `ftp://host/x` or `plugins/foo`, is rejected.
///
/// # Examples
///
/// ```rust
/// use marketplace_validator::marketplace::is_valid_source;
///
/// assert!(is_valid_source("https://github.com/org/plugin"));
/// assert!(is_valid_source("./plugins/foo"));
/// assert!(is_valid_source("foo.zip"));
/// assert!(!is_valid_source("plugins/foo"));
/// ```
#[must_use]
pub fn is_valid_source(source: &str) -> bool {
    SOURCE_PREFIXES.iter().any(|prefix| source.starts_with(prefix)) || !source.contains('/')
}
