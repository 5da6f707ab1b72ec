//! Test fixtures for marketplace documents
//!
//! Fixtures carry both the raw JSON text (what the CLI reads) and a name for
//! assertion messages.

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

/// A plugin entry with exactly the required fields, all valid.
#[must_use]
pub fn minimal_plugin(name: &str) -> Value {
    json!({
        "name": name,
        "description": format!("The {name} plugin"),
        "author": { "name": "Test Author" },
        "source": format!("./plugins/{name}"),
    })
}

/// Test fixture for creating sample marketplace.json files
#[derive(Clone, Debug)]
pub struct MarketplaceFixture {
    pub content: String,
    pub name: String,
}

impl MarketplaceFixture {
    /// Build a fixture from a JSON value.
    #[must_use]
    pub fn from_value(name: &str, value: &Value) -> Self {
        Self {
            name: name.to_string(),
            content: serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
        }
    }

    /// Well-formed marketplace with one plugin using every recognized field
    #[must_use]
    pub fn valid() -> Self {
        Self::from_value(
            "valid",
            &json!({
                "name": "team-tools",
                "description": "Internal Claude Code plugins",
                "owner": { "name": "Platform Team", "email": "platform@example.com" },
                "plugins": [
                    {
                        "name": "code-reviewer",
                        "version": "1.2.0",
                        "description": "Reviews pull requests",
                        "author": {
                            "name": "Jane Doe",
                            "email": "jane@example.com",
                            "url": "https://example.com/jane"
                        },
                        "source": "https://github.com/example/code-reviewer",
                        "homepage": "https://example.com/code-reviewer",
                        "license": "MIT",
                        "keywords": ["review", "git"],
                        "category": "productivity",
                        "repository": "https://github.com/example/code-reviewer"
                    }
                ]
            }),
        )
    }

    /// Marketplace with the given plugin entries and valid root fields
    #[must_use]
    pub fn with_plugins(plugins: Vec<Value>) -> Self {
        Self::from_value(
            "with_plugins",
            &json!({
                "name": "team-tools",
                "description": "Internal Claude Code plugins",
                "owner": { "name": "Platform Team" },
                "plugins": plugins,
            }),
        )
    }

    /// Marketplace with several problems spread over every section
    #[must_use]
    pub fn many_errors() -> Self {
        Self::from_value(
            "many_errors",
            &json!({
                "name": "broken",
                "owner": { "name": 42 },
                "plugins": [
                    "not-an-object",
                    {
                        "name": "half-done",
                        "author": "someone",
                        "source": "plugins/half-done",
                        "tags": ["x"]
                    }
                ]
            }),
        )
    }

    /// Text that is not valid JSON
    #[must_use]
    pub fn invalid_json() -> Self {
        Self {
            name: "invalid_json".to_string(),
            content: r#"{ "name": "broken", "plugins": [ }"#.to_string(),
        }
    }

    /// Parse the fixture content as JSON.
    ///
    /// # Panics
    ///
    /// Panics for fixtures that are intentionally not valid JSON.
    #[must_use]
    pub fn value(&self) -> Value {
        serde_json::from_str(&self.content)
            .unwrap_or_else(|e| panic!("fixture '{}' is not valid JSON: {e}", self.name))
    }

    /// Write the fixture to `dir/marketplace.json` and return the path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join("marketplace.json");
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write fixture '{}'", self.name))?;
        Ok(path)
    }
}
