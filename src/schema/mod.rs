//! Best-effort retrieval of the published marketplace schema.
//!
//! The official schema is fetched once per run with a short timeout. Whether
//! or not it arrives, validation uses the built-in rules in
//! [`crate::marketplace`]; a fetched schema is only reported, never applied.
//! A failed fetch is never fatal.

use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Fetch and parse the schema document at `url`.
///
/// Returns `None` on any failure (connection, timeout, non-success status,
/// unreadable body, invalid JSON) after logging a warning. There are no
/// retries.
pub async fn fetch_remote_schema(url: &str, timeout: Duration) -> Option<Value> {
    match try_fetch(url, timeout).await {
        Ok(schema) => {
            debug!("Loaded remote schema from {}", url);
            Some(schema)
        }
        Err(e) => {
            warn!("Could not load schema from {}: {:#}", url, e);
            warn!("Falling back to built-in schema validation...");
            None
        }
    }
}

async fn try_fetch(url: &str, timeout: Duration) -> Result<Value> {
    debug!("Fetching schema from: {} (timeout {:?})", url, timeout);

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to fetch schema")?
        .error_for_status()
        .context("Schema endpoint returned an error status")?;

    response.json::<Value>().await.context("Schema is not valid JSON")
}
