//! Structured (nested JSON) results output.

use anyhow::{Context, Result};

use quiztempo_core::model::SessionResult;

/// Render a session result as pretty-printed JSON.
pub fn generate_json(result: &SessionResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("failed to serialize results")
}
