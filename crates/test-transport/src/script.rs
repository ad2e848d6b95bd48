// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Script configuration types for TOML script files.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or compiling a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Failed to read the script file.
    #[error("failed to read script file: {0}")]
    Read(#[from] std::io::Error),

    /// Failed to parse the script TOML.
    #[error("failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),

    /// A regex pattern did not compile.
    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Top-level script configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptConfig {
    /// Name for logging/debugging.
    #[serde(default)]
    pub name: String,

    /// Response for requests no rule matches.
    #[serde(default)]
    pub default_response: Option<ResponseSpec>,

    /// Ordered list of rules; the first live match wins.
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

impl ScriptConfig {
    /// Load a script from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }
}

/// One pattern → response rule.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    /// Pattern matched against the request URL.
    pub pattern: PatternSpec,

    /// Extra condition: the request body must contain this substring.
    #[serde(default)]
    pub body_contains: Option<String>,

    /// Response served on a match.
    pub response: ResponseSpec,

    /// Stop matching after this many hits (unlimited when absent).
    #[serde(default)]
    pub max_matches: Option<u32>,
}

/// URL matching patterns.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PatternSpec {
    /// URL equals the text exactly.
    Exact { text: String },
    /// URL contains the text.
    Contains { text: String },
    /// URL matches the regex.
    Regex { pattern: String },
}

/// A canned response.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResponseSpec {
    /// Status code (default 200).
    #[serde(default = "default_status")]
    pub status: u16,

    /// Response body text.
    #[serde(default)]
    pub body: String,

    /// Response headers.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Delay before responding, in milliseconds.
    #[serde(default)]
    pub delay_ms: Option<u64>,
}

fn default_status() -> u16 {
    200
}

impl ResponseSpec {
    /// A 200 response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            headers: BTreeMap::new(),
            delay_ms: None,
        }
    }

    /// A response with an explicit status.
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            headers: BTreeMap::new(),
            delay_ms: None,
        }
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
