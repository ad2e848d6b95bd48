// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The URL prefix that decides which traffic is worth capturing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from [`BaseEndpoint::parse`].
#[derive(Debug, Error)]
pub enum EndpointError {
    /// The prefix does not start with `http://` or `https://`.
    #[error("base endpoint must start with http:// or https://: {0}")]
    MissingScheme(String),

    /// The prefix has a scheme but no host.
    #[error("base endpoint has no host: {0}")]
    MissingHost(String),
}

/// A validated URL prefix identifying the captured API.
///
/// Matching ignores a single trailing slash on either side, so
/// `https://api.example.com/v1` and `https://api.example.com/v1/` behave
/// identically both as the configured prefix and in matched URLs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseEndpoint {
    prefix: String,
}

impl BaseEndpoint {
    /// Validate and normalize a URL prefix.
    pub fn parse(raw: &str) -> Result<Self, EndpointError> {
        let rest = raw
            .strip_prefix("https://")
            .or_else(|| raw.strip_prefix("http://"))
            .ok_or_else(|| EndpointError::MissingScheme(raw.to_string()))?;
        let host = rest.split('/').next().unwrap_or_default();
        if host.is_empty() {
            return Err(EndpointError::MissingHost(raw.to_string()));
        }
        Ok(Self {
            prefix: raw.trim_end_matches('/').to_string(),
        })
    }

    /// Whether `url` falls under this prefix.
    pub fn matches(&self, url: &str) -> bool {
        let url = url.strip_suffix('/').unwrap_or(url);
        url.starts_with(&self.prefix)
    }

    /// The normalized prefix (no trailing slash).
    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// Join a path segment onto the prefix.
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.prefix, path.trim_start_matches('/'))
    }
}

impl std::fmt::Display for BaseEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.prefix)
    }
}

#[cfg(test)]
#[path = "endpoint_tests.rs"]
mod tests;
