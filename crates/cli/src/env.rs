// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by modeltap are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

/// Generated env var name constants.
mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

// Re-export name constants for callers that need the raw name string.
pub use names::*;

/// `MODELTAP_API_KEY` — credential for the captured model API. Required.
pub fn api_key() -> Option<String> {
    non_empty(names::MODELTAP_API_KEY)
}

/// `MODELTAP_BASE_URL` — base URL of the captured model API.
pub fn base_url() -> Option<String> {
    non_empty(names::MODELTAP_BASE_URL)
}

/// `MODELTAP_MODEL` — model identifier for the driven session.
pub fn model() -> Option<String> {
    non_empty(names::MODELTAP_MODEL)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
