// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured interaction records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::transport::{HttpRequest, HttpResponse};

/// One intercepted request/response exchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapturedInteraction {
    pub request: CapturedRequest,
    pub response: CapturedResponse,
}

/// The request half of a captured exchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapturedRequest {
    /// Wall-clock time the request was issued.
    pub ts: DateTime<Utc>,
    pub method: String,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    /// Parsed JSON body, raw text when not valid JSON, null when absent.
    pub body: Value,
}

/// The response half of a captured exchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapturedResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    /// Parsed JSON body, raw text when not valid JSON, null when absent.
    pub body: Value,
}

/// Snapshot a body for the log: parsed JSON when valid, the raw text
/// otherwise, null when there is no body at all. Never fails.
pub fn body_snapshot(body: Option<&str>) -> Value {
    match body {
        None => Value::Null,
        Some(text) => {
            serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
        }
    }
}

/// Collapse a header list into a sorted name → value map, last value wins.
fn header_map(headers: &[(String, String)]) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

impl CapturedRequest {
    /// Record a request as issued at `ts`.
    pub fn snapshot(request: &HttpRequest, ts: DateTime<Utc>) -> Self {
        Self {
            ts,
            method: request.method.clone(),
            url: request.url.clone(),
            headers: header_map(&request.headers),
            body: body_snapshot(request.body.as_deref()),
        }
    }
}

impl CapturedResponse {
    /// Record a resolved response.
    pub fn snapshot(response: &HttpResponse) -> Self {
        Self {
            status: response.status,
            headers: header_map(&response.headers),
            body: body_snapshot(Some(&response.body)),
        }
    }
}

#[cfg(test)]
#[path = "interaction_tests.rs"]
mod tests;
