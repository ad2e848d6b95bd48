// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The call-making seam every outbound network call flows through.
//!
//! Requests and responses are owned value types, so observers work on clones
//! and the caller's copy is never consumed. Header order and duplicates are
//! preserved as sent; capture collapses them only at snapshot time.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

/// Boxed future returned by [`Transport::perform`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + Send + 'a>>;

/// Errors surfaced by a transport implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The underlying call could not be issued or completed.
    #[error("network error: {0}")]
    Network(String),

    /// No scripted response matched the request (test doubles only).
    #[error("no response available for {method} {url}")]
    Unmatched { method: String, url: String },
}

/// An outbound HTTP request as an owned value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Create a GET request with no headers or body.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Create a POST request with a body.
    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: "POST".to_string(),
            url: url.into(),
            headers: Vec::new(),
            body: Some(body.into()),
        }
    }

    /// Append a header, keeping any existing entries for the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// An HTTP response as an owned value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Create a 200 response with a body and no headers.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    /// Create a response with an explicit status code.
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Append a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A transport performs one outbound call.
///
/// The single-method shape keeps the trait dyn-compatible and lets the
/// capture layer wrap any implementation without knowing how calls are made.
pub trait Transport: Send + Sync {
    /// Issue the request and resolve to its response.
    fn perform(&self, request: HttpRequest) -> TransportFuture<'_>;
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
