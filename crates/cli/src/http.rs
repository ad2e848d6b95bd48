// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The real network transport, backed by reqwest.

use modeltap_capture::{HttpRequest, HttpResponse, Transport, TransportError, TransportFuture};

/// [`Transport`] implementation performing actual HTTP calls.
#[derive(Clone, Debug, Default)]
pub struct HttpConnector {
    client: reqwest::Client,
}

impl HttpConnector {
    /// Create a connector with a default client.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpConnector {
    fn perform(&self, request: HttpRequest) -> TransportFuture<'_> {
        Box::pin(async move {
            let method = reqwest::Method::from_bytes(request.method.as_bytes()).map_err(|_| {
                TransportError::Network(format!("invalid method: {}", request.method))
            })?;

            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|err| TransportError::Network(err.to_string()))?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .map(|(name, value)| {
                    (
                        name.as_str().to_string(),
                        String::from_utf8_lossy(value.as_bytes()).into_owned(),
                    )
                })
                .collect();
            let body = response
                .text()
                .await
                .map_err(|err| TransportError::Network(err.to_string()))?;

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        })
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
