// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The capturing transport decorator.

use std::sync::Arc;

use chrono::Utc;

use crate::endpoint::BaseEndpoint;
use crate::interaction::{CapturedInteraction, CapturedRequest, CapturedResponse};
use crate::log::InteractionLog;
use crate::transport::{HttpRequest, Transport, TransportFuture};

/// Wraps a transport and records exchanges with the configured endpoint.
///
/// Calls outside the endpoint prefix pass through untouched and unrecorded.
/// Calls under it are snapshotted before and after the inner call, appended
/// to the log, and returned unchanged; the capture path itself never fails
/// the call. Errors from the inner transport propagate without a record, so
/// the log only ever holds completed exchanges.
pub struct CaptureTransport {
    inner: Arc<dyn Transport>,
    endpoint: BaseEndpoint,
    log: InteractionLog,
}

impl CaptureTransport {
    /// Layer capture over `inner` for traffic under `endpoint`.
    pub fn new(inner: Arc<dyn Transport>, endpoint: BaseEndpoint, log: InteractionLog) -> Self {
        Self {
            inner,
            endpoint,
            log,
        }
    }

    /// The log exchanges are appended to.
    pub fn log(&self) -> &InteractionLog {
        &self.log
    }

    /// The transport calls are forwarded to.
    pub fn inner(&self) -> &Arc<dyn Transport> {
        &self.inner
    }
}

impl Transport for CaptureTransport {
    fn perform(&self, request: HttpRequest) -> TransportFuture<'_> {
        Box::pin(async move {
            if !self.endpoint.matches(&request.url) {
                return self.inner.perform(request).await;
            }

            let captured_request = CapturedRequest::snapshot(&request, Utc::now());
            let response = self.inner.perform(request).await?;
            self.log.append(CapturedInteraction {
                request: captured_request,
                response: CapturedResponse::snapshot(&response),
            });
            Ok(response)
        })
    }
}

#[cfg(test)]
#[path = "tap_tests.rs"]
mod tests;
