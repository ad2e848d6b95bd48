// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Model API traffic capture for driven agent runs.
//!
//! This crate records the request/response pairs a driven LLM session
//! exchanges with a model endpoint. Calls flow through the [`Transport`]
//! seam; [`Harness::install`] wraps the process-wide transport with a
//! [`CaptureTransport`] for the duration of one run and restores it when the
//! returned guard drops. Captured exchanges land in an [`InteractionLog`]
//! that is re-serialized to disk after every append, and the run ends with a
//! [`RunSummary`] written once by [`RunReport::finalize`].
//!
//! The log file is a pretty-printed JSON array rewritten in full per
//! capture. That is O(n²) total bytes over a run, which is fine at the tens
//! of calls a driven session makes; switch to line-delimited records before
//! pointing this at anything chattier.

mod endpoint;
mod harness;
mod interaction;
mod log;
mod summary;
mod tap;
mod transport;

pub use endpoint::{BaseEndpoint, EndpointError};
pub use harness::{active_transport, set_transport, Harness, InstallError, InstallGuard};
pub use interaction::{body_snapshot, CapturedInteraction, CapturedRequest, CapturedResponse};
pub use log::InteractionLog;
pub use summary::{RunReport, RunSummary};
pub use tap::CaptureTransport;
pub use transport::{HttpRequest, HttpResponse, Transport, TransportError, TransportFuture};
