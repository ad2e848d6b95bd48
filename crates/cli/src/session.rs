// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The driven downstream: one chat exchange with the model endpoint.

use std::sync::Arc;

use modeltap_capture::{HttpRequest, Transport, TransportError};
use thiserror::Error;

use crate::config::RunConfig;
use crate::events::{EventLog, RunEventKind};

/// Errors from the driven session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The call never completed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The endpoint answered with a non-success status.
    #[error("model API returned status {status}: {detail}")]
    Api { status: u16, detail: String },

    /// The endpoint answered 2xx but not with a usable completion.
    #[error("malformed model response: {0}")]
    MalformedResponse(String),
}

/// What a completed session produced.
#[derive(Clone, Debug)]
pub struct SessionOutcome {
    /// Final assistant text.
    pub result_text: String,
    /// Messages in the conversation, prompt included.
    pub message_count: usize,
}

/// A single-exchange chat session against an OpenAI-compatible endpoint.
///
/// Sends the prompt as one user message and reads the first choice back.
/// Tool execution and multi-step loops live outside this repository; the
/// session only issues the calls the harness is interested in observing.
pub struct ChatSession<'a> {
    config: &'a RunConfig,
}

impl<'a> ChatSession<'a> {
    /// Create a session over a resolved run configuration.
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    /// Issue the prompt through `transport` and extract the reply.
    pub async fn run(
        &self,
        transport: Arc<dyn Transport>,
        events: &EventLog,
    ) -> Result<SessionOutcome, SessionError> {
        let payload = serde_json::json!({
            "model": self.config.model,
            "messages": [{ "role": "user", "content": self.config.prompt }],
            "temperature": self.config.temperature,
        });
        let request = HttpRequest::post(
            self.config.endpoint.join("chat/completions"),
            payload.to_string(),
        )
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", self.config.api_key));

        let response = transport.perform(request).await?;
        if !response.is_success() {
            return Err(SessionError::Api {
                status: response.status,
                detail: truncated(&response.body),
            });
        }

        let completion: serde_json::Value = serde_json::from_str(&response.body)
            .map_err(|err| SessionError::MalformedResponse(err.to_string()))?;
        let text = completion["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                SessionError::MalformedResponse(
                    "missing choices[0].message.content".to_string(),
                )
            })?
            .to_string();

        events.record(RunEventKind::AssistantMessage { text: text.clone() });
        Ok(SessionOutcome {
            result_text: text,
            message_count: 2,
        })
    }
}

/// First line of a body, capped, for error messages.
fn truncated(body: &str) -> String {
    let line = body.lines().next().unwrap_or_default();
    let mut detail: String = line.chars().take(200).collect();
    if detail.len() < line.len() {
        detail.push('…');
    }
    detail
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
