// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One run, end to end.

use modeltap_capture::{
    active_transport, Harness, InstallError, InteractionLog, RunReport, RunSummary,
};
use thiserror::Error;

use crate::config::{ConfigError, RunConfig};
use crate::events::{EventLog, RunEventKind};
use crate::session::ChatSession;

/// Errors that abort a run without producing a summary.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Install(#[from] InstallError),

    /// Creating or writing a run artifact failed.
    #[error("failed to write run artifacts: {0}")]
    Io(#[from] std::io::Error),

    /// The process-wide transport slot is empty.
    #[error("no transport available for the run")]
    NoTransport,
}

/// Drives one capture run over a resolved configuration.
///
/// The downstream session's own failure never aborts the run: it is caught,
/// stringified into the summary, and the summary is still written. Only
/// configuration and artifact I/O failures surface as [`RunnerError`].
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    /// Wrap a resolved configuration.
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// The configuration this runner executes.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Execute the run and return the finalized summary.
    pub async fn execute(&self) -> Result<RunSummary, RunnerError> {
        let paths = &self.config.paths;
        paths.prepare()?;

        let log = InteractionLog::create(&paths.raw_calls)?;
        let events = EventLog::create(&paths.events)?;

        let guard = Harness::install(self.config.endpoint.clone(), log.clone())?;
        events.record(RunEventKind::SessionStart {
            run_id: self.config.run_id.clone(),
            model: self.config.model.clone(),
            prompt: self.config.prompt.clone(),
        });

        let outcome = match active_transport() {
            Some(transport) => {
                ChatSession::new(&self.config)
                    .run(transport, &events)
                    .await
            }
            None => {
                drop(guard);
                return Err(RunnerError::NoTransport);
            }
        };
        drop(guard);

        let (result_text, message_count, error) = match outcome {
            Ok(outcome) => (outcome.result_text, Some(outcome.message_count), None),
            Err(err) => (String::new(), None, Some(err.to_string())),
        };
        events.record(RunEventKind::SessionEnd {
            error: error.clone(),
        });

        let summary = RunReport {
            model: self.config.model.clone(),
            expected_output: paths.expected_output.clone(),
            raw_calls_file: paths.raw_calls.clone(),
            events_file: Some(paths.events.clone()),
            result_text,
            error,
            message_count,
        }
        .finalize(&paths.summary)?;
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
