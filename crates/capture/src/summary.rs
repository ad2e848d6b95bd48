// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The final outcome record of one driven run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Everything known about a run before the output file is checked.
///
/// Built by the driver once the downstream session has completed or failed,
/// then turned into a [`RunSummary`] by [`RunReport::finalize`].
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Identifier of the model that drove the run.
    pub model: String,
    /// File the run was supposed to produce.
    pub expected_output: PathBuf,
    /// Path of the persisted interaction log.
    pub raw_calls_file: PathBuf,
    /// Path of the session event log, when one was recorded.
    pub events_file: Option<PathBuf>,
    /// Final natural-language output of the driven session, if any.
    pub result_text: String,
    /// Stringified downstream error, when the run failed.
    pub error: Option<String>,
    /// Conversation message count, when the session tracked one.
    pub message_count: Option<usize>,
}

/// The summary written once at the end of a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub model: String,
    pub expected_output: PathBuf,
    /// Whether the expected output exists, re-checked on disk at finalize
    /// time rather than inferred from the transcript.
    pub output_exists: bool,
    /// Byte size of the expected output, 0 when it does not exist.
    pub output_size: u64,
    pub raw_calls_file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,
    pub result_text: String,
    /// Null on success.
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_count: Option<usize>,
}

impl RunReport {
    /// Check the expected output on disk, write the summary to
    /// `summary_path`, and return it.
    ///
    /// Runs exactly once per run, on success and failure alike. I/O errors
    /// here are fatal: losing the summary means losing the run's outcome.
    pub fn finalize(self, summary_path: &Path) -> io::Result<RunSummary> {
        let (output_exists, output_size) = match fs::metadata(&self.expected_output) {
            Ok(meta) => (true, meta.len()),
            Err(_) => (false, 0),
        };
        let summary = RunSummary {
            model: self.model,
            expected_output: self.expected_output,
            output_exists,
            output_size,
            raw_calls_file: self.raw_calls_file,
            events_file: self.events_file,
            result_text: self.result_text,
            error: self.error,
            message_count: self.message_count,
        };
        if let Some(parent) = summary_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(&summary).map_err(io::Error::other)?;
        fs::write(summary_path, json)?;
        Ok(summary)
    }
}

impl RunSummary {
    /// Read a summary file back.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(io::Error::other)
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
