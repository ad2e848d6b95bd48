// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session event recording.
//!
//! Lifecycle events of the driven session, persisted beside the raw call
//! log with the same rewrite-on-append semantics: the events file is always
//! a complete pretty-printed JSON array.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// One recorded session event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunEvent {
    /// Sequence number, from 0.
    pub seq: u64,
    /// Wall-clock time the event was recorded.
    pub ts: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: RunEventKind,
}

/// What happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunEventKind {
    SessionStart {
        run_id: String,
        model: String,
        prompt: String,
    },
    AssistantMessage {
        text: String,
    },
    SessionEnd {
        error: Option<String>,
    },
}

/// Event log mirrored to a file after every record.
pub struct EventLog {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    events: Mutex<Vec<RunEvent>>,
}

impl EventLog {
    /// Create the events file (and its parent directory) and start empty.
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, "[]")?;
        Ok(Self {
            inner: Arc::new(Inner {
                path,
                events: Mutex::new(Vec::new()),
            }),
        })
    }

    /// Record one event and rewrite the file. Write failures are swallowed;
    /// event recording must never fail the run.
    pub fn record(&self, kind: RunEventKind) {
        let mut events = self.inner.events.lock();
        let event = RunEvent {
            seq: events.len() as u64,
            ts: Utc::now(),
            kind,
        };
        events.push(event);
        if let Ok(json) = serde_json::to_vec_pretty(&*events) {
            let _ = fs::write(&self.inner.path, json);
        }
    }

    /// Copy of all recorded events, in order.
    pub fn snapshot(&self) -> Vec<RunEvent> {
        self.inner.events.lock().clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.inner.events.lock().len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.inner.events.lock().is_empty()
    }

    /// The file the log is mirrored to.
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Read an events file back into records.
    pub fn load(path: &Path) -> io::Result<Vec<RunEvent>> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(io::Error::other)
    }
}

impl Clone for EventLog {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
