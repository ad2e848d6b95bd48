// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The on-disk interaction log.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::interaction::CapturedInteraction;

/// Append-only log of captured interactions, mirrored to a file.
///
/// Every append re-serializes the whole log to its path as a pretty-printed
/// JSON array, so the file always holds the latest complete state even if
/// the process dies mid-run. Appends after creation are best-effort: a
/// failed write never surfaces to the caller.
pub struct InteractionLog {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    interactions: Mutex<Vec<CapturedInteraction>>,
}

impl InteractionLog {
    /// Create the log file (and its parent directory) and start empty.
    ///
    /// Failure here means the run environment is misconfigured and is fatal.
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, "[]")?;
        Ok(Self {
            inner: Arc::new(Inner {
                path,
                interactions: Mutex::new(Vec::new()),
            }),
        })
    }

    /// Append one interaction and rewrite the file.
    ///
    /// The push and the flush happen under one lock so overlapping calls
    /// cannot interleave partial overwrites.
    pub fn append(&self, interaction: CapturedInteraction) {
        let mut interactions = self.inner.interactions.lock();
        interactions.push(interaction);
        if let Ok(json) = serde_json::to_vec_pretty(&*interactions) {
            let _ = fs::write(&self.inner.path, json);
        }
    }

    /// Copy of all captured interactions, in capture order.
    pub fn snapshot(&self) -> Vec<CapturedInteraction> {
        self.inner.interactions.lock().clone()
    }

    /// Number of captured interactions.
    pub fn len(&self) -> usize {
        self.inner.interactions.lock().len()
    }

    /// Whether nothing has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.inner.interactions.lock().is_empty()
    }

    /// The file the log is mirrored to.
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Read a log file back into records.
    pub fn load(path: &Path) -> io::Result<Vec<CapturedInteraction>> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(io::Error::other)
    }
}

impl Clone for InteractionLog {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
