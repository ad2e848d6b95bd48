// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide transport slot and scoped capture installation.
//!
//! The slot plays the role a patchable global call primitive plays in other
//! runtimes: callers fetch the active transport at call time, and installing
//! a harness swaps a capturing wrapper into the slot for the duration of one
//! run. The returned guard restores the previous transport on drop — on
//! every exit path, including panics unwinding through the driven session —
//! by a plain reference reassignment that cannot fail.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::endpoint::BaseEndpoint;
use crate::log::InteractionLog;
use crate::tap::CaptureTransport;
use crate::transport::Transport;

/// Errors from configuring or installing the harness.
#[derive(Debug, Error)]
pub enum InstallError {
    /// A harness is already installed; only one may be active per process.
    #[error("a capture harness is already installed")]
    AlreadyInstalled,

    /// No underlying transport has been configured for the process.
    #[error("no transport configured; call set_transport first")]
    NoTransport,
}

struct Slot {
    current: Option<Arc<dyn Transport>>,
    installed: bool,
}

static SLOT: Mutex<Slot> = Mutex::new(Slot {
    current: None,
    installed: false,
});

/// Configure the process-wide transport.
///
/// Rejected while a harness is installed, since replacing the slot then
/// would silently drop the capture wrapper.
pub fn set_transport(transport: Arc<dyn Transport>) -> Result<(), InstallError> {
    let mut slot = SLOT.lock();
    if slot.installed {
        return Err(InstallError::AlreadyInstalled);
    }
    slot.current = Some(transport);
    Ok(())
}

/// The transport calls should currently flow through.
///
/// While a harness is installed this is the capturing wrapper; otherwise it
/// is whatever [`set_transport`] configured.
pub fn active_transport() -> Option<Arc<dyn Transport>> {
    SLOT.lock().current.clone()
}

/// Scoped installation of the capture layer.
pub struct Harness;

impl Harness {
    /// Wrap the process-wide transport with capture for `endpoint`.
    ///
    /// The log must already be created (its directory setup is the fatal,
    /// fallible part of installation — see [`InteractionLog::create`]).
    /// Returns a guard whose drop restores the previous transport.
    pub fn install(
        endpoint: BaseEndpoint,
        log: InteractionLog,
    ) -> Result<InstallGuard, InstallError> {
        let mut slot = SLOT.lock();
        if slot.installed {
            return Err(InstallError::AlreadyInstalled);
        }
        let original = slot.current.clone().ok_or(InstallError::NoTransport)?;
        let wrapper: Arc<dyn Transport> = Arc::new(CaptureTransport::new(
            Arc::clone(&original),
            endpoint,
            log,
        ));
        slot.current = Some(wrapper);
        slot.installed = true;
        Ok(InstallGuard {
            original: Some(original),
        })
    }
}

/// Restores the pre-install transport when dropped.
#[must_use = "dropping the guard immediately would uninstall the harness"]
pub struct InstallGuard {
    original: Option<Arc<dyn Transport>>,
}

impl Drop for InstallGuard {
    fn drop(&mut self) {
        if let Some(original) = self.original.take() {
            let mut slot = SLOT.lock();
            slot.current = Some(original);
            slot.installed = false;
        }
    }
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
