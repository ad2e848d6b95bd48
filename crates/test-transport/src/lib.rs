// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted transport test double for modeltap tests.
//!
//! Stands in for the real network behind the [`modeltap_capture::Transport`]
//! seam: an ordered rule list pairs URL patterns with canned responses, and
//! every served request is recorded for assertions. Scripts are built
//! programmatically with [`ScriptBuilder`] or loaded from a TOML file.

mod script;
mod transport;

pub use script::{PatternSpec, ResponseSpec, RuleSpec, ScriptConfig, ScriptError};
pub use transport::{ScriptBuilder, ScriptedTransport};
