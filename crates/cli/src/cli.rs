// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// Drive a model session and record its raw API traffic.
#[derive(Parser, Debug, Clone)]
#[command(name = "modeltap", version)]
pub struct Cli {
    /// Prompt sent to the driven session.
    pub prompt: String,

    /// Model identifier (falls back to MODELTAP_MODEL).
    #[arg(short, long)]
    pub model: Option<String>,

    /// Base URL of the captured API (falls back to MODELTAP_BASE_URL).
    #[arg(long)]
    pub base_url: Option<String>,

    /// Directory run artifacts are created under.
    #[arg(short, long, default_value = ".")]
    pub workdir: PathBuf,

    /// File the driven run is expected to produce.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sampling temperature for the driven session.
    #[arg(long, default_value_t = 0.1)]
    pub temperature: f32,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
