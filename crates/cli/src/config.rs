// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration resolved from flags and environment.

use std::io;
use std::path::{Path, PathBuf};

use modeltap_capture::{BaseEndpoint, EndpointError};
use thiserror::Error;
use uuid::Uuid;

use crate::cli::Cli;
use crate::env;
use crate::time;

/// Base URL used when neither `--base-url` nor `MODELTAP_BASE_URL` is set.
pub const DEFAULT_BASE_URL: &str = "https://api.minimaxi.com/v1";
/// Model used when neither `--model` nor `MODELTAP_MODEL` is set.
pub const DEFAULT_MODEL: &str = "MiniMax-M2.1";

/// Fatal configuration problems, surfaced before any capture begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API credential is missing.
    #[error("{0} is required")]
    MissingApiKey(&'static str),

    /// The configured base URL is not a usable prefix.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] EndpointError),

    /// The run directories could not be created.
    #[error("failed to prepare run directories: {0}")]
    Io(#[from] io::Error),
}

/// Environment values a run resolution reads.
#[derive(Clone, Debug, Default)]
pub struct EnvSnapshot {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

impl EnvSnapshot {
    /// Read the current process environment.
    pub fn capture() -> Self {
        Self {
            api_key: env::api_key(),
            base_url: env::base_url(),
            model: env::model(),
        }
    }
}

/// Artifact paths for one run, all carrying the run tag.
#[derive(Clone, Debug)]
pub struct RunPaths {
    pub logs_dir: PathBuf,
    pub outputs_dir: PathBuf,
    pub raw_calls: PathBuf,
    pub events: PathBuf,
    pub summary: PathBuf,
    pub expected_output: PathBuf,
}

impl RunPaths {
    /// Lay out the artifact paths under `workdir` for `tag`.
    pub fn for_tag(workdir: &Path, tag: &str, output_override: Option<PathBuf>) -> Self {
        let logs_dir = workdir.join("logs");
        let outputs_dir = workdir.join("outputs");
        let expected_output =
            output_override.unwrap_or_else(|| outputs_dir.join(format!("run_{tag}.out")));
        Self {
            raw_calls: logs_dir.join(format!("raw_calls_{tag}.json")),
            events: logs_dir.join(format!("events_{tag}.json")),
            summary: logs_dir.join(format!("result_{tag}.json")),
            logs_dir,
            outputs_dir,
            expected_output,
        }
    }

    /// Create the run directories. Failure here is fatal.
    pub fn prepare(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.logs_dir)?;
        std::fs::create_dir_all(&self.outputs_dir)
    }
}

/// Everything one run needs.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub api_key: String,
    pub endpoint: BaseEndpoint,
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
    pub run_id: String,
    pub tag: String,
    pub paths: RunPaths,
}

impl RunConfig {
    /// Resolve a run from the CLI and the live environment.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        Self::resolve_with(cli, EnvSnapshot::capture())
    }

    /// Resolve a run from the CLI and an explicit environment snapshot.
    ///
    /// Flags win over environment variables, which win over defaults. The
    /// credential check runs first so a misconfigured run dies before it
    /// touches the filesystem.
    pub fn resolve_with(cli: &Cli, environment: EnvSnapshot) -> Result<Self, ConfigError> {
        let api_key = environment
            .api_key
            .ok_or(ConfigError::MissingApiKey(env::MODELTAP_API_KEY))?;
        let base_url = cli
            .base_url
            .clone()
            .or(environment.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let endpoint = BaseEndpoint::parse(&base_url)?;
        let model = cli
            .model
            .clone()
            .or(environment.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let tag = time::now_tag();
        let paths = RunPaths::for_tag(&cli.workdir, &tag, cli.output.clone());

        Ok(Self {
            api_key,
            endpoint,
            model,
            prompt: cli.prompt.clone(),
            temperature: cli.temperature,
            run_id: Uuid::new_v4().to_string(),
            tag,
            paths,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
