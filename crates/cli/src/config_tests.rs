// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use clap::Parser;

fn cli(args: &[&str]) -> Cli {
    let mut full = vec!["modeltap"];
    full.extend_from_slice(args);
    full.push("prompt");
    Cli::try_parse_from(full).unwrap()
}

fn env_with_key() -> EnvSnapshot {
    EnvSnapshot {
        api_key: Some("test-key".to_string()),
        ..EnvSnapshot::default()
    }
}

#[test]
fn test_missing_api_key_is_fatal() {
    let result = RunConfig::resolve_with(&cli(&[]), EnvSnapshot::default());
    assert!(matches!(result, Err(ConfigError::MissingApiKey(_))));
    let err = RunConfig::resolve_with(&cli(&[]), EnvSnapshot::default()).unwrap_err();
    assert!(err.to_string().contains("MODELTAP_API_KEY"));
}

#[test]
fn test_defaults_applied() {
    let config = RunConfig::resolve_with(&cli(&[]), env_with_key()).unwrap();
    assert_eq!(config.endpoint.as_str(), DEFAULT_BASE_URL);
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.prompt, "prompt");
}

#[test]
fn test_flags_override_environment() {
    let environment = EnvSnapshot {
        api_key: Some("test-key".to_string()),
        base_url: Some("https://env.example.com/v1".to_string()),
        model: Some("env-model".to_string()),
    };
    let config = RunConfig::resolve_with(
        &cli(&["--base-url", "https://flag.example.com/v1", "--model", "flag-model"]),
        environment,
    )
    .unwrap();
    assert_eq!(config.endpoint.as_str(), "https://flag.example.com/v1");
    assert_eq!(config.model, "flag-model");
}

#[test]
fn test_environment_overrides_defaults() {
    let environment = EnvSnapshot {
        api_key: Some("test-key".to_string()),
        base_url: Some("https://env.example.com/v1/".to_string()),
        model: Some("env-model".to_string()),
    };
    let config = RunConfig::resolve_with(&cli(&[]), environment).unwrap();
    assert_eq!(config.endpoint.as_str(), "https://env.example.com/v1");
    assert_eq!(config.model, "env-model");
}

#[test]
fn test_invalid_base_url_rejected() {
    let result = RunConfig::resolve_with(&cli(&["--base-url", "not a url"]), env_with_key());
    assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_))));
}

#[test]
fn test_paths_carry_tag() {
    let paths = RunPaths::for_tag(Path::new("/work"), "20260312_144502", None);
    assert_eq!(
        paths.raw_calls,
        Path::new("/work/logs/raw_calls_20260312_144502.json")
    );
    assert_eq!(
        paths.events,
        Path::new("/work/logs/events_20260312_144502.json")
    );
    assert_eq!(
        paths.summary,
        Path::new("/work/logs/result_20260312_144502.json")
    );
    assert_eq!(
        paths.expected_output,
        Path::new("/work/outputs/run_20260312_144502.out")
    );
}

#[test]
fn test_output_override_respected() {
    let paths = RunPaths::for_tag(
        Path::new("/work"),
        "20260312_144502",
        Some(PathBuf::from("/elsewhere/deck.pptx")),
    );
    assert_eq!(paths.expected_output, Path::new("/elsewhere/deck.pptx"));
}

#[test]
fn test_prepare_creates_directories() {
    let dir = tempfile::tempdir().unwrap();
    let paths = RunPaths::for_tag(dir.path(), "20260312_144502", None);
    paths.prepare().unwrap();
    assert!(paths.logs_dir.is_dir());
    assert!(paths.outputs_dir.is_dir());
}

#[test]
fn test_prepare_fails_on_blocked_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("logs"), "not a directory").unwrap();
    let paths = RunPaths::for_tag(dir.path(), "20260312_144502", None);
    assert!(paths.prepare().is_err());
}

#[test]
fn test_resolution_touches_no_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let mut parsed = cli(&[]);
    parsed.workdir = dir.path().to_path_buf();
    RunConfig::resolve_with(&parsed, env_with_key()).unwrap();
    assert!(!dir.path().join("logs").exists());
    assert!(!dir.path().join("outputs").exists());
}

#[test]
fn test_run_ids_are_unique() {
    let a = RunConfig::resolve_with(&cli(&[]), env_with_key()).unwrap();
    let b = RunConfig::resolve_with(&cli(&[]), env_with_key()).unwrap();
    assert_ne!(a.run_id, b.run_id);
}
