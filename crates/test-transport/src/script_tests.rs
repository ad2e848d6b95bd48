// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_parse_full_script() {
    let toml = r#"
        name = "chat happy path"

        [default_response]
        status = 404
        body = "not scripted"

        [[rules]]
        pattern = { type = "contains", text = "/chat/completions" }
        response = { status = 200, body = '{"choices":[]}' }

        [[rules]]
        pattern = { type = "regex", pattern = "/models$" }
        max_matches = 1
        response = { body = "[]", delay_ms = 5 }
    "#;
    let config: ScriptConfig = toml::from_str(toml).unwrap();

    assert_eq!(config.name, "chat happy path");
    assert_eq!(config.rules.len(), 2);
    assert_eq!(config.default_response.as_ref().unwrap().status, 404);
    assert!(matches!(
        config.rules[0].pattern,
        PatternSpec::Contains { .. }
    ));
    assert_eq!(config.rules[1].max_matches, Some(1));
    assert_eq!(config.rules[1].response.delay_ms, Some(5));
}

#[test]
fn test_status_defaults_to_200() {
    let toml = r#"
        [[rules]]
        pattern = { type = "exact", text = "https://api.example.com/v1/chat" }
        response = { body = "ok" }
    "#;
    let config: ScriptConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.rules[0].response.status, 200);
}

#[test]
fn test_body_contains_condition_parses() {
    let toml = r#"
        [[rules]]
        pattern = { type = "contains", text = "/chat" }
        body_contains = "tool_calls"
        response = { body = "{}" }
    "#;
    let config: ScriptConfig = toml::from_str(toml).unwrap();
    assert_eq!(config.rules[0].body_contains.as_deref(), Some("tool_calls"));
}

#[test]
fn test_unknown_fields_rejected() {
    let toml = r#"
        surprise = true
    "#;
    assert!(toml::from_str::<ScriptConfig>(toml).is_err());
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("script.toml");
    std::fs::write(
        &path,
        r#"
        name = "from disk"
        [[rules]]
        pattern = { type = "contains", text = "/chat" }
        response = { body = "ok" }
        "#,
    )
    .unwrap();

    let config = ScriptConfig::from_file(&path).unwrap();
    assert_eq!(config.name, "from disk");
    assert_eq!(config.rules.len(), 1);
}

#[test]
fn test_from_file_missing_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        ScriptConfig::from_file(dir.path().join("absent.toml")),
        Err(ScriptError::Read(_))
    ));
}

#[test]
fn test_response_spec_helpers() {
    let ok = ResponseSpec::ok("body");
    assert_eq!(ok.status, 200);
    assert_eq!(ok.body, "body");

    let teapot = ResponseSpec::with_status(418, "short and stout");
    assert_eq!(teapot.status, 418);
}
