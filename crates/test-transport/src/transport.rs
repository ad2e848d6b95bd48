// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The scripted transport and its builder.

use std::path::Path;
use std::time::Duration;

use modeltap_capture::{
    HttpRequest, HttpResponse, Transport, TransportError, TransportFuture,
};
use parking_lot::Mutex;
use regex::Regex;

use crate::script::{PatternSpec, ResponseSpec, RuleSpec, ScriptConfig, ScriptError};

enum Matcher {
    Exact(String),
    Contains(String),
    Regex(Regex),
}

impl Matcher {
    fn compile(spec: &PatternSpec) -> Result<Self, ScriptError> {
        Ok(match spec {
            PatternSpec::Exact { text } => Self::Exact(text.clone()),
            PatternSpec::Contains { text } => Self::Contains(text.clone()),
            PatternSpec::Regex { pattern } => Self::Regex(Regex::new(pattern)?),
        })
    }

    fn matches(&self, url: &str) -> bool {
        match self {
            Self::Exact(text) => url == text,
            Self::Contains(text) => url.contains(text),
            Self::Regex(regex) => regex.is_match(url),
        }
    }
}

struct CompiledRule {
    matcher: Matcher,
    body_contains: Option<String>,
    response: ResponseSpec,
    max_matches: Option<u32>,
}

impl CompiledRule {
    fn matches(&self, request: &HttpRequest, hits: u32) -> bool {
        if self.max_matches.is_some_and(|budget| hits >= budget) {
            return false;
        }
        if !self.matcher.matches(&request.url) {
            return false;
        }
        match &self.body_contains {
            None => true,
            Some(needle) => request
                .body
                .as_deref()
                .is_some_and(|body| body.contains(needle)),
        }
    }
}

struct State {
    hits: Vec<u32>,
    requests: Vec<HttpRequest>,
}

/// Transport test double serving canned responses from a script.
///
/// Rules are tried in order; the first one whose pattern matches and whose
/// match budget is not exhausted wins. Requests nothing matches fall back to
/// the default response, or fail with [`TransportError::Unmatched`].
pub struct ScriptedTransport {
    rules: Vec<CompiledRule>,
    default_response: Option<ResponseSpec>,
    state: Mutex<State>,
}

impl ScriptedTransport {
    /// Compile a script configuration.
    pub fn from_config(config: ScriptConfig) -> Result<Self, ScriptError> {
        let rules = config
            .rules
            .iter()
            .map(|rule| {
                Ok(CompiledRule {
                    matcher: Matcher::compile(&rule.pattern)?,
                    body_contains: rule.body_contains.clone(),
                    response: rule.response.clone(),
                    max_matches: rule.max_matches,
                })
            })
            .collect::<Result<Vec<_>, ScriptError>>()?;
        let hits = vec![0; rules.len()];
        Ok(Self {
            rules,
            default_response: config.default_response,
            state: Mutex::new(State {
                hits,
                requests: Vec::new(),
            }),
        })
    }

    /// Load and compile a TOML script file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        Self::from_config(ScriptConfig::from_file(path)?)
    }

    /// Requests served so far, in arrival order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().requests.clone()
    }

    /// Number of requests served.
    pub fn len(&self) -> usize {
        self.state.lock().requests.len()
    }

    /// Whether no request has been served yet.
    pub fn is_empty(&self) -> bool {
        self.state.lock().requests.is_empty()
    }

    /// Requests whose URL contains `pattern`.
    pub fn find_by_url(&self, pattern: &str) -> Vec<HttpRequest> {
        self.state
            .lock()
            .requests
            .iter()
            .filter(|request| request.url.contains(pattern))
            .cloned()
            .collect()
    }

    /// Assert that a request whose URL contains `pattern` was served.
    pub fn assert_received(&self, pattern: &str) {
        let matches = self.find_by_url(pattern);
        assert!(
            !matches.is_empty(),
            "Expected request with URL containing '{}' but none arrived",
            pattern
        );
    }

    /// Assert the number of served requests.
    pub fn assert_count(&self, expected: usize) {
        let actual = self.len();
        assert_eq!(
            actual, expected,
            "Expected {} requests, got {}",
            expected, actual
        );
    }

    fn dispatch(&self, request: &HttpRequest) -> Result<ResponseSpec, TransportError> {
        let mut state = self.state.lock();
        state.requests.push(request.clone());

        let hit = self
            .rules
            .iter()
            .enumerate()
            .find(|(index, rule)| rule.matches(request, state.hits[*index]));
        if let Some((index, rule)) = hit {
            state.hits[index] += 1;
            return Ok(rule.response.clone());
        }
        if let Some(default) = &self.default_response {
            return Ok(default.clone());
        }
        Err(TransportError::Unmatched {
            method: request.method.clone(),
            url: request.url.clone(),
        })
    }
}

impl Transport for ScriptedTransport {
    fn perform(&self, request: HttpRequest) -> TransportFuture<'_> {
        let outcome = self.dispatch(&request);
        Box::pin(async move {
            let spec = outcome?;
            if let Some(delay) = spec.delay_ms {
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            let mut response = HttpResponse::with_status(spec.status, spec.body);
            for (name, value) in spec.headers {
                response = response.header(name, value);
            }
            Ok(response)
        })
    }
}

/// Builder mirroring the common script shapes.
#[derive(Clone, Debug, Default)]
pub struct ScriptBuilder {
    config: ScriptConfig,
}

impl ScriptBuilder {
    /// Start an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `response` for URLs containing `pattern`.
    pub fn respond_to(mut self, pattern: &str, response: ResponseSpec) -> Self {
        self.config.rules.push(RuleSpec {
            pattern: PatternSpec::Contains {
                text: pattern.to_string(),
            },
            body_contains: None,
            response,
            max_matches: None,
        });
        self
    }

    /// Serve `response` for exactly `url`.
    pub fn respond_to_exact(mut self, url: &str, response: ResponseSpec) -> Self {
        self.config.rules.push(RuleSpec {
            pattern: PatternSpec::Exact {
                text: url.to_string(),
            },
            body_contains: None,
            response,
            max_matches: None,
        });
        self
    }

    /// Serve `response` for URLs matching `pattern`.
    pub fn respond_to_regex(mut self, pattern: &str, response: ResponseSpec) -> Self {
        self.config.rules.push(RuleSpec {
            pattern: PatternSpec::Regex {
                pattern: pattern.to_string(),
            },
            body_contains: None,
            response,
            max_matches: None,
        });
        self
    }

    /// Add a fully specified rule.
    pub fn rule(mut self, rule: RuleSpec) -> Self {
        self.config.rules.push(rule);
        self
    }

    /// Response for requests no rule matches.
    pub fn default_response(mut self, response: ResponseSpec) -> Self {
        self.config.default_response = Some(response);
        self
    }

    /// Compile the script.
    pub fn build(self) -> Result<ScriptedTransport, ScriptError> {
        ScriptedTransport::from_config(self.config)
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
