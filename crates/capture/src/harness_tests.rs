// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::transport::{HttpRequest, HttpResponse, TransportFuture};
use std::sync::Arc;

/// The process-wide slot is shared state; tests touching it take this lock.
static SLOT_LOCK: Mutex<()> = Mutex::new(());

struct EchoTransport;

impl Transport for EchoTransport {
    fn perform(&self, request: HttpRequest) -> TransportFuture<'_> {
        Box::pin(async move { Ok(HttpResponse::ok(request.url)) })
    }
}

fn endpoint() -> BaseEndpoint {
    BaseEndpoint::parse("https://api.example.com/v1").unwrap()
}

fn fresh_log() -> (InteractionLog, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let log = InteractionLog::create(dir.path().join("raw_calls.json")).unwrap();
    (log, dir)
}

#[test]
fn test_install_without_transport_fails() {
    let _serial = SLOT_LOCK.lock();
    let original = active_transport();
    if original.is_some() {
        // Another test configured the slot earlier in this process; the
        // empty-slot path cannot be observed here.
        return;
    }
    let (log, _dir) = fresh_log();
    assert!(matches!(
        Harness::install(endpoint(), log),
        Err(InstallError::NoTransport)
    ));
}

#[tokio::test]
async fn test_install_wraps_and_drop_restores() {
    let _serial = SLOT_LOCK.lock();
    let original: Arc<dyn Transport> = Arc::new(EchoTransport);
    set_transport(Arc::clone(&original)).unwrap();

    let (log, _dir) = fresh_log();
    let guard = Harness::install(endpoint(), log.clone()).unwrap();

    // Calls through the active transport are now observed.
    let active = active_transport().unwrap();
    active
        .perform(HttpRequest::post(
            "https://api.example.com/v1/chat",
            r#"{"x":1}"#,
        ))
        .await
        .unwrap();
    assert_eq!(log.len(), 1);

    drop(guard);

    // The original transport is back and interception is gone.
    let restored = active_transport().unwrap();
    assert!(Arc::ptr_eq(&restored, &original));
    restored
        .perform(HttpRequest::post(
            "https://api.example.com/v1/chat",
            r#"{"x":2}"#,
        ))
        .await
        .unwrap();
    assert_eq!(log.len(), 1);
}

#[test]
fn test_nested_install_rejected() {
    let _serial = SLOT_LOCK.lock();
    set_transport(Arc::new(EchoTransport)).unwrap();

    let (log_a, _dir_a) = fresh_log();
    let (log_b, _dir_b) = fresh_log();
    let _guard = Harness::install(endpoint(), log_a).unwrap();

    assert!(matches!(
        Harness::install(endpoint(), log_b),
        Err(InstallError::AlreadyInstalled)
    ));
}

#[test]
fn test_set_transport_rejected_while_installed() {
    let _serial = SLOT_LOCK.lock();
    set_transport(Arc::new(EchoTransport)).unwrap();

    let (log, _dir) = fresh_log();
    let _guard = Harness::install(endpoint(), log).unwrap();

    assert!(matches!(
        set_transport(Arc::new(EchoTransport)),
        Err(InstallError::AlreadyInstalled)
    ));
}

#[test]
fn test_guard_restores_on_unwind() {
    let _serial = SLOT_LOCK.lock();
    let original: Arc<dyn Transport> = Arc::new(EchoTransport);
    set_transport(Arc::clone(&original)).unwrap();

    let (log, _dir) = fresh_log();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _guard = Harness::install(endpoint(), log).unwrap();
        panic!("downstream blew up");
    }));
    assert!(result.is_err());

    let restored = active_transport().unwrap();
    assert!(Arc::ptr_eq(&restored, &original));
    // A fresh install works again after the unwind released the slot.
    let (log, _dir) = fresh_log();
    let guard = Harness::install(endpoint(), log).unwrap();
    drop(guard);
}

#[test]
fn test_reinstall_after_release() {
    let _serial = SLOT_LOCK.lock();
    set_transport(Arc::new(EchoTransport)).unwrap();

    for _ in 0..3 {
        let (log, _dir) = fresh_log();
        let guard = Harness::install(endpoint(), log).unwrap();
        drop(guard);
    }
}
