// ABOUTME: Integration tests for file-backed session persistence
// ABOUTME: Verifies reload after restart, clearing and on-disk layout of session entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::sync::Arc;

use common::test_user;
use gainlog::constants::storage_keys;
use gainlog::session::storage::{FileSessionStore, SessionStore};
use gainlog::session::SessionState;
use tempfile::TempDir;

fn open_session(dir: &TempDir) -> SessionState {
    let store = FileSessionStore::open(dir.path()).unwrap();
    SessionState::load(Arc::new(store)).unwrap()
}

#[test]
fn test_session_survives_reload() {
    let dir = TempDir::new().unwrap();

    let session = open_session(&dir);
    assert!(!session.is_authenticated());
    session
        .set(Some("persisted-token".into()), Some(test_user()))
        .unwrap();
    drop(session);

    let reloaded = open_session(&dir);
    let current = reloaded.read();
    assert_eq!(current.token.as_deref(), Some("persisted-token"));
    assert_eq!(current.user, Some(test_user()));
}

#[test]
fn test_entries_use_durable_key_names() {
    let dir = TempDir::new().unwrap();
    let session = open_session(&dir);
    session.set(Some("tok".into()), Some(test_user())).unwrap();

    let token = fs::read_to_string(dir.path().join(storage_keys::TOKEN)).unwrap();
    assert_eq!(token, "tok");

    let user: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(storage_keys::USER)).unwrap())
            .unwrap();
    assert_eq!(user["email"], "lifter@example.com");
}

#[test]
fn test_clear_removes_files() {
    let dir = TempDir::new().unwrap();
    let session = open_session(&dir);
    session.set(Some("tok".into()), Some(test_user())).unwrap();

    session.clear().unwrap();
    session.clear().unwrap();

    assert!(!dir.path().join(storage_keys::TOKEN).exists());
    assert!(!dir.path().join(storage_keys::USER).exists());
    assert!(open_session(&dir).read().token.is_none());
}

#[test]
fn test_setting_absent_user_removes_only_user_entry() {
    let dir = TempDir::new().unwrap();
    let session = open_session(&dir);
    session.set(Some("tok".into()), Some(test_user())).unwrap();

    session.set(Some("tok".into()), None).unwrap();

    let store = FileSessionStore::open(dir.path()).unwrap();
    assert_eq!(store.get(storage_keys::TOKEN).unwrap().as_deref(), Some("tok"));
    assert!(store.get(storage_keys::USER).unwrap().is_none());
}

#[test]
fn test_unreadable_profile_does_not_block_startup() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(storage_keys::TOKEN), "tok").unwrap();
    fs::write(dir.path().join(storage_keys::USER), "{not json").unwrap();

    let session = open_session(&dir);
    assert_eq!(session.token().as_deref(), Some("tok"));
    assert!(session.read().user.is_none());
}

#[cfg(unix)]
#[test]
fn test_token_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    open_session(&dir).set(Some("tok".into()), None).unwrap();

    let mode = fs::metadata(dir.path().join(storage_keys::TOKEN))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}
