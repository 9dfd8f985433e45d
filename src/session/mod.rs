// ABOUTME: Session state holding the current auth token and user profile
// ABOUTME: Reactive snapshot with write-through persistence to durable storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

//! Single source of truth for "am I logged in, and as whom"
//!
//! The token is an opaque string; this module never validates it and never
//! talks to the network.

/// Durable key-value backends for session entries
pub mod storage;

use std::sync::Arc;

use gainlog_core::constants::storage_keys;
use gainlog_core::models::UserProfile;
use tokio::sync::watch;
use tracing::{debug, warn};

use self::storage::{MemorySessionStore, SessionStore, StorageError};

/// Token and user profile of the current session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Raw auth token, sent verbatim in the `Authorization` header
    pub token: Option<String>,
    /// Profile of the signed-in user
    pub user: Option<UserProfile>,
}

impl Session {
    /// Whether a token is held
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Shared, observable session with write-through persistence
pub struct SessionState {
    current: watch::Sender<Session>,
    store: Arc<dyn SessionStore>,
}

impl SessionState {
    /// Restore the session from durable storage
    ///
    /// A stored profile that no longer parses is logged and dropped rather
    /// than failing startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub fn load(store: Arc<dyn SessionStore>) -> Result<Self, StorageError> {
        let token = store.get(storage_keys::TOKEN)?;
        let user = match store.get(storage_keys::USER)? {
            Some(raw) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable stored user profile");
                    None
                }
            },
            None => None,
        };

        debug!(
            has_token = token.is_some(),
            has_user = user.is_some(),
            "Session restored from storage"
        );

        let (current, _) = watch::channel(Session { token, user });
        Ok(Self { current, store })
    }

    /// Empty session backed by process memory only
    #[must_use]
    pub fn in_memory() -> Self {
        let (current, _) = watch::channel(Session::default());
        Self {
            current,
            store: Arc::new(MemorySessionStore::new()),
        }
    }

    /// Snapshot of the current session
    #[must_use]
    pub fn read(&self) -> Session {
        self.current.borrow().clone()
    }

    /// Current token, if any
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.current.borrow().token.clone()
    }

    /// Whether a token is currently held
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_authenticated()
    }

    /// Replace token and user together, then persist both
    ///
    /// The in-memory session is updated even if persistence fails, so
    /// observers always see the latest state.
    ///
    /// # Errors
    ///
    /// Returns an error if either entry cannot be written or removed
    pub fn set(&self, token: Option<String>, user: Option<UserProfile>) -> Result<(), StorageError> {
        let session = Session { token, user };
        self.current.send_replace(session.clone());
        self.persist(&session)
    }

    /// Forget token and user
    ///
    /// # Errors
    ///
    /// Returns an error if the stored entries cannot be removed
    pub fn clear(&self) -> Result<(), StorageError> {
        self.set(None, None)
    }

    /// Replace the session only while it still holds `expected`
    ///
    /// The check and the swap happen under the channel's lock, so a login or
    /// logout that landed in between is never overwritten. Returns whether
    /// the session was replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the replaced session cannot be persisted
    pub fn replace_if_token(
        &self,
        expected: &str,
        token: Option<String>,
        user: Option<UserProfile>,
    ) -> Result<bool, StorageError> {
        let next = Session { token, user };
        let replaced = self.current.send_if_modified(|current| {
            if current.token.as_deref() == Some(expected) {
                *current = next.clone();
                true
            } else {
                false
            }
        });

        if replaced {
            self.persist(&next)?;
        }
        Ok(replaced)
    }

    /// Observe every subsequent change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.current.subscribe()
    }

    fn persist(&self, session: &Session) -> Result<(), StorageError> {
        match &session.token {
            Some(token) => self.store.set(storage_keys::TOKEN, token)?,
            None => self.store.remove(storage_keys::TOKEN)?,
        }

        match &session.user {
            Some(user) => {
                let raw = serde_json::to_string(user).map_err(|source| StorageError::Encode {
                    key: storage_keys::USER,
                    source,
                })?;
                self.store.set(storage_keys::USER, &raw)
            }
            None => self.store.remove(storage_keys::USER),
        }
    }
}
