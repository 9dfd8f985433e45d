// ABOUTME: Application context owning session, client, services and stores
// ABOUTME: Explicit construction and teardown in place of process-wide singletons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

//! Application context
//!
//! Everything a front end needs is built here once and passed down. Two
//! contexts never share state, which keeps tests isolated.

use std::sync::Arc;

use tracing::{debug, info};

use crate::auth::AuthService;
use crate::client::AuthenticatedClient;
use crate::config::ClientConfig;
use crate::errors::ApiResult;
use crate::services::{ExerciseService, WorkoutService};
use crate::session::storage::{FileSessionStore, SessionStore};
use crate::session::SessionState;
use crate::stores::WorkoutCache;

/// Composition root for a GainLog front end
pub struct AppContext {
    config: ClientConfig,
    session: Arc<SessionState>,
    client: AuthenticatedClient,
    auth: AuthService,
    exercises: ExerciseService,
    workouts: WorkoutCache,
}

impl AppContext {
    /// Build a context whose session lives under `config.data_dir`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the stored
    /// session cannot be read
    pub fn init(config: ClientConfig) -> ApiResult<Self> {
        let store = FileSessionStore::open(&config.data_dir)?;
        Self::with_store(config, Arc::new(store))
    }

    /// Build a context over an explicit session store
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the stored
    /// session cannot be read
    pub fn with_store(config: ClientConfig, store: Arc<dyn SessionStore>) -> ApiResult<Self> {
        config.validate()?;

        let session = Arc::new(SessionState::load(store)?);
        let client = AuthenticatedClient::new(&config, Arc::clone(&session))?;
        let auth = AuthService::new(client.clone());
        let exercises = ExerciseService::new(client.clone());
        let workouts = WorkoutCache::new(WorkoutService::new(client.clone()));

        info!(
            api_url = %config.api_url,
            authenticated = session.is_authenticated(),
            "Application context initialized"
        );

        Ok(Self {
            config,
            session,
            client,
            auth,
            exercises,
            workouts,
        })
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Session state
    #[must_use]
    pub const fn session(&self) -> &Arc<SessionState> {
        &self.session
    }

    /// Authenticated client for ad-hoc calls
    #[must_use]
    pub const fn client(&self) -> &AuthenticatedClient {
        &self.client
    }

    /// Login, logout and verification
    #[must_use]
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Exercise reference data
    #[must_use]
    pub const fn exercises(&self) -> &ExerciseService {
        &self.exercises
    }

    /// Workout cache
    #[must_use]
    pub const fn workouts(&self) -> &WorkoutCache {
        &self.workouts
    }

    /// Tear the context down
    ///
    /// Dropping the stores closes their watch channels, which ends any
    /// subscriber loops. The session itself is already persisted.
    pub fn shutdown(self) {
        let authenticated = self.session.is_authenticated();
        drop(self);
        debug!(authenticated, "Application context shut down");
    }
}
