// ABOUTME: Reactive workout cache kept consistent with server responses
// ABOUTME: List, detail and pagination state with loading/error flags for the UI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

//! Workout cache
//!
//! Local state only changes after the server confirms an operation; there is
//! no optimistic update and therefore no rollback. Operations are not tagged
//! with a request generation, so when two fetches race the one that resolves
//! last wins, even if it was issued first.

use gainlog_core::constants::defaults;
use gainlog_core::models::{ExerciseId, Workout, WorkoutId, WorkoutPatch, WorkoutSet};
use gainlog_core::pagination::{PaginationMeta, PaginationParams};
use tokio::sync::watch;
use tracing::{debug, error};

use crate::client::Redirect;
use crate::errors::{ApiError, ApiResult};
use crate::services::WorkoutService;

/// Snapshot of everything the workout views render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutState {
    /// Current page of workouts, newest first
    pub list: Vec<Workout>,
    /// Workout open in the detail view
    pub current: Option<Workout>,
    /// Recent workouts widget
    pub recent: Vec<Workout>,
    /// Paging state of `list`
    pub pagination: Option<PaginationMeta>,
    /// Whether an operation is in flight
    pub loading: bool,
    /// Message of the last failed operation
    pub error: Option<String>,
    /// Login route to show when the last failure cleared the session
    pub redirect: Option<Redirect>,
}

/// Sets `loading` on creation and clears it when dropped, whatever the outcome
struct LoadingGuard<'a> {
    state: &'a watch::Sender<WorkoutState>,
}

impl<'a> LoadingGuard<'a> {
    fn begin(state: &'a watch::Sender<WorkoutState>) -> Self {
        state.send_modify(|s| {
            s.loading = true;
            s.error = None;
            s.redirect = None;
        });
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|s| s.loading = false);
    }
}

/// Workout façade with a locally cached, observable view
pub struct WorkoutCache {
    service: WorkoutService,
    state: watch::Sender<WorkoutState>,
}

impl WorkoutCache {
    /// Empty cache over `service`
    #[must_use]
    pub fn new(service: WorkoutService) -> Self {
        let (state, _) = watch::channel(WorkoutState::default());
        Self { service, state }
    }

    /// Service used for server calls
    #[must_use]
    pub const fn service(&self) -> &WorkoutService {
        &self.service
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> WorkoutState {
        self.state.borrow().clone()
    }

    /// Observe state changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<WorkoutState> {
        self.state.subscribe()
    }

    /// Replace `list` and `pagination` with one page from the server
    ///
    /// Failures are recorded in `error` rather than returned.
    pub async fn fetch_all(&self, params: Option<PaginationParams>) {
        let _loading = LoadingGuard::begin(&self.state);

        match self.service.get_all(params).await {
            Ok(page) => self.state.send_modify(|s| {
                s.list = page.workouts;
                s.pagination = Some(page.pagination);
            }),
            Err(e) => {
                error!(error = %e, "Failed to load workouts");
                self.record_error(&e);
            }
        }
    }

    /// Load the first `limit` workouts
    ///
    /// Writes `list` and leaves `recent` and `pagination` untouched.
    pub async fn fetch_recent(&self, limit: Option<u32>) {
        let _loading = LoadingGuard::begin(&self.state);
        let limit = limit.unwrap_or(defaults::RECENT_WORKOUTS_LIMIT);

        match self.service.get_all(Some(PaginationParams::new(1, limit))).await {
            Ok(page) => self.state.send_modify(|s| s.list = page.workouts),
            Err(e) => {
                error!(error = %e, limit, "Failed to load recent workouts");
                self.record_error(&e);
            }
        }
    }

    /// Replace `current` with the server's copy of workout `id`
    ///
    /// Failures are recorded in `error` rather than returned.
    pub async fn fetch_by_id(&self, id: WorkoutId) {
        let _loading = LoadingGuard::begin(&self.state);

        match self.service.get_by_id(id).await {
            Ok(workout) => {
                debug!(workout_id = id, "Loaded workout detail");
                self.state.send_modify(|s| s.current = Some(workout));
            }
            Err(e) => {
                error!(error = %e, workout_id = id, "Failed to load workout");
                self.record_error(&e);
            }
        }
    }

    /// Create a workout and put it at the top of `list`
    ///
    /// # Errors
    ///
    /// Returns the service error after recording it in `error`
    pub async fn create(&self, exercise_ids: &[ExerciseId]) -> ApiResult<Workout> {
        let _loading = LoadingGuard::begin(&self.state);

        let workout = self
            .service
            .create(exercise_ids)
            .await
            .inspect_err(|e| self.fail("Failed to create workout", e))?;

        let entry = workout.clone();
        self.state.send_modify(|s| s.list.insert(0, entry));
        Ok(workout)
    }

    /// Patch a workout and merge the server's copy into `list` and `current`
    ///
    /// # Errors
    ///
    /// Returns the service error after recording it in `error`
    pub async fn update(&self, id: WorkoutId, patch: &WorkoutPatch) -> ApiResult<Workout> {
        let _loading = LoadingGuard::begin(&self.state);

        let updated = self
            .service
            .update(id, patch)
            .await
            .inspect_err(|e| self.fail("Failed to update workout", e))?;

        self.state.send_modify(|s| {
            if let Some(entry) = s.list.iter_mut().find(|w| w.id == id) {
                entry.merge_from(updated.clone());
            }
            if let Some(current) = s.current.as_mut().filter(|w| w.id == id) {
                current.merge_from(updated.clone());
            }
        });
        Ok(updated)
    }

    /// Mark a workout complete
    ///
    /// Only the completion timestamp is copied into the cached entries.
    ///
    /// # Errors
    ///
    /// Returns the service error after recording it in `error`
    pub async fn complete(&self, id: WorkoutId) -> ApiResult<Workout> {
        let _loading = LoadingGuard::begin(&self.state);

        let updated = self
            .service
            .complete(id)
            .await
            .inspect_err(|e| self.fail("Failed to complete workout", e))?;

        let completed_at = updated.completed_at;
        self.state.send_modify(|s| {
            if let Some(entry) = s.list.iter_mut().find(|w| w.id == id) {
                entry.completed_at = completed_at;
            }
            if let Some(current) = s.current.as_mut().filter(|w| w.id == id) {
                current.completed_at = completed_at;
            }
        });
        Ok(updated)
    }

    /// Delete a workout and drop it from `list` and `current`
    ///
    /// # Errors
    ///
    /// Returns the service error after recording it in `error`
    pub async fn delete(&self, id: WorkoutId) -> ApiResult<()> {
        let _loading = LoadingGuard::begin(&self.state);

        self.service
            .delete(id)
            .await
            .inspect_err(|e| self.fail("Failed to delete workout", e))?;

        self.state.send_modify(|s| {
            s.list.retain(|w| w.id != id);
            if s.current.as_ref().is_some_and(|w| w.id == id) {
                s.current = None;
            }
        });
        Ok(())
    }

    /// Replace the sets of the open workout after a local edit
    pub fn update_current_sets(&self, sets: Vec<WorkoutSet>) {
        self.state.send_modify(|s| {
            if let Some(current) = s.current.as_mut() {
                current.workout_sets = Some(sets);
            }
        });
    }

    /// Dismiss the last error
    pub fn clear_error(&self) {
        self.state.send_modify(|s| {
            s.error = None;
            s.redirect = None;
        });
    }

    fn fail(&self, operation: &'static str, e: &ApiError) {
        error!(error = %e, "{operation}");
        self.record_error(e);
    }

    fn record_error(&self, e: &ApiError) {
        let message = e.to_string();
        let redirect = e.redirect();
        self.state.send_modify(|s| {
            s.error = Some(message);
            s.redirect = redirect;
        });
    }
}
