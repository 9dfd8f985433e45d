// ABOUTME: Workout CRUD service over the authenticated client
// ABOUTME: Maps list, detail, create, update, complete and delete to API calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

use chrono::Utc;
use gainlog_core::constants::{defaults, endpoints};
use gainlog_core::models::{
    ExerciseId, NewWorkout, Workout, WorkoutEnvelope, WorkoutId, WorkoutPatch,
};
use gainlog_core::pagination::{PaginatedWorkouts, PaginationParams};
use reqwest::{Method, StatusCode};
use tracing::{debug, info};

use super::{decode_success, ensure_success};
use crate::client::{AuthenticatedClient, RequestOptions};
use crate::errors::{ApiError, ApiResult};

/// Typed access to the workout endpoints
///
/// Non-2xx responses become [`ApiError::Resource`] with an operation
/// specific message; session and transport errors pass through unchanged.
#[derive(Clone)]
pub struct WorkoutService {
    client: AuthenticatedClient,
}

impl WorkoutService {
    /// Create a service over `client`
    #[must_use]
    pub const fn new(client: AuthenticatedClient) -> Self {
        Self { client }
    }

    /// Underlying client
    #[must_use]
    pub const fn client(&self) -> &AuthenticatedClient {
        &self.client
    }

    /// One page of workouts with its pagination metadata
    ///
    /// # Errors
    ///
    /// Returns `Resource("Failed to fetch workouts")` on a non-2xx status
    pub async fn get_all(&self, params: Option<PaginationParams>) -> ApiResult<PaginatedWorkouts> {
        let path = params.unwrap_or_default().apply_to(endpoints::WORKOUTS);
        let response = self.client.get(&path).await?;
        let page: PaginatedWorkouts =
            decode_success(response, "Failed to fetch workouts", "workout list").await?;

        debug!(
            count = page.workouts.len(),
            page = page.pagination.current_page,
            "Fetched workouts"
        );
        Ok(page)
    }

    /// The `limit` most recent workouts as a bare list, six by default
    ///
    /// # Errors
    ///
    /// Returns `Resource("Failed to fetch recent workouts")` on a non-2xx status
    pub async fn get_recent(&self, limit: Option<u32>) -> ApiResult<Vec<Workout>> {
        let limit = limit.unwrap_or(defaults::RECENT_ENDPOINT_LIMIT);
        let path = format!("{}?limit={limit}", endpoints::WORKOUTS);
        let response = self.client.get(&path).await?;
        decode_success(response, "Failed to fetch recent workouts", "recent workouts").await
    }

    /// A single workout, including its sets when the server embeds them
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] on 404 and
    /// `Resource("Failed to fetch workout")` on any other non-2xx status
    pub async fn get_by_id(&self, id: WorkoutId) -> ApiResult<Workout> {
        let response = self.client.get(&workout_path(id)).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                resource: "Workout",
            });
        }
        decode_success(response, "Failed to fetch workout", "workout").await
    }

    /// Create a workout dated today with the given exercises
    ///
    /// # Errors
    ///
    /// Returns `Resource("Failed to create workout")` on a non-2xx status
    pub async fn create(&self, exercise_ids: &[ExerciseId]) -> ApiResult<Workout> {
        let body = WorkoutEnvelope::new(NewWorkout::today(exercise_ids.to_vec()));
        let response = self
            .client
            .request(
                endpoints::WORKOUTS,
                Method::POST,
                Some(&body),
                RequestOptions::default(),
            )
            .await?;
        let workout: Workout =
            decode_success(response, "Failed to create workout", "created workout").await?;

        info!(
            workout_id = workout.id,
            exercises = exercise_ids.len(),
            "Workout created"
        );
        Ok(workout)
    }

    /// Patch a workout and return the server's copy
    ///
    /// # Errors
    ///
    /// Returns `Resource("Failed to update workout")` on a non-2xx status
    pub async fn update(&self, id: WorkoutId, patch: &WorkoutPatch) -> ApiResult<Workout> {
        let body = WorkoutEnvelope::new(patch);
        let response = self
            .client
            .request(
                &workout_path(id),
                Method::PATCH,
                Some(&body),
                RequestOptions::default(),
            )
            .await?;
        let workout: Workout =
            decode_success(response, "Failed to update workout", "updated workout").await?;

        info!(workout_id = id, "Workout updated");
        Ok(workout)
    }

    /// Mark a workout complete as of now
    ///
    /// # Errors
    ///
    /// See [`Self::update`]
    pub async fn complete(&self, id: WorkoutId) -> ApiResult<Workout> {
        self.update(id, &WorkoutPatch::completed_at(Utc::now()))
            .await
    }

    /// Delete a workout
    ///
    /// # Errors
    ///
    /// Returns `Resource("Failed to delete workout")` on a non-2xx status
    pub async fn delete(&self, id: WorkoutId) -> ApiResult<()> {
        let response = self
            .client
            .request::<()>(
                &workout_path(id),
                Method::DELETE,
                None,
                RequestOptions::default(),
            )
            .await?;
        ensure_success(response, "Failed to delete workout")?;

        info!(workout_id = id, "Workout deleted");
        Ok(())
    }
}

fn workout_path(id: WorkoutId) -> String {
    format!("{}/{id}", endpoints::WORKOUTS)
}
