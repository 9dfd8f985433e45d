// ABOUTME: Read-only access to exercise reference data
// ABOUTME: Accepts either a bare array or an `exercises` envelope from the list endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

use gainlog_core::constants::endpoints;
use gainlog_core::models::Exercise;
use serde_json::Value;

use super::decode_success;
use crate::client::AuthenticatedClient;
use crate::errors::{ApiError, ApiResult};

/// Exercise catalogue shared by all workouts
#[derive(Clone)]
pub struct ExerciseService {
    client: AuthenticatedClient,
}

impl ExerciseService {
    /// Create a service over `client`
    #[must_use]
    pub const fn new(client: AuthenticatedClient) -> Self {
        Self { client }
    }

    /// All exercises
    ///
    /// # Errors
    ///
    /// Returns `Resource("Failed to fetch exercises")` on a non-2xx status and
    /// [`ApiError::Json`] when the body holds no exercise list
    pub async fn list(&self) -> ApiResult<Vec<Exercise>> {
        let response = self.client.get(endpoints::EXERCISES).await?;
        let body: Value =
            decode_success(response, "Failed to fetch exercises", "exercise list").await?;

        let list = match body {
            Value::Object(mut map) => map.remove("exercises").unwrap_or(Value::Null),
            other => other,
        };

        serde_json::from_value(list).map_err(|source| ApiError::Json {
            context: "exercise list",
            source,
        })
    }
}
