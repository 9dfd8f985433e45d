// ABOUTME: Typed API services built on the authenticated client
// ABOUTME: Workout CRUD and exercise reference data with per-operation error messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

/// Exercise reference data
pub mod exercises;

/// Workout CRUD
pub mod workouts;

pub use exercises::ExerciseService;
pub use workouts::WorkoutService;

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::errors::{ApiError, ApiResult};

/// Fail with `failure` on a non-2xx status, otherwise decode the JSON body
async fn decode_success<T: DeserializeOwned>(
    response: Response,
    failure: &'static str,
    context: &'static str,
) -> ApiResult<T> {
    let response = ensure_success(response, failure)?;
    response
        .json()
        .await
        .map_err(|source| ApiError::Decode { context, source })
}

/// Fail with `failure` on a non-2xx status
fn ensure_success(response: Response, failure: &'static str) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::resource(status.as_u16(), failure))
    }
}
