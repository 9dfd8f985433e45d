// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides mock-server clients, sessions and workout fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `gainlog`

use std::sync::{Arc, Once};

use gainlog::client::AuthenticatedClient;
use gainlog::models::UserProfile;
use gainlog::services::WorkoutService;
use gainlog::session::SessionState;
use gainlog::stores::WorkoutCache;
use serde_json::{json, Value};
use wiremock::MockServer;

static INIT_LOGGER: Once = Once::new();

/// Path prefix the mock API is mounted under
pub const API_PREFIX: &str = "/api/v1";

/// Token used by authenticated tests
pub const TEST_TOKEN: &str = "test-token-abc";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Absolute API base URL on the mock server
pub fn api_base(server: &MockServer) -> String {
    format!("{}{API_PREFIX}", server.uri())
}

/// Mock-server path for a resource
pub fn api_path(resource: &str) -> String {
    format!("{API_PREFIX}/{resource}")
}

/// In-memory session, optionally holding `token`
pub fn session_with_token(token: Option<&str>) -> Arc<SessionState> {
    let session = Arc::new(SessionState::in_memory());
    if let Some(token) = token {
        session
            .set(Some(token.to_owned()), Some(test_user()))
            .unwrap();
    }
    session
}

/// Client bound to the mock server
pub fn client_for(server: &MockServer, session: Arc<SessionState>) -> AuthenticatedClient {
    init_test_logging();
    AuthenticatedClient::with_http_client(reqwest::Client::new(), &api_base(server), session)
        .unwrap()
}

/// Authenticated workout cache bound to the mock server
pub fn cache_for(server: &MockServer) -> (WorkoutCache, Arc<SessionState>) {
    let session = session_with_token(Some(TEST_TOKEN));
    let client = client_for(server, Arc::clone(&session));
    (WorkoutCache::new(WorkoutService::new(client)), session)
}

/// Profile of the signed-in test user
pub fn test_user() -> UserProfile {
    UserProfile {
        id: Some(1),
        email: Some("lifter@example.com".into()),
        username: Some("lifter".into()),
        ..UserProfile::default()
    }
}

/// Workout as the API serves it
pub fn workout_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "created_at": "2025-03-01T09:00:00Z",
        "updated_at": "2025-03-01T09:00:00Z",
        "completed_at": null
    })
}

/// Workout with one embedded set
pub fn workout_with_sets_json(id: i64, title: &str) -> Value {
    let mut workout = workout_json(id, title);
    workout["workout_sets"] = json!([{
        "id": 100,
        "workout_id": id,
        "exercise_id": 3,
        "weight": 80.0,
        "reps": 5,
        "set_order": 1,
        "notes": null,
        "rest_time": 120
    }]);
    workout
}

/// Workout list response with pagination metadata
pub fn page_json(workouts: Vec<Value>, current_page: u32, per_page: u32, total_count: u64) -> Value {
    let total_pages = total_count.div_ceil(u64::from(per_page.max(1)));
    json!({
        "workouts": workouts,
        "pagination": {
            "current_page": current_page,
            "per_page": per_page,
            "total_count": total_count,
            "total_pages": total_pages,
            "has_next_page": u64::from(current_page) < total_pages,
            "has_prev_page": current_page > 1
        }
    })
}
