// ABOUTME: Integration tests for the authenticated API client
// ABOUTME: Covers token injection, 401 session handling and response pass-through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use common::{api_path, client_for, session_with_token, TEST_TOKEN};
use gainlog::client::{AuthenticatedClient, Redirect, RequestOptions};
use gainlog::errors::ApiError;
use gainlog::session::SessionState;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_raw_token_sent_in_authorization_header() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("workouts")))
        .and(header("authorization", TEST_TOKEN))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, session_with_token(Some(TEST_TOKEN)));
    let response = client.get("workouts").await?;

    assert_eq!(response.status().as_u16(), 200);
    Ok(())
}

#[tokio::test]
async fn test_no_authorization_header_without_token() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("exercises")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server, session_with_token(None));
    client.get("exercises").await?;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
    assert!(requests[0].body.is_empty(), "GET must not carry a body");
    Ok(())
}

#[tokio::test]
async fn test_get_ignores_supplied_body() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server, session_with_token(Some(TEST_TOKEN)));
    client
        .request(
            "workouts",
            Method::GET,
            Some(&json!({"ignored": true})),
            RequestOptions::default(),
        )
        .await?;

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_json_body_sent_for_post() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("workouts")))
        .and(body_json(json!({"workout": {"exercise_ids": [1]}})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, session_with_token(Some(TEST_TOKEN)));
    let response = client
        .request(
            "/workouts",
            Method::POST,
            Some(&json!({"workout": {"exercise_ids": [1]}})),
            RequestOptions::default(),
        )
        .await?;

    assert_eq!(response.status().as_u16(), 201);
    Ok(())
}

#[tokio::test]
async fn test_caller_headers_override_defaults() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "other-token"))
        .and(header("x-trace", "abc"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, session_with_token(Some(TEST_TOKEN)));
    let options = RequestOptions::default()
        .header(AUTHORIZATION, HeaderValue::from_static("other-token"))
        .header(
            reqwest::header::HeaderName::from_static("x-trace"),
            HeaderValue::from_static("abc"),
        );
    client
        .request::<()>("workouts", Method::GET, None, options)
        .await?;
    Ok(())
}

#[tokio::test]
async fn test_expired_token_clears_session_and_redirects_with_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Token has expired"})),
        )
        .mount(&server)
        .await;

    let session = session_with_token(Some(TEST_TOKEN));
    let client = client_for(&server, Arc::clone(&session));
    let err = client.get("workouts").await.unwrap_err();

    assert!(matches!(err, ApiError::SessionExpired));
    assert_eq!(err.to_string(), "Session expired. Please login again.");
    assert_eq!(err.redirect(), Some(Redirect::LoginExpired));
    assert_eq!(err.redirect().unwrap().route(), "/login?expired=true");

    let current = session.read();
    assert!(current.token.is_none());
    assert!(current.user.is_none());
}

#[tokio::test]
async fn test_concurrent_unauthorized_responses_each_clear_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error": "Token has expired"}))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let session = session_with_token(Some(TEST_TOKEN));
    let client = client_for(&server, Arc::clone(&session));
    let mut rx = session.subscribe();

    let (a, b) = tokio::join!(client.get("workouts"), client.get("exercises"));

    assert!(matches!(a, Err(ApiError::SessionExpired)));
    assert!(matches!(b, Err(ApiError::SessionExpired)));
    assert!(!session.is_authenticated());
    assert!(session.read().user.is_none());
    assert!(rx.has_changed().unwrap());
    assert!(!rx.borrow_and_update().is_authenticated());
}

#[tokio::test]
async fn test_other_unauthorized_clears_session_and_redirects_to_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid token"})))
        .mount(&server)
        .await;

    let session = session_with_token(Some(TEST_TOKEN));
    let client = client_for(&server, Arc::clone(&session));
    let err = client.get("workouts").await.unwrap_err();

    assert!(matches!(err, ApiError::AuthenticationFailed));
    assert_eq!(err.to_string(), "Authentication failed. Please login again.");
    assert_eq!(err.redirect(), Some(Redirect::Login));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_unreadable_unauthorized_body_is_not_expiry() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(401).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let session = session_with_token(Some(TEST_TOKEN));
    let client = client_for(&server, Arc::clone(&session));
    let err = client
        .request::<()>("workouts/1", Method::DELETE, None, RequestOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::AuthenticationFailed));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_error_statuses_pass_through_untouched() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let session = session_with_token(Some(TEST_TOKEN));
    let client = client_for(&server, Arc::clone(&session));
    let response = client.get("workouts").await?;

    assert_eq!(response.status().as_u16(), 500);
    assert!(session.is_authenticated(), "only 401 clears the session");
    Ok(())
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    let session = Arc::new(SessionState::in_memory());
    let client = AuthenticatedClient::with_http_client(
        reqwest::Client::new(),
        "http://127.0.0.1:1/api",
        session,
    )
    .unwrap();

    let err = client.get("workouts").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
    assert!(err.redirect().is_none());
}
