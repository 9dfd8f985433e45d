// ABOUTME: Construction of the underlying reqwest client from client configuration
// ABOUTME: Connection-pooled client with optional request timeout and fixed user agent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

use reqwest::{Client, ClientBuilder};
use tracing::warn;

use crate::config::ClientConfig;

/// Build the HTTP client used for every API call
///
/// No timeout is applied unless one is configured; requests then wait on the
/// transport's own defaults. Falls back to a default client if the builder
/// rejects the configuration.
#[must_use]
pub fn build_http_client(config: &ClientConfig) -> Client {
    create_custom_client(|builder| {
        let builder = builder.user_agent(config.user_agent.clone());
        match config.http_timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    })
}

/// Create a client from a customized `ClientBuilder`
pub fn create_custom_client<F>(config_fn: F) -> Client
where
    F: FnOnce(ClientBuilder) -> ClientBuilder,
{
    config_fn(ClientBuilder::new()).build().unwrap_or_else(|e| {
        warn!(error = %e, "Falling back to default HTTP client");
        Client::new()
    })
}
