// ABOUTME: Authenticated HTTP access to the GainLog API
// ABOUTME: Injects the session token, forwards responses, and handles 401 session expiry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

//! Authenticated API access
//!
//! [`AuthenticatedClient::request`] is the single place where session
//! expiry is detected. A 401 clears the session once and fails with
//! [`ApiError::SessionExpired`] or [`ApiError::AuthenticationFailed`];
//! every other response is handed back with its body unread so callers
//! decide how to interpret it.

/// Construction of the underlying HTTP client
pub mod http;

/// Typed login redirects
pub mod navigation;

use std::sync::Arc;

use gainlog_core::constants::{headers as header_names, EXPIRED_TOKEN_MARKER};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::errors::{ApiError, ApiResult};
use crate::session::SessionState;

pub use navigation::Redirect;

/// Per-request overrides
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: HeaderMap,
}

impl RequestOptions {
    /// Add a header, replacing any default header of the same name
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Headers supplied by the caller
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Error body sent with 401 responses
#[derive(Debug, Deserialize)]
struct UnauthorizedBody {
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client bound to one API base URL and one session
#[derive(Clone)]
pub struct AuthenticatedClient {
    http: Client,
    base_url: String,
    session: Arc<SessionState>,
}

impl AuthenticatedClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured API URL is invalid
    pub fn new(config: &ClientConfig, session: Arc<SessionState>) -> ApiResult<Self> {
        Self::with_http_client(http::build_http_client(config), &config.api_url, session)
    }

    /// Create a client around an existing `reqwest::Client`
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL
    pub fn with_http_client(
        http: Client,
        base_url: &str,
        session: Arc<SessionState>,
    ) -> ApiResult<Self> {
        Url::parse(base_url)
            .map_err(|e| ApiError::config(format!("Invalid API URL '{base_url}': {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            session,
        })
    }

    /// Session this client reads tokens from
    #[must_use]
    pub const fn session(&self) -> &Arc<SessionState> {
        &self.session
    }

    /// Absolute URL for a relative resource path
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET` a resource with default options
    ///
    /// # Errors
    ///
    /// See [`Self::request`]
    pub async fn get(&self, path: &str) -> ApiResult<Response> {
        self.request::<()>(path, Method::GET, None, RequestOptions::default())
            .await
    }

    /// Perform one authenticated call
    ///
    /// The body is serialized as JSON for every method except `GET` and
    /// `HEAD`. Non-401 responses are returned untouched, including error
    /// statuses.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] when no response was received
    /// - [`ApiError::SessionExpired`] on a 401 whose error mentions expiry
    /// - [`ApiError::AuthenticationFailed`] on any other 401
    /// - [`ApiError::Json`] when the body cannot be encoded
    pub async fn request<B>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
        options: RequestOptions,
    ) -> ApiResult<Response>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(path, method, body, options).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(self.handle_unauthorized(path, response).await);
        }

        Ok(response)
    }

    /// Perform a call without 401 interception
    pub(crate) async fn send<B>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
        options: RequestOptions,
    ) -> ApiResult<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url_for(path);
        let mut builder = self
            .http
            .request(method.clone(), &url)
            .headers(self.build_headers(options));

        if let Some(body) = body.filter(|_| method != Method::GET && method != Method::HEAD) {
            let bytes = serde_json::to_vec(body).map_err(|source| ApiError::Json {
                context: "request body",
                source,
            })?;
            builder = builder.body(bytes);
        }

        debug!(%method, path, "Sending API request");

        builder.send().await.map_err(|source| {
            error!(%method, path, error = %source, "API request failed");
            ApiError::Transport {
                path: path.to_owned(),
                source,
            }
        })
    }

    fn build_headers(&self, options: RequestOptions) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(header_names::CONTENT_TYPE_JSON),
        );

        if let Some(token) = self.session.token() {
            match HeaderValue::from_str(&token) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("Stored token is not a valid header value; sending without it"),
            }
        }

        for (name, value) in &options.headers {
            headers.insert(name.clone(), value.clone());
        }

        headers
    }

    async fn handle_unauthorized(&self, path: &str, response: Response) -> ApiError {
        let expired = match response.json::<UnauthorizedBody>().await {
            Ok(body) => body
                .error
                .is_some_and(|message| message.contains(EXPIRED_TOKEN_MARKER)),
            Err(e) => {
                debug!(path, error = %e, "Unreadable 401 body");
                false
            }
        };

        if let Err(e) = self.session.clear() {
            warn!(error = %e, "Failed to persist cleared session");
        }

        if expired {
            warn!(path, "Token expired, session cleared");
            ApiError::SessionExpired
        } else {
            warn!(path, "Authentication rejected, session cleared");
            ApiError::AuthenticationFailed
        }
    }
}
