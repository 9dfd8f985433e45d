// ABOUTME: Session verification, login and logout against the GainLog auth endpoints
// ABOUTME: Keeps token and user profile consistent after every verification attempt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

//! Authentication flows
//!
//! Tokens are issued by an external auth service. This module only records
//! them, checks them against `auth/verify`, and forgets them.

use gainlog_core::constants::endpoints;
use gainlog_core::models::UserProfile;
use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::client::{AuthenticatedClient, RequestOptions};
use crate::errors::ApiResult;

/// Body of a successful `auth/verify` response
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    user: UserProfile,
}

/// Login, logout and token verification
#[derive(Clone)]
pub struct AuthService {
    client: AuthenticatedClient,
}

impl AuthService {
    /// Create a service over `client`
    #[must_use]
    pub const fn new(client: AuthenticatedClient) -> Self {
        Self { client }
    }

    /// Record credentials issued by the auth service
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be persisted
    pub fn login(&self, token: impl Into<String>, user: UserProfile) -> ApiResult<()> {
        self.client.session().set(Some(token.into()), Some(user))?;
        info!("Session started");
        Ok(())
    }

    /// Forget the current session
    ///
    /// # Errors
    ///
    /// Returns an error if the stored session cannot be removed
    pub fn logout(&self) -> ApiResult<()> {
        self.client.session().clear()?;
        info!("Session ended");
        Ok(())
    }

    /// Check the stored token with the server
    ///
    /// Returns `false` without a network call when no token is held. On
    /// success the session user is refreshed from the response; on any
    /// failure the session is cleared. Both only apply while the session
    /// still holds the verified token: a login or logout that completes
    /// during the request wins, and `false` is returned. Verification
    /// failures are not redirects: the caller decides what an
    /// unauthenticated start means.
    pub async fn verify(&self) -> bool {
        let session = self.client.session();
        let Some(token) = session.token() else {
            return false;
        };

        let outcome = match self
            .client
            .send::<()>(endpoints::AUTH_VERIFY, Method::GET, None, RequestOptions::default())
            .await
        {
            Ok(response) if response.status().is_success() => {
                match response.json::<VerifyResponse>().await {
                    Ok(body) => Some(body.user),
                    Err(e) => {
                        error!(error = %e, "Auth verification returned an unreadable body");
                        None
                    }
                }
            }
            Ok(response) => {
                warn!(status = %response.status(), "Stored token rejected");
                None
            }
            Err(e) => {
                error!(error = %e, "Auth verification failed");
                None
            }
        };

        let verified = outcome.is_some();
        let result = match outcome {
            Some(user) => session.replace_if_token(&token, Some(token.clone()), Some(user)),
            None => session.replace_if_token(&token, None, None),
        };
        match result {
            Ok(true) => {}
            Ok(false) => {
                debug!("Session changed during verification; result discarded");
                return false;
            }
            Err(e) => warn!(error = %e, "Failed to persist session after verification"),
        }

        verified
    }
}
