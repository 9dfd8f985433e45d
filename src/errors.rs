// ABOUTME: Unified error type for the GainLog client crate
// ABOUTME: Distinguishes transport, session, resource and local persistence failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

//! # Error Handling
//!
//! Every fallible operation in this crate returns [`ApiResult`]. Session
//! errors carry the login route the UI should navigate to; the library itself
//! never navigates.

use crate::client::navigation::Redirect;
use crate::session::storage::StorageError;

/// Errors surfaced by the API-access layer and the stores built on it
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network, DNS or TLS failure before a response was received
    #[error("Request to {path} failed: {source}")]
    Transport {
        /// Relative resource path of the failed request
        path: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The server rejected the token as expired; session has been cleared
    #[error("Session expired. Please login again.")]
    SessionExpired,

    /// The server rejected the request as unauthenticated; session has been cleared
    #[error("Authentication failed. Please login again.")]
    AuthenticationFailed,

    /// Non-2xx response for a resource operation
    #[error("{message}")]
    Resource {
        /// HTTP status code returned by the server
        status: u16,
        /// Operation-specific message, e.g. "Failed to fetch workouts"
        message: &'static str,
    },

    /// The requested resource does not exist
    #[error("{resource} not found")]
    NotFound {
        /// Resource kind, e.g. "Workout"
        resource: &'static str,
    },

    /// A successful response body did not match the expected shape
    #[error("Failed to decode {context} response: {source}")]
    Decode {
        /// What was being decoded
        context: &'static str,
        /// Underlying decode error
        #[source]
        source: reqwest::Error,
    },

    /// JSON could not be encoded or did not match the expected shape
    #[error("Invalid JSON for {context}: {source}")]
    Json {
        /// What was being encoded or decoded
        context: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Durable session storage failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Resource failure with an operation-specific message
    #[must_use]
    pub const fn resource(status: u16, message: &'static str) -> Self {
        Self::Resource { status, message }
    }

    /// Configuration failure
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Login route the UI should navigate to, for session failures only
    #[must_use]
    pub const fn redirect(&self) -> Option<Redirect> {
        match self {
            Self::SessionExpired => Some(Redirect::LoginExpired),
            Self::AuthenticationFailed => Some(Redirect::Login),
            _ => None,
        }
    }

    /// Whether the session was cleared because of this error
    #[must_use]
    pub const fn is_session_error(&self) -> bool {
        matches!(self, Self::SessionExpired | Self::AuthenticationFailed)
    }

    /// HTTP status attached to the error, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::SessionExpired | Self::AuthenticationFailed => Some(401),
            Self::Resource { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::Transport { source, .. } | Self::Decode { source, .. } => {
                source.status().map(|s| s.as_u16())
            }
            Self::Json { .. } | Self::Storage(_) | Self::Config(_) => None,
        }
    }
}

/// Result alias used throughout the crate
pub type ApiResult<T> = Result<T, ApiError>;
