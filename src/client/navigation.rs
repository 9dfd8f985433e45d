// ABOUTME: Typed login redirects reported by the API-access layer
// ABOUTME: The UI layer maps these to its own navigation facility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

use std::fmt;

use gainlog_core::constants::routes;

/// Where the UI should send the user after the session was cleared
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Redirect {
    /// Plain login view
    Login,
    /// Login view with the session-expired notice
    LoginExpired,
}

impl Redirect {
    /// Client route for this redirect
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Login => routes::LOGIN,
            Self::LoginExpired => routes::LOGIN_EXPIRED,
        }
    }

    /// Whether the target view should show the expiry notice
    #[must_use]
    pub const fn is_expired(self) -> bool {
        matches!(self, Self::LoginExpired)
    }
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}
