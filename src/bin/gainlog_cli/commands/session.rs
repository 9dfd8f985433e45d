// ABOUTME: Session commands for the gainlog CLI
// ABOUTME: Handles login, verification, logout and display of the stored session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

use anyhow::{bail, Result};
use gainlog::client::Redirect;
use gainlog::context::AppContext;
use gainlog::models::UserProfile;
use tracing::info;

use crate::helpers::display::{display_redirect, display_session};

/// Record a token and, unless told otherwise, confirm it with the server
pub async fn login(
    ctx: &AppContext,
    token: String,
    email: Option<String>,
    username: Option<String>,
    no_verify: bool,
) -> Result<()> {
    let user = UserProfile {
        email,
        username,
        ..UserProfile::default()
    };
    ctx.auth().login(token, user)?;

    if no_verify {
        info!("Token stored without verification");
    } else if !ctx.auth().verify().await {
        display_redirect(Redirect::Login);
        bail!("Token was rejected by the server");
    }

    display_session(&ctx.session().read());
    Ok(())
}

/// Verify the stored token
pub async fn verify(ctx: &AppContext) -> Result<()> {
    if !ctx.session().is_authenticated() {
        display_redirect(Redirect::Login);
        bail!("Not logged in");
    }
    if !ctx.auth().verify().await {
        display_redirect(Redirect::Login);
        bail!("Stored token is no longer valid");
    }

    println!("Session is valid");
    display_session(&ctx.session().read());
    Ok(())
}

/// Forget the stored session
pub fn logout(ctx: &AppContext) -> Result<()> {
    ctx.auth().logout()?;
    println!("Logged out");
    Ok(())
}

/// Print the stored session without contacting the server
pub fn show(ctx: &AppContext) {
    display_session(&ctx.session().read());
}
