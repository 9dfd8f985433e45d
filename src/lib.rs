// ABOUTME: Main library entry point for the GainLog workout-tracking client
// ABOUTME: Session state, authenticated API access and a reactive workout cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

#![deny(unsafe_code)]

//! # GainLog client
//!
//! Client-side data layer for the GainLog workout tracker. It keeps the
//! current session, talks to the GainLog REST API with the session token,
//! and caches workouts in observable state for a UI to render.
//!
//! ## Architecture
//!
//! - **Session**: token and user profile, persisted write-through
//! - **Client**: token injection and 401 handling with typed redirects
//! - **Services**: workout CRUD and exercise reference data
//! - **Stores**: the reactive workout cache
//! - **Context**: explicit composition root with `init` and `shutdown`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gainlog::config::ClientConfig;
//! use gainlog::context::AppContext;
//! use gainlog::errors::ApiResult;
//!
//! #[tokio::main]
//! async fn main() -> ApiResult<()> {
//!     let ctx = AppContext::init(ClientConfig::from_env()?)?;
//!
//!     ctx.workouts().fetch_all(None).await;
//!     if let Some(redirect) = ctx.workouts().state().redirect {
//!         println!("navigate to {redirect}");
//!     }
//!
//!     ctx.shutdown();
//!     Ok(())
//! }
//! ```

/// Token verification, login and logout
pub mod auth;

/// Authenticated HTTP client and login redirects
pub mod client;

/// Environment-driven configuration
pub mod config;

/// Application context owning every component
pub mod context;

/// Error types shared across the crate
pub mod errors;

/// Tracing subscriber setup
pub mod logging;

/// Typed API services
pub mod services;

/// Session state and durable storage
pub mod session;

/// Reactive caches for the UI
pub mod stores;

pub use gainlog_core::{constants, models, pagination};
