// ABOUTME: Core types and constants for the GainLog workout client
// ABOUTME: Foundation crate with workout models, pagination metadata, and wire constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

#![deny(unsafe_code)]

//! # GainLog Core
//!
//! Shared types for the GainLog client. This crate has no I/O and changes
//! rarely, so the client crate and its binaries can depend on it without
//! pulling in the HTTP stack.
//!
//! ## Modules
//!
//! - **models**: Workouts, sets, exercises and user profiles as served by the API
//! - **pagination**: Page-number pagination metadata and query parameters
//! - **constants**: Storage keys, endpoint paths and login routes

/// Application constants organized by domain
pub mod constants;

/// Workout, exercise and user data models
pub mod models;

/// Page-number pagination for workout listings
pub mod pagination;
