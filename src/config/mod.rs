// ABOUTME: Configuration module for the GainLog client
// ABOUTME: Environment-driven settings for API location, storage and transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

/// Environment variable parsing and validation
pub mod environment;

pub use environment::ClientConfig;
