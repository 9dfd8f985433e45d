// ABOUTME: Re-exports command modules for the gainlog CLI
// ABOUTME: Provides access to session, workout and exercise commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

pub mod exercises;
pub mod session;
pub mod workouts;
