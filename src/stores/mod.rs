// ABOUTME: Reactive client-side stores mirroring server state for UI consumption
// ABOUTME: Each store publishes snapshots through a watch channel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

/// Workout list/detail cache
pub mod workouts;

pub use workouts::{WorkoutCache, WorkoutState};
