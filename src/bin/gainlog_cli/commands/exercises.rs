// ABOUTME: Exercise commands for the gainlog CLI
// ABOUTME: Lists the exercise catalogue used when starting workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

use anyhow::Result;
use gainlog::context::AppContext;

use crate::helpers::display::display_exercises;

/// List all exercises
pub async fn list(ctx: &AppContext) -> Result<()> {
    let exercises = ctx.exercises().list().await?;
    display_exercises(&exercises);
    Ok(())
}
