// ABOUTME: Workout commands for the gainlog CLI
// ABOUTME: Drives the workout cache and renders its state after each operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

use anyhow::{bail, Result};
use gainlog::context::AppContext;
use gainlog::models::{ExerciseId, WorkoutId, WorkoutPatch};
use gainlog::pagination::PaginationParams;
use gainlog::stores::WorkoutState;

use crate::helpers::display::{
    display_pagination, display_redirect, display_workout_detail, display_workout_list,
};

/// List one page of workouts
pub async fn list(ctx: &AppContext, page: Option<u32>, per_page: Option<u32>) -> Result<()> {
    let params =
        (page.is_some() || per_page.is_some()).then_some(PaginationParams { page, per_page });
    ctx.workouts().fetch_all(params).await;

    let state = ctx.workouts().state();
    check_state(&state)?;
    display_workout_list(&state.list);
    if let Some(meta) = &state.pagination {
        display_pagination(meta);
    }
    Ok(())
}

/// Show the most recent workouts
pub async fn recent(ctx: &AppContext, limit: Option<u32>) -> Result<()> {
    ctx.workouts().fetch_recent(limit).await;

    let state = ctx.workouts().state();
    check_state(&state)?;
    display_workout_list(&state.list);
    Ok(())
}

/// Show a workout with its sets
pub async fn show(ctx: &AppContext, id: WorkoutId) -> Result<()> {
    ctx.workouts().fetch_by_id(id).await;

    let state = ctx.workouts().state();
    check_state(&state)?;
    match &state.current {
        Some(workout) => display_workout_detail(workout),
        None => bail!("Workout {id} was not loaded"),
    }
    Ok(())
}

/// Start a workout dated today
pub async fn create(ctx: &AppContext, exercises: &[ExerciseId]) -> Result<()> {
    let workout = ctx.workouts().create(exercises).await?;
    println!("Created workout {}", workout.id);
    display_workout_detail(&workout);
    Ok(())
}

/// Rename a workout
pub async fn rename(ctx: &AppContext, id: WorkoutId, title: String) -> Result<()> {
    let workout = ctx.workouts().update(id, &WorkoutPatch::title(title)).await?;
    println!("Updated workout {}", workout.id);
    Ok(())
}

/// Mark a workout complete
pub async fn complete(ctx: &AppContext, id: WorkoutId) -> Result<()> {
    let workout = ctx.workouts().complete(id).await?;
    match workout.completed_at {
        Some(at) => println!("Completed workout {id} at {}", at.format("%Y-%m-%d %H:%M UTC")),
        None => println!("Workout {id} updated"),
    }
    Ok(())
}

/// Delete a workout
pub async fn delete(ctx: &AppContext, id: WorkoutId) -> Result<()> {
    ctx.workouts().delete(id).await?;
    println!("Deleted workout {id}");
    Ok(())
}

/// Turn a recorded fetch failure into a command failure
fn check_state(state: &WorkoutState) -> Result<()> {
    if let Some(redirect) = state.redirect {
        display_redirect(redirect);
    }
    if let Some(message) = &state.error {
        bail!("{message}");
    }
    Ok(())
}
