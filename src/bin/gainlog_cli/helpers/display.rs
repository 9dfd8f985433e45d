// ABOUTME: Output formatting helpers for the gainlog CLI
// ABOUTME: Renders sessions, workouts, sets, exercises and login redirects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

use gainlog::client::Redirect;
use gainlog::models::{Exercise, Workout};
use gainlog::pagination::PaginationMeta;
use gainlog::session::Session;

/// The CLI's navigation: tell the user where to log in again
pub fn display_redirect(redirect: Redirect) {
    if redirect.is_expired() {
        eprintln!("Your session has expired.");
    }
    eprintln!("Please log in again: {redirect}");
    eprintln!("  gainlog session login --token <TOKEN>");
}

/// Display the stored session
pub fn display_session(session: &Session) {
    println!("\nSESSION");
    println!("{}", "=".repeat(50));
    match &session.token {
        Some(_) => println!("   Token: stored"),
        None => println!("   Token: none"),
    }
    match &session.user {
        Some(user) => {
            println!("   User: {}", user.display_name());
            if let Some(email) = &user.email {
                println!("   Email: {email}");
            }
        }
        None => println!("   User: unknown"),
    }
}

/// One line per workout
pub fn display_workout_list(workouts: &[Workout]) {
    if workouts.is_empty() {
        println!("No workouts found");
        return;
    }

    for workout in workouts {
        println!(
            "{:>6}  {}  {:<30}  {}",
            workout.id,
            workout.created_at.format("%Y-%m-%d"),
            workout.title.as_deref().unwrap_or("Untitled"),
            if workout.is_completed() { "done" } else { "open" }
        );
    }
}

/// Page position below a workout list
pub fn display_pagination(meta: &PaginationMeta) {
    println!(
        "\nPage {} of {} ({} workouts, {} per page)",
        meta.current_page, meta.total_pages, meta.total_count, meta.per_page
    );
}

/// Full workout including its sets
pub fn display_workout_detail(workout: &Workout) {
    println!("\nWORKOUT {}", workout.id);
    println!("{}", "=".repeat(50));
    println!("   Title: {}", workout.title.as_deref().unwrap_or("Untitled"));
    println!("   Started: {}", workout.created_at.format("%Y-%m-%d %H:%M UTC"));
    match workout.completed_at {
        Some(at) => println!("   Completed: {}", at.format("%Y-%m-%d %H:%M UTC")),
        None => println!("   Completed: no"),
    }

    let Some(sets) = workout.workout_sets.as_deref() else {
        return;
    };
    if sets.is_empty() {
        println!("   Sets: none");
        return;
    }

    println!("   Sets:");
    for set in sets {
        let exercise = set
            .exercise
            .as_ref()
            .map_or_else(|| format!("exercise {}", set.exercise_id), |e| e.name.clone());
        let weight = set.weight.map_or_else(|| "-".to_owned(), |w| format!("{w}"));
        let reps = set.reps.map_or_else(|| "-".to_owned(), |r| r.to_string());
        println!("     {:>2}. {exercise:<24} {weight:>7} x {reps}", set.set_order);
    }
}

/// Exercise catalogue
pub fn display_exercises(exercises: &[Exercise]) {
    if exercises.is_empty() {
        println!("No exercises found");
        return;
    }

    for exercise in exercises {
        let id = exercise
            .id
            .map_or_else(|| "-".to_owned(), |id| id.to_string());
        match &exercise.category {
            Some(category) => println!("{id:>6}  {} ({category})", exercise.name),
            None => println!("{id:>6}  {}", exercise.name),
        }
    }
}
