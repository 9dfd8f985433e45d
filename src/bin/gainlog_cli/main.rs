// ABOUTME: GainLog CLI - terminal front end for the GainLog workout tracker
// ABOUTME: Drives session, workout and exercise operations and renders cached state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors
//!
//! Usage:
//! ```bash
//! # Record a token issued by the GainLog auth service and verify it
//! gainlog session login --token "$TOKEN"
//!
//! # List the second page of workouts, ten per page
//! gainlog workouts list --page 2 --per-page 10
//!
//! # Start a workout with two exercises
//! gainlog workouts create --exercise 3 --exercise 8
//!
//! # Mark it complete
//! gainlog workouts complete 42
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gainlog::config::ClientConfig;
use gainlog::context::AppContext;
use gainlog::errors::ApiError;
use gainlog::logging::LoggingConfig;
use gainlog::models::{ExerciseId, WorkoutId};
use tracing::debug;

use helpers::display::display_redirect;

#[derive(Parser)]
#[command(
    name = "gainlog",
    about = "GainLog workout tracker",
    long_about = "Command-line front end for the GainLog workout tracker: sessions, workouts and exercises."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Session storage directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Session commands
    Session {
        #[command(subcommand)]
        action: SessionCommand,
    },

    /// Workout commands
    Workouts {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Exercise commands
    Exercises {
        #[command(subcommand)]
        action: ExerciseCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SessionCommand {
    /// Record a token issued by the auth service
    Login {
        /// Raw auth token
        #[arg(long)]
        token: String,

        /// Email of the signed-in user
        #[arg(long)]
        email: Option<String>,

        /// Username of the signed-in user
        #[arg(long)]
        username: Option<String>,

        /// Store the token without checking it against the server
        #[arg(long)]
        no_verify: bool,
    },

    /// Check the stored token with the server
    Verify,

    /// Forget the stored session
    Logout,

    /// Show the stored session
    Show,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WorkoutCommand {
    /// List one page of workouts
    List {
        /// Page number (1-based)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        page: Option<u32>,

        /// Workouts per page
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        per_page: Option<u32>,
    },

    /// Show the most recent workouts
    Recent {
        /// Number of workouts to show
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,
    },

    /// Show one workout with its sets
    Show {
        /// Workout id
        id: WorkoutId,
    },

    /// Start a workout dated today
    Create {
        /// Exercise id (repeatable)
        #[arg(long = "exercise", required = true)]
        exercises: Vec<ExerciseId>,
    },

    /// Rename a workout
    Rename {
        /// Workout id
        id: WorkoutId,

        /// New title
        title: String,
    },

    /// Mark a workout complete
    Complete {
        /// Workout id
        id: WorkoutId,
    },

    /// Delete a workout
    Delete {
        /// Workout id
        id: WorkoutId,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ExerciseCommand {
    /// List all exercises
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let mut config = ClientConfig::from_env().context("Failed to load configuration")?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let ctx = AppContext::init(config).context("Failed to initialize GainLog client")?;
    let result = run(&ctx, cli.command).await;
    ctx.shutdown();

    if let Err(e) = &result {
        if let Some(redirect) = e.downcast_ref::<ApiError>().and_then(ApiError::redirect) {
            display_redirect(redirect);
        }
    }
    result
}

async fn run(ctx: &AppContext, command: Command) -> Result<()> {
    match command {
        Command::Session { action } => match action {
            SessionCommand::Login {
                token,
                email,
                username,
                no_verify,
            } => commands::session::login(ctx, token, email, username, no_verify).await,
            SessionCommand::Verify => commands::session::verify(ctx).await,
            SessionCommand::Logout => commands::session::logout(ctx),
            SessionCommand::Show => {
                commands::session::show(ctx);
                Ok(())
            }
        },
        Command::Workouts { action } => match action {
            WorkoutCommand::List { page, per_page } => {
                commands::workouts::list(ctx, page, per_page).await
            }
            WorkoutCommand::Recent { limit } => commands::workouts::recent(ctx, limit).await,
            WorkoutCommand::Show { id } => commands::workouts::show(ctx, id).await,
            WorkoutCommand::Create { exercises } => {
                commands::workouts::create(ctx, &exercises).await
            }
            WorkoutCommand::Rename { id, title } => {
                commands::workouts::rename(ctx, id, title).await
            }
            WorkoutCommand::Complete { id } => commands::workouts::complete(ctx, id).await,
            WorkoutCommand::Delete { id } => commands::workouts::delete(ctx, id).await,
        },
        Command::Exercises { action } => match action {
            ExerciseCommand::List => {
                debug!("Listing exercises");
                commands::exercises::list(ctx).await
            }
        },
    }
}
