// ABOUTME: Workout, set, exercise and user profile models as served by the GainLog API
// ABOUTME: Includes request bodies for creating and patching workouts plus local merge rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GainLog Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-assigned workout identifier
pub type WorkoutId = i64;

/// Server-assigned exercise identifier
pub type ExerciseId = i64;

/// A workout session owned by the signed-in user
///
/// `title` and `completed_at` are always present on the wire (possibly
/// `null`); `workout_sets` is only included by endpoints that embed sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Workout id
    pub id: WorkoutId,
    /// Optional user-provided title
    #[serde(default)]
    pub title: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
    /// Completion timestamp, `None` while the workout is in progress
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Sets performed in this workout, when embedded by the endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_sets: Option<Vec<WorkoutSet>>,
}

impl Workout {
    /// Whether the workout has been marked complete
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Shallow-merge a server copy into this one
    ///
    /// Every field the server always sends replaces the local value. Sets are
    /// only replaced when the server copy carries them, so a bare update
    /// response does not wipe sets loaded by the detail endpoint.
    pub fn merge_from(&mut self, updated: Self) {
        let workout_sets = updated.workout_sets.or_else(|| self.workout_sets.take());
        *self = Self {
            workout_sets,
            ..updated
        };
    }
}

/// One set of one exercise within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    /// Set id
    pub id: i64,
    /// Owning workout
    pub workout_id: WorkoutId,
    /// Referenced exercise (shared reference data)
    pub exercise_id: ExerciseId,
    /// Load lifted
    #[serde(default)]
    pub weight: Option<f64>,
    /// Repetitions performed
    #[serde(default)]
    pub reps: Option<u32>,
    /// Position of the set within the workout
    pub set_order: u32,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Rest after the set, in seconds
    #[serde(default)]
    pub rest_time: Option<u32>,
    /// Embedded exercise, when the endpoint includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<Exercise>,
}

/// Exercise reference data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ExerciseId>,
    /// Display name
    pub name: String,
    /// Muscle group or category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Profile of the signed-in user as returned by the auth service
///
/// The auth service owns this shape; unknown fields are kept in `extra` so
/// the stored profile round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Remaining profile fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Best available label for display
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("unknown user")
    }
}

/// Partial workout update body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPatch {
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Completion timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl WorkoutPatch {
    /// Patch that only sets the title
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Patch that only sets the completion timestamp
    #[must_use]
    pub fn completed_at(completed_at: DateTime<Utc>) -> Self {
        Self {
            completed_at: Some(completed_at),
            ..Self::default()
        }
    }
}

/// Body for creating a workout dated today
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWorkout {
    /// Exercises to seed the workout with
    pub exercise_ids: Vec<ExerciseId>,
    /// Calendar day of the workout
    pub date: NaiveDate,
}

impl NewWorkout {
    /// Workout dated on the current UTC day
    #[must_use]
    pub fn today(exercise_ids: Vec<ExerciseId>) -> Self {
        Self {
            exercise_ids,
            date: Utc::now().date_naive(),
        }
    }
}

/// `{ "workout": ... }` envelope used by write endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutEnvelope<T> {
    /// Wrapped payload
    pub workout: T,
}

impl<T> WorkoutEnvelope<T> {
    /// Wrap a payload
    pub const fn new(workout: T) -> Self {
        Self { workout }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn workout_json(id: i64) -> Value {
        json!({
            "id": id,
            "title": "Leg day",
            "created_at": "2024-01-15T10:00:00.000Z",
            "updated_at": "2024-01-15T10:00:00.000Z",
            "completed_at": null
        })
    }

    #[test]
    fn test_workout_without_sets_deserializes() {
        let workout: Workout = serde_json::from_value(workout_json(3)).unwrap();
        assert_eq!(workout.id, 3);
        assert_eq!(workout.title.as_deref(), Some("Leg day"));
        assert!(workout.workout_sets.is_none());
        assert!(!workout.is_completed());
    }

    #[test]
    fn test_merge_keeps_local_sets_when_server_omits_them() {
        let mut local: Workout = serde_json::from_value(workout_json(1)).unwrap();
        local.workout_sets = Some(vec![WorkoutSet {
            id: 10,
            workout_id: 1,
            exercise_id: 4,
            weight: Some(100.0),
            reps: Some(5),
            set_order: 1,
            notes: None,
            rest_time: Some(90),
            exercise: None,
        }]);

        let mut server: Workout = serde_json::from_value(workout_json(1)).unwrap();
        server.title = Some("Heavy legs".to_owned());
        server.completed_at = Some(Utc::now());

        local.merge_from(server);

        assert_eq!(local.title.as_deref(), Some("Heavy legs"));
        assert!(local.is_completed());
        assert_eq!(local.workout_sets.map(|s| s.len()), Some(1));
    }

    #[test]
    fn test_patch_skips_absent_fields() {
        let body = serde_json::to_value(WorkoutEnvelope::new(WorkoutPatch::title("Push"))).unwrap();
        assert_eq!(body, json!({ "workout": { "title": "Push" } }));
    }

    #[test]
    fn test_new_workout_serializes_day_granularity_date() {
        let body = NewWorkout {
            exercise_ids: vec![1, 2],
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        };
        let value = serde_json::to_value(WorkoutEnvelope::new(body)).unwrap();
        assert_eq!(value["workout"]["date"], "2024-03-09");
        assert_eq!(value["workout"]["exercise_ids"], json!([1, 2]));
    }

    #[test]
    fn test_user_profile_keeps_unknown_fields() {
        let profile: UserProfile = serde_json::from_value(json!({
            "id": 9,
            "email": "lifter@example.com",
            "units": "kg"
        }))
        .unwrap();
        assert_eq!(profile.display_name(), "lifter@example.com");
        assert_eq!(profile.extra.get("units"), Some(&json!("kg")));
        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["units"], "kg");
    }
}
