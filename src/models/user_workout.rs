// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Scheduled workout: joins a user to a workout on a given day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use super::{double_option, overlay};

/// Exercise completion counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutProgress {
    pub completed_exercises: u32,
    pub total_exercises: u32,
}

impl WorkoutProgress {
    pub fn is_complete(&self) -> bool {
        self.total_exercises > 0 && self.completed_exercises >= self.total_exercises
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct UserWorkout {
    pub id: String,
    pub user_id: Option<String>,
    pub workout_id: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub progress: Option<WorkoutProgress>,
    pub notes: Option<String>,
}

impl UserWorkout {
    /// True when scheduled on `day` (UTC calendar day), whatever the time.
    pub fn is_scheduled_on(&self, day: NaiveDate) -> bool {
        self.scheduled_date
            .is_some_and(|scheduled| scheduled.date_naive() == day)
    }

    /// Completed either explicitly or by finishing every exercise.
    pub fn is_completed(&self) -> bool {
        self.completed_date.is_some() || self.progress.is_some_and(|p| p.is_complete())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertUserWorkout {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub workout_id: Option<String>,
    #[serde(default)]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub progress: Option<WorkoutProgress>,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

impl InsertUserWorkout {
    pub fn into_user_workout(self, id: String) -> UserWorkout {
        UserWorkout {
            id,
            user_id: self.user_id,
            workout_id: self.workout_id,
            scheduled_date: self.scheduled_date,
            completed_date: self.completed_date,
            progress: self.progress,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserWorkoutPatch {
    #[serde(default, deserialize_with = "double_option")]
    pub user_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub workout_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub scheduled_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub completed_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub progress: Option<Option<WorkoutProgress>>,
    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 2000))]
    pub notes: Option<Option<String>>,
}

impl UserWorkoutPatch {
    pub fn apply_to(self, user_workout: &mut UserWorkout) {
        overlay(&mut user_workout.user_id, self.user_id);
        overlay(&mut user_workout.workout_id, self.workout_id);
        overlay(&mut user_workout.scheduled_date, self.scheduled_date);
        overlay(&mut user_workout.completed_date, self.completed_date);
        overlay(&mut user_workout.progress, self.progress);
        overlay(&mut user_workout.notes, self.notes);
    }
}
