// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout model: a named routine of exercises authored by a trainer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use super::{double_option, overlay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// One step of a workout.
///
/// Strength exercises use `sets`/`reps`/`weight`; timed exercises use
/// `duration`/`rest` (seconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Exercise {
    #[validate(length(min = 1, message = "exercise name is required"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Load in kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<u32>,
}

impl Exercise {
    pub fn strength(name: &str, sets: u32, reps: u32, weight: f64) -> Self {
        Self {
            name: name.to_string(),
            sets: Some(sets),
            reps: Some(reps),
            weight: Some(weight),
            duration: None,
            rest: None,
        }
    }

    pub fn timed(name: &str, duration: u32, rest: u32) -> Self {
        Self {
            name: name.to_string(),
            sets: None,
            reps: None,
            weight: None,
            duration: Some(duration),
            rest: Some(rest),
        }
    }
}

/// Workout stored in memory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Muscle group or modality ("chest", "back", "legs", "cardio", ...)
    pub category: String,
    /// Length in minutes
    pub duration: u32,
    pub difficulty: Difficulty,
    pub exercises: Vec<Exercise>,
    pub video_url: Option<String>,
    /// Authoring user ID
    pub created_by: Option<String>,
    pub is_public: bool,
    pub price: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertWorkout {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[validate(range(min = 1, message = "duration must be at least one minute"))]
    pub duration: u32,
    pub difficulty: Difficulty,
    #[validate(length(min = 1, message = "at least one exercise is required"), nested)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
}

impl InsertWorkout {
    pub fn into_workout(self, id: String, created_at: DateTime<Utc>) -> Workout {
        Workout {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            duration: self.duration,
            difficulty: self.difficulty,
            exercises: self.exercises,
            video_url: self.video_url,
            created_by: self.created_by,
            is_public: self.is_public,
            price: self.price,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPatch {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    #[validate(range(min = 1))]
    pub duration: Option<u32>,
    pub difficulty: Option<Difficulty>,
    #[validate(length(min = 1), nested)]
    pub exercises: Option<Vec<Exercise>>,
    #[serde(default, deserialize_with = "double_option")]
    pub video_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub created_by: Option<Option<String>>,
    pub is_public: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub price: Option<Option<f64>>,
}

impl WorkoutPatch {
    pub fn apply_to(self, workout: &mut Workout) {
        overlay(&mut workout.name, self.name);
        overlay(&mut workout.description, self.description);
        overlay(&mut workout.category, self.category);
        overlay(&mut workout.duration, self.duration);
        overlay(&mut workout.difficulty, self.difficulty);
        overlay(&mut workout.exercises, self.exercises);
        overlay(&mut workout.video_url, self.video_url);
        overlay(&mut workout.created_by, self.created_by);
        overlay(&mut workout.is_public, self.is_public);
        overlay(&mut workout.price, self.price);
    }
}
