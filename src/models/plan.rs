// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Marketplace workout plans: trainer-authored bundles of workouts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use super::{double_option, overlay};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub trainer_id: Option<String>,
    /// Length in weeks
    pub duration: u32,
    pub price: f64,
    /// Average review score (0-5)
    pub rating: f64,
    pub review_count: u32,
    /// Workout IDs, in program order
    pub workouts: Vec<String>,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields a trainer supplies to publish a plan. Rating and review count are
/// not part of it: new plans always start unrated.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertWorkoutPlan {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub trainer_id: Option<String>,
    #[validate(range(min = 1, message = "duration must be at least one week"))]
    pub duration: u32,
    #[validate(range(min = 0.0, message = "price cannot be negative"))]
    pub price: f64,
    pub workouts: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

impl InsertWorkoutPlan {
    pub fn into_workout_plan(self, id: String, created_at: DateTime<Utc>) -> WorkoutPlan {
        WorkoutPlan {
            id,
            name: self.name,
            description: self.description,
            trainer_id: self.trainer_id,
            duration: self.duration,
            price: self.price,
            rating: 0.0,
            review_count: 0,
            workouts: self.workouts,
            image_url: self.image_url,
            is_featured: self.is_featured,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlanPatch {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub trainer_id: Option<Option<String>>,
    #[validate(range(min = 1))]
    pub duration: Option<u32>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub workouts: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    pub is_featured: Option<bool>,
}

impl WorkoutPlanPatch {
    pub fn apply_to(self, plan: &mut WorkoutPlan) {
        overlay(&mut plan.name, self.name);
        overlay(&mut plan.description, self.description);
        overlay(&mut plan.trainer_id, self.trainer_id);
        overlay(&mut plan.duration, self.duration);
        overlay(&mut plan.price, self.price);
        overlay(&mut plan.rating, self.rating);
        overlay(&mut plan.review_count, self.review_count);
        overlay(&mut plan.workouts, self.workouts);
        overlay(&mut plan.image_url, self.image_url);
        overlay(&mut plan.is_featured, self.is_featured);
    }
}
