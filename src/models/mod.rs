// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.
//!
//! Each entity comes in three shapes:
//! - the stored record (`User`, `Workout`, ...), as returned by the API
//! - the insert shape (`InsertUser`, ...), which omits server-assigned fields
//! - the patch shape (`UserPatch`, ...), overlaid onto a stored record on update

pub mod metrics;
pub mod plan;
pub mod points;
pub mod user;
pub mod user_workout;
pub mod workout;

pub use metrics::{BodyMetrics, InsertBodyMetrics};
pub use plan::{InsertWorkoutPlan, WorkoutPlan, WorkoutPlanPatch};
pub use points::{InsertUserPoints, RankingEntry, UserPoints};
pub use user::{InsertUser, User, UserPatch, UserType};
pub use user_workout::{InsertUserWorkout, UserWorkout, UserWorkoutPatch, WorkoutProgress};
pub use workout::{Difficulty, Exercise, InsertWorkout, Workout, WorkoutPatch};

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable field so that an explicit `null` is kept apart from
/// an absent field: absent -> `None`, `null` -> `Some(None)`.
///
/// Must be paired with `#[serde(default)]`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Overlay an optional patch value onto a field.
pub(crate) fn overlay<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}
