// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gamification points and ranking rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use super::{overlay, User};

/// Points balance of one user. One record per user, kept that way by
/// `MemStorage::create_or_update_user_points`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct UserPoints {
    pub id: String,
    pub user_id: String,
    pub points: u32,
    pub workouts_completed: u32,
    /// Consecutive training days
    pub streak: u32,
    pub last_workout_date: Option<DateTime<Utc>>,
}

/// Upsert shape: `user_id` selects the record, every other field is optional
/// and only overrides what it names. An absent `userId` deserializes as empty
/// so the API can fill in the current user.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertUserPoints {
    #[serde(default)]
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,
    pub points: Option<u32>,
    pub workouts_completed: Option<u32>,
    pub streak: Option<u32>,
    pub last_workout_date: Option<DateTime<Utc>>,
}

impl InsertUserPoints {
    /// Build a fresh record, counters defaulting to zero.
    pub fn into_user_points(self, id: String) -> UserPoints {
        UserPoints {
            id,
            user_id: self.user_id,
            points: self.points.unwrap_or(0),
            workouts_completed: self.workouts_completed.unwrap_or(0),
            streak: self.streak.unwrap_or(0),
            last_workout_date: self.last_workout_date,
        }
    }

    /// Overlay the provided fields onto an existing record.
    pub fn apply_to(self, existing: &mut UserPoints) {
        existing.user_id = self.user_id;
        overlay(&mut existing.points, self.points);
        overlay(&mut existing.workouts_completed, self.workouts_completed);
        overlay(&mut existing.streak, self.streak);
        if self.last_workout_date.is_some() {
            existing.last_workout_date = self.last_workout_date;
        }
    }
}

/// Ranking row: a points record with its owner projected in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    #[serde(flatten)]
    pub points: UserPoints,
    /// `None` when the points reference a user that does not exist
    pub user: Option<User>,
}
