// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (in-memory).

pub mod memory;
mod seed;
pub mod table;

pub use memory::{IdentityTaken, MemStorage};
pub use table::Table;

/// Table names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const WORKOUTS: &str = "workouts";
    pub const USER_WORKOUTS: &str = "user_workouts";
    pub const BODY_METRICS: &str = "body_metrics";
    pub const WORKOUT_PLANS: &str = "workout_plans";
    pub const USER_POINTS: &str = "user_points";
}
