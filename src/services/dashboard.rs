// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard aggregation: combines several store lookups into the views the
//! dashboard page renders.

use crate::db::MemStorage;
use crate::models::{User, UserWorkout, Workout, WorkoutPlan};
use chrono::NaiveDate;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Header cards of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Workouts scheduled today
    pub today_workouts: u32,
    /// Of those, how many are done
    pub completed_today: u32,
    pub streak: u32,
    pub points: u32,
    pub workouts_completed: u32,
    /// Weight from the latest body-metrics reading (kg)
    pub current_weight: Option<f64>,
    /// Position in the points ranking, e.g. "#3"
    pub ranking: Option<String>,
}

/// A schedule entry with its workout resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ScheduledWorkout {
    #[serde(flatten)]
    pub entry: UserWorkout,
    /// `None` when the entry references a missing workout
    pub workout: Option<Workout>,
}

/// A marketplace plan with its trainer resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlanListing {
    #[serde(flatten)]
    pub plan: WorkoutPlan,
    pub trainer: Option<User>,
}

/// Compute the stats cards for `user_id` on `today`.
///
/// A user with no points record or no readings gets zeros and `None`s.
pub fn dashboard_stats(store: &MemStorage, user_id: &str, today: NaiveDate) -> DashboardStats {
    let todays = store.get_user_workouts_by_date(user_id, today);
    let completed_today = todays.iter().filter(|uw| uw.is_completed()).count();

    let points = store.get_user_points(user_id);
    let ranking = store
        .get_users_ranking()
        .iter()
        .position(|entry| entry.points.user_id == user_id)
        .map(|index| format!("#{}", index + 1));

    DashboardStats {
        today_workouts: todays.len() as u32,
        completed_today: completed_today as u32,
        streak: points.as_ref().map_or(0, |p| p.streak),
        points: points.as_ref().map_or(0, |p| p.points),
        workouts_completed: points.as_ref().map_or(0, |p| p.workouts_completed),
        current_weight: store
            .get_latest_body_metrics(user_id)
            .and_then(|m| m.weight),
        ranking,
    }
}

/// The user's workouts scheduled on `today`, joined with their workouts.
pub fn today_workouts(store: &MemStorage, user_id: &str, today: NaiveDate) -> Vec<ScheduledWorkout> {
    store
        .get_user_workouts_by_date(user_id, today)
        .into_iter()
        .map(|entry| {
            let workout = entry
                .workout_id
                .as_deref()
                .and_then(|id| store.get_workout(id));
            ScheduledWorkout { entry, workout }
        })
        .collect()
}

/// Attach the plan's trainer, if it exists.
pub fn with_trainer(store: &MemStorage, plan: WorkoutPlan) -> PlanListing {
    let trainer = plan
        .trainer_id
        .as_deref()
        .and_then(|id| store.get_user(id));
    PlanListing { plan, trainer }
}

pub fn with_trainers(store: &MemStorage, plans: Vec<WorkoutPlan>) -> Vec<PlanListing> {
    plans
        .into_iter()
        .map(|plan| with_trainer(store, plan))
        .collect()
}

/// Featured marketplace plans with their trainers.
pub fn featured_plans(store: &MemStorage) -> Vec<PlanListing> {
    with_trainers(store, store.get_featured_workout_plans())
}
