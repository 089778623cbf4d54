// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout catalogue and per-user schedule routes.

use crate::error::{AppError, Result};
use crate::middleware::CurrentUser;
use crate::models::{
    InsertUserWorkout, InsertWorkout, UserWorkout, UserWorkoutPatch, Workout, WorkoutPatch,
};
use crate::time_utils::parse_calendar_day;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workouts", get(list_workouts).post(create_workout))
        .route("/api/workouts/{id}", get(get_workout).patch(update_workout))
        .route("/api/schedule", get(list_schedule).post(schedule_workout))
        .route("/api/schedule/{id}", patch(update_schedule_entry))
}

// ─── Workouts ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkoutsQuery {
    /// Only workouts authored by this user
    created_by: Option<String>,
}

async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WorkoutsQuery>,
) -> Json<Vec<Workout>> {
    let workouts = match params.created_by {
        Some(author) => state.db.get_workouts_by_user(&author),
        None => state.db.get_workouts(),
    };
    Json(workouts)
}

async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Workout>> {
    state
        .db
        .get_workout(&id)
        .map(Json)
        .ok_or_else(|| AppError::missing("Workout", &id))
}

async fn create_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(mut payload): Json<InsertWorkout>,
) -> Result<(StatusCode, Json<Workout>)> {
    payload.validate()?;
    if payload.created_by.is_none() {
        payload.created_by = Some(user.user_id);
    }

    let workout = state.db.create_workout(payload);
    tracing::info!(workout_id = %workout.id, name = %workout.name, "Workout created");
    Ok((StatusCode::CREATED, Json(workout)))
}

async fn update_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<WorkoutPatch>,
) -> Result<Json<Workout>> {
    payload.validate()?;
    state
        .db
        .update_workout(&id, payload)
        .map(Json)
        .ok_or_else(|| AppError::missing("Workout", &id))
}

// ─── Schedule ────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScheduleQuery {
    /// Calendar day (`YYYY-MM-DD` or RFC3339)
    date: Option<String>,
}

/// The current user's schedule, optionally restricted to one day.
async fn list_schedule(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Query(params): Query<ScheduleQuery>,
) -> Result<Json<Vec<UserWorkout>>> {
    let entries = match params.date.as_deref() {
        Some(raw) => {
            let day = parse_calendar_day(raw).ok_or_else(|| {
                AppError::BadRequest(
                    "Invalid 'date' parameter: expected YYYY-MM-DD or RFC3339".to_string(),
                )
            })?;
            state.db.get_user_workouts_by_date(&user.user_id, day)
        }
        None => state.db.get_user_workouts(&user.user_id),
    };
    Ok(Json(entries))
}

async fn schedule_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(mut payload): Json<InsertUserWorkout>,
) -> Result<(StatusCode, Json<UserWorkout>)> {
    payload.validate()?;
    if payload.user_id.is_none() {
        payload.user_id = Some(user.user_id);
    }

    // Dangling workout references are accepted, as in the store.
    let entry = state.db.create_user_workout(payload);
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn update_schedule_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UserWorkoutPatch>,
) -> Result<Json<UserWorkout>> {
    payload.validate()?;
    state
        .db
        .update_user_workout(&id, payload)
        .map(Json)
        .ok_or_else(|| AppError::missing("Scheduled workout", &id))
}
