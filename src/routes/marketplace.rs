// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Marketplace routes: trainer-authored workout plans.

use crate::error::{AppError, Result};
use crate::middleware::CurrentUser;
use crate::models::{InsertWorkoutPlan, WorkoutPlan, WorkoutPlanPatch};
use crate::services::dashboard::{with_trainer, with_trainers, PlanListing};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/marketplace/plans", get(list_plans).post(create_plan))
        .route(
            "/api/marketplace/plans/{id}",
            get(get_plan).patch(update_plan),
        )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlansQuery {
    trainer_id: Option<String>,
}

async fn list_plans(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlansQuery>,
) -> Json<Vec<PlanListing>> {
    let plans = match params.trainer_id {
        Some(trainer_id) => state.db.get_workout_plans_by_trainer(&trainer_id),
        None => state.db.get_workout_plans(),
    };
    Json(with_trainers(&state.db, plans))
}

async fn get_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PlanListing>> {
    state
        .db
        .get_workout_plan(&id)
        .map(|plan| Json(with_trainer(&state.db, plan)))
        .ok_or_else(|| AppError::missing("Workout plan", &id))
}

/// Publish a plan; the current user is the trainer unless one is named.
async fn create_plan(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(mut payload): Json<InsertWorkoutPlan>,
) -> Result<(StatusCode, Json<WorkoutPlan>)> {
    payload.validate()?;
    if payload.trainer_id.is_none() {
        payload.trainer_id = Some(user.user_id);
    }

    let plan = state.db.create_workout_plan(payload);
    tracing::info!(plan_id = %plan.id, name = %plan.name, "Workout plan published");
    Ok((StatusCode::CREATED, Json(plan)))
}

async fn update_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<WorkoutPlanPatch>,
) -> Result<Json<WorkoutPlan>> {
    payload.validate()?;
    state
        .db
        .update_workout_plan(&id, payload)
        .map(Json)
        .ok_or_else(|| AppError::missing("Workout plan", &id))
}
