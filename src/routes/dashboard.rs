// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard routes: the aggregated views the home page loads.
//!
//! Missing data renders as an empty state here, never as a 404.

use crate::middleware::CurrentUser;
use crate::services::dashboard::{self, DashboardStats, PlanListing, ScheduledWorkout};
use crate::time_utils::today_utc;
use crate::AppState;
use axum::{extract::State, routing::get, Extension, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/dashboard/stats", get(get_stats))
        .route("/api/workouts/today", get(get_today_workouts))
        .route("/api/marketplace/featured", get(get_featured_plans))
}

async fn get_stats(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Json<DashboardStats> {
    tracing::debug!(user_id = %user.user_id, "Computing dashboard stats");
    Json(dashboard::dashboard_stats(
        &state.db,
        &user.user_id,
        today_utc(),
    ))
}

async fn get_today_workouts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Json<Vec<ScheduledWorkout>> {
    Json(dashboard::today_workouts(
        &state.db,
        &user.user_id,
        today_utc(),
    ))
}

async fn get_featured_plans(State(state): State<Arc<AppState>>) -> Json<Vec<PlanListing>> {
    Json(dashboard::featured_plans(&state.db))
}
