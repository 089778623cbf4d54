// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile, points and ranking routes.

use crate::error::{AppError, Result};
use crate::middleware::CurrentUser;
use crate::models::{InsertUser, InsertUserPoints, RankingEntry, User, UserPatch, UserPoints};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", post(create_user))
        .route("/api/users/{id}", get(get_user).patch(update_user))
        .route("/api/ranking", get(get_ranking))
        .route("/api/points", get(get_points).put(upsert_points))
}

// ─── Users ───────────────────────────────────────────────────

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<InsertUser>,
) -> Result<(StatusCode, Json<User>)> {
    payload.validate()?;

    let user = state.db.register_user(payload)?;
    tracing::info!(user_id = %user.id, user_type = ?user.user_type, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    state
        .db
        .get_user(&id)
        .map(Json)
        .ok_or_else(|| AppError::missing("User", &id))
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UserPatch>,
) -> Result<Json<User>> {
    payload.validate()?;

    state
        .db
        .update_user_unique(&id, payload)?
        .map(Json)
        .ok_or_else(|| AppError::missing("User", &id))
}

// ─── Points & Ranking ────────────────────────────────────────

async fn get_ranking(State(state): State<Arc<AppState>>) -> Json<Vec<RankingEntry>> {
    Json(state.db.get_users_ranking())
}

async fn get_points(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<UserPoints>> {
    state
        .db
        .get_user_points(&user.user_id)
        .map(Json)
        .ok_or_else(|| AppError::missing("Points for user", &user.user_id))
}

async fn upsert_points(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(mut payload): Json<InsertUserPoints>,
) -> Result<Json<UserPoints>> {
    if payload.user_id.is_empty() {
        payload.user_id = user.user_id;
    }
    payload.validate()?;

    let points = state.db.create_or_update_user_points(payload);
    tracing::debug!(user_id = %points.user_id, points = points.points, "Points updated");
    Ok(Json(points))
}
