// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Body metrics routes for the current user.

use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::models::{BodyMetrics, InsertBodyMetrics};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/metrics", get(get_latest).post(record_metrics))
        .route("/api/metrics/history", get(get_history))
}

/// Latest reading, or `null` when the user has none.
async fn get_latest(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Json<Option<BodyMetrics>> {
    Json(state.db.get_latest_body_metrics(&user.user_id))
}

async fn get_history(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Json<Vec<BodyMetrics>> {
    Json(state.db.get_body_metrics(&user.user_id))
}

async fn record_metrics(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(mut payload): Json<InsertBodyMetrics>,
) -> Result<(StatusCode, Json<BodyMetrics>)> {
    payload.validate()?;
    if payload.user_id.is_none() {
        payload.user_id = Some(user.user_id);
    }

    let metrics = state.db.create_body_metrics(payload);
    tracing::debug!(metrics_id = %metrics.id, "Body metrics recorded");
    Ok((StatusCode::CREATED, Json(metrics)))
}
