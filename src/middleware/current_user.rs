// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Current-user resolution middleware.
//!
//! There is no authentication: the caller names itself with `X-User-Id`, or
//! gets the configured default user.

use crate::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

pub const USER_ID_HEADER: &str = "x-user-id";

const MAX_USER_ID_LEN: usize = 128;

/// User the request acts on behalf of.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: String,
}

/// Middleware that attaches a `CurrentUser` extension to every request.
pub async fn resolve_current_user(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let header = request
        .headers()
        .get(USER_ID_HEADER)
        .map(|h| h.to_str().map(str::trim));

    let user_id = match header {
        Some(Ok(id)) if !id.is_empty() && id.len() <= MAX_USER_ID_LEN => id.to_string(),
        Some(_) => return Err(StatusCode::BAD_REQUEST),
        None => state.config.default_user_id.clone(),
    };

    request.extensions_mut().insert(CurrentUser { user_id });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::{routing::get, Extension, Router};
    use tower::ServiceExt; // for oneshot

    fn app() -> Router {
        let state = Arc::new(AppState {
            config: Config::test_default(),
            db: crate::db::MemStorage::new(),
        });
        Router::new()
            .route(
                "/",
                get(|Extension(user): Extension<CurrentUser>| async move { user.user_id }),
            )
            .layer(axum::middleware::from_fn_with_state(
                state,
                resolve_current_user,
            ))
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_falls_back_to_default_user() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "user1");
    }

    #[tokio::test]
    async fn test_header_selects_user() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(USER_ID_HEADER, "trainer1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(body_text(response).await, "trainer1");
    }

    #[tokio::test]
    async fn test_blank_header_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(USER_ID_HEADER, "  ")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
