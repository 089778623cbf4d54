// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use fitness_dashboard::db::IdentityTaken;
use fitness_dashboard::error::AppError;

#[test]
fn test_missing_names_kind_and_id() {
    let err = AppError::missing("Workout", "workout9");
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.to_string(), "Resource not found: Workout workout9 not found");
}

#[test]
fn test_status_codes() {
    let cases = [
        (AppError::missing("User", "x"), StatusCode::NOT_FOUND),
        (AppError::BadRequest("bad".to_string()), StatusCode::BAD_REQUEST),
        (AppError::Conflict("taken".to_string()), StatusCode::CONFLICT),
    ];

    for (err, status) in cases {
        assert_eq!(err.into_response().status(), status);
    }
}

#[test]
fn test_validation_errors_are_unprocessable() {
    let err = AppError::from(validator::ValidationErrors::new());
    assert_eq!(
        err.into_response().status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[test]
fn test_taken_identity_is_conflict() {
    let err = AppError::from(IdentityTaken::Username("joaosilva".to_string()));
    assert_eq!(
        err.to_string(),
        "Conflict: Username 'joaosilva' is already taken"
    );
    assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
}
