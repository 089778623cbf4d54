// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use super::{double_option, overlay};

/// Whether an account trains or is trained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Trainer,
}

/// User account.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Login name (declared unique)
    pub username: String,
    /// Email address (declared unique)
    pub email: String,
    /// Stored as given; never serialized
    #[serde(skip_serializing)]
    #[cfg_attr(feature = "binding-generation", ts(skip))]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: UserType,
    /// Avatar URL
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields a caller supplies to create a user.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertUser {
    #[validate(length(min = 3, max = 32, message = "username must be 3-32 characters"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
    pub user_type: UserType,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl InsertUser {
    /// Build the stored record.
    pub fn into_user(self, id: String, created_at: DateTime<Utc>) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            user_type: self.user_type,
            profile_image: self.profile_image,
            created_at,
        }
    }
}

/// Partial update of a user profile.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[validate(length(min = 3, max = 32))]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 6))]
    pub password: Option<String>,
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    pub user_type: Option<UserType>,
    #[serde(default, deserialize_with = "double_option")]
    pub profile_image: Option<Option<String>>,
}

impl UserPatch {
    pub fn apply_to(self, user: &mut User) {
        overlay(&mut user.username, self.username);
        overlay(&mut user.email, self.email);
        overlay(&mut user.password, self.password);
        overlay(&mut user.first_name, self.first_name);
        overlay(&mut user.last_name, self.last_name);
        overlay(&mut user.user_type, self.user_type);
        overlay(&mut user.profile_image, self.profile_image);
    }
}
