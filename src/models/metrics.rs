// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Body composition readings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// A single body-metrics measurement. A user has many, ordered by `measured_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct BodyMetrics {
    pub id: String,
    pub user_id: Option<String>,
    /// kg
    pub weight: Option<f64>,
    /// Percentage
    pub body_fat: Option<f64>,
    /// kg
    pub muscle_mass: Option<f64>,
    /// Percentage
    pub hydration: Option<f64>,
    pub measured_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsertBodyMetrics {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "weight cannot be negative"))]
    pub weight: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "body fat is a percentage"))]
    pub body_fat: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "muscle mass cannot be negative"))]
    pub muscle_mass: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "hydration is a percentage"))]
    pub hydration: Option<f64>,
}

impl InsertBodyMetrics {
    pub fn into_body_metrics(self, id: String, measured_at: DateTime<Utc>) -> BodyMetrics {
        BodyMetrics {
            id,
            user_id: self.user_id,
            weight: self.weight,
            body_fat: self.body_fat,
            muscle_mass: self.muscle_mass,
            hydration: self.hydration,
            measured_at,
        }
    }
}
