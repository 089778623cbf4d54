// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitness dashboard backend.
//!
//! This crate serves the JSON API behind a fitness dashboard: scheduled
//! workouts, body metrics, ranking points and a marketplace of
//! trainer-authored workout plans, all held in an in-memory store.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::MemStorage;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: MemStorage,
}

impl AppState {
    /// Build state from config, seeding the store if configured to.
    pub fn from_config(config: Config) -> Self {
        let db = if config.seed_demo_data {
            MemStorage::seeded()
        } else {
            MemStorage::new()
        };
        Self { config, db }
    }
}
