// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory store with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profiles)
//! - Workouts (trainer-authored routines)
//! - User workouts (schedule entries joining users and workouts)
//! - Body metrics (measurement history)
//! - Workout plans (marketplace)
//! - User points (gamification, upserted per user)
//!
//! Every operation is total: unknown IDs give `None` or an empty list.
//! References between records (user IDs, workout IDs) are not checked.

use crate::db::collections;
use crate::db::table::Table;
use crate::models::{
    BodyMetrics, InsertBodyMetrics, InsertUser, InsertUserPoints, InsertUserWorkout,
    InsertWorkout, InsertWorkoutPlan, RankingEntry, User, UserPatch, UserPoints, UserWorkout,
    UserWorkoutPatch, Workout, WorkoutPatch, WorkoutPlan, WorkoutPlanPatch,
};
use chrono::{DateTime, NaiveDate, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::{Arc, Mutex};

/// Source of creation timestamps.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Process-lifetime record store, shared through `AppState`.
pub struct MemStorage {
    pub(super) users: Table<User>,
    pub(super) workouts: Table<Workout>,
    pub(super) user_workouts: Table<UserWorkout>,
    pub(super) body_metrics: Table<BodyMetrics>,
    pub(super) workout_plans: Table<WorkoutPlan>,
    pub(super) user_points: Table<UserPoints>,
    /// user ID -> points record ID; serializes upserts per user
    pub(super) points_by_user: DashMap<String, String>,
    /// Held across check and write when usernames/emails must stay unique
    identity_lock: Mutex<()>,
    clock: Clock,
}

/// A username or email already held by another user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityTaken {
    #[error("Username '{0}' is already taken")]
    Username(String),
    #[error("Email '{0}' is already registered")]
    Email(String),
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(Utc::now))
    }

    /// Create an empty store that stamps records using `clock`.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            users: Table::new(collections::USERS),
            workouts: Table::new(collections::WORKOUTS),
            user_workouts: Table::new(collections::USER_WORKOUTS),
            body_metrics: Table::new(collections::BODY_METRICS),
            workout_plans: Table::new(collections::WORKOUT_PLANS),
            user_points: Table::new(collections::USER_POINTS),
            points_by_user: DashMap::new(),
            identity_lock: Mutex::new(()),
            clock,
        }
    }

    /// Create a store pre-populated with demo data scheduled for today.
    pub fn seeded() -> Self {
        Self::seeded_at(Utc::now())
    }

    /// Create a store pre-populated with demo data, "today" being `now`.
    pub fn seeded_at(now: DateTime<Utc>) -> Self {
        let store = Self::new();
        store.seed_demo_data(now);
        store
    }

    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    fn new_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    // ─── User Operations ─────────────────────────────────────────

    pub fn get_user(&self, id: &str) -> Option<User> {
        self.users.get(id)
    }

    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.find(|user| user.username == username)
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users.find(|user| user.email == email)
    }

    /// Create a user. Username/email uniqueness is not checked here.
    pub fn create_user(&self, insert: InsertUser) -> User {
        let user = insert.into_user(Self::new_id(), self.now());
        self.users.insert(user.id.clone(), user.clone());
        user
    }

    pub fn update_user(&self, id: &str, patch: UserPatch) -> Option<User> {
        self.users.update(id, |user| patch.apply_to(user))
    }

    /// Create a user unless the username or email is already in use.
    pub fn register_user(&self, insert: InsertUser) -> Result<User, IdentityTaken> {
        let _guard = self.lock_identities();
        self.check_identity(Some(&insert.username), Some(&insert.email), None)?;
        Ok(self.create_user(insert))
    }

    /// Update a user unless the patch takes another user's username or email.
    ///
    /// `Ok(None)` when the ID is unknown.
    pub fn update_user_unique(
        &self,
        id: &str,
        patch: UserPatch,
    ) -> Result<Option<User>, IdentityTaken> {
        let _guard = self.lock_identities();
        self.check_identity(patch.username.as_deref(), patch.email.as_deref(), Some(id))?;
        Ok(self.update_user(id, patch))
    }

    fn lock_identities(&self) -> std::sync::MutexGuard<'_, ()> {
        // The guarded data is `()`, so a poisoned lock is still usable.
        self.identity_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_identity(
        &self,
        username: Option<&str>,
        email: Option<&str>,
        except_id: Option<&str>,
    ) -> Result<(), IdentityTaken> {
        let held_by_other = |user: Option<User>| user.is_some_and(|u| Some(u.id.as_str()) != except_id);

        if let Some(username) = username {
            if held_by_other(self.get_user_by_username(username)) {
                return Err(IdentityTaken::Username(username.to_string()));
            }
        }
        if let Some(email) = email {
            if held_by_other(self.get_user_by_email(email)) {
                return Err(IdentityTaken::Email(email.to_string()));
            }
        }
        Ok(())
    }

    // ─── Workout Operations ──────────────────────────────────────

    pub fn get_workout(&self, id: &str) -> Option<Workout> {
        self.workouts.get(id)
    }

    pub fn get_workouts(&self) -> Vec<Workout> {
        self.workouts.all()
    }

    /// Workouts authored by `user_id`.
    pub fn get_workouts_by_user(&self, user_id: &str) -> Vec<Workout> {
        self.workouts
            .filter(|workout| workout.created_by.as_deref() == Some(user_id))
    }

    pub fn create_workout(&self, insert: InsertWorkout) -> Workout {
        let workout = insert.into_workout(Self::new_id(), self.now());
        self.workouts.insert(workout.id.clone(), workout.clone());
        workout
    }

    pub fn update_workout(&self, id: &str, patch: WorkoutPatch) -> Option<Workout> {
        self.workouts.update(id, |workout| patch.apply_to(workout))
    }

    // ─── User Workout Operations ─────────────────────────────────

    pub fn get_user_workouts(&self, user_id: &str) -> Vec<UserWorkout> {
        self.user_workouts
            .filter(|uw| uw.user_id.as_deref() == Some(user_id))
    }

    /// The user's workouts scheduled on `day`, whatever the time of day.
    pub fn get_user_workouts_by_date(&self, user_id: &str, day: NaiveDate) -> Vec<UserWorkout> {
        self.user_workouts
            .filter(|uw| uw.user_id.as_deref() == Some(user_id) && uw.is_scheduled_on(day))
    }

    pub fn create_user_workout(&self, insert: InsertUserWorkout) -> UserWorkout {
        let user_workout = insert.into_user_workout(Self::new_id());
        self.user_workouts
            .insert(user_workout.id.clone(), user_workout.clone());
        user_workout
    }

    pub fn update_user_workout(&self, id: &str, patch: UserWorkoutPatch) -> Option<UserWorkout> {
        self.user_workouts.update(id, |uw| patch.apply_to(uw))
    }

    // ─── Body Metrics Operations ─────────────────────────────────

    /// Measurement history, newest first.
    pub fn get_body_metrics(&self, user_id: &str) -> Vec<BodyMetrics> {
        let mut metrics = self
            .body_metrics
            .filter(|m| m.user_id.as_deref() == Some(user_id));
        // Stable: readings taken at the same instant stay in insertion order.
        metrics.sort_by(|a, b| b.measured_at.cmp(&a.measured_at));
        metrics
    }

    pub fn get_latest_body_metrics(&self, user_id: &str) -> Option<BodyMetrics> {
        self.get_body_metrics(user_id).into_iter().next()
    }

    pub fn create_body_metrics(&self, insert: InsertBodyMetrics) -> BodyMetrics {
        let metrics = insert.into_body_metrics(Self::new_id(), self.now());
        self.body_metrics.insert(metrics.id.clone(), metrics.clone());
        metrics
    }

    // ─── Workout Plan Operations ─────────────────────────────────

    pub fn get_workout_plan(&self, id: &str) -> Option<WorkoutPlan> {
        self.workout_plans.get(id)
    }

    pub fn get_workout_plans(&self) -> Vec<WorkoutPlan> {
        self.workout_plans.all()
    }

    pub fn get_featured_workout_plans(&self) -> Vec<WorkoutPlan> {
        self.workout_plans.filter(|plan| plan.is_featured)
    }

    pub fn get_workout_plans_by_trainer(&self, trainer_id: &str) -> Vec<WorkoutPlan> {
        self.workout_plans
            .filter(|plan| plan.trainer_id.as_deref() == Some(trainer_id))
    }

    /// Publish a plan. Rating and review count always start at zero.
    pub fn create_workout_plan(&self, insert: InsertWorkoutPlan) -> WorkoutPlan {
        let plan = insert.into_workout_plan(Self::new_id(), self.now());
        self.workout_plans.insert(plan.id.clone(), plan.clone());
        plan
    }

    pub fn update_workout_plan(&self, id: &str, patch: WorkoutPlanPatch) -> Option<WorkoutPlan> {
        self.workout_plans.update(id, |plan| patch.apply_to(plan))
    }

    // ─── User Points Operations ──────────────────────────────────

    pub fn get_user_points(&self, user_id: &str) -> Option<UserPoints> {
        let points_id = self.points_by_user.get(user_id)?.value().clone();
        self.user_points.get(&points_id)
    }

    /// All points records, highest first, each with its owner.
    ///
    /// Ties keep insertion order.
    pub fn get_users_ranking(&self) -> Vec<RankingEntry> {
        let mut all_points = self.user_points.all();
        all_points.sort_by(|a, b| b.points.cmp(&a.points));

        all_points
            .into_iter()
            .map(|points| {
                let user = self.users.get(&points.user_id);
                RankingEntry { points, user }
            })
            .collect()
    }

    /// Upsert by user ID: overlay onto the user's existing record (keeping its
    /// ID), or create one with unset counters at zero.
    pub fn create_or_update_user_points(&self, insert: InsertUserPoints) -> UserPoints {
        // The index entry stays locked until the points table is written, so
        // concurrent upserts for one user cannot both take the create path.
        match self.points_by_user.entry(insert.user_id.clone()) {
            Entry::Occupied(entry) => {
                let points_id = entry.get().clone();
                let points = match self.user_points.get(&points_id) {
                    Some(mut existing) => {
                        insert.apply_to(&mut existing);
                        existing
                    }
                    None => insert.into_user_points(points_id.clone()),
                };
                self.user_points.insert(points_id, points.clone());
                points
            }
            Entry::Vacant(entry) => {
                let points = insert.into_user_points(Self::new_id());
                self.user_points.insert(points.id.clone(), points.clone());
                entry.insert(points.id.clone());
                points
            }
        }
    }

    /// Store a complete points record, keeping the per-user index current.
    pub(super) fn put_user_points(&self, points: UserPoints) {
        self.points_by_user
            .insert(points.user_id.clone(), points.id.clone());
        self.user_points.insert(points.id.clone(), points);
    }
}
