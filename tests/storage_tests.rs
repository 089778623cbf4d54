// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Store behavior against the seeded demo data and fresh records.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use fitness_dashboard::db::MemStorage;
use fitness_dashboard::models::{
    Difficulty, Exercise, InsertBodyMetrics, InsertUser, InsertUserPoints, InsertUserWorkout,
    InsertWorkout, InsertWorkoutPlan, UserPatch, UserType, UserWorkoutPatch, WorkoutPatch,
    WorkoutPlanPatch,
};

fn seed_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 3, 14, 30, 0).unwrap()
}

fn seeded() -> MemStorage {
    MemStorage::seeded_at(seed_time())
}

fn leg_day() -> InsertWorkout {
    InsertWorkout {
        name: "Treino de Pernas".to_string(),
        description: None,
        category: "legs".to_string(),
        duration: 50,
        difficulty: Difficulty::Intermediate,
        exercises: vec![Exercise::strength("Agachamento", 4, 8, 100.0)],
        video_url: None,
        created_by: Some("trainer1".to_string()),
        is_public: false,
        price: None,
    }
}

fn points_for(user_id: &str, points: u32) -> InsertUserPoints {
    InsertUserPoints {
        user_id: user_id.to_string(),
        points: Some(points),
        ..Default::default()
    }
}

// ─── Seed ────────────────────────────────────────────────────

#[test]
fn test_seed_contents() {
    let store = seeded();

    let student = store.get_user("user1").expect("seeded student");
    assert_eq!(student.username, "joaosilva");
    assert_eq!(student.user_type, UserType::Student);
    let trainer = store.get_user("trainer1").expect("seeded trainer");
    assert_eq!(trainer.user_type, UserType::Trainer);

    let workout_ids: Vec<_> = store.get_workouts().into_iter().map(|w| w.id).collect();
    assert_eq!(workout_ids, vec!["workout1", "workout2"]);
    assert_eq!(store.get_workouts_by_user("trainer1").len(), 2);
    assert!(store.get_workouts_by_user("user1").is_empty());

    let schedule: Vec<_> = store
        .get_user_workouts("user1")
        .into_iter()
        .map(|uw| uw.id)
        .collect();
    assert_eq!(schedule, vec!["uw1", "uw2"]);

    let metrics = store.get_latest_body_metrics("user1").unwrap();
    assert_eq!(metrics.id, "metrics1");
    assert_eq!(metrics.weight, Some(75.2));
}

#[test]
fn test_seed_plans_listing_and_featured() {
    let store = seeded();

    let plans = store.get_workout_plans();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].id, "plan1");

    let featured = store.get_featured_workout_plans();
    assert_eq!(featured, plans);
    assert_eq!(store.get_workout_plans_by_trainer("trainer1"), plans);
}

#[test]
fn test_seed_points_upsert_keeps_id() {
    let store = seeded();
    assert_eq!(store.get_user_points("user1").unwrap().points, 1245);

    let updated = store.create_or_update_user_points(points_for("user1", 1300));

    assert_eq!(updated.id, "points1");
    assert_eq!(updated.points, 1300);
    assert_eq!(updated.workouts_completed, 42);
    assert_eq!(updated.streak, 12);
    assert_eq!(store.get_users_ranking().len(), 1);
    assert_eq!(store.get_user_points("user1"), Some(updated));
}

// ─── Create / Get ────────────────────────────────────────────

#[test]
fn test_create_then_get_returns_same_record() {
    let store = MemStorage::new();

    let user = store.create_user(InsertUser {
        username: "bia".to_string(),
        email: "bia@email.com".to_string(),
        password: "hashed_password".to_string(),
        first_name: "Beatriz".to_string(),
        last_name: "Costa".to_string(),
        user_type: UserType::Student,
        profile_image: None,
    });
    assert!(!user.id.is_empty());
    assert_eq!(store.get_user(&user.id), Some(user.clone()));

    let workout = store.create_workout(leg_day());
    assert!(!workout.id.is_empty());
    assert_eq!(store.get_workout(&workout.id), Some(workout.clone()));

    let entry = store.create_user_workout(InsertUserWorkout {
        user_id: Some(user.id.clone()),
        workout_id: Some(workout.id.clone()),
        scheduled_date: Some(seed_time()),
        ..Default::default()
    });
    assert!(!entry.id.is_empty());
    assert_eq!(store.get_user_workouts(&user.id), vec![entry]);

    let metrics = store.create_body_metrics(InsertBodyMetrics {
        user_id: Some(user.id.clone()),
        weight: Some(61.0),
        ..Default::default()
    });
    assert_eq!(store.get_latest_body_metrics(&user.id), Some(metrics));

    let points = store.create_or_update_user_points(points_for(&user.id, 10));
    assert!(!points.id.is_empty());
    assert_eq!(store.get_user_points(&user.id), Some(points));
}

#[test]
fn test_created_ids_are_unique() {
    let store = MemStorage::new();
    let a = store.create_workout(leg_day());
    let b = store.create_workout(leg_day());

    assert_ne!(a.id, b.id);
    assert_eq!(store.get_workouts().len(), 2);
}

#[test]
fn test_create_plan_resets_rating() {
    let store = seeded();
    let plan = store.create_workout_plan(InsertWorkoutPlan {
        name: "Força Total".to_string(),
        description: None,
        trainer_id: Some("trainer1".to_string()),
        duration: 6,
        price: 39.9,
        workouts: vec!["workout1".to_string()],
        image_url: None,
        is_featured: false,
    });

    assert_eq!(plan.rating, 0.0);
    assert_eq!(plan.review_count, 0);
    assert_eq!(store.get_workout_plans().len(), 2);
    assert_eq!(store.get_featured_workout_plans().len(), 1);
    assert_eq!(store.get_workout_plans_by_trainer("trainer1").len(), 2);
}

#[test]
fn test_uniqueness_is_not_enforced_by_store() {
    let store = seeded();
    let clone = store.create_user(InsertUser {
        username: "joaosilva".to_string(),
        email: "joao@email.com".to_string(),
        password: "other".to_string(),
        first_name: "João".to_string(),
        last_name: "Clone".to_string(),
        user_type: UserType::Student,
        profile_image: None,
    });

    assert_ne!(clone.id, "user1");
    // Lookup by username returns the first holder.
    assert_eq!(store.get_user_by_username("joaosilva").unwrap().id, "user1");
}

#[test]
fn test_dangling_references_are_accepted() {
    let store = seeded();
    let entry = store.create_user_workout(InsertUserWorkout {
        user_id: Some("ghost".to_string()),
        workout_id: Some("no-such-workout".to_string()),
        scheduled_date: Some(seed_time()),
        ..Default::default()
    });

    assert_eq!(store.get_user_workouts("ghost"), vec![entry]);
}

// ─── Update ──────────────────────────────────────────────────

#[test]
fn test_update_missing_ids_return_none() {
    let store = seeded();

    assert!(store.update_user("nope", UserPatch::default()).is_none());
    assert!(store.update_workout("nope", WorkoutPatch::default()).is_none());
    assert!(store
        .update_user_workout("nope", UserWorkoutPatch::default())
        .is_none());
    assert!(store
        .update_workout_plan("nope", WorkoutPlanPatch::default())
        .is_none());
    assert_eq!(store.get_workouts().len(), 2);
}

#[test]
fn test_update_workout_overlays_fields() {
    let store = seeded();
    let before = store.get_workout("workout1").unwrap();

    let updated = store
        .update_workout(
            "workout1",
            WorkoutPatch {
                duration: Some(60),
                difficulty: Some(Difficulty::Advanced),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.id, "workout1");
    assert_eq!(updated.duration, 60);
    assert_eq!(updated.difficulty, Difficulty::Advanced);
    assert_eq!(updated.name, before.name);
    assert_eq!(updated.exercises, before.exercises);
    assert_eq!(store.get_workout("workout1"), Some(updated));
}

#[test]
fn test_empty_patch_is_identity() {
    let store = seeded();
    let before = store.get_user_workouts("user1");
    store.update_user_workout("uw1", UserWorkoutPatch::default());
    assert_eq!(store.get_user_workouts("user1"), before);
}

#[test]
fn test_completing_a_scheduled_workout() {
    let store = seeded();
    let done_at = seed_time() + Duration::hours(1);

    let updated = store
        .update_user_workout(
            "uw2",
            UserWorkoutPatch {
                completed_date: Some(Some(done_at)),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.completed_date, Some(done_at));
    assert!(updated.is_completed());
    assert_eq!(updated.scheduled_date, Some(seed_time()));
}

// ─── Date queries ────────────────────────────────────────────

#[test]
fn test_by_date_matches_calendar_day_only() {
    let store = seeded();
    let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();

    let early = store.create_user_workout(InsertUserWorkout {
        user_id: Some("user1".to_string()),
        scheduled_date: Some(Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 1).unwrap()),
        ..Default::default()
    });
    store.create_user_workout(InsertUserWorkout {
        user_id: Some("user1".to_string()),
        scheduled_date: Some(Utc.with_ymd_and_hms(2024, 6, 4, 0, 0, 0).unwrap()),
        ..Default::default()
    });
    store.create_user_workout(InsertUserWorkout {
        user_id: Some("user1".to_string()),
        scheduled_date: None,
        ..Default::default()
    });
    store.create_user_workout(InsertUserWorkout {
        user_id: Some("trainer1".to_string()),
        scheduled_date: Some(seed_time()),
        ..Default::default()
    });

    let ids: Vec<_> = store
        .get_user_workouts_by_date("user1", day)
        .into_iter()
        .map(|uw| uw.id)
        .collect();
    assert_eq!(ids, vec!["uw1".to_string(), "uw2".to_string(), early.id]);

    assert!(store
        .get_user_workouts_by_date("user1", day.pred_opt().unwrap())
        .is_empty());
}

// ─── Ranking ─────────────────────────────────────────────────

#[test]
fn test_ranking_sorted_with_stable_ties() {
    let store = MemStorage::new();
    store.create_or_update_user_points(points_for("a", 50));
    store.create_or_update_user_points(points_for("b", 80));
    store.create_or_update_user_points(points_for("c", 50));
    store.create_or_update_user_points(points_for("d", 80));
    store.create_or_update_user_points(points_for("e", 10));

    let order: Vec<_> = store
        .get_users_ranking()
        .into_iter()
        .map(|entry| entry.points.user_id)
        .collect();
    assert_eq!(order, vec!["b", "d", "a", "c", "e"]);
}

#[test]
fn test_ranking_projects_users() {
    let store = seeded();
    store.create_or_update_user_points(points_for("ghost", 5000));

    let ranking = store.get_users_ranking();
    assert_eq!(ranking[0].points.user_id, "ghost");
    assert!(ranking[0].user.is_none());
    assert_eq!(
        ranking[1].user.as_ref().map(|u| u.username.as_str()),
        Some("joaosilva")
    );
}

#[test]
fn test_upsert_twice_keeps_single_record() {
    let store = MemStorage::new();
    let first = store.create_or_update_user_points(InsertUserPoints {
        user_id: "u".to_string(),
        points: Some(100),
        workouts_completed: Some(3),
        streak: Some(2),
        last_workout_date: None,
    });
    let second = store.create_or_update_user_points(InsertUserPoints {
        user_id: "u".to_string(),
        streak: Some(3),
        ..Default::default()
    });

    assert_eq!(second.id, first.id);
    assert_eq!(second.points, 100);
    assert_eq!(second.workouts_completed, 3);
    assert_eq!(second.streak, 3);
    assert_eq!(store.get_users_ranking().len(), 1);
}

#[test]
fn test_upsert_keeps_ranking_position_on_tie() {
    let store = MemStorage::new();
    store.create_or_update_user_points(points_for("first", 10));
    store.create_or_update_user_points(points_for("second", 20));
    // Raising "first" to tie keeps it ahead: updates keep insertion order.
    store.create_or_update_user_points(points_for("first", 20));

    let order: Vec<_> = store
        .get_users_ranking()
        .into_iter()
        .map(|entry| entry.points.user_id)
        .collect();
    assert_eq!(order, vec!["first", "second"]);
}
