// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Demo data so a fresh process has something to show on the dashboard.

use crate::db::MemStorage;
use crate::models::{
    BodyMetrics, Difficulty, Exercise, User, UserPoints, UserType, UserWorkout, Workout,
    WorkoutPlan, WorkoutProgress,
};
use chrono::{DateTime, Utc};

pub const DEMO_STUDENT_ID: &str = "user1";
pub const DEMO_TRAINER_ID: &str = "trainer1";

impl MemStorage {
    /// Populate two users, two workouts, two user workouts scheduled at `now`,
    /// one body-metrics reading, one featured plan and one points record.
    pub(super) fn seed_demo_data(&self, now: DateTime<Utc>) {
        let student = User {
            id: DEMO_STUDENT_ID.to_string(),
            username: "joaosilva".to_string(),
            email: "joao@email.com".to_string(),
            password: "hashed_password".to_string(),
            first_name: "João".to_string(),
            last_name: "Silva".to_string(),
            user_type: UserType::Student,
            profile_image: Some(
                "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=100&h=100&fit=crop&crop=face"
                    .to_string(),
            ),
            created_at: now,
        };
        let trainer = User {
            id: DEMO_TRAINER_ID.to_string(),
            username: "carlos_personal".to_string(),
            email: "carlos@email.com".to_string(),
            password: "hashed_password".to_string(),
            first_name: "Carlos".to_string(),
            last_name: "Personal".to_string(),
            user_type: UserType::Trainer,
            profile_image: None,
            created_at: now,
        };
        self.users.insert(student.id.clone(), student);
        self.users.insert(trainer.id.clone(), trainer);

        let chest = Workout {
            id: "workout1".to_string(),
            name: "Treino de Peito".to_string(),
            description: Some("Treino focado no desenvolvimento do peitoral".to_string()),
            category: "chest".to_string(),
            duration: 45,
            difficulty: Difficulty::Intermediate,
            exercises: vec![
                Exercise::strength("Supino Reto", 4, 12, 80.0),
                Exercise::strength("Supino Inclinado", 3, 10, 70.0),
                Exercise::strength("Crucifixo", 3, 15, 25.0),
            ],
            video_url: Some("https://example.com/chest-workout-video".to_string()),
            created_by: Some(DEMO_TRAINER_ID.to_string()),
            is_public: true,
            price: Some(0.0),
            created_at: now,
        };
        let hiit = Workout {
            id: "workout2".to_string(),
            name: "Cardio HIIT".to_string(),
            description: Some("Treino de cardio alta intensidade".to_string()),
            category: "cardio".to_string(),
            duration: 30,
            difficulty: Difficulty::Advanced,
            exercises: vec![
                Exercise::timed("Burpees", 30, 10),
                Exercise::timed("Mountain Climbers", 30, 10),
                Exercise::timed("Jump Squats", 30, 10),
            ],
            video_url: Some("https://example.com/hiit-workout-video".to_string()),
            created_by: Some(DEMO_TRAINER_ID.to_string()),
            is_public: true,
            price: Some(0.0),
            created_at: now,
        };
        self.workouts.insert(chest.id.clone(), chest);
        self.workouts.insert(hiit.id.clone(), hiit);

        for (id, workout_id, completed, total) in [("uw1", "workout1", 0, 3), ("uw2", "workout2", 3, 5)]
        {
            self.user_workouts.insert(
                id.to_string(),
                UserWorkout {
                    id: id.to_string(),
                    user_id: Some(DEMO_STUDENT_ID.to_string()),
                    workout_id: Some(workout_id.to_string()),
                    scheduled_date: Some(now),
                    completed_date: None,
                    progress: Some(WorkoutProgress {
                        completed_exercises: completed,
                        total_exercises: total,
                    }),
                    notes: None,
                },
            );
        }

        self.body_metrics.insert(
            "metrics1".to_string(),
            BodyMetrics {
                id: "metrics1".to_string(),
                user_id: Some(DEMO_STUDENT_ID.to_string()),
                weight: Some(75.2),
                body_fat: Some(12.5),
                muscle_mass: Some(62.7),
                hydration: Some(58.3),
                measured_at: now,
            },
        );

        self.workout_plans.insert(
            "plan1".to_string(),
            WorkoutPlan {
                id: "plan1".to_string(),
                name: "Hipertrofia Avançada".to_string(),
                description: Some(
                    "Programa completo de 12 semanas para ganho de massa muscular".to_string(),
                ),
                trainer_id: Some(DEMO_TRAINER_ID.to_string()),
                duration: 12,
                price: 49.90,
                rating: 4.8,
                review_count: 124,
                workouts: vec!["workout1".to_string(), "workout2".to_string()],
                image_url: Some(
                    "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=250&fit=crop"
                        .to_string(),
                ),
                is_featured: true,
                created_at: now,
            },
        );

        self.put_user_points(UserPoints {
            id: "points1".to_string(),
            user_id: DEMO_STUDENT_ID.to_string(),
            points: 1245,
            workouts_completed: 42,
            streak: 12,
            last_workout_date: Some(now),
        });

        tracing::info!(
            users = self.users.len(),
            workouts = self.workouts.len(),
            plans = self.workout_plans.len(),
            "Seeded demo data"
        );
    }
}
