use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use fitness_dashboard::db::MemStorage;
use fitness_dashboard::models::{InsertUserPoints, InsertUserWorkout};
use std::hint::black_box;

fn populated_store() -> MemStorage {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    let store = MemStorage::seeded_at(start);

    // 5000 users with points, many tied
    for i in 0..5000u32 {
        store.create_or_update_user_points(InsertUserPoints {
            user_id: format!("user-{i}"),
            points: Some(i % 700),
            ..Default::default()
        });
    }

    // A year of schedule for the demo student, three sessions a day
    for day in 0..365 {
        for hour in [6, 12, 18] {
            store.create_user_workout(InsertUserWorkout {
                user_id: Some("user1".to_string()),
                workout_id: Some("workout1".to_string()),
                scheduled_date: Some(start + Duration::days(day) + Duration::hours(hour)),
                ..Default::default()
            });
        }
    }
    store
}

fn benchmark_queries(c: &mut Criterion) {
    let store = populated_store();
    let day = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap().date_naive();

    let mut group = c.benchmark_group("storage_queries");

    group.bench_function("users_ranking", |b| {
        b.iter(|| black_box(store.get_users_ranking()))
    });

    group.bench_function("user_workouts_by_date", |b| {
        b.iter(|| store.get_user_workouts_by_date(black_box("user1"), black_box(day)))
    });

    group.bench_function("points_upsert_existing", |b| {
        b.iter(|| {
            store.create_or_update_user_points(InsertUserPoints {
                user_id: black_box("user-42").to_string(),
                points: Some(1000),
                ..Default::default()
            })
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_queries);
criterion_main!(benches);
