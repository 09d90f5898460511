use chrono::NaiveDate;
use std::sync::Arc;

use committed_domain::habit::{Habit, HabitRepository, TargetFrequency};
use committed_domain::progress::StreakRun;
use committed_domain::shared::{DomainError, HabitId, UserId};
use committed_domain::streak::{StreakRecord, StreakRepository};
use committed_infrastructure::persistence::repositories::{
    SqliteHabitRepository, SqliteStreakRepository,
};

mod test_helpers;

fn day(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid date")
}

fn run(start: &str, end: &str, length: u32) -> StreakRun {
    StreakRun {
        start: day(start),
        end: day(end),
        length,
    }
}

async fn create_habit(pool: &sqlx::SqlitePool) -> HabitId {
    let repo = SqliteHabitRepository::new(Arc::new(pool.clone()));
    let habit = Habit::new(
        UserId::from_string("user-1"),
        "Read".to_string(),
        None,
        TargetFrequency::Daily,
    )
    .expect("create habit");
    repo.save(&habit).await.expect("save habit");
    habit.id().clone()
}

#[tokio::test]
async fn streak_repo_replace_and_list_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    test_helpers::insert_user(&pool, "user-1").await;
    let habit_id = create_habit(&pool).await;
    let repo = SqliteStreakRepository::new(Arc::new(pool.clone()));
    let today = day("2024-01-10");

    let records = vec![
        StreakRecord::from_run(habit_id.clone(), &run("2024-01-01", "2024-01-02", 2), today),
        StreakRecord::from_run(habit_id.clone(), &run("2024-01-08", "2024-01-10", 3), today),
    ];
    repo.replace_for_habit(&habit_id, &records)
        .await
        .expect("replace");

    let listed = repo.list_by_habit(&habit_id).await.expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].start_date(), day("2024-01-08"));
    assert!(listed[0].is_active());
    assert_eq!(listed[0].length(), 3);
    assert_eq!(listed[1].end_date(), Some(day("2024-01-02")));

    // replacing drops the previous snapshot
    let records = vec![StreakRecord::from_run(
        habit_id.clone(),
        &run("2024-01-08", "2024-01-11", 4),
        day("2024-01-11"),
    )];
    repo.replace_for_habit(&habit_id, &records)
        .await
        .expect("replace again");

    let listed = repo
        .list_by_habits(&[habit_id.clone()])
        .await
        .expect("list by habits");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].length(), 4);
}

#[tokio::test]
async fn streak_repo_rejects_foreign_records_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    test_helpers::insert_user(&pool, "user-1").await;
    let habit_id = create_habit(&pool).await;
    let other_id = create_habit(&pool).await;
    let repo = SqliteStreakRepository::new(Arc::new(pool.clone()));
    let today = day("2024-01-10");

    repo.replace_for_habit(
        &habit_id,
        &[StreakRecord::from_run(
            habit_id.clone(),
            &run("2024-01-10", "2024-01-10", 1),
            today,
        )],
    )
    .await
    .expect("seed");

    let result = repo
        .replace_for_habit(
            &habit_id,
            &[StreakRecord::from_run(
                other_id,
                &run("2024-01-09", "2024-01-10", 2),
                today,
            )],
        )
        .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));

    // the failed replacement rolled back
    let listed = repo.list_by_habit(&habit_id).await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].length(), 1);
}
