use std::sync::Arc;

use committed_domain::habit::{Habit, HabitOrder, HabitRepository, TargetFrequency};
use committed_domain::shared::{DomainError, HabitId, UserId};
use committed_infrastructure::persistence::repositories::SqliteHabitRepository;

mod test_helpers;

#[tokio::test]
async fn habit_repo_save_and_find_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    test_helpers::insert_user(&pool, "user-1").await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    let mut habit = Habit::new(
        UserId::from_string("user-1"),
        "Read".to_string(),
        Some("Twenty pages".to_string()),
        TargetFrequency::Daily,
    )
    .expect("create habit");
    repo.save(&habit).await.expect("save habit");

    let fetched = repo
        .find_by_id(habit.id())
        .await
        .expect("find")
        .expect("should exist");
    assert_eq!(fetched.name(), "Read");
    assert_eq!(fetched.description(), Some("Twenty pages"));
    assert_eq!(fetched.target_frequency(), TargetFrequency::Daily);
    assert_eq!(fetched.user_id().as_str(), "user-1");

    // update through the same id
    habit.rename("Read fiction".to_string()).expect("rename");
    habit.change_frequency(TargetFrequency::Weekly);
    repo.save(&habit).await.expect("save updated habit");

    let updated = repo
        .find_by_id(habit.id())
        .await
        .expect("find updated")
        .expect("should exist");
    assert_eq!(updated.name(), "Read fiction");
    assert_eq!(updated.target_frequency(), TargetFrequency::Weekly);
    assert_eq!(updated.created_at(), fetched.created_at());

    let missing = repo
        .find_by_id(&HabitId::new())
        .await
        .expect("find missing");
    assert!(missing.is_none());
}

#[tokio::test]
async fn habit_repo_list_order_and_limit_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    test_helpers::insert_user(&pool, "user-1").await;
    test_helpers::insert_user(&pool, "user-2").await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    let user = UserId::from_string("user-1");
    let base = chrono::Utc::now() - chrono::Duration::days(30);
    for i in 0..12 {
        let created = base + chrono::Duration::days(i);
        let habit = Habit::restore(
            HabitId::from_string(&format!("habit-{:02}", i)),
            user.clone(),
            format!("Habit {}", i),
            None,
            TargetFrequency::Daily,
            created,
            created,
        );
        repo.save(&habit).await.expect("save habit");
    }
    let other = Habit::new(
        UserId::from_string("user-2"),
        "Someone else's".to_string(),
        None,
        TargetFrequency::Monthly,
    )
    .expect("create habit");
    repo.save(&other).await.expect("save other habit");

    let oldest = repo
        .list_by_user(&user, HabitOrder::OldestFirst, 10)
        .await
        .expect("list oldest first");
    assert_eq!(oldest.len(), 10);
    assert_eq!(oldest[0].id().as_str(), "habit-00");
    assert_eq!(oldest[9].id().as_str(), "habit-09");

    let newest = repo
        .list_by_user(&user, HabitOrder::NewestFirst, 10)
        .await
        .expect("list newest first");
    assert_eq!(newest.len(), 10);
    assert_eq!(newest[0].id().as_str(), "habit-11");
    assert!(newest.iter().all(|h| h.is_owned_by(&user)));
}

#[tokio::test]
async fn habit_repo_requires_existing_user_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    let habit = Habit::new(
        UserId::from_string("ghost"),
        "Run".to_string(),
        None,
        TargetFrequency::Daily,
    )
    .expect("create habit");

    let result = repo.save(&habit).await;
    assert!(matches!(result, Err(DomainError::DataIntegrity(_))));
}
