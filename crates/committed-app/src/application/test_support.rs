// In-memory repositories for handler and query tests

use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use committed_domain::habit::{Habit, HabitOrder, HabitRepository};
use committed_domain::habit_entry::{HabitEntry, HabitEntryRepository};
use committed_domain::shared::{DomainError, HabitId, UserId};
use committed_domain::streak::{StreakRecord, StreakRepository};

pub struct MockHabitRepository {
    habits: tokio::sync::RwLock<HashMap<String, Habit>>,
}

impl MockHabitRepository {
    pub fn new() -> Self {
        Self {
            habits: tokio::sync::RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait::async_trait]
impl HabitRepository for MockHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        let mut habits = self.habits.write().await;
        habits.insert(habit.id().as_str().to_string(), habit.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        let habits = self.habits.read().await;
        Ok(habits.get(id.as_str()).cloned())
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        order: HabitOrder,
        limit: u32,
    ) -> Result<Vec<Habit>, DomainError> {
        let habits = self.habits.read().await;
        let mut owned: Vec<Habit> = habits
            .values()
            .filter(|h| h.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by_key(|h| h.created_at());
        if order == HabitOrder::NewestFirst {
            owned.reverse();
        }
        owned.truncate(limit as usize);
        Ok(owned)
    }
}

pub struct MockHabitEntryRepository {
    entries: tokio::sync::RwLock<HashMap<(String, NaiveDate), HabitEntry>>,
}

impl MockHabitEntryRepository {
    pub fn new() -> Self {
        Self {
            entries: tokio::sync::RwLock::new(HashMap::new()),
        }
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait::async_trait]
impl HabitEntryRepository for MockHabitEntryRepository {
    async fn upsert(&self, entry: &HabitEntry) -> Result<HabitEntry, DomainError> {
        let mut entries = self.entries.write().await;
        let key = (entry.habit_id().as_str().to_string(), entry.date());
        let stored = match entries.get(&key) {
            Some(existing) => {
                let mut updated = existing.clone();
                updated.set_status(entry.status().clone());
                updated
            }
            None => entry.clone(),
        };
        entries.insert(key, stored.clone());
        Ok(stored)
    }

    async fn find_by_habit_and_date(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Option<HabitEntry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(&(habit_id.as_str().to_string(), date))
            .cloned())
    }

    async fn list_by_habit(&self, habit_id: &HabitId) -> Result<Vec<HabitEntry>, DomainError> {
        self.list_by_habits(std::slice::from_ref(habit_id)).await
    }

    async fn list_by_habits(&self, habit_ids: &[HabitId]) -> Result<Vec<HabitEntry>, DomainError> {
        let entries = self.entries.read().await;
        let mut matching: Vec<HabitEntry> = entries
            .values()
            .filter(|e| habit_ids.contains(e.habit_id()))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.date().cmp(&a.date()));
        Ok(matching)
    }
}

pub struct MockStreakRepository {
    streaks: tokio::sync::RwLock<HashMap<String, Vec<StreakRecord>>>,
    fail_writes: AtomicBool,
}

impl MockStreakRepository {
    pub fn new() -> Self {
        Self {
            streaks: tokio::sync::RwLock::new(HashMap::new()),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl StreakRepository for MockStreakRepository {
    async fn replace_for_habit(
        &self,
        habit_id: &HabitId,
        records: &[StreakRecord],
    ) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Repository(
                "replace streaks: database is locked".to_string(),
            ));
        }
        let mut streaks = self.streaks.write().await;
        streaks.insert(habit_id.as_str().to_string(), records.to_vec());
        Ok(())
    }

    async fn list_by_habit(&self, habit_id: &HabitId) -> Result<Vec<StreakRecord>, DomainError> {
        let streaks = self.streaks.read().await;
        let mut records = streaks.get(habit_id.as_str()).cloned().unwrap_or_default();
        records.sort_by(|a, b| b.start_date().cmp(&a.start_date()));
        Ok(records)
    }

    async fn list_by_habits(
        &self,
        habit_ids: &[HabitId],
    ) -> Result<Vec<StreakRecord>, DomainError> {
        let mut all = Vec::new();
        for habit_id in habit_ids {
            all.extend(self.list_by_habit(habit_id).await?);
        }
        Ok(all)
    }
}

pub struct Repos {
    pub habits: Arc<MockHabitRepository>,
    pub entries: Arc<MockHabitEntryRepository>,
    pub streaks: Arc<MockStreakRepository>,
}

pub fn repos() -> Repos {
    Repos {
        habits: Arc::new(MockHabitRepository::new()),
        entries: Arc::new(MockHabitEntryRepository::new()),
        streaks: Arc::new(MockStreakRepository::new()),
    }
}
