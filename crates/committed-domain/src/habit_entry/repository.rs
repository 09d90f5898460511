use async_trait::async_trait;
use chrono::NaiveDate;

use super::HabitEntry;
use crate::shared::{DomainError, HabitId};

#[async_trait]
pub trait HabitEntryRepository: Send + Sync {
    /// Insert or update the entry for (`habit_id`, `date`).
    ///
    /// Storage keeps at most one entry per habit and day; an existing entry
    /// for the same day has its status replaced.
    async fn upsert(&self, entry: &HabitEntry) -> Result<HabitEntry, DomainError>;

    async fn find_by_habit_and_date(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Option<HabitEntry>, DomainError>;

    /// All entries of a habit, newest day first.
    async fn list_by_habit(&self, habit_id: &HabitId) -> Result<Vec<HabitEntry>, DomainError>;

    /// All entries belonging to any of `habit_ids`, newest day first.
    async fn list_by_habits(&self, habit_ids: &[HabitId]) -> Result<Vec<HabitEntry>, DomainError>;
}
