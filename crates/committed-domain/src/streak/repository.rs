use async_trait::async_trait;

use super::StreakRecord;
use crate::shared::{DomainError, HabitId};

#[async_trait]
pub trait StreakRepository: Send + Sync {
    /// Atomically replace every streak record of `habit_id` with `records`.
    async fn replace_for_habit(
        &self,
        habit_id: &HabitId,
        records: &[StreakRecord],
    ) -> Result<(), DomainError>;

    /// Streak records of a habit, most recent start first.
    async fn list_by_habit(&self, habit_id: &HabitId) -> Result<Vec<StreakRecord>, DomainError>;

    async fn list_by_habits(&self, habit_ids: &[HabitId])
        -> Result<Vec<StreakRecord>, DomainError>;
}
