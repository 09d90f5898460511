use async_trait::async_trait;

use super::Habit;
use crate::shared::{DomainError, HabitId, UserId};

/// Creation-time ordering for habit listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitOrder {
    OldestFirst,
    NewestFirst,
}

#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Insert or update a habit.
    async fn save(&self, habit: &Habit) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError>;

    /// List a user's habits ordered by `created_at`, at most `limit` rows.
    async fn list_by_user(
        &self,
        user_id: &UserId,
        order: HabitOrder,
        limit: u32,
    ) -> Result<Vec<Habit>, DomainError>;
}
