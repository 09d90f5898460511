use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::dtos::{
    HabitAnalyticsDto, HabitCalendarDto, HabitDto, HabitWithProgressDto,
};
use committed_domain::habit::HabitRepository;
use committed_domain::habit_entry::HabitEntryRepository;
use committed_domain::shared::DomainError;
use committed_domain::streak::StreakRepository;

mod analytics;
mod calendar;
mod overview;


/// Maximum number of habits returned by the listing queries.
pub const HABIT_LIST_LIMIT: u32 = 10;

pub struct HabitQueries {
    habit_repo: Arc<dyn HabitRepository>,
    entry_repo: Arc<dyn HabitEntryRepository>,
    streak_repo: Arc<dyn StreakRepository>,
}

impl HabitQueries {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        entry_repo: Arc<dyn HabitEntryRepository>,
        streak_repo: Arc<dyn StreakRepository>,
    ) -> Self {
        Self {
            habit_repo,
            entry_repo,
            streak_repo,
        }
    }

    /// A user's habits, oldest first
    pub async fn list_habits(&self, user_id: &str) -> Result<Vec<HabitDto>, DomainError> {
        overview::list_habits(self.habit_repo.as_ref(), user_id).await
    }

    /// A user's newest habits with entries, stored streaks and progress as of `reference`
    pub async fn list_habits_with_progress(
        &self,
        user_id: &str,
        reference: NaiveDate,
    ) -> Result<Vec<HabitWithProgressDto>, DomainError> {
        overview::list_habits_with_progress(
            self.habit_repo.as_ref(),
            self.entry_repo.as_ref(),
            self.streak_repo.as_ref(),
            user_id,
            reference,
        )
        .await
    }

    pub async fn get_analytics(
        &self,
        user_id: &str,
        habit_id: &str,
        reference: NaiveDate,
    ) -> Result<HabitAnalyticsDto, DomainError> {
        analytics::get_analytics(
            self.habit_repo.as_ref(),
            self.entry_repo.as_ref(),
            user_id,
            habit_id,
            reference,
        )
        .await
    }

    /// Completion calendar for one month
    pub async fn get_calendar(
        &self,
        user_id: &str,
        habit_id: &str,
        year: i32,
        month: u32,
    ) -> Result<HabitCalendarDto, DomainError> {
        calendar::get_calendar(
            self.habit_repo.as_ref(),
            self.entry_repo.as_ref(),
            user_id,
            habit_id,
            year,
            month,
        )
        .await
    }
}
