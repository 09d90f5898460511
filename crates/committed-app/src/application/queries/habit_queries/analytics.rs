use chrono::NaiveDate;

use crate::application::dtos::HabitAnalyticsDto;
use crate::application::utils::find_owned_habit;
use committed_domain::habit::HabitRepository;
use committed_domain::habit_entry::HabitEntryRepository;
use committed_domain::progress::HabitAnalytics;
use committed_domain::shared::{DomainError, HabitId, UserId};
use committed_domain::HabitProgressCalculator;

pub async fn get_analytics(
    habit_repo: &dyn HabitRepository,
    entry_repo: &dyn HabitEntryRepository,
    user_id: &str,
    habit_id: &str,
    reference: NaiveDate,
) -> Result<HabitAnalyticsDto, DomainError> {
    let habit_id = HabitId::from_string(habit_id);
    let habit = find_owned_habit(habit_repo, &UserId::from_string(user_id), &habit_id).await?;

    let entries = entry_repo.list_by_habit(&habit_id).await?;
    let analytics = HabitAnalytics::compute(&entries, habit_id.as_str());
    let progress = HabitProgressCalculator::evaluate(&entries, habit_id.as_str(), reference);

    Ok(HabitAnalyticsDto::new(&habit, analytics, progress, reference))
}
