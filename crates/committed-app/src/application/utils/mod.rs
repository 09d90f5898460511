use chrono::NaiveDate;

use committed_domain::habit::{Habit, HabitRepository};
use committed_domain::progress::parse_day;
use committed_domain::shared::{DomainError, HabitId, UserId};
use committed_domain::HabitProgressCalculator;

/// Load a habit, treating one owned by somebody else as missing.
pub async fn find_owned_habit(
    habit_repo: &dyn HabitRepository,
    user_id: &UserId,
    habit_id: &HabitId,
) -> Result<Habit, DomainError> {
    match habit_repo.find_by_id(habit_id).await? {
        Some(habit) if habit.is_owned_by(user_id) => Ok(habit),
        _ => Err(DomainError::HabitNotFound(habit_id.as_str().to_string())),
    }
}

/// Reference day for progress queries: the given day, or today (UTC).
pub fn resolve_reference_date(value: Option<&str>) -> Result<NaiveDate, DomainError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => parse_day(raw)
            .ok_or_else(|| DomainError::InvalidInput(format!("Invalid reference date: {}", raw))),
        None => Ok(HabitProgressCalculator::today()),
    }
}
