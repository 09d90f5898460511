use chrono::{Datelike, NaiveDate};
use log::{log, Level};

use crate::application::dtos::{CalendarDayDto, HabitCalendarDto, MonthStatsDto};
use crate::application::utils::find_owned_habit;
use committed_domain::habit::HabitRepository;
use committed_domain::habit_entry::HabitEntryRepository;
use committed_domain::shared::{DomainError, HabitId, UserId};
use committed_domain::HabitProgressCalculator;

pub async fn get_calendar(
    habit_repo: &dyn HabitRepository,
    entry_repo: &dyn HabitEntryRepository,
    user_id: &str,
    habit_id: &str,
    year: i32,
    month: u32,
) -> Result<HabitCalendarDto, DomainError> {
    let (first_day, last_day) = month_bounds(year, month)?;

    let habit_id = HabitId::from_string(habit_id);
    find_owned_habit(habit_repo, &UserId::from_string(user_id), &habit_id).await?;

    let entries = entry_repo.list_by_habit(&habit_id).await?;
    let grid =
        HabitProgressCalculator::completion_grid(&entries, habit_id.as_str(), first_day, last_day);

    let total_days = last_day.day();
    let completed_days = grid.iter().filter(|d| d.completed).count() as u32;
    let completion_rate = (completed_days as f64 / total_days as f64) * 100.0;

    log!(
        summary_level(completed_days),
        "[calendar] habit_id={} month={:04}-{:02} completed_days={}",
        habit_id,
        year,
        month,
        completed_days
    );

    Ok(HabitCalendarDto {
        habit_id: habit_id.as_str().to_string(),
        year,
        month,
        days: grid.into_iter().map(CalendarDayDto::from).collect(),
        month_stats: MonthStatsDto {
            total_days,
            completed_days,
            completion_rate,
        },
    })
}

/// Months without completions only show up at debug level.
fn summary_level(completed_days: u32) -> Level {
    if completed_days == 0 {
        Level::Debug
    } else {
        Level::Info
    }
}

/// First and last day of a month.
fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), DomainError> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::Validation(format!("Invalid month: {}", month)));
    }

    let first_day = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DomainError::Validation(format!("Invalid year: {}", year)))?;

    let first_day_next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last_day = first_day_next_month
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| DomainError::Validation(format!("Invalid year: {}", year)))?;

    Ok((first_day, last_day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_month_logs_at_debug() {
        assert_eq!(summary_level(0), Level::Debug);
        assert_eq!(summary_level(3), Level::Info);
    }

    #[test]
    fn test_month_bounds() {
        let (first, last) = month_bounds(2024, 2).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let (_, last) = month_bounds(2023, 12).unwrap();
        assert_eq!(last, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());

        assert!(month_bounds(2024, 0).is_err());
        assert!(month_bounds(2024, 13).is_err());
    }
}
