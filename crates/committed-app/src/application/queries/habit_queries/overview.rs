use chrono::NaiveDate;
use log::info;
use std::collections::HashMap;

use super::HABIT_LIST_LIMIT;
use crate::application::dtos::{HabitDto, HabitEntryDto, HabitWithProgressDto, StreakDto};
use committed_domain::habit::{HabitOrder, HabitRepository};
use committed_domain::habit_entry::{HabitEntry, HabitEntryRepository};
use committed_domain::shared::{DomainError, HabitId, UserId};
use committed_domain::streak::{StreakRecord, StreakRepository};
use committed_domain::HabitProgressCalculator;

pub async fn list_habits(
    habit_repo: &dyn HabitRepository,
    user_id: &str,
) -> Result<Vec<HabitDto>, DomainError> {
    let habits = habit_repo
        .list_by_user(
            &UserId::from_string(user_id),
            HabitOrder::OldestFirst,
            HABIT_LIST_LIMIT,
        )
        .await?;

    Ok(habits.iter().map(HabitDto::from).collect())
}

pub async fn list_habits_with_progress(
    habit_repo: &dyn HabitRepository,
    entry_repo: &dyn HabitEntryRepository,
    streak_repo: &dyn StreakRepository,
    user_id: &str,
    reference: NaiveDate,
) -> Result<Vec<HabitWithProgressDto>, DomainError> {
    let habits = habit_repo
        .list_by_user(
            &UserId::from_string(user_id),
            HabitOrder::NewestFirst,
            HABIT_LIST_LIMIT,
        )
        .await?;

    if habits.is_empty() {
        return Ok(Vec::new());
    }

    let habit_ids: Vec<HabitId> = habits.iter().map(|h| h.id().clone()).collect();
    let entries = entry_repo.list_by_habits(&habit_ids).await?;
    let streaks = streak_repo.list_by_habits(&habit_ids).await?;

    let mut entries_by_habit: HashMap<&str, Vec<&HabitEntry>> = HashMap::new();
    for entry in &entries {
        entries_by_habit
            .entry(entry.habit_id().as_str())
            .or_default()
            .push(entry);
    }
    let mut streaks_by_habit: HashMap<&str, Vec<&StreakRecord>> = HashMap::new();
    for record in &streaks {
        streaks_by_habit
            .entry(record.habit_id().as_str())
            .or_default()
            .push(record);
    }

    let reference_date = reference.format("%Y-%m-%d").to_string();
    let mut results = Vec::with_capacity(habits.len());

    for habit in &habits {
        let habit_entries = entries_by_habit
            .remove(habit.id().as_str())
            .unwrap_or_default();
        let habit_streaks = streaks_by_habit
            .remove(habit.id().as_str())
            .unwrap_or_default();

        let progress =
            HabitProgressCalculator::evaluate(&habit_entries, habit.id().as_str(), reference);

        results.push(HabitWithProgressDto {
            habit: HabitDto::from(habit),
            entries: habit_entries.into_iter().map(HabitEntryDto::from).collect(),
            streaks: habit_streaks.into_iter().map(StreakDto::from).collect(),
            current_streak: progress.current_streak,
            completed_today: progress.completed_today,
            reference_date: reference_date.clone(),
        });
    }

    info!(
        "Habit overview user_id={} habits={} entries={} reference={}",
        user_id,
        results.len(),
        entries.len(),
        reference_date
    );

    Ok(results)
}
