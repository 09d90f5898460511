use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::{RecordEntryCommand, RecordEntryResult};
use crate::application::dtos::HabitEntryDto;
use crate::application::utils::find_owned_habit;
use committed_domain::habit::HabitRepository;
use committed_domain::habit_entry::{EntryStatus, HabitEntry, HabitEntryRepository};
use committed_domain::progress::parse_day;
use committed_domain::shared::{DomainError, HabitId, UserId};
use committed_domain::streak::{StreakRecord, StreakRepository};
use committed_domain::HabitProgressCalculator;

/// Records a day's status and refreshes the habit's stored streaks.
///
/// Streak rows are derived from the full entry history and rebuilt on every
/// write. The entry upsert and the streak replace are separate statements: if
/// the replace fails the entry stays stored, the request reports the error and
/// the next successful write rebuilds the streak rows from scratch.
pub struct RecordEntryCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    entry_repo: Arc<dyn HabitEntryRepository>,
    streak_repo: Arc<dyn StreakRepository>,
}

impl RecordEntryCommandHandler {
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
}

#[async_trait]
impl CommandHandler<RecordEntryCommand> for RecordEntryCommandHandler {
    type Result = RecordEntryResult;

    async fn handle(&self, cmd: RecordEntryCommand) -> Result<Self::Result, DomainError> {
        let date = parse_day(&cmd.date)
            .ok_or_else(|| DomainError::InvalidInput(format!("Invalid entry date: {}", cmd.date)))?;

        let status = cmd.status.trim();
        if status.is_empty() {
            return Err(DomainError::Validation(
                "Entry status cannot be empty".to_string(),
            ));
        }
        let status = EntryStatus::parse(status);

        let user_id = UserId::from_string(&cmd.user_id);
        let habit_id = HabitId::from_string(&cmd.habit_id);
        find_owned_habit(self.habit_repo.as_ref(), &user_id, &habit_id).await?;

        let entry = self
            .entry_repo
            .upsert(&HabitEntry::new(habit_id.clone(), date, status))
            .await?;

        let entries = self.entry_repo.list_by_habit(&habit_id).await?;
        let today = HabitProgressCalculator::today();

        let records: Vec<StreakRecord> =
            HabitProgressCalculator::streak_runs(&entries, habit_id.as_str())
                .iter()
                .map(|run| StreakRecord::from_run(habit_id.clone(), run, today))
                .collect();
        self.streak_repo
            .replace_for_habit(&habit_id, &records)
            .await?;

        let progress = HabitProgressCalculator::evaluate(&entries, habit_id.as_str(), today);

        info!(
            "Entry recorded: habit={} date={} status={} streak={}",
            habit_id,
            entry.date(),
            entry.status(),
            progress.current_streak
        );

        Ok(RecordEntryResult {
            entry: HabitEntryDto::from(&entry),
            current_streak: progress.current_streak,
            completed_today: progress.completed_today,
        })
    }
}
