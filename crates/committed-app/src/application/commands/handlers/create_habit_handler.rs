use async_trait::async_trait;
use log::info;
use std::str::FromStr;
use std::sync::Arc;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::CreateHabitCommand;
use crate::application::dtos::HabitDto;
use committed_domain::habit::{Habit, HabitRepository, TargetFrequency};
use committed_domain::shared::{DomainError, UserId};

pub struct CreateHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
}

impl CreateHabitCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repo }
    }
}

#[async_trait]
impl CommandHandler<CreateHabitCommand> for CreateHabitCommandHandler {
    type Result = HabitDto;

    async fn handle(&self, cmd: CreateHabitCommand) -> Result<Self::Result, DomainError> {
        let target_frequency = TargetFrequency::from_str(&cmd.target_frequency)?;

        let habit = Habit::new(
            UserId::from_string(&cmd.user_id),
            cmd.name,
            cmd.description,
            target_frequency,
        )?;

        self.habit_repo.save(&habit).await?;

        info!(
            "Habit created: {} ({}) for user {}",
            habit.name(),
            habit.id(),
            habit.user_id()
        );

        Ok(HabitDto::from(&habit))
    }
}
