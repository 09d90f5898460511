use serde::{Deserialize, Serialize};

use crate::application::dtos::HabitEntryDto;

/// Create a habit owned by `user_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHabitCommand {
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub target_frequency: String,
}

/// Set the status of a habit on one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEntryCommand {
    pub user_id: String,
    pub habit_id: String,
    /// Calendar day; timestamps are accepted and truncated to their day.
    pub date: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordEntryResult {
    pub entry: HabitEntryDto,
    pub current_streak: u32,
    pub completed_today: bool,
}
