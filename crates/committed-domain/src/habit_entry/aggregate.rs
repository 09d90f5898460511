use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::EntryStatus;
use crate::shared::{EntryId, HabitId};

/// A habit's status on one calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitEntry {
    id: EntryId,
    habit_id: HabitId,
    date: NaiveDate,
    status: EntryStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl HabitEntry {
    pub fn new(habit_id: HabitId, date: NaiveDate, status: EntryStatus) -> Self {
        let now = Utc::now();
        Self {
            id: EntryId::new(),
            habit_id,
            date,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn restore(
        id: EntryId,
        habit_id: HabitId,
        date: NaiveDate,
        status: EntryStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            habit_id,
            date,
            status,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn habit_id(&self) -> &HabitId {
        &self.habit_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn status(&self) -> &EntryStatus {
        &self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_status(&mut self, status: EntryStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
