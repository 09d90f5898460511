use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::progress::StreakRun;
use crate::shared::{HabitId, StreakId};

/// Persisted snapshot of one streak run.
///
/// `end_date` stays empty while the run is still active, i.e. it reaches the
/// day the snapshot was taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakRecord {
    id: StreakId,
    habit_id: HabitId,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    length: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StreakRecord {
    /// Snapshot a computed run as seen on `today`.
    pub fn from_run(habit_id: HabitId, run: &StreakRun, today: NaiveDate) -> Self {
        let end_date = if run.contains(today) {
            None
        } else {
            Some(run.end)
        };
        let now = Utc::now();

        Self {
            id: StreakId::new(),
            habit_id,
            start_date: run.start,
            end_date,
            length: run.length,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn restore(
        id: StreakId,
        habit_id: HabitId,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        length: u32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            habit_id,
            start_date,
            end_date,
            length,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &StreakId {
        &self.id
    }

    pub fn habit_id(&self) -> &HabitId {
        &self.habit_id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn is_active(&self) -> bool {
        self.end_date.is_none()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_from_run_active_on_today() {
        let run = StreakRun {
            start: day("2024-01-08"),
            end: day("2024-01-10"),
            length: 3,
        };

        let record = StreakRecord::from_run(HabitId::new(), &run, day("2024-01-10"));

        assert!(record.is_active());
        assert_eq!(record.start_date(), day("2024-01-08"));
        assert_eq!(record.length(), 3);
    }

    #[test]
    fn test_from_run_closed_in_the_past() {
        let run = StreakRun {
            start: day("2024-01-08"),
            end: day("2024-01-10"),
            length: 3,
        };

        let record = StreakRecord::from_run(HabitId::new(), &run, day("2024-01-11"));

        assert!(!record.is_active());
        assert_eq!(record.end_date(), Some(day("2024-01-10")));
    }
}
