use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::habit_entry::{EntryStatus, HabitEntry};

/// The minimal shape the progress calculator reads from an entry.
pub trait ProgressEntry {
    fn habit_id(&self) -> &str;

    /// Calendar day of the entry, `None` when it cannot be determined.
    fn day(&self) -> Option<NaiveDate>;

    fn is_completed(&self) -> bool;

    /// Status as recorded, for display.
    fn status_label(&self) -> &str;
}

impl<T: ProgressEntry + ?Sized> ProgressEntry for &T {
    fn habit_id(&self) -> &str {
        (**self).habit_id()
    }

    fn day(&self) -> Option<NaiveDate> {
        (**self).day()
    }

    fn is_completed(&self) -> bool {
        (**self).is_completed()
    }

    fn status_label(&self) -> &str {
        (**self).status_label()
    }
}

impl ProgressEntry for HabitEntry {
    fn habit_id(&self) -> &str {
        HabitEntry::habit_id(self).as_str()
    }

    fn day(&self) -> Option<NaiveDate> {
        Some(self.date())
    }

    fn is_completed(&self) -> bool {
        self.status().is_completed()
    }

    fn status_label(&self) -> &str {
        self.status().as_str()
    }
}

/// Loosely typed entry as handed over by string-based collaborators
/// (JSON payloads, exports, raw rows).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub habit_id: String,
    pub date: String,
    pub status: String,
}

impl RawEntry {
    pub fn new(habit_id: &str, date: &str, status: &str) -> Self {
        Self {
            habit_id: habit_id.to_string(),
            date: date.to_string(),
            status: status.to_string(),
        }
    }
}

impl ProgressEntry for RawEntry {
    fn habit_id(&self) -> &str {
        &self.habit_id
    }

    fn day(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }

    fn is_completed(&self) -> bool {
        EntryStatus::parse(&self.status).is_completed()
    }

    fn status_label(&self) -> &str {
        &self.status
    }
}

/// Parse the calendar day out of a date or timestamp string.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DD HH:MM:SS`
/// timestamps. Time-of-day is discarded; the day is the one written in the
/// value, not converted to another offset. Anything else yields `None`.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }

    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|timestamp| timestamp.date())
}
