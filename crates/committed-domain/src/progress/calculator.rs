use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::entry::ProgressEntry;

/// Derived progress of one habit relative to a reference day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitProgress {
    pub current_streak: u32,
    pub completed_today: bool,
}

/// Domain service computing completion and streaks from entry history
pub struct HabitProgressCalculator;

impl HabitProgressCalculator {
    /// Default reference day when a caller does not pick one (UTC).
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// True iff some entry is completed and falls on `reference`.
    ///
    /// Entries whose day cannot be determined never match.
    pub fn is_completed_on<E: ProgressEntry>(entries: &[E], reference: NaiveDate) -> bool {
        entries
            .iter()
            .any(|entry| entry.is_completed() && entry.day() == Some(reference))
    }

    /// Length of the unbroken run of completed days ending at `reference`.
    ///
    /// Completed days are walked newest first with a cursor starting at
    /// `reference`; the first day that does not match the cursor ends the
    /// walk. A completed day after `reference` therefore yields 0, as does a
    /// `reference` that is not completed. Duplicate entries for a day count once.
    pub fn current_streak<E: ProgressEntry>(
        entries: &[E],
        habit_id: &str,
        reference: NaiveDate,
    ) -> u32 {
        let days = completed_days(entries, habit_id);

        let mut cursor = reference;
        let mut streak = 0u32;

        for day in days.iter().rev() {
            if *day != cursor {
                break;
            }
            streak += 1;
            match cursor.pred_opt() {
                Some(previous) => cursor = previous,
                None => break,
            }
        }

        streak
    }

    /// Both derived values for `habit_id` in one pass over the snapshot.
    pub fn evaluate<E: ProgressEntry>(
        entries: &[E],
        habit_id: &str,
        reference: NaiveDate,
    ) -> HabitProgress {
        let completed_today = entries.iter().any(|entry| {
            entry.habit_id() == habit_id
                && entry.is_completed()
                && entry.day() == Some(reference)
        });

        HabitProgress {
            current_streak: Self::current_streak(entries, habit_id, reference),
            completed_today,
        }
    }
}

/// Distinct completed days of one habit, ascending.
pub(super) fn completed_days<E: ProgressEntry>(entries: &[E], habit_id: &str) -> BTreeSet<NaiveDate> {
    entries
        .iter()
        .filter(|entry| entry.habit_id() == habit_id && entry.is_completed())
        .filter_map(|entry| entry.day())
        .collect()
}
