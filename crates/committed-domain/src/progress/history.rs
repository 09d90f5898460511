use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::calculator::{completed_days, HabitProgressCalculator};
use super::entry::ProgressEntry;

/// A maximal run of consecutive completed days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakRun {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub length: u32,
}

impl StreakRun {
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

/// One cell of a completion grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDay {
    pub date: NaiveDate,
    pub completed: bool,
    /// Status recorded that day, if any.
    pub status: Option<String>,
}

/// Lifetime summary of a habit's entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitAnalytics {
    pub total_completed: u32,
    pub total_skipped: u32,
    /// Completed days over tracked days, as a percentage (0.0 - 100.0).
    pub completion_rate: f64,
    pub longest_streak: u32,
}

impl HabitAnalytics {
    pub fn compute<E: ProgressEntry>(entries: &[E], habit_id: &str) -> Self {
        let completed = completed_days(entries, habit_id);

        let mut tracked: BTreeSet<NaiveDate> = BTreeSet::new();
        let mut skipped: BTreeSet<NaiveDate> = BTreeSet::new();
        for entry in entries.iter().filter(|e| e.habit_id() == habit_id) {
            let Some(day) = entry.day() else {
                continue;
            };
            tracked.insert(day);
            if !entry.is_completed() {
                skipped.insert(day);
            }
        }
        // A day with any completed entry is not a skipped day.
        skipped.retain(|day| !completed.contains(day));

        let completion_rate = if tracked.is_empty() {
            0.0
        } else {
            (completed.len() as f64 / tracked.len() as f64) * 100.0
        };

        Self {
            total_completed: completed.len() as u32,
            total_skipped: skipped.len() as u32,
            completion_rate,
            longest_streak: HabitProgressCalculator::longest_streak(entries, habit_id),
        }
    }
}

impl HabitProgressCalculator {
    /// All runs of consecutive completed days, oldest first.
    pub fn streak_runs<E: ProgressEntry>(entries: &[E], habit_id: &str) -> Vec<StreakRun> {
        let mut runs: Vec<StreakRun> = Vec::new();

        for day in completed_days(entries, habit_id) {
            match runs.last_mut() {
                Some(run) if run.end.succ_opt() == Some(day) => {
                    run.end = day;
                    run.length += 1;
                }
                _ => runs.push(StreakRun {
                    start: day,
                    end: day,
                    length: 1,
                }),
            }
        }

        runs
    }

    pub fn longest_streak<E: ProgressEntry>(entries: &[E], habit_id: &str) -> u32 {
        Self::streak_runs(entries, habit_id)
            .iter()
            .map(|run| run.length)
            .max()
            .unwrap_or(0)
    }

    /// One `GridDay` per day of the inclusive range `start..=end`.
    pub fn completion_grid<E: ProgressEntry>(
        entries: &[E],
        habit_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<GridDay> {
        let mut statuses: BTreeMap<NaiveDate, (bool, &str)> = BTreeMap::new();
        for entry in entries.iter().filter(|e| e.habit_id() == habit_id) {
            let Some(day) = entry.day() else {
                continue;
            };
            if day < start || day > end {
                continue;
            }
            let slot = statuses
                .entry(day)
                .or_insert((entry.is_completed(), entry.status_label()));
            // A completed entry wins over any other status recorded that day.
            if entry.is_completed() && !slot.0 {
                *slot = (true, entry.status_label());
            }
        }

        start
            .iter_days()
            .take_while(|day| *day <= end)
            .map(|date| match statuses.get(&date) {
                Some((completed, status)) => GridDay {
                    date,
                    completed: *completed,
                    status: Some(status.to_string()),
                },
                None => GridDay {
                    date,
                    completed: false,
                    status: None,
                },
            })
            .collect()
    }
}
