use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use committed_domain::habit::Habit;
use committed_domain::habit_entry::HabitEntry;
use committed_domain::progress::{GridDay, HabitAnalytics, HabitProgress};
use committed_domain::streak::StreakRecord;

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ============================================================
// Habit DTOs
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitDto {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub target_frequency: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Habit> for HabitDto {
    fn from(habit: &Habit) -> Self {
        Self {
            id: habit.id().as_str().to_string(),
            user_id: habit.user_id().as_str().to_string(),
            name: habit.name().to_string(),
            description: habit.description().map(str::to_string),
            target_frequency: habit.target_frequency().as_str().to_string(),
            created_at: format_timestamp(habit.created_at()),
            updated_at: format_timestamp(habit.updated_at()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHabitInput {
    pub name: String,
    pub description: Option<String>,
    pub target_frequency: String,
}

// ============================================================
// Entry DTOs
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitEntryDto {
    pub id: String,
    pub habit_id: String,
    pub date: String, // YYYY-MM-DD
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&HabitEntry> for HabitEntryDto {
    fn from(entry: &HabitEntry) -> Self {
        Self {
            id: entry.id().as_str().to_string(),
            habit_id: entry.habit_id().as_str().to_string(),
            date: format_date(entry.date()),
            status: entry.status().as_str().to_string(),
            created_at: format_timestamp(entry.created_at()),
            updated_at: format_timestamp(entry.updated_at()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordEntryInput {
    pub habit_id: String,
    pub date: String,
    pub status: String,
}

// ============================================================
// Streak DTOs
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakDto {
    pub id: String,
    pub habit_id: String,
    pub start_date: String,
    /// Empty while the streak is still running.
    pub end_date: Option<String>,
    pub length: u32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&StreakRecord> for StreakDto {
    fn from(record: &StreakRecord) -> Self {
        Self {
            id: record.id().as_str().to_string(),
            habit_id: record.habit_id().as_str().to_string(),
            start_date: format_date(record.start_date()),
            end_date: record.end_date().map(format_date),
            length: record.length(),
            created_at: format_timestamp(record.created_at()),
            updated_at: format_timestamp(record.updated_at()),
        }
    }
}

// ============================================================
// Progress DTOs
// ============================================================

/// A habit with its history and progress as of the reference day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitWithProgressDto {
    #[serde(flatten)]
    pub habit: HabitDto,
    pub entries: Vec<HabitEntryDto>,
    pub streaks: Vec<StreakDto>,
    pub current_streak: u32,
    pub completed_today: bool,
    pub reference_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitAnalyticsDto {
    pub habit_id: String,
    pub user_id: String,
    pub total_completed: u32,
    pub total_skipped: u32,
    pub completion_rate: f64, // percentage (0.0 - 100.0)
    pub longest_streak: u32,
    pub current_streak: u32,
    pub completed_today: bool,
    pub reference_date: String,
}

impl HabitAnalyticsDto {
    pub fn new(
        habit: &Habit,
        analytics: HabitAnalytics,
        progress: HabitProgress,
        reference: NaiveDate,
    ) -> Self {
        Self {
            habit_id: habit.id().as_str().to_string(),
            user_id: habit.user_id().as_str().to_string(),
            total_completed: analytics.total_completed,
            total_skipped: analytics.total_skipped,
            completion_rate: analytics.completion_rate,
            longest_streak: analytics.longest_streak,
            current_streak: progress.current_streak,
            completed_today: progress.completed_today,
            reference_date: format_date(reference),
        }
    }
}

// ============================================================
// Calendar DTOs
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDayDto {
    pub date: String, // YYYY-MM-DD
    pub completed: bool,
    pub status: Option<String>,
}

impl From<GridDay> for CalendarDayDto {
    fn from(day: GridDay) -> Self {
        Self {
            date: format_date(day.date),
            completed: day.completed,
            status: day.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthStatsDto {
    pub total_days: u32,
    pub completed_days: u32,
    pub completion_rate: f64, // percentage of the month's days (0.0 - 100.0)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitCalendarDto {
    pub habit_id: String,
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDayDto>,
    pub month_stats: MonthStatsDto,
}
