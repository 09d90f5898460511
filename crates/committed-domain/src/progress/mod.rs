//! Completion and streak derivation for habits.
//!
//! Everything here is a pure function over a read-only snapshot of entries.
//! Results never depend on the order in which entries are supplied.

mod calculator;
mod entry;
mod history;


pub use calculator::{HabitProgress, HabitProgressCalculator};
pub use entry::{parse_day, ProgressEntry, RawEntry};
pub use history::{GridDay, HabitAnalytics, StreakRun};
