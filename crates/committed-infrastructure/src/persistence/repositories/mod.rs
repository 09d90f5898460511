pub mod habit_entry_repo;
pub mod habit_repo;
pub mod session_repo;
pub mod streak_repo;

pub use habit_entry_repo::SqliteHabitEntryRepository;
pub use habit_repo::SqliteHabitRepository;
pub use session_repo::SqliteSessionRepository;
pub use streak_repo::SqliteStreakRepository;
