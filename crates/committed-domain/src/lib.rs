// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod habit;
pub mod habit_entry;
pub mod progress;
pub mod session;
pub mod shared;
pub mod streak;

// Re-exports for convenience
pub use progress::HabitProgressCalculator;
pub use shared::{DomainError, HabitId, UserId};
