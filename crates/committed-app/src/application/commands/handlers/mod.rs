mod create_habit_handler;
mod record_entry_handler;


pub use create_habit_handler::CreateHabitCommandHandler;
pub use record_entry_handler::RecordEntryCommandHandler;
