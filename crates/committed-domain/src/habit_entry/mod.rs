mod aggregate;
mod repository;
mod value_objects;


pub use aggregate::HabitEntry;
pub use repository::HabitEntryRepository;
pub use value_objects::EntryStatus;
