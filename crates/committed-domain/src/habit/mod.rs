mod aggregate;
mod repository;
mod value_objects;


pub use aggregate::Habit;
pub use repository::{HabitOrder, HabitRepository};
pub use value_objects::TargetFrequency;
