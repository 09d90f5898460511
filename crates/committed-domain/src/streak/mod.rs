mod record;
mod repository;

pub use record::StreakRecord;
pub use repository::StreakRepository;
