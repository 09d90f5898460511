use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::commands::handlers::*;
use crate::application::queries::HabitQueries;
use committed_domain::habit::HabitRepository;
use committed_domain::habit_entry::HabitEntryRepository;
use committed_domain::session::SessionRepository;
use committed_domain::streak::StreakRepository;
use committed_infrastructure::config::AppConfig;
use committed_infrastructure::persistence::Database;

/// Command handlers container
pub struct CommandHandlers {
    pub create_habit: Arc<CreateHabitCommandHandler>,
    pub record_entry: Arc<RecordEntryCommandHandler>,
}

pub struct Runtime {
    pub pool: Arc<SqlitePool>,
    pub db: Arc<Database>,
}

pub struct Repositories {
    pub habit: Arc<dyn HabitRepository>,
    pub entry: Arc<dyn HabitEntryRepository>,
    pub streak: Arc<dyn StreakRepository>,
    pub session: Arc<dyn SessionRepository>,
}

pub struct Queries {
    pub habits: Arc<HabitQueries>,
}

/// Request-facing settings taken from the app config
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub session_cookie: String,
    pub cors_origins: Vec<String>,
}

impl From<&AppConfig> for ServerSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            session_cookie: config.session_cookie.clone(),
            cors_origins: config.cors_origins.clone(),
        }
    }
}

pub struct AppState {
    pub runtime: Runtime,
    pub repositories: Repositories,
    pub command_handlers: CommandHandlers,
    pub queries: Queries,
    pub settings: ServerSettings,
}
