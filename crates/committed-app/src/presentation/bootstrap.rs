use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::commands::handlers::*;
use crate::application::queries::HabitQueries;
use crate::presentation::state::{
    AppState, CommandHandlers, Queries, Repositories, Runtime, ServerSettings,
};
use committed_domain::habit::HabitRepository;
use committed_domain::habit_entry::HabitEntryRepository;
use committed_domain::session::SessionRepository;
use committed_domain::shared::DomainError;
use committed_domain::streak::StreakRepository;
use committed_infrastructure::config::AppConfig;
use committed_infrastructure::persistence::{
    repositories::{
        SqliteHabitEntryRepository, SqliteHabitRepository, SqliteSessionRepository,
        SqliteStreakRepository,
    },
    Database,
};

/// Open the configured database, migrate it and wire the application.
pub async fn build_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let started_at = Instant::now();
    let db_path = config.database_path_str()?;
    info!("Database path: {}", db_path);

    let db = Database::new(db_path).await?;
    info!(
        "Database opened ({}ms)",
        started_at.elapsed().as_millis()
    );

    let started_at = Instant::now();
    db.run_migrations().await?;
    info!(
        "Migrations applied ({}ms)",
        started_at.elapsed().as_millis()
    );

    Ok(build_app_state_with_database(db, ServerSettings::from(config)))
}

/// Wire repositories, handlers and queries around an already migrated database.
pub fn build_app_state_with_database(db: Database, settings: ServerSettings) -> AppState {
    let pool = Arc::new(db.pool().clone());
    let db = Arc::new(db);

    let habit_repo: Arc<dyn HabitRepository> = Arc::new(SqliteHabitRepository::new(pool.clone()));
    let entry_repo: Arc<dyn HabitEntryRepository> =
        Arc::new(SqliteHabitEntryRepository::new(pool.clone()));
    let streak_repo: Arc<dyn StreakRepository> =
        Arc::new(SqliteStreakRepository::new(pool.clone()));
    let session_repo: Arc<dyn SessionRepository> =
        Arc::new(SqliteSessionRepository::new(pool.clone()));

    let command_handlers = CommandHandlers {
        create_habit: Arc::new(CreateHabitCommandHandler::new(habit_repo.clone())),
        record_entry: Arc::new(RecordEntryCommandHandler::new(
            habit_repo.clone(),
            entry_repo.clone(),
            streak_repo.clone(),
        )),
    };

    let queries = Queries {
        habits: Arc::new(HabitQueries::new(
            habit_repo.clone(),
            entry_repo.clone(),
            streak_repo.clone(),
        )),
    };

    info!("Application state ready");

    AppState {
        runtime: Runtime { pool, db },
        repositories: Repositories {
            habit: habit_repo,
            entry: entry_repo,
            streak: streak_repo,
            session: session_repo,
        },
        command_handlers,
        queries,
        settings,
    }
}
