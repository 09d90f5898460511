use committed_domain::shared::DomainError;
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{SqliteArguments, SqliteQueryResult, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};
use std::sync::Arc;

/// Shared plumbing for sqlite repositories: runs queries against the pool and
/// maps driver errors to `DomainError`, tagged with the operation name.
#[derive(Clone)]
pub struct SqliteRepositoryBase {
    pool: Arc<SqlitePool>,
}

impl SqliteRepositoryBase {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn execute<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
        operation: &str,
    ) -> Result<SqliteQueryResult, DomainError> {
        query
            .execute(self.pool())
            .await
            .map_err(|e| map_sqlx_error(e, operation))
    }

    pub async fn fetch_optional<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        operation: &str,
    ) -> Result<Option<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_optional(self.pool())
            .await
            .map_err(|e| map_sqlx_error(e, operation))
    }

    pub async fn fetch_all<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        operation: &str,
    ) -> Result<Vec<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_all(self.pool())
            .await
            .map_err(|e| map_sqlx_error(e, operation))
    }
}

/// Constraint violations are data integrity problems; everything else is a
/// generic repository failure.
pub(crate) fn map_sqlx_error(error: sqlx::Error, operation: &str) -> DomainError {
    if let Some(db_error) = error.as_database_error() {
        if db_error.is_unique_violation()
            || db_error.is_foreign_key_violation()
            || db_error.is_check_violation()
        {
            return DomainError::DataIntegrity(format!("{}: {}", operation, db_error));
        }
    }
    DomainError::Repository(format!("{}: {}", operation, error))
}
