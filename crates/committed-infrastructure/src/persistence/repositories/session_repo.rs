use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use committed_domain::session::{Session, SessionRepository};
use committed_domain::shared::{DomainError, UserId};

use crate::persistence::SqliteRepositoryBase;

#[derive(FromRow)]
struct SessionRow {
    token: String,
    user_id: String,
    expires_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session::restore(
            self.token,
            UserId::from_string(&self.user_id),
            self.expires_at,
        )
    }
}

/// Reads sessions written by the auth service. Nothing here creates or
/// refreshes them.
pub struct SqliteSessionRepository {
    base: SqliteRepositoryBase,
}

impl SqliteSessionRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DomainError> {
        let query = "SELECT token, user_id, expires_at FROM sessions WHERE token = ?1";

        let row: Option<SessionRow> = self
            .base
            .fetch_optional(sqlx::query_as(query).bind(token), "Find session by token")
            .await?;

        Ok(row.map(|r| r.into_session()))
    }
}
