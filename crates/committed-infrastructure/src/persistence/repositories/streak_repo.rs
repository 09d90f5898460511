use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use committed_domain::shared::{DomainError, HabitId, StreakId};
use committed_domain::streak::{StreakRecord, StreakRepository};

use crate::persistence::repository_base::map_sqlx_error;
use crate::persistence::SqliteRepositoryBase;

const STREAK_COLUMNS: &str = "id, habit_id, start_date, end_date, length, created_at, updated_at";

#[derive(FromRow)]
struct StreakRow {
    id: String,
    habit_id: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    length: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StreakRow {
    fn try_into_record(self) -> Result<StreakRecord, DomainError> {
        let length = u32::try_from(self.length).map_err(|_| {
            DomainError::DataIntegrity(format!(
                "Streak {} has invalid length {}",
                self.id, self.length
            ))
        })?;

        Ok(StreakRecord::restore(
            StreakId::from_string(&self.id),
            HabitId::from_string(&self.habit_id),
            self.start_date,
            self.end_date,
            length,
            self.created_at,
            self.updated_at,
        ))
    }
}

pub struct SqliteStreakRepository {
    base: SqliteRepositoryBase,
}

impl SqliteStreakRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl StreakRepository for SqliteStreakRepository {
    async fn replace_for_habit(
        &self,
        habit_id: &HabitId,
        records: &[StreakRecord],
    ) -> Result<(), DomainError> {
        let mut tx = self
            .base
            .pool()
            .begin()
            .await
            .map_err(|e| map_sqlx_error(e, "Begin streak transaction"))?;

        sqlx::query("DELETE FROM streaks WHERE habit_id = ?1")
            .bind(habit_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, "Clear streaks"))?;

        let insert = r#"
            INSERT INTO streaks (id, habit_id, start_date, end_date, length, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#;

        for record in records {
            if record.habit_id() != habit_id {
                return Err(DomainError::Validation(format!(
                    "Streak {} belongs to habit {}, not {}",
                    record.id(),
                    record.habit_id(),
                    habit_id
                )));
            }

            sqlx::query(insert)
                .bind(record.id().as_str())
                .bind(record.habit_id().as_str())
                .bind(record.start_date())
                .bind(record.end_date())
                .bind(record.length())
                .bind(record.created_at())
                .bind(record.updated_at())
                .execute(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error(e, "Insert streak"))?;
        }

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error(e, "Commit streak transaction"))?;

        Ok(())
    }

    async fn list_by_habit(&self, habit_id: &HabitId) -> Result<Vec<StreakRecord>, DomainError> {
        let query = format!(
            "SELECT {} FROM streaks WHERE habit_id = ?1 ORDER BY start_date DESC",
            STREAK_COLUMNS
        );

        let rows: Vec<StreakRow> = self
            .base
            .fetch_all(sqlx::query_as(&query).bind(habit_id.as_str()), "List streaks")
            .await?;

        rows.into_iter().map(StreakRow::try_into_record).collect()
    }

    async fn list_by_habits(
        &self,
        habit_ids: &[HabitId],
    ) -> Result<Vec<StreakRecord>, DomainError> {
        if habit_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {} FROM streaks WHERE habit_id IN (",
            STREAK_COLUMNS
        ));
        let mut separated = builder.separated(", ");
        for habit_id in habit_ids {
            separated.push_bind(habit_id.as_str());
        }
        separated.push_unseparated(") ORDER BY start_date DESC");

        let rows: Vec<StreakRow> = builder
            .build_query_as()
            .fetch_all(self.base.pool())
            .await
            .map_err(|e| map_sqlx_error(e, "List streaks for habits"))?;

        rows.into_iter().map(StreakRow::try_into_record).collect()
    }
}
