use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use committed_domain::habit_entry::{EntryStatus, HabitEntry, HabitEntryRepository};
use committed_domain::progress::parse_day;
use committed_domain::shared::{DomainError, EntryId, HabitId};

use crate::persistence::repository_base::map_sqlx_error;
use crate::persistence::SqliteRepositoryBase;

const ENTRY_COLUMNS: &str = "id, habit_id, date, status, created_at, updated_at";

#[derive(FromRow)]
struct HabitEntryRow {
    id: String,
    habit_id: String,
    date: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl HabitEntryRow {
    /// `None` when the stored date is not a recognizable calendar day.
    fn into_entry(self) -> Option<HabitEntry> {
        let Some(date) = parse_day(&self.date) else {
            log::warn!(
                "Skipping habit entry {} with unparseable date {:?}",
                self.id,
                self.date
            );
            return None;
        };

        Some(HabitEntry::restore(
            EntryId::from_string(&self.id),
            HabitId::from_string(&self.habit_id),
            date,
            EntryStatus::parse(&self.status),
            self.created_at,
            self.updated_at,
        ))
    }
}

fn format_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub struct SqliteHabitEntryRepository {
    base: SqliteRepositoryBase,
}

impl SqliteHabitEntryRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl HabitEntryRepository for SqliteHabitEntryRepository {
    async fn upsert(&self, entry: &HabitEntry) -> Result<HabitEntry, DomainError> {
        let query = r#"
            INSERT INTO habit_entries (id, habit_id, date, status, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(habit_id, date) DO UPDATE SET
                status = ?4,
                updated_at = ?6
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(entry.id().as_str())
                    .bind(entry.habit_id().as_str())
                    .bind(format_day(entry.date()))
                    .bind(entry.status().as_str())
                    .bind(entry.created_at())
                    .bind(entry.updated_at()),
                "Upsert habit entry",
            )
            .await?;

        // On conflict the stored row keeps its original id and created_at.
        self.find_by_habit_and_date(entry.habit_id(), entry.date())
            .await?
            .ok_or_else(|| {
                DomainError::DataIntegrity(format!(
                    "Habit entry for {} on {} missing after upsert",
                    entry.habit_id(),
                    entry.date()
                ))
            })
    }

    async fn find_by_habit_and_date(
        &self,
        habit_id: &HabitId,
        date: NaiveDate,
    ) -> Result<Option<HabitEntry>, DomainError> {
        let query = format!(
            "SELECT {} FROM habit_entries WHERE habit_id = ?1 AND date = ?2",
            ENTRY_COLUMNS
        );

        let row: Option<HabitEntryRow> = self
            .base
            .fetch_optional(
                sqlx::query_as(&query)
                    .bind(habit_id.as_str())
                    .bind(format_day(date)),
                "Find habit entry by date",
            )
            .await?;

        Ok(row.and_then(HabitEntryRow::into_entry))
    }

    async fn list_by_habit(&self, habit_id: &HabitId) -> Result<Vec<HabitEntry>, DomainError> {
        let query = format!(
            "SELECT {} FROM habit_entries WHERE habit_id = ?1 ORDER BY date DESC",
            ENTRY_COLUMNS
        );

        let rows: Vec<HabitEntryRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(habit_id.as_str()),
                "List habit entries",
            )
            .await?;

        Ok(rows.into_iter().filter_map(HabitEntryRow::into_entry).collect())
    }

    async fn list_by_habits(&self, habit_ids: &[HabitId]) -> Result<Vec<HabitEntry>, DomainError> {
        if habit_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {} FROM habit_entries WHERE habit_id IN (",
            ENTRY_COLUMNS
        ));
        let mut separated = builder.separated(", ");
        for habit_id in habit_ids {
            separated.push_bind(habit_id.as_str());
        }
        separated.push_unseparated(") ORDER BY date DESC");

        let rows: Vec<HabitEntryRow> = builder
            .build_query_as()
            .fetch_all(self.base.pool())
            .await
            .map_err(|e| map_sqlx_error(e, "List habit entries for habits"))?;

        Ok(rows.into_iter().filter_map(HabitEntryRow::into_entry).collect())
    }
}
