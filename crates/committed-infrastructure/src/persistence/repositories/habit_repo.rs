use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;
use std::sync::Arc;

use committed_domain::habit::{Habit, HabitOrder, HabitRepository, TargetFrequency};
use committed_domain::shared::{DomainError, HabitId, UserId};

use crate::persistence::SqliteRepositoryBase;

#[derive(FromRow)]
struct HabitRow {
    id: String,
    user_id: String,
    name: String,
    description: Option<String>,
    target_frequency: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl HabitRow {
    fn try_into_habit(self) -> Result<Habit, DomainError> {
        let target_frequency = TargetFrequency::from_str(&self.target_frequency).map_err(|e| {
            DomainError::DataIntegrity(format!("Habit {}: {}", self.id, e.message()))
        })?;

        Ok(Habit::restore(
            HabitId::from_string(&self.id),
            UserId::from_string(&self.user_id),
            self.name,
            self.description,
            target_frequency,
            self.created_at,
            self.updated_at,
        ))
    }
}

pub struct SqliteHabitRepository {
    base: SqliteRepositoryBase,
}

impl SqliteHabitRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl HabitRepository for SqliteHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO habits (id, user_id, name, description, target_frequency, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(id) DO UPDATE SET
                name = ?3,
                description = ?4,
                target_frequency = ?5,
                updated_at = ?7
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(habit.id().as_str())
                    .bind(habit.user_id().as_str())
                    .bind(habit.name())
                    .bind(habit.description())
                    .bind(habit.target_frequency().as_str())
                    .bind(habit.created_at())
                    .bind(habit.updated_at()),
                "Save habit",
            )
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: &HabitId) -> Result<Option<Habit>, DomainError> {
        let query = r#"
            SELECT id, user_id, name, description, target_frequency, created_at, updated_at
            FROM habits
            WHERE id = ?1
        "#;

        let row: Option<HabitRow> = self
            .base
            .fetch_optional(sqlx::query_as(query).bind(id.as_str()), "Find habit by ID")
            .await?;

        row.map(HabitRow::try_into_habit).transpose()
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        order: HabitOrder,
        limit: u32,
    ) -> Result<Vec<Habit>, DomainError> {
        let query = match order {
            HabitOrder::OldestFirst => {
                r#"
                SELECT id, user_id, name, description, target_frequency, created_at, updated_at
                FROM habits
                WHERE user_id = ?1
                ORDER BY created_at ASC, id ASC
                LIMIT ?2
                "#
            }
            HabitOrder::NewestFirst => {
                r#"
                SELECT id, user_id, name, description, target_frequency, created_at, updated_at
                FROM habits
                WHERE user_id = ?1
                ORDER BY created_at DESC, id DESC
                LIMIT ?2
                "#
            }
        };

        let rows: Vec<HabitRow> = self
            .base
            .fetch_all(
                sqlx::query_as(query).bind(user_id.as_str()).bind(limit),
                "List habits by user",
            )
            .await?;

        rows.into_iter().map(HabitRow::try_into_habit).collect()
    }
}
