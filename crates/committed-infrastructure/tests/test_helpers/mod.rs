#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use committed_infrastructure::persistence::Database;

pub async fn setup_in_memory_db() -> SqlitePool {
    let db = Database::in_memory().await.expect("open in-memory db");
    db.run_migrations().await.expect("run migrations");
    db.pool().clone()
}

pub async fn insert_user(pool: &SqlitePool, user_id: &str) {
    sqlx::query(
        "INSERT INTO users (id, name, email, email_verified, created_at, updated_at) VALUES (?1, ?2, ?3, 1, datetime('now'), datetime('now'))",
    )
    .bind(user_id)
    .bind("Test User")
    .bind(format!("{}@example.com", user_id))
    .execute(pool)
    .await
    .expect("insert user");
}

pub async fn insert_session(
    pool: &SqlitePool,
    user_id: &str,
    token: &str,
    expires_at: DateTime<Utc>,
) {
    sqlx::query(
        "INSERT INTO sessions (id, token, user_id, expires_at, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, datetime('now'), datetime('now'))",
    )
    .bind(format!("session-{}", token))
    .bind(token)
    .bind(user_id)
    .bind(expires_at)
    .execute(pool)
    .await
    .expect("insert session");
}
