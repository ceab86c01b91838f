use sqlx::{FromRow, SqliteExecutor};

use crate::domain::model::User;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
        }
    }
}

/// Insert a user with an already-normalized username.
pub async fn insert(db: impl SqliteExecutor<'_>, username: &str) -> sqlx::Result<UserRow> {
    sqlx::query_as("INSERT INTO users (username) VALUES (?1) RETURNING id, username")
        .bind(username)
        .fetch_one(db)
        .await
}

pub async fn find_by_id(db: impl SqliteExecutor<'_>, id: i64) -> sqlx::Result<Option<UserRow>> {
    sqlx::query_as("SELECT id, username FROM users WHERE id = ?1")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn list(db: impl SqliteExecutor<'_>) -> sqlx::Result<Vec<UserRow>> {
    sqlx::query_as("SELECT id, username FROM users").fetch_all(db).await
}

/// Case-insensitive uniqueness check.
pub async fn username_exists(db: impl SqliteExecutor<'_>, username: &str) -> sqlx::Result<bool> {
    let (exists,): (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE lower(username) = lower(?1))")
            .bind(username)
            .fetch_one(db)
            .await?;
    Ok(exists)
}

/// Overwrite the username verbatim. Returns None when the user is absent.
pub async fn update_username(
    db: impl SqliteExecutor<'_>,
    id: i64,
    username: &str,
) -> sqlx::Result<Option<UserRow>> {
    sqlx::query_as("UPDATE users SET username = ?2 WHERE id = ?1 RETURNING id, username")
        .bind(id)
        .bind(username)
        .fetch_optional(db)
        .await
}

/// Delete by id. Returns the number of rows removed.
pub async fn delete(db: impl SqliteExecutor<'_>, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_all(db: impl SqliteExecutor<'_>) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM users").execute(db).await?;
    Ok(())
}
