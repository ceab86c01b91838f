//! SQLite schema and per-entity query functions.
//!
//! Query functions take any `SqliteExecutor` so the service can run them
//! against the pool or inside a transaction. Cascading deletes are explicit
//! transactional routines in the service; the schema still declares foreign
//! keys so dangling references are rejected at the store level.

pub mod items;
pub mod outfits;
pub mod users;

use sqlx::SqlitePool;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS clothing_items (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id),
    type    TEXT NOT NULL,
    color   TEXT NOT NULL,
    style   TEXT NOT NULL,
    season  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS outfits (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id),
    name    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS outfit_items (
    outfit_id        INTEGER NOT NULL REFERENCES outfits(id),
    clothing_item_id INTEGER NOT NULL REFERENCES clothing_items(id),
    PRIMARY KEY (outfit_id, clothing_item_id)
);
"#;

/// Create the schema if it does not exist yet. Run once at startup.
pub async fn init_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;
    for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    Ok(())
}
