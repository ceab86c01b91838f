//! Tests for SQLite connection handling.

use db::{ConnectOpts, DbHandle};
use tempfile::TempDir;

#[tokio::test]
async fn connects_in_memory() {
    let db = DbHandle::connect("sqlite::memory:", ConnectOpts::default())
        .await
        .expect("in-memory connect should succeed");

    let one: (i64,) = sqlx::query_as("SELECT 1")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(one.0, 1);

    db.close().await;
}

#[tokio::test]
async fn creates_file_and_parent_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("wardrobe.db");
    let dsn = format!("sqlite://{}", db_path.display());

    let db = DbHandle::connect(&dsn, ConnectOpts::default())
        .await
        .expect("file connect should succeed");

    sqlx::query("CREATE TABLE t (id INTEGER PRIMARY KEY)")
        .execute(db.pool())
        .await
        .unwrap();

    assert!(db_path.exists(), "database file should be created");
    db.close().await;
}

#[tokio::test]
async fn enforces_foreign_keys() {
    let db = DbHandle::connect("sqlite::memory:", ConnectOpts::default())
        .await
        .unwrap();

    sqlx::query("CREATE TABLE parent (id INTEGER PRIMARY KEY)")
        .execute(db.pool())
        .await
        .unwrap();
    sqlx::query("CREATE TABLE child (id INTEGER PRIMARY KEY, parent_id INTEGER NOT NULL REFERENCES parent(id))")
        .execute(db.pool())
        .await
        .unwrap();

    let result = sqlx::query("INSERT INTO child (parent_id) VALUES (42)")
        .execute(db.pool())
        .await;
    assert!(result.is_err(), "dangling reference should be rejected");

    db.close().await;
}

#[tokio::test]
async fn rejects_unknown_dsn() {
    let result = DbHandle::connect("postgres://localhost/app", ConnectOpts::default()).await;
    assert!(result.is_err());
}
