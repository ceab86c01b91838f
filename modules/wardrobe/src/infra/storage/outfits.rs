use sqlx::{FromRow, SqliteExecutor};

use super::items::ClothingItemRow;

/// Outfit row without its item associations; the service assembles the full
/// `Outfit` from this plus `items_of`.
#[derive(Debug, Clone, FromRow)]
pub struct OutfitRow {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
}

pub async fn insert(
    db: impl SqliteExecutor<'_>,
    user_id: i64,
    name: &str,
) -> sqlx::Result<OutfitRow> {
    sqlx::query_as("INSERT INTO outfits (user_id, name) VALUES (?1, ?2) RETURNING id, user_id, name")
        .bind(user_id)
        .bind(name)
        .fetch_one(db)
        .await
}

pub async fn find_by_id(db: impl SqliteExecutor<'_>, id: i64) -> sqlx::Result<Option<OutfitRow>> {
    sqlx::query_as("SELECT id, user_id, name FROM outfits WHERE id = ?1")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn list_by_user(
    db: impl SqliteExecutor<'_>,
    user_id: i64,
) -> sqlx::Result<Vec<OutfitRow>> {
    sqlx::query_as("SELECT id, user_id, name FROM outfits WHERE user_id = ?1")
        .bind(user_id)
        .fetch_all(db)
        .await
}

/// Case-insensitive uniqueness check scoped to one user.
pub async fn name_exists_for_user(
    db: impl SqliteExecutor<'_>,
    user_id: i64,
    name: &str,
) -> sqlx::Result<bool> {
    let (exists,): (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM outfits WHERE user_id = ?1 AND lower(name) = lower(?2))",
    )
    .bind(user_id)
    .bind(name)
    .fetch_one(db)
    .await?;
    Ok(exists)
}

/// Overwrite the name verbatim. Returns None when the outfit is absent.
pub async fn update_name(
    db: impl SqliteExecutor<'_>,
    id: i64,
    name: &str,
) -> sqlx::Result<Option<OutfitRow>> {
    sqlx::query_as("UPDATE outfits SET name = ?2 WHERE id = ?1 RETURNING id, user_id, name")
        .bind(id)
        .bind(name)
        .fetch_optional(db)
        .await
}

pub async fn delete(db: impl SqliteExecutor<'_>, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM outfits WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_for_owner(db: impl SqliteExecutor<'_>, user_id: i64) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM outfits WHERE user_id = ?1")
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn delete_all(db: impl SqliteExecutor<'_>) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM outfits").execute(db).await?;
    Ok(())
}

// -------- association table --------

/// Attach one item if it resolves to an existing clothing item; nonexistent
/// ids insert nothing and duplicates are ignored.
pub async fn attach_item(
    db: impl SqliteExecutor<'_>,
    outfit_id: i64,
    item_id: i64,
) -> sqlx::Result<()> {
    sqlx::query(
        "INSERT OR IGNORE INTO outfit_items (outfit_id, clothing_item_id) \
         SELECT ?1, id FROM clothing_items WHERE id = ?2",
    )
    .bind(outfit_id)
    .bind(item_id)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn clear_items(db: impl SqliteExecutor<'_>, outfit_id: i64) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM outfit_items WHERE outfit_id = ?1")
        .bind(outfit_id)
        .execute(db)
        .await?;
    Ok(())
}

/// Items attached to an outfit, with their full details.
pub async fn items_of(
    db: impl SqliteExecutor<'_>,
    outfit_id: i64,
) -> sqlx::Result<Vec<ClothingItemRow>> {
    sqlx::query_as(
        "SELECT c.id, c.user_id, c.type, c.color, c.style, c.season \
         FROM clothing_items c \
         JOIN outfit_items oi ON oi.clothing_item_id = c.id \
         WHERE oi.outfit_id = ?1",
    )
    .bind(outfit_id)
    .fetch_all(db)
    .await
}

/// Drop association rows for outfits owned by `user_id`.
pub async fn clear_items_of_owner_outfits(
    db: impl SqliteExecutor<'_>,
    user_id: i64,
) -> sqlx::Result<()> {
    sqlx::query(
        "DELETE FROM outfit_items WHERE outfit_id IN (SELECT id FROM outfits WHERE user_id = ?1)",
    )
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(())
}

/// Drop association rows referencing clothing items owned by `user_id`.
///
/// Items can be attached to another user's outfit, so this is not covered by
/// `clear_items_of_owner_outfits`.
pub async fn clear_items_owned_by(db: impl SqliteExecutor<'_>, user_id: i64) -> sqlx::Result<()> {
    sqlx::query(
        "DELETE FROM outfit_items WHERE clothing_item_id IN \
         (SELECT id FROM clothing_items WHERE user_id = ?1)",
    )
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(())
}

/// Drop association rows referencing a single clothing item.
pub async fn clear_item_refs(db: impl SqliteExecutor<'_>, item_id: i64) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM outfit_items WHERE clothing_item_id = ?1")
        .bind(item_id)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn clear_all_items(db: impl SqliteExecutor<'_>) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM outfit_items").execute(db).await?;
    Ok(())
}
