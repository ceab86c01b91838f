use sqlx::SqlitePool;
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::model::{
    ClothingItem, ClothingItemFields, Outfit, OutfitDraft, OutfitPatch, User,
};
use crate::domain::normalize::{capitalize_first, capitalize_words};
use crate::infra::storage::{items, outfits, users};

/// Domain service with the business rules for users, clothing items and
/// outfits. Holds the store handle explicitly; every mutating operation runs
/// inside a single transaction, with one deliberate exception noted on
/// `create_outfit`.
#[derive(Clone)]
pub struct Service {
    pool: SqlitePool,
}

impl Service {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // -------- users --------

    /// Create a user. The username is trimmed, checked for case-insensitive
    /// uniqueness and stored capitalized per word.
    #[instrument(name = "wardrobe.service.create_user", skip(self))]
    pub async fn create_user(&self, username: &str) -> Result<User, DomainError> {
        let trimmed = username.trim();

        let mut tx = self.pool.begin().await?;
        if users::username_exists(&mut *tx, trimmed).await? {
            return Err(DomainError::username_taken(trimmed));
        }
        let row = users::insert(&mut *tx, &capitalize_words(trimmed)).await?;
        tx.commit().await?;

        info!(user_id = row.id, "created user");
        Ok(row.into())
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let rows = users::list(&self.pool).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    pub async fn get_user(&self, id: i64) -> Result<User, DomainError> {
        users::find_by_id(&self.pool, id)
            .await?
            .map(User::from)
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    /// Overwrite the username verbatim: no trim, no re-capitalization, no
    /// uniqueness re-check. Intentional asymmetry with `create_user`.
    #[instrument(name = "wardrobe.service.update_user", skip(self, username))]
    pub async fn update_user(&self, id: i64, username: &str) -> Result<User, DomainError> {
        users::update_username(&self.pool, id, username)
            .await?
            .map(User::from)
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    /// Delete a user and everything it owns: clothing items, outfits, and the
    /// association rows referencing either. Children go before the parent.
    #[instrument(name = "wardrobe.service.delete_user", skip(self))]
    pub async fn delete_user(&self, id: i64) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await?;

        if users::find_by_id(&mut *tx, id).await?.is_none() {
            return Err(DomainError::user_not_found(id));
        }

        outfits::clear_items_of_owner_outfits(&mut *tx, id).await?;
        outfits::clear_items_owned_by(&mut *tx, id).await?;
        outfits::delete_for_owner(&mut *tx, id).await?;
        items::delete_for_owner(&mut *tx, id).await?;
        users::delete(&mut *tx, id).await?;

        tx.commit().await?;
        info!(user_id = id, "deleted user and owned records");
        Ok(())
    }

    /// Unconditionally empty the store, children first.
    #[instrument(name = "wardrobe.service.delete_all_users", skip(self))]
    pub async fn delete_all_users(&self) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await?;
        outfits::clear_all_items(&mut *tx).await?;
        outfits::delete_all(&mut *tx).await?;
        items::delete_all(&mut *tx).await?;
        users::delete_all(&mut *tx).await?;
        tx.commit().await?;
        info!("deleted all users, clothing items and outfits");
        Ok(())
    }

    // -------- clothing items --------

    #[instrument(name = "wardrobe.service.create_clothing_item", skip(self, fields))]
    pub async fn create_clothing_item(
        &self,
        user_id: i64,
        fields: ClothingItemFields,
    ) -> Result<ClothingItem, DomainError> {
        let mut tx = self.pool.begin().await?;
        if users::find_by_id(&mut *tx, user_id).await?.is_none() {
            return Err(DomainError::user_not_found(user_id));
        }
        let row = items::insert(&mut *tx, user_id, &fields).await?;
        tx.commit().await?;

        debug!(item_id = row.id, user_id, "created clothing item");
        Ok(row.into())
    }

    pub async fn list_clothing_items(&self, user_id: i64) -> Result<Vec<ClothingItem>, DomainError> {
        if users::find_by_id(&self.pool, user_id).await?.is_none() {
            return Err(DomainError::user_not_found(user_id));
        }
        let rows = items::list_for_user(&self.pool, user_id).await?;
        Ok(rows.into_iter().map(ClothingItem::from).collect())
    }

    pub async fn get_clothing_item(
        &self,
        user_id: i64,
        item_id: i64,
    ) -> Result<ClothingItem, DomainError> {
        if users::find_by_id(&self.pool, user_id).await?.is_none() {
            return Err(DomainError::user_not_found(user_id));
        }
        items::find_for_user(&self.pool, user_id, item_id)
            .await?
            .map(ClothingItem::from)
            .ok_or_else(|| DomainError::clothing_item_not_found(user_id, item_id))
    }

    /// Full-field overwrite behind the same ownership-scoped lookup as get.
    #[instrument(name = "wardrobe.service.update_clothing_item", skip(self, fields))]
    pub async fn update_clothing_item(
        &self,
        user_id: i64,
        item_id: i64,
        fields: ClothingItemFields,
    ) -> Result<ClothingItem, DomainError> {
        if users::find_by_id(&self.pool, user_id).await?.is_none() {
            return Err(DomainError::user_not_found(user_id));
        }
        items::update_for_user(&self.pool, user_id, item_id, &fields)
            .await?
            .map(ClothingItem::from)
            .ok_or_else(|| DomainError::clothing_item_not_found(user_id, item_id))
    }

    /// Remove the item and any outfit associations pointing at it. Outfits
    /// referencing the item survive with the item detached.
    #[instrument(name = "wardrobe.service.delete_clothing_item", skip(self))]
    pub async fn delete_clothing_item(
        &self,
        user_id: i64,
        item_id: i64,
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await?;

        if users::find_by_id(&mut *tx, user_id).await?.is_none() {
            return Err(DomainError::user_not_found(user_id));
        }
        if items::find_for_user(&mut *tx, user_id, item_id)
            .await?
            .is_none()
        {
            return Err(DomainError::clothing_item_not_found(user_id, item_id));
        }

        outfits::clear_item_refs(&mut *tx, item_id).await?;
        items::delete(&mut *tx, item_id).await?;

        tx.commit().await?;
        debug!(item_id, user_id, "deleted clothing item");
        Ok(())
    }

    // -------- outfits --------

    /// Create an outfit. The name is trimmed and gets its first character
    /// capitalized; uniqueness is case-insensitive per owner.
    ///
    /// The outfit row is committed before items are attached so a failed
    /// attachment never removes the outfit (preserved original behavior).
    /// Ids that resolve to no clothing item are skipped silently.
    #[instrument(name = "wardrobe.service.create_outfit", skip(self, draft))]
    pub async fn create_outfit(&self, draft: OutfitDraft) -> Result<Outfit, DomainError> {
        let user_id = draft.user_id.ok_or(DomainError::MissingOutfitFields)?;
        let trimmed = draft.name.as_deref().unwrap_or("").trim().to_string();
        if trimmed.is_empty() {
            return Err(DomainError::MissingOutfitFields);
        }
        let name = capitalize_first(&trimmed);

        let mut tx = self.pool.begin().await?;
        if outfits::name_exists_for_user(&mut *tx, user_id, &name).await? {
            return Err(DomainError::outfit_name_taken(user_id, name));
        }
        let row = outfits::insert(&mut *tx, user_id, &name).await?;
        tx.commit().await?;

        for item_id in &draft.clothing_item_ids {
            outfits::attach_item(&self.pool, row.id, *item_id).await?;
        }

        let attached = outfits::items_of(&self.pool, row.id).await?;
        info!(outfit_id = row.id, user_id, "created outfit");
        Ok(Outfit {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            clothing_items: attached.into_iter().map(ClothingItem::from).collect(),
        })
    }

    /// Outfits owned by `user_id`. An unknown user yields an empty list, not
    /// NotFound (asymmetric with clothing item listing, preserved).
    pub async fn list_outfits_by_user(&self, user_id: i64) -> Result<Vec<Outfit>, DomainError> {
        let rows = outfits::list_by_user(&self.pool, user_id).await?;
        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            let attached = outfits::items_of(&self.pool, row.id).await?;
            result.push(Outfit {
                id: row.id,
                user_id: row.user_id,
                name: row.name,
                clothing_items: attached.into_iter().map(ClothingItem::from).collect(),
            });
        }
        Ok(result)
    }

    pub async fn get_outfit(&self, id: i64) -> Result<Outfit, DomainError> {
        let row = outfits::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| DomainError::outfit_not_found(id))?;
        let attached = outfits::items_of(&self.pool, id).await?;
        Ok(Outfit {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            clothing_items: attached.into_iter().map(ClothingItem::from).collect(),
        })
    }

    /// Partial update. A provided name is stored verbatim (no normalization
    /// or uniqueness re-check, asymmetric with create). A provided non-empty
    /// id list replaces the item set; an omitted or empty list leaves the
    /// associations untouched.
    #[instrument(name = "wardrobe.service.update_outfit", skip(self, patch))]
    pub async fn update_outfit(&self, id: i64, patch: OutfitPatch) -> Result<Outfit, DomainError> {
        let mut tx = self.pool.begin().await?;

        let row = outfits::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| DomainError::outfit_not_found(id))?;

        let row = match patch.name {
            Some(ref name) => outfits::update_name(&mut *tx, id, name)
                .await?
                .ok_or_else(|| DomainError::outfit_not_found(id))?,
            None => row,
        };

        if let Some(item_ids) = patch.clothing_item_ids.filter(|ids| !ids.is_empty()) {
            outfits::clear_items(&mut *tx, id).await?;
            for item_id in item_ids {
                outfits::attach_item(&mut *tx, id, item_id).await?;
            }
        }

        let attached = outfits::items_of(&mut *tx, id).await?;
        tx.commit().await?;

        debug!(outfit_id = id, "updated outfit");
        Ok(Outfit {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            clothing_items: attached.into_iter().map(ClothingItem::from).collect(),
        })
    }

    /// Remove the outfit and its association rows; the items themselves stay.
    #[instrument(name = "wardrobe.service.delete_outfit", skip(self))]
    pub async fn delete_outfit(&self, id: i64) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await?;

        if outfits::find_by_id(&mut *tx, id).await?.is_none() {
            return Err(DomainError::outfit_not_found(id));
        }
        outfits::clear_items(&mut *tx, id).await?;
        outfits::delete(&mut *tx, id).await?;

        tx.commit().await?;
        debug!(outfit_id = id, "deleted outfit");
        Ok(())
    }
}
