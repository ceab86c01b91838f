use std::sync::Arc;

use axum::{extract::Path, http::StatusCode, response::Json, Extension};
use tracing::debug;

use crate::api::rest::dto::{
    ClothingItemDto, ClothingItemReq, CreateOutfitReq, OutfitDto, UpdateOutfitReq, UserDto,
    UsernameReq,
};
use crate::api::rest::error::ApiError;
use crate::api::rest::routes::ROUTES;
use crate::domain::service::Service;

// -------- diagnostics --------

pub async fn liveness() -> &'static str {
    "Wardrobe API is running"
}

pub async fn list_routes() -> Json<Vec<&'static str>> {
    Json(ROUTES.to_vec())
}

// -------- users --------

pub async fn create_user(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<UsernameReq>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    debug!(username = %req.username, "creating user");
    let user = svc.create_user(&req.username).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn list_users(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = svc.list_users().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

pub async fn get_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<Json<UserDto>, ApiError> {
    let user = svc.get_user(id).await?;
    Ok(Json(user.into()))
}

pub async fn update_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    Json(req): Json<UsernameReq>,
) -> Result<Json<UserDto>, ApiError> {
    let user = svc.update_user(id, &req.username).await?;
    Ok(Json(user.into()))
}

pub async fn delete_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    svc.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all_users(
    Extension(svc): Extension<Arc<Service>>,
) -> Result<StatusCode, ApiError> {
    svc.delete_all_users().await?;
    Ok(StatusCode::NO_CONTENT)
}

// -------- clothing items --------

pub async fn create_clothing_item(
    Extension(svc): Extension<Arc<Service>>,
    Path(user_id): Path<i64>,
    Json(req): Json<ClothingItemReq>,
) -> Result<(StatusCode, Json<ClothingItemDto>), ApiError> {
    let item = svc.create_clothing_item(user_id, req.into()).await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

pub async fn list_clothing_items(
    Extension(svc): Extension<Arc<Service>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<ClothingItemDto>>, ApiError> {
    let items = svc.list_clothing_items(user_id).await?;
    Ok(Json(items.into_iter().map(ClothingItemDto::from).collect()))
}

pub async fn get_clothing_item(
    Extension(svc): Extension<Arc<Service>>,
    Path((user_id, item_id)): Path<(i64, i64)>,
) -> Result<Json<ClothingItemDto>, ApiError> {
    let item = svc.get_clothing_item(user_id, item_id).await?;
    Ok(Json(item.into()))
}

pub async fn update_clothing_item(
    Extension(svc): Extension<Arc<Service>>,
    Path((user_id, item_id)): Path<(i64, i64)>,
    Json(req): Json<ClothingItemReq>,
) -> Result<Json<ClothingItemDto>, ApiError> {
    let item = svc.update_clothing_item(user_id, item_id, req.into()).await?;
    Ok(Json(item.into()))
}

pub async fn delete_clothing_item(
    Extension(svc): Extension<Arc<Service>>,
    Path((user_id, item_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    svc.delete_clothing_item(user_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// -------- outfits --------

pub async fn create_outfit(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<CreateOutfitReq>,
) -> Result<(StatusCode, Json<OutfitDto>), ApiError> {
    debug!(user_id = ?req.user_id, "creating outfit");
    let outfit = svc.create_outfit(req.into()).await?;
    Ok((StatusCode::CREATED, Json(outfit.into())))
}

pub async fn list_user_outfits(
    Extension(svc): Extension<Arc<Service>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<OutfitDto>>, ApiError> {
    let outfits = svc.list_outfits_by_user(user_id).await?;
    Ok(Json(outfits.into_iter().map(OutfitDto::from).collect()))
}

pub async fn get_outfit(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<Json<OutfitDto>, ApiError> {
    let outfit = svc.get_outfit(id).await?;
    Ok(Json(outfit.into()))
}

pub async fn update_outfit(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateOutfitReq>,
) -> Result<Json<OutfitDto>, ApiError> {
    let outfit = svc.update_outfit(id, req.into()).await?;
    Ok(Json(outfit.into()))
}

pub async fn delete_outfit(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    svc.delete_outfit(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
