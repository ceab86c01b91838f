use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Route table served by `GET /routes`. Kept next to the registrations below;
/// update both together.
pub const ROUTES: &[&str] = &[
    "GET /test",
    "GET /routes",
    "POST /users",
    "GET /users",
    "DELETE /users",
    "GET /users/{id}",
    "PUT /users/{id}",
    "DELETE /users/{id}",
    "POST /users/{user_id}/clothing_items",
    "GET /users/{user_id}/clothing_items",
    "GET /users/{user_id}/clothing_items/{item_id}",
    "PUT /users/{user_id}/clothing_items/{item_id}",
    "DELETE /users/{user_id}/clothing_items/{item_id}",
    "GET /users/{user_id}/outfits",
    "POST /outfits",
    "GET /outfits/{id}",
    "PUT /outfits/{id}",
    "DELETE /outfits/{id}",
];

/// Build the full application router around a shared service handle.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/test", get(handlers::liveness))
        .route("/routes", get(handlers::list_routes))
        .route(
            "/users",
            post(handlers::create_user)
                .get(handlers::list_users)
                .delete(handlers::delete_all_users),
        )
        .route(
            "/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route(
            "/users/{user_id}/clothing_items",
            post(handlers::create_clothing_item).get(handlers::list_clothing_items),
        )
        .route(
            "/users/{user_id}/clothing_items/{item_id}",
            get(handlers::get_clothing_item)
                .put(handlers::update_clothing_item)
                .delete(handlers::delete_clothing_item),
        )
        .route("/users/{user_id}/outfits", get(handlers::list_user_outfits))
        .route("/outfits", post(handlers::create_outfit))
        .route(
            "/outfits/{id}",
            get(handlers::get_outfit)
                .put(handlers::update_outfit)
                .delete(handlers::delete_outfit),
        )
        .layer(Extension(service))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
