use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::error::DomainError;

/// REST-facing error: status code plus the exact message the wire contract
/// promises in an `{"error": ...}` body for 400-class responses. NotFound
/// carries no body beyond the framework default.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Validation(&'static str),
    Conflict(&'static str),
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::UserNotFound { .. }
            | DomainError::ClothingItemNotFound { .. }
            | DomainError::OutfitNotFound { .. } => Self::NotFound,
            DomainError::UsernameTaken { .. } => Self::Conflict("User Already Exists"),
            DomainError::OutfitNameTaken { .. } => {
                Self::Conflict("You already have an outfit with this name")
            }
            DomainError::MissingOutfitFields => {
                Self::Validation("User ID and outfit name are required")
            }
            DomainError::Database { message } => Self::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Validation(msg) | Self::Conflict(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
