//! Pantry API Routes
//!
//! - /api/items - Item management
//! - /api/tags, /api/locations - Attribute management
//! - /api/attributes/reclassify - Recolour all attributes
//! - /api/settings - Default colours and emojis
//! - /api/shopping-list, /shopping-list.txt - What is missing
//! - /api/consumption - Free-text consumption suggestions

pub mod attributes;
pub mod consumption;
pub mod items;
pub mod settings;
pub mod shopping_list;
pub mod swagger;

use axum::{extract::rejection::JsonRejection, http::StatusCode, Router};

use pantry::DomainError;

use crate::AppState;

/// Error returned by the CRUD handlers
pub type ApiError = (StatusCode, String);

/// All API routes, without state
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(items::router())
        .merge(attributes::router())
        .merge(settings::router())
        .merge(shopping_list::router())
        .merge(consumption::router())
}

pub(crate) fn domain_error(e: DomainError) -> ApiError {
    match e {
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, e.to_string()),
        DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        DomainError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        DomainError::Repository(_) => {
            tracing::error!("Request failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

pub(crate) fn bad_json(rejection: JsonRejection) -> ApiError {
    (StatusCode::BAD_REQUEST, rejection.body_text())
}
