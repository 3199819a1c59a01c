//! Item Routes
//!
//! HTTP handlers that delegate to ItemService for business logic.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};

use crate::models::{CreateItemRequest, ItemResponse, UpdateItemRequest};
use crate::AppState;

use super::{bad_json, domain_error, ApiError};

/// List all Items
#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "All Items ordered by name", body = Vec<ItemResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Item"
)]
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state.item_service.list().await.map_err(domain_error)?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// Create an Item (or update the one with the same name)
#[utoipa::path(
    post,
    path = "/api/items",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Item saved", body = ItemResponse),
        (status = 400, description = "Invalid input"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Item"
)]
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, ApiError> {
    let Json(payload) = payload.map_err(bad_json)?;

    let item = state
        .item_service
        .create(payload.into())
        .await
        .map_err(domain_error)?;

    Ok(Json(item.into()))
}

/// Get Item by ID
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Item"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.item_service.get(id).await.map_err(domain_error)?;
    Ok(Json(item.into()))
}

/// Update Item
#[utoipa::path(
    patch,
    path = "/api/items/{id}",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Item not found"),
        (status = 409, description = "Another Item has that name"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Item"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, ApiError> {
    let Json(payload) = payload.map_err(bad_json)?;

    let item = state
        .item_service
        .update(id, payload.into())
        .await
        .map_err(domain_error)?;

    Ok(Json(item.into()))
}

/// Delete Item
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted"),
        (status = 404, description = "Item not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Item"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state.item_service.delete(id).await.map_err(domain_error)?;

    if !deleted {
        return Err((
            axum::http::StatusCode::NOT_FOUND,
            "Item not found".to_string(),
        ));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Item deleted"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/:id",
            get(get_item).patch(update_item).delete(delete_item),
        )
}
