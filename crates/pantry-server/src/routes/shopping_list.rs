//! Shopping List Routes

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::models::ShoppingListResponse;
use crate::AppState;

use super::{domain_error, ApiError};

/// Items below their desired quantity
#[utoipa::path(
    get,
    path = "/api/shopping-list",
    responses(
        (status = 200, description = "Shopping list", body = ShoppingListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Item"
)]
pub async fn get_shopping_list(
    State(state): State<AppState>,
) -> Result<Json<ShoppingListResponse>, ApiError> {
    let list = state
        .item_service
        .shopping_list()
        .await
        .map_err(domain_error)?;
    Ok(Json(list.into()))
}

/// Shopping list as a downloadable text file
#[utoipa::path(
    get,
    path = "/shopping-list.txt",
    responses(
        (status = 200, description = "One `name: missing` line per Item", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Item"
)]
pub async fn download_shopping_list(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let list = state
        .item_service
        .shopping_list()
        .await
        .map_err(domain_error)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"shopping_list.txt\"",
            ),
        ],
        list.render_text(),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/shopping-list", get(get_shopping_list))
        .route("/shopping-list.txt", get(download_shopping_list))
}
