//! Settings Routes

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};

use crate::models::{SettingsResponse, UpdateSettingsRequest};
use crate::AppState;

use super::{bad_json, domain_error, ApiError};

/// Get default colours and emojis
#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Current settings", body = SettingsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Settings"
)]
pub async fn get_settings(State(state): State<AppState>) -> Result<Json<SettingsResponse>, ApiError> {
    let settings = state.settings_service.get().await.map_err(domain_error)?;
    Ok(Json(settings.into()))
}

/// Update default colours and emojis
#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Settings updated", body = SettingsResponse),
        (status = 400, description = "Invalid colour or emoji"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Settings"
)]
pub async fn update_settings(
    State(state): State<AppState>,
    payload: Result<Json<UpdateSettingsRequest>, JsonRejection>,
) -> Result<Json<SettingsResponse>, ApiError> {
    let Json(payload) = payload.map_err(bad_json)?;

    let settings = state
        .settings_service
        .update_defaults(payload.into())
        .await
        .map_err(domain_error)?;

    Ok(Json(settings.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/settings", get(get_settings).put(update_settings))
}
