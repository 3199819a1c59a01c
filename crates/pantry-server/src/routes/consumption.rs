//! Consumption Routes
//!
//! Errors on these endpoints are JSON `{"error": ...}` bodies.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use pantry::{ConsumptionError, DomainError, Language, QuantityChange};

use crate::models::{
    ApplyChangesRequest, ApplyChangesResponse, ErrorResponse, InferRequest, SuggestionsResponse,
};
use crate::AppState;

type ConsumptionFailure = (StatusCode, Json<ErrorResponse>);

fn failure(status: StatusCode, error: String) -> ConsumptionFailure {
    (status, Json(ErrorResponse { error }))
}

fn consumption_error(e: ConsumptionError) -> ConsumptionFailure {
    let status = match &e {
        ConsumptionError::NoInput
        | ConsumptionError::Domain(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
        _ => {
            tracing::error!("Consumption request failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    failure(status, e.to_string())
}

fn bad_json(rejection: JsonRejection) -> ConsumptionFailure {
    failure(StatusCode::BAD_REQUEST, rejection.body_text())
}

/// Suggest quantity changes from a free-text statement
#[utoipa::path(
    post,
    path = "/api/consumption/suggestions",
    request_body = InferRequest,
    responses(
        (status = 200, description = "Suggestions for known Items", body = SuggestionsResponse),
        (status = 400, description = "Empty input or malformed body", body = ErrorResponse),
        (status = 500, description = "Provider unsupported or failing, or no usable answer", body = ErrorResponse)
    ),
    tag = "Consumption"
)]
pub async fn suggest_consumption(
    State(state): State<AppState>,
    payload: Result<Json<InferRequest>, JsonRejection>,
) -> Result<Json<SuggestionsResponse>, ConsumptionFailure> {
    let Json(payload) = payload.map_err(bad_json)?;
    let language = payload
        .language
        .as_deref()
        .map(Language::parse)
        .unwrap_or_default();

    let suggestions = state
        .consumption_service
        .infer(
            &payload.user_input,
            &language,
            state.config.model_provider.as_deref(),
        )
        .await
        .map_err(consumption_error)?;

    Ok(Json(SuggestionsResponse {
        suggestions: suggestions.into_iter().map(Into::into).collect(),
    }))
}

/// Apply confirmed quantities
#[utoipa::path(
    post,
    path = "/api/consumption/apply",
    request_body = ApplyChangesRequest,
    responses(
        (status = 200, description = "Changes applied to existing Items", body = ApplyChangesResponse),
        (status = 400, description = "No changes, negative quantity or malformed body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Consumption"
)]
pub async fn apply_consumption(
    State(state): State<AppState>,
    payload: Result<Json<ApplyChangesRequest>, JsonRejection>,
) -> Result<Json<ApplyChangesResponse>, ConsumptionFailure> {
    let Json(payload) = payload.map_err(bad_json)?;
    let changes: Vec<QuantityChange> = payload.changes.iter().map(Into::into).collect();

    let applied = state
        .consumption_service
        .apply(&changes)
        .await
        .map_err(consumption_error)?;

    Ok(Json(ApplyChangesResponse {
        updated_items: applied.into_iter().map(Into::into).collect(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/consumption/suggestions", post(suggest_consumption))
        .route("/api/consumption/apply", post(apply_consumption))
}
