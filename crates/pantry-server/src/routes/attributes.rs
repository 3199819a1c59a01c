//! Tag and Location Routes
//!
//! Both kinds expose the same CRUD surface; handlers pin the kind and
//! delegate to AttributeService.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use pantry::AttributeKind;

use crate::models::{
    AttributeResponse, CreateAttributeRequest, ReclassifyResponse, UpdateAttributeRequest,
};
use crate::AppState;

use super::{bad_json, domain_error, ApiError};

async fn list(state: &AppState, kind: AttributeKind) -> Result<Json<Vec<AttributeResponse>>, ApiError> {
    let attributes = state
        .attribute_service
        .list(kind)
        .await
        .map_err(domain_error)?;
    Ok(Json(attributes.into_iter().map(Into::into).collect()))
}

async fn create(
    state: &AppState,
    kind: AttributeKind,
    payload: Result<Json<CreateAttributeRequest>, JsonRejection>,
) -> Result<Json<AttributeResponse>, ApiError> {
    let Json(payload) = payload.map_err(bad_json)?;
    let attribute = state
        .attribute_service
        .create(kind, &payload.name, payload.color, payload.emoji)
        .await
        .map_err(domain_error)?;
    Ok(Json(attribute.into()))
}

async fn get_one(state: &AppState, kind: AttributeKind, id: i64) -> Result<Json<AttributeResponse>, ApiError> {
    let attribute = state
        .attribute_service
        .get(kind, id)
        .await
        .map_err(domain_error)?;
    Ok(Json(attribute.into()))
}

async fn update(
    state: &AppState,
    kind: AttributeKind,
    id: i64,
    payload: Result<Json<UpdateAttributeRequest>, JsonRejection>,
) -> Result<Json<AttributeResponse>, ApiError> {
    let Json(payload) = payload.map_err(bad_json)?;
    let attribute = state
        .attribute_service
        .update(kind, id, payload.into())
        .await
        .map_err(domain_error)?;
    Ok(Json(attribute.into()))
}

async fn delete(state: &AppState, kind: AttributeKind, id: i64) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state
        .attribute_service
        .delete(kind, id)
        .await
        .map_err(domain_error)?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, format!("{} not found", kind.label())));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": format!("{} deleted", kind.label())
    })))
}

// ============================================
// Tags
// ============================================

/// List all Tags
#[utoipa::path(
    get,
    path = "/api/tags",
    responses(
        (status = 200, description = "All Tags ordered by name", body = Vec<AttributeResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tag"
)]
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<AttributeResponse>>, ApiError> {
    list(&state, AttributeKind::Tag).await
}

/// Create a Tag
#[utoipa::path(
    post,
    path = "/api/tags",
    request_body = CreateAttributeRequest,
    responses(
        (status = 200, description = "Tag created", body = AttributeResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Tag already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tag"
)]
pub async fn create_tag(
    State(state): State<AppState>,
    payload: Result<Json<CreateAttributeRequest>, JsonRejection>,
) -> Result<Json<AttributeResponse>, ApiError> {
    create(&state, AttributeKind::Tag, payload).await
}

/// Get Tag by ID
#[utoipa::path(
    get,
    path = "/api/tags/{id}",
    params(
        ("id" = i64, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Tag found", body = AttributeResponse),
        (status = 404, description = "Tag not found")
    ),
    tag = "Tag"
)]
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AttributeResponse>, ApiError> {
    get_one(&state, AttributeKind::Tag, id).await
}

/// Update Tag
#[utoipa::path(
    patch,
    path = "/api/tags/{id}",
    params(
        ("id" = i64, Path, description = "Tag ID")
    ),
    request_body = UpdateAttributeRequest,
    responses(
        (status = 200, description = "Tag updated", body = AttributeResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Tag not found"),
        (status = 409, description = "Another Tag has that name")
    ),
    tag = "Tag"
)]
pub async fn update_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateAttributeRequest>, JsonRejection>,
) -> Result<Json<AttributeResponse>, ApiError> {
    update(&state, AttributeKind::Tag, id, payload).await
}

/// Delete Tag
#[utoipa::path(
    delete,
    path = "/api/tags/{id}",
    params(
        ("id" = i64, Path, description = "Tag ID")
    ),
    responses(
        (status = 200, description = "Tag deleted"),
        (status = 404, description = "Tag not found")
    ),
    tag = "Tag"
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    delete(&state, AttributeKind::Tag, id).await
}

// ============================================
// Locations
// ============================================

/// List all Locations
#[utoipa::path(
    get,
    path = "/api/locations",
    responses(
        (status = 200, description = "All Locations ordered by name", body = Vec<AttributeResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Location"
)]
pub async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<AttributeResponse>>, ApiError> {
    list(&state, AttributeKind::Location).await
}

/// Create a Location
#[utoipa::path(
    post,
    path = "/api/locations",
    request_body = CreateAttributeRequest,
    responses(
        (status = 200, description = "Location created", body = AttributeResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Location already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Location"
)]
pub async fn create_location(
    State(state): State<AppState>,
    payload: Result<Json<CreateAttributeRequest>, JsonRejection>,
) -> Result<Json<AttributeResponse>, ApiError> {
    create(&state, AttributeKind::Location, payload).await
}

/// Get Location by ID
#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    params(
        ("id" = i64, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Location found", body = AttributeResponse),
        (status = 404, description = "Location not found")
    ),
    tag = "Location"
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AttributeResponse>, ApiError> {
    get_one(&state, AttributeKind::Location, id).await
}

/// Update Location
#[utoipa::path(
    patch,
    path = "/api/locations/{id}",
    params(
        ("id" = i64, Path, description = "Location ID")
    ),
    request_body = UpdateAttributeRequest,
    responses(
        (status = 200, description = "Location updated", body = AttributeResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Location not found"),
        (status = 409, description = "Another Location has that name")
    ),
    tag = "Location"
)]
pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateAttributeRequest>, JsonRejection>,
) -> Result<Json<AttributeResponse>, ApiError> {
    update(&state, AttributeKind::Location, id, payload).await
}

/// Delete Location
#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    params(
        ("id" = i64, Path, description = "Location ID")
    ),
    responses(
        (status = 200, description = "Location deleted"),
        (status = 404, description = "Location not found")
    ),
    tag = "Location"
)]
pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    delete(&state, AttributeKind::Location, id).await
}

/// Recolour every Tag and Location from the current rules and defaults
#[utoipa::path(
    post,
    path = "/api/attributes/reclassify",
    responses(
        (status = 200, description = "Attributes recoloured", body = ReclassifyResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Tag"
)]
pub async fn reclassify_attributes(
    State(state): State<AppState>,
) -> Result<Json<ReclassifyResponse>, ApiError> {
    let report = state
        .attribute_service
        .reclassify_all()
        .await
        .map_err(domain_error)?;
    Ok(Json(report.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tags", get(list_tags).post(create_tag))
        .route(
            "/api/tags/:id",
            get(get_tag).patch(update_tag).delete(delete_tag),
        )
        .route("/api/locations", get(list_locations).post(create_location))
        .route(
            "/api/locations/:id",
            get(get_location).patch(update_location).delete(delete_location),
        )
        .route("/api/attributes/reclassify", post(reclassify_attributes))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::models::AttributeResponse;
    use crate::test_support::TestApp;

    fn post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_location_is_classified() {
        let app = TestApp::new(vec![]);
        let response = app
            .router()
            .oneshot(post("/api/locations", r#"{"name":"Garage"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let location: AttributeResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(location.emoji, "🚗");
    }

    #[tokio::test]
    async fn test_duplicate_tag_conflicts() {
        let app = TestApp::new(vec![]);
        let first = app
            .router()
            .oneshot(post("/api/tags", r#"{"name":"Snacks"}"#))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app
            .router()
            .oneshot(post("/api/tags", r#"{"name":"Snacks"}"#))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_reclassify() {
        let app = TestApp::new(vec![]);
        app.router()
            .oneshot(post("/api/tags", r##"{"name":"Fruit","color":"#000000"}"##))
            .await
            .unwrap();

        let response = app
            .router()
            .oneshot(post("/api/attributes/reclassify", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let report: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(report["tags"], 1);
        assert_eq!(report["locations"], 0);
    }
}
