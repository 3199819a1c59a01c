//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    // Consumption models
    AppliedChangeResponse,
    ApplyChangesRequest,
    ApplyChangesResponse,
    // Attribute models
    AttributeResponse,
    ChangeRequest,
    CreateAttributeRequest,
    // Item models
    CreateItemRequest,
    ErrorResponse,
    InferRequest,
    ItemResponse,
    ReclassifyResponse,
    // Settings models
    SettingsResponse,
    ShoppingListLineResponse,
    ShoppingListResponse,
    SuggestionResponse,
    SuggestionsResponse,
    UpdateAttributeRequest,
    UpdateItemRequest,
    UpdateSettingsRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Item endpoints
        super::items::list_items,
        super::items::create_item,
        super::items::get_item,
        super::items::update_item,
        super::items::delete_item,
        super::shopping_list::get_shopping_list,
        super::shopping_list::download_shopping_list,
        // Tag endpoints
        super::attributes::list_tags,
        super::attributes::create_tag,
        super::attributes::get_tag,
        super::attributes::update_tag,
        super::attributes::delete_tag,
        super::attributes::reclassify_attributes,
        // Location endpoints
        super::attributes::list_locations,
        super::attributes::create_location,
        super::attributes::get_location,
        super::attributes::update_location,
        super::attributes::delete_location,
        // Settings endpoints
        super::settings::get_settings,
        super::settings::update_settings,
        // Consumption endpoints
        super::consumption::suggest_consumption,
        super::consumption::apply_consumption,
    ),
    info(
        title = "Pantry API",
        version = "0.1.0",
        description = "Household inventory with free-text consumption tracking.\n\nTell it what you used up; it suggests new quantities for you to confirm.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Item", description = "Items and the shopping list"),
        (name = "Tag", description = "Tags - coloured labels for Items"),
        (name = "Location", description = "Locations - where Items are kept"),
        (name = "Settings", description = "Default colours and emojis"),
        (name = "Consumption", description = "Consumption suggestions from free text"),
    ),
    components(
        schemas(
            // Item
            CreateItemRequest,
            UpdateItemRequest,
            ItemResponse,
            ShoppingListLineResponse,
            ShoppingListResponse,
            // Attribute
            CreateAttributeRequest,
            UpdateAttributeRequest,
            AttributeResponse,
            ReclassifyResponse,
            // Settings
            UpdateSettingsRequest,
            SettingsResponse,
            // Consumption
            InferRequest,
            SuggestionResponse,
            SuggestionsResponse,
            ChangeRequest,
            ApplyChangesRequest,
            AppliedChangeResponse,
            ApplyChangesResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/api/items",
            "/api/items/{id}",
            "/api/tags/{id}",
            "/api/locations",
            "/api/attributes/reclassify",
            "/api/settings",
            "/shopping-list.txt",
            "/api/consumption/suggestions",
            "/api/consumption/apply",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }
}
