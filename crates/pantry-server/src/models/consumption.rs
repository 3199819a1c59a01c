//! Consumption DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use pantry::{AppliedChange, ConsumptionSuggestion, QuantityChange};

/// Free-text consumption statement
#[derive(Debug, Deserialize, ToSchema)]
pub struct InferRequest {
    #[serde(rename = "userInput", default)]
    pub user_input: String,
    /// Language of the statement, e.g. `en` or `cs`
    #[serde(default)]
    pub language: Option<String>,
}

/// One suggested quantity change, pending confirmation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuggestionResponse {
    pub id: i64,
    pub name: String,
    pub current_quantity: i32,
    pub consumed: i32,
    pub suggested_new_quantity: i32,
}

impl From<ConsumptionSuggestion> for SuggestionResponse {
    fn from(suggestion: ConsumptionSuggestion) -> Self {
        Self {
            id: suggestion.item_id,
            name: suggestion.item_name,
            current_quantity: suggestion.current_quantity,
            consumed: suggestion.consumed_quantity,
            suggested_new_quantity: suggestion.suggested_new_quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<SuggestionResponse>,
}

/// A confirmed quantity
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeRequest {
    #[serde(alias = "item_id")]
    pub id: i64,
    pub suggested_new_quantity: i32,
}

impl From<&ChangeRequest> for QuantityChange {
    fn from(change: &ChangeRequest) -> Self {
        Self {
            item_id: change.id,
            suggested_new_quantity: change.suggested_new_quantity,
        }
    }
}

/// Confirmed changes to apply
#[derive(Debug, Deserialize, ToSchema)]
pub struct ApplyChangesRequest {
    #[serde(default)]
    pub changes: Vec<ChangeRequest>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppliedChangeResponse {
    pub id: i64,
    pub name: String,
    pub old_quantity: i32,
    pub new_quantity: i32,
}

impl From<AppliedChange> for AppliedChangeResponse {
    fn from(change: AppliedChange) -> Self {
        Self {
            id: change.item_id,
            name: change.item_name,
            old_quantity: change.old_quantity,
            new_quantity: change.new_quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApplyChangesResponse {
    #[serde(rename = "updatedItems")]
    pub updated_items: Vec<AppliedChangeResponse>,
}
