//! Consumption records
//!
//! The transient values that flow through consumption inference:
//! - ConsumptionCandidate: unvalidated guess extracted from model output
//! - ConsumptionSuggestion: candidate joined with the live item, pending confirmation
//! - QuantityChange: a confirmed target quantity sent back by the user
//! - AppliedChange: audit record of one applied mutation

use serde::{Deserialize, Serialize};

use crate::domain::entities::Item;

/// Consumed-item guess from the model; the id may not exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionCandidate {
    pub item_id: i64,
    pub item_name: Option<String>,
    pub consumed_quantity: i32,
}

/// Candidate enriched with live inventory data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumptionSuggestion {
    pub item_id: i64,
    pub item_name: String,
    pub current_quantity: i32,
    pub consumed_quantity: i32,
    pub suggested_new_quantity: i32,
}

impl ConsumptionSuggestion {
    /// Join a candidate quantity with the live record, flooring at zero
    pub fn from_item(item: &Item, consumed_quantity: i32) -> Self {
        Self {
            item_id: item.id,
            item_name: item.name.clone(),
            current_quantity: item.current_quantity,
            consumed_quantity,
            suggested_new_quantity: (item.current_quantity - consumed_quantity).max(0),
        }
    }
}

/// Confirmed target quantity for one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChange {
    pub item_id: i64,
    pub suggested_new_quantity: i32,
}

/// Audit record returned after applying a change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedChange {
    pub item_id: i64,
    pub item_name: String,
    pub old_quantity: i32,
    pub new_quantity: i32,
}
