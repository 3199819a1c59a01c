//! Response Normalizer
//!
//! Extracts consumed-item candidates from free-form model output. Models
//! wrap JSON in prose or markdown fences, or emit nothing usable at all, so
//! this never fails: the worst case is an empty response.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::domain::entities::ConsumptionCandidate;

/// Greedy: from the first `{` to the last `}`
static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON object pattern must compile"));

/// Outcome of reading one model response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedResponse {
    /// Entries in the `consumed` array, valid or not
    pub entry_count: usize,
    pub candidates: Vec<ConsumptionCandidate>,
}

impl NormalizedResponse {
    /// A non-empty `consumed` array was found, even if every entry was invalid
    pub fn is_usable(&self) -> bool {
        self.entry_count > 0
    }
}

/// Extract candidates from raw model text
pub fn normalize(raw: &str) -> NormalizedResponse {
    if let Ok(Value::Object(root)) = serde_json::from_str::<Value>(raw.trim()) {
        return candidates_from(&root);
    }

    let Some(found) = JSON_OBJECT.find(raw) else {
        tracing::debug!("No JSON object found in model response");
        return NormalizedResponse::default();
    };

    match serde_json::from_str::<Value>(found.as_str()) {
        Ok(Value::Object(root)) => candidates_from(&root),
        Ok(_) => NormalizedResponse::default(),
        Err(e) => {
            tracing::debug!("Embedded JSON object did not parse: {}", e);
            NormalizedResponse::default()
        }
    }
}

fn candidates_from(root: &Map<String, Value>) -> NormalizedResponse {
    let Some(entries) = root.get("consumed").and_then(Value::as_array) else {
        return NormalizedResponse::default();
    };

    NormalizedResponse {
        entry_count: entries.len(),
        candidates: entries.iter().filter_map(candidate_from).collect(),
    }
}

fn candidate_from(entry: &Value) -> Option<ConsumptionCandidate> {
    let obj = entry.as_object()?;

    let item_id = obj
        .get("item_id")
        .or_else(|| obj.get("id"))
        .and_then(as_integer)?;

    let consumed = obj.get("consumed").and_then(as_integer)?;
    let consumed_quantity = match i32::try_from(consumed) {
        Ok(q) if q >= 0 => q,
        _ => {
            tracing::debug!("Ignoring item {} with consumed quantity {}", item_id, consumed);
            return None;
        }
    };

    let item_name = obj
        .get("item_name")
        .or_else(|| obj.get("name"))
        .and_then(Value::as_str)
        .map(|s| s.to_string());

    Some(ConsumptionCandidate {
        item_id,
        item_name,
        consumed_quantity,
    })
}

/// Integers, integral floats (`2.0`) and numeric strings (`"2"`)
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
