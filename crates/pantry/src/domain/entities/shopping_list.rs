//! ShoppingList - Items below their desired quantity

use serde::{Deserialize, Serialize};

use crate::domain::entities::Item;

const ALL_STOCKED: &str = "All stocked!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListLine {
    pub name: String,
    pub missing_quantity: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub lines: Vec<ShoppingListLine>,
}

impl ShoppingList {
    /// Build from items, keeping only what is missing, ordered by name
    pub fn from_items(items: &[Item]) -> Self {
        let mut lines: Vec<ShoppingListLine> = items
            .iter()
            .filter(|item| item.missing_quantity() > 0)
            .map(|item| ShoppingListLine {
                name: item.name.clone(),
                missing_quantity: item.missing_quantity(),
            })
            .collect();
        lines.sort_by(|a, b| a.name.cmp(&b.name));

        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain-text rendering, one `name: missing` per line
    pub fn render_text(&self) -> String {
        if self.lines.is_empty() {
            return ALL_STOCKED.to_string();
        }

        self.lines
            .iter()
            .map(|line| format!("{}: {}", line.name, line.missing_quantity))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
