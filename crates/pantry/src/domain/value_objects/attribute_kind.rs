//! AttributeKind - Tag or Location

use serde::{Deserialize, Serialize};

/// The two kinds of labels an item can carry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Tag,
    Location,
}

impl AttributeKind {
    /// Human readable entity name, used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            AttributeKind::Tag => "Tag",
            AttributeKind::Location => "Location",
        }
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeKind::Tag => write!(f, "tag"),
            AttributeKind::Location => write!(f, "location"),
        }
    }
}
