//! Attribute - Tag or Location label with colour and emoji

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::AttributeKind;

/// A tag or a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: i64,
    pub kind: AttributeKind,
    pub name: String,
    pub color: String,
    pub emoji: String,
}

/// Attribute fields supplied on creation
#[derive(Debug, Clone)]
pub struct NewAttribute {
    pub kind: AttributeKind,
    pub name: String,
    pub color: String,
    pub emoji: String,
}

pub fn validate_attribute_name(kind: AttributeKind, name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!(
            "{} name is required",
            kind.label()
        )));
    }
    if trimmed.chars().count() > 100 {
        return Err(DomainError::Validation(format!(
            "{} name must be at most 100 characters",
            kind.label()
        )));
    }
    Ok(trimmed.to_string())
}

/// `#rrggbb`, case-insensitive
pub fn validate_color(color: &str) -> Result<(), DomainError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());

    if valid {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "Color must look like #rrggbb, got '{}'",
            color
        )))
    }
}

/// Longest emoji the store accepts, in characters
pub const MAX_EMOJI_CHARS: usize = 16;

/// Trimmed, non-empty, at most [`MAX_EMOJI_CHARS`] characters
pub fn validate_emoji(emoji: &str) -> Result<String, DomainError> {
    let trimmed = emoji.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation("Emoji must not be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_EMOJI_CHARS {
        return Err(DomainError::Validation(format!(
            "Emoji must be at most {} characters",
            MAX_EMOJI_CHARS
        )));
    }
    Ok(trimmed.to_string())
}
