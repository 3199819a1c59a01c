//! UserSettings - Default colour and emoji per attribute kind

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AttributeKind;

pub const NEUTRAL_COLOR: &str = "#6b7280";
pub const NEUTRAL_TAG_EMOJI: &str = "🏷️";
pub const NEUTRAL_LOCATION_EMOJI: &str = "📍";

/// Household-wide settings (one logical record)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub default_tag_color: String,
    pub default_tag_emoji: String,
    pub default_location_color: String,
    pub default_location_emoji: String,
    pub updated_at: DateTime<Utc>,
}

/// Fallback style for one attribute kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDefaults {
    pub color: String,
    pub emoji: String,
}

impl UserSettings {
    pub fn defaults_for(&self, kind: AttributeKind) -> AttributeDefaults {
        match kind {
            AttributeKind::Tag => AttributeDefaults {
                color: self.default_tag_color.clone(),
                emoji: self.default_tag_emoji.clone(),
            },
            AttributeKind::Location => AttributeDefaults {
                color: self.default_location_color.clone(),
                emoji: self.default_location_emoji.clone(),
            },
        }
    }
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            default_tag_color: NEUTRAL_COLOR.to_string(),
            default_tag_emoji: NEUTRAL_TAG_EMOJI.to_string(),
            default_location_color: NEUTRAL_COLOR.to_string(),
            default_location_emoji: NEUTRAL_LOCATION_EMOJI.to_string(),
            updated_at: Utc::now(),
        }
    }
}

impl Default for AttributeDefaults {
    fn default() -> Self {
        Self {
            color: NEUTRAL_COLOR.to_string(),
            emoji: NEUTRAL_TAG_EMOJI.to_string(),
        }
    }
}
