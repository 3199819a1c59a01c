//! Settings DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use pantry::UserSettings;

use crate::application::SettingsUpdate;

/// Update settings request; omitted fields keep their value
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSettingsRequest {
    pub default_tag_color: Option<String>,
    pub default_tag_emoji: Option<String>,
    pub default_location_color: Option<String>,
    pub default_location_emoji: Option<String>,
}

impl From<UpdateSettingsRequest> for SettingsUpdate {
    fn from(req: UpdateSettingsRequest) -> Self {
        Self {
            default_tag_color: req.default_tag_color,
            default_tag_emoji: req.default_tag_emoji,
            default_location_color: req.default_location_color,
            default_location_emoji: req.default_location_emoji,
        }
    }
}

/// Settings response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SettingsResponse {
    pub default_tag_color: String,
    pub default_tag_emoji: String,
    pub default_location_color: String,
    pub default_location_emoji: String,
    pub updated_at: DateTime<Utc>,
}

impl From<UserSettings> for SettingsResponse {
    fn from(settings: UserSettings) -> Self {
        Self {
            default_tag_color: settings.default_tag_color,
            default_tag_emoji: settings.default_tag_emoji,
            default_location_color: settings.default_location_color,
            default_location_emoji: settings.default_location_emoji,
            updated_at: settings.updated_at,
        }
    }
}
