//! Settings Application Service
//!
//! Serves the household defaults through a TTL cache; writes go through to
//! the store and refresh the cache.

use std::sync::Arc;
use std::time::Duration;

use pantry::domain::{validate_color, validate_emoji};
use pantry::{AttributeDefaults, AttributeKind, DomainError, SettingsRepository, UserSettings};

use crate::cache::TtlCache;

/// Partial change to the default colours and emojis
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub default_tag_color: Option<String>,
    pub default_tag_emoji: Option<String>,
    pub default_location_color: Option<String>,
    pub default_location_emoji: Option<String>,
}

/// Application service for UserSettings
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
    cache: TtlCache<UserSettings>,
}

impl SettingsService {
    pub fn new(repo: Arc<dyn SettingsRepository>, ttl: Duration) -> Self {
        Self {
            repo,
            cache: TtlCache::new(ttl),
        }
    }

    /// Current settings; built-in defaults when nothing was ever saved
    pub async fn get(&self) -> Result<UserSettings, DomainError> {
        self.cache
            .get_or_load(|| async {
                let settings = self.repo.load().await?.unwrap_or_default();
                tracing::debug!("Loaded user settings");
                Ok::<_, DomainError>(settings)
            })
            .await
    }

    pub async fn defaults_for(&self, kind: AttributeKind) -> Result<AttributeDefaults, DomainError> {
        Ok(self.get().await?.defaults_for(kind))
    }

    /// Validate, persist and refresh the cache
    pub async fn update_defaults(&self, update: SettingsUpdate) -> Result<UserSettings, DomainError> {
        let current = self.get().await?;

        let merged = UserSettings {
            default_tag_color: pick_color(update.default_tag_color, current.default_tag_color)?,
            default_tag_emoji: pick_emoji(update.default_tag_emoji, current.default_tag_emoji)?,
            default_location_color: pick_color(
                update.default_location_color,
                current.default_location_color,
            )?,
            default_location_emoji: pick_emoji(
                update.default_location_emoji,
                current.default_location_emoji,
            )?,
            updated_at: current.updated_at,
        };

        let saved = self.repo.save(&merged).await?;
        self.cache.put(saved.clone()).await;

        tracing::info!(
            "Updated default styles: tag {} {}, location {} {}",
            saved.default_tag_color,
            saved.default_tag_emoji,
            saved.default_location_color,
            saved.default_location_emoji
        );

        Ok(saved)
    }
}

fn pick_color(requested: Option<String>, current: String) -> Result<String, DomainError> {
    match requested {
        Some(color) => {
            let color = color.trim().to_lowercase();
            validate_color(&color)?;
            Ok(color)
        }
        None => Ok(current),
    }
}

fn pick_emoji(requested: Option<String>, current: String) -> Result<String, DomainError> {
    match requested {
        Some(emoji) => validate_emoji(&emoji),
        None => Ok(current),
    }
}
