//! Settings Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, UserSettings};

/// Repository interface for the single UserSettings record
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load the settings; `None` when never saved
    async fn load(&self) -> Result<Option<UserSettings>, DomainError>;

    /// Insert or replace the settings
    async fn save(&self, settings: &UserSettings) -> Result<UserSettings, DomainError>;
}
