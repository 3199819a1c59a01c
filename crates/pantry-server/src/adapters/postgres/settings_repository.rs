//! PostgreSQL implementation of SettingsRepository

use async_trait::async_trait;
use sqlx::PgPool;

use pantry::{DomainError, SettingsRepository, UserSettings};

/// PostgreSQL implementation of SettingsRepository
pub struct PgSettingsRepository {
    pool: PgPool,
}

impl PgSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SettingsRow {
    default_tag_color: String,
    default_tag_emoji: String,
    default_location_color: String,
    default_location_emoji: String,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<SettingsRow> for UserSettings {
    fn from(row: SettingsRow) -> Self {
        Self {
            default_tag_color: row.default_tag_color,
            default_tag_emoji: row.default_tag_emoji,
            default_location_color: row.default_location_color,
            default_location_emoji: row.default_location_emoji,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    async fn load(&self) -> Result<Option<UserSettings>, DomainError> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            SELECT default_tag_color, default_tag_emoji,
                   default_location_color, default_location_emoji, updated_at
            FROM user_settings
            WHERE id = 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, settings: &UserSettings) -> Result<UserSettings, DomainError> {
        let row = sqlx::query_as::<_, SettingsRow>(
            r#"
            INSERT INTO user_settings (id, default_tag_color, default_tag_emoji,
                                       default_location_color, default_location_emoji)
            VALUES (1, $1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET default_tag_color = EXCLUDED.default_tag_color,
                default_tag_emoji = EXCLUDED.default_tag_emoji,
                default_location_color = EXCLUDED.default_location_color,
                default_location_emoji = EXCLUDED.default_location_emoji,
                updated_at = NOW()
            RETURNING default_tag_color, default_tag_emoji,
                      default_location_color, default_location_emoji, updated_at
            "#,
        )
        .bind(&settings.default_tag_color)
        .bind(&settings.default_tag_emoji)
        .bind(&settings.default_location_color)
        .bind(&settings.default_location_emoji)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }
}
