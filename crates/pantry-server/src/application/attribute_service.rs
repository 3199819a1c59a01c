//! Attribute Application Service (Use Case)
//!
//! Tags and locations share one service; every operation names its kind.
//!
//! Recolouring: whenever an attribute is created or saved with an empty
//! colour, or with the current default colour of its kind, the classifier
//! picks colour and emoji. Any other colour is the user's choice and stays.

use std::sync::Arc;

use pantry::domain::{validate_attribute_name, validate_color, validate_emoji};
use pantry::{
    classify, Attribute, AttributeDefaults, AttributeKind, AttributeRepository, DomainError,
    NewAttribute,
};

use super::SettingsService;

/// Partial change to an attribute
#[derive(Debug, Clone, Default)]
pub struct AttributeUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub emoji: Option<String>,
}

/// Result of a bulk recolour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReclassifyReport {
    pub tags: usize,
    pub locations: usize,
}

/// Application service for Tag and Location operations
pub struct AttributeService {
    repo: Arc<dyn AttributeRepository>,
    settings: Arc<SettingsService>,
}

impl AttributeService {
    pub fn new(repo: Arc<dyn AttributeRepository>, settings: Arc<SettingsService>) -> Self {
        Self { repo, settings }
    }

    /// All attributes of a kind, ordered by name
    pub async fn list(&self, kind: AttributeKind) -> Result<Vec<Attribute>, DomainError> {
        self.repo.find_all(kind).await
    }

    pub async fn get(&self, kind: AttributeKind, id: i64) -> Result<Attribute, DomainError> {
        self.repo
            .find_by_id(kind, id)
            .await?
            .ok_or_else(|| DomainError::not_found(kind.label(), id))
    }

    /// Create an attribute; unset or default colour means "classify"
    pub async fn create(
        &self,
        kind: AttributeKind,
        name: &str,
        color: Option<String>,
        emoji: Option<String>,
    ) -> Result<Attribute, DomainError> {
        let name = validate_attribute_name(kind, name)?;

        if self.repo.find_by_name(kind, &name).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "{} '{}' already exists",
                kind.label(),
                name
            )));
        }

        let defaults = self.settings.defaults_for(kind).await?;
        let (color, emoji) = resolve_style(&name, kind, &defaults, color, emoji)?;

        let created = self
            .repo
            .insert(&NewAttribute {
                kind,
                name,
                color,
                emoji,
            })
            .await?;

        tracing::info!(
            "Created {}: {} {} ({})",
            kind,
            created.emoji,
            created.name,
            created.color
        );

        Ok(created)
    }

    /// Update an attribute; the recolour policy applies to the saved result
    pub async fn update(
        &self,
        kind: AttributeKind,
        id: i64,
        update: AttributeUpdate,
    ) -> Result<Attribute, DomainError> {
        let current = self.get(kind, id).await?;

        let name = match update.name {
            Some(name) => validate_attribute_name(kind, &name)?,
            None => current.name,
        };

        if let Some(existing) = self.repo.find_by_name(kind, &name).await? {
            if existing.id != id {
                return Err(DomainError::Conflict(format!(
                    "{} '{}' already exists",
                    kind.label(),
                    name
                )));
            }
        }

        let defaults = self.settings.defaults_for(kind).await?;
        let color = update.color.or(Some(current.color));
        let emoji = update.emoji.or(Some(current.emoji));
        let (color, emoji) = resolve_style(&name, kind, &defaults, color, emoji)?;

        let updated = self
            .repo
            .update(&Attribute {
                id,
                kind,
                name,
                color,
                emoji,
            })
            .await?;

        tracing::info!("Updated {}: {} ({})", kind, updated.name, updated.id);
        Ok(updated)
    }

    pub async fn delete(&self, kind: AttributeKind, id: i64) -> Result<bool, DomainError> {
        let deleted = self.repo.delete(kind, id).await?;
        if deleted {
            tracing::info!("Deleted {}: {}", kind, id);
        }
        Ok(deleted)
    }

    /// Existing attribute with this (trimmed) name, or a newly classified one
    pub async fn get_or_create(
        &self,
        kind: AttributeKind,
        name: &str,
    ) -> Result<Attribute, DomainError> {
        let name = validate_attribute_name(kind, name)?;

        match self.repo.find_by_name(kind, &name).await? {
            Some(existing) => Ok(existing),
            None => self.create(kind, &name, None, None).await,
        }
    }

    /// Reset every tag and location to its classified style
    pub async fn reclassify_all(&self) -> Result<ReclassifyReport, DomainError> {
        let tags = self.reclassify_kind(AttributeKind::Tag).await?;
        let locations = self.reclassify_kind(AttributeKind::Location).await?;

        tracing::info!(
            "🎨 Reclassified {} tags and {} locations",
            tags,
            locations
        );

        Ok(ReclassifyReport { tags, locations })
    }

    async fn reclassify_kind(&self, kind: AttributeKind) -> Result<usize, DomainError> {
        let defaults = self.settings.defaults_for(kind).await?;
        let attributes = self.repo.find_all(kind).await?;
        let count = attributes.len();

        for attribute in attributes {
            let style = classify(&attribute.name, kind, Some(&defaults));
            self.repo
                .update(&Attribute {
                    color: style.color,
                    emoji: style.emoji,
                    ..attribute
                })
                .await?;
        }

        Ok(count)
    }
}

/// Final colour and emoji for an attribute about to be saved
fn resolve_style(
    name: &str,
    kind: AttributeKind,
    defaults: &AttributeDefaults,
    color: Option<String>,
    emoji: Option<String>,
) -> Result<(String, String), DomainError> {
    let color = color
        .map(|c| c.trim().to_lowercase())
        .unwrap_or_default();

    if color.is_empty() || color.eq_ignore_ascii_case(&defaults.color) {
        let style = classify(name, kind, Some(defaults));
        return Ok((style.color, style.emoji));
    }

    validate_color(&color)?;

    let emoji = match emoji.filter(|e| !e.trim().is_empty()) {
        Some(e) => validate_emoji(&e)?,
        None => defaults.emoji.clone(),
    };

    Ok((color, emoji))
}
