//! Startup extensions
//!
//! Extensions are enabled by id through `PANTRY_EXTENSIONS`. Each gets one
//! `on_ready` call after the services are built. A failing extension is
//! logged and does not stop the server.

use std::sync::Arc;

use async_trait::async_trait;

use pantry::{AttributeKind, DomainError};

use crate::application::AttributeService;

/// What an extension may touch during startup
pub struct ExtensionContext {
    pub attributes: Arc<AttributeService>,
}

#[async_trait]
pub trait Extension: Send + Sync {
    fn id(&self) -> &'static str;

    async fn on_ready(&self, ctx: &ExtensionContext) -> Result<(), DomainError>;
}

/// Seeds the usual household storage locations
pub struct RoomLocations;

const ROOM_LOCATIONS: &[&str] = &["Fridge", "Freezer", "Pantry", "Cupboard", "Garage"];

#[async_trait]
impl Extension for RoomLocations {
    fn id(&self) -> &'static str {
        "room_locations"
    }

    async fn on_ready(&self, ctx: &ExtensionContext) -> Result<(), DomainError> {
        for name in ROOM_LOCATIONS {
            ctx.attributes
                .get_or_create(AttributeKind::Location, name)
                .await?;
        }
        tracing::info!("🏠 Seeded {} room locations", ROOM_LOCATIONS.len());
        Ok(())
    }
}

fn builtin(id: &str) -> Option<Box<dyn Extension>> {
    match id.to_lowercase().as_str() {
        "room_locations" | "room_tags" => Some(Box::new(RoomLocations)),
        _ => None,
    }
}

/// Enabled extensions, in configuration order
#[derive(Default)]
pub struct ExtensionRegistry {
    extensions: Vec<Box<dyn Extension>>,
}

impl ExtensionRegistry {
    /// Resolve configured ids; unknown ids are logged and skipped
    pub fn from_ids(ids: &[String]) -> Self {
        let mut registry = Self::default();
        for id in ids {
            match builtin(id) {
                Some(extension) => registry.register(extension),
                None => tracing::warn!("⚠️  Unknown extension '{}' - skipped", id),
            }
        }
        registry
    }

    /// Add an extension unless one with the same id is already registered
    pub fn register(&mut self, extension: Box<dyn Extension>) {
        if self.extensions.iter().any(|e| e.id() == extension.id()) {
            return;
        }
        self.extensions.push(extension);
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.extensions.iter().map(|e| e.id()).collect()
    }

    /// Run every `on_ready`; returns how many succeeded
    pub async fn run_ready(&self, ctx: &ExtensionContext) -> usize {
        let mut succeeded = 0;
        for extension in &self.extensions {
            match extension.on_ready(ctx).await {
                Ok(()) => {
                    tracing::info!("🧩 Extension {} ready", extension.id());
                    succeeded += 1;
                }
                Err(e) => tracing::warn!("⚠️  Extension {} failed: {}", extension.id(), e),
            }
        }
        succeeded
    }
}
