use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod cache;
mod config;
mod extensions;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::{PgAttributeRepository, PgItemRepository, PgSettingsRepository, ProviderRouter};
use application::{
    AttributeService, ConsumptionService, ItemService, PromptTemplates, SettingsService,
};
use config::AppConfig;
use extensions::{ExtensionContext, ExtensionRegistry};
use pantry::{AttributeRepository, CompletionClient, ItemRepository, SettingsRepository};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub item_service: Arc<ItemService>,
    pub attribute_service: Arc<AttributeService>,
    pub settings_service: Arc<SettingsService>,
    pub consumption_service: Arc<ConsumptionService>,
}

impl AppState {
    /// Wire the application services over the given ports
    pub fn build(
        config: AppConfig,
        items: Arc<dyn ItemRepository>,
        attributes: Arc<dyn AttributeRepository>,
        settings: Arc<dyn SettingsRepository>,
        completion: Arc<dyn CompletionClient>,
    ) -> Self {
        let settings_service = Arc::new(SettingsService::new(settings, config.settings_cache_ttl));
        let attribute_service = Arc::new(AttributeService::new(
            attributes,
            settings_service.clone(),
        ));
        let item_service = Arc::new(ItemService::new(items.clone(), attribute_service.clone()));
        let consumption_service = Arc::new(ConsumptionService::new(
            items,
            completion,
            PromptTemplates::new(config.prompts_dir.clone()),
        ));

        Self {
            config: Arc::new(config),
            item_service,
            attribute_service,
            settings_service,
            consumption_service,
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Pantry API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🥫 Pantry API initializing...");

    // Secrets first, then the process environment (.env included)
    dotenvy::dotenv().ok();
    let config =
        AppConfig::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()));

    match config.model_provider.as_deref() {
        Some(provider) => tracing::info!("🤖 Completion provider: {}", provider),
        None => tracing::warn!("⚠️  No MODEL_PROVIDER set - consumption suggestions disabled"),
    }
    if config.gemini_api_key.is_none() {
        tracing::warn!("⚠️  No GEMINI_API_KEY set - Gemini provider unavailable");
    }

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    // Initialize application services
    let completion =
        ProviderRouter::from_config(&config).context("Failed to build completion clients")?;
    let extension_ids = config.extensions.clone();

    let state = AppState::build(
        config,
        Arc::new(PgItemRepository::new(pool.clone())),
        Arc::new(PgAttributeRepository::new(pool.clone())),
        Arc::new(PgSettingsRepository::new(pool)),
        Arc::new(completion),
    );

    // Warm the settings cache
    match state.settings_service.get().await {
        Ok(_) => tracing::info!("🎨 User settings loaded"),
        Err(e) => tracing::warn!("⚠️  Failed to load user settings: {}", e),
    }

    // Extensions
    let registry = ExtensionRegistry::from_ids(&extension_ids);
    if !registry.ids().is_empty() {
        let ctx = ExtensionContext {
            attributes: state.attribute_service.clone(),
        };
        let ready = registry.run_ready(&ctx).await;
        tracing::info!("🧩 {}/{} extensions ready", ready, registry.ids().len());
    }

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::api_router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Pantry API ready");

    Ok(router.into())
}
