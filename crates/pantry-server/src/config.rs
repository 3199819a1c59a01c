//! Server configuration
//!
//! Read once at startup from Shuttle secrets, falling back to the process
//! environment (after loading `.env`). The provider selection is kept as the
//! raw string: it is only resolved when a consumption request needs it.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";
const DEFAULT_SETTINGS_TTL_SECS: u64 = 300;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `MODEL_PROVIDER`, unresolved
    pub model_provider: Option<String>,
    pub ollama_url: String,
    pub ollama_model: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub prompts_dir: PathBuf,
    pub settings_cache_ttl: Duration,
    /// Extension ids from `PANTRY_EXTENSIONS`
    pub extensions: Vec<String>,
}

impl AppConfig {
    /// Build from any key lookup (secret store, environment, test map)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let settings_cache_ttl = get("SETTINGS_CACHE_TTL_SECS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_SETTINGS_TTL_SECS);

        let extensions = get("PANTRY_EXTENSIONS")
            .map(|s| {
                s.split(',')
                    .map(|id| id.trim().to_string())
                    .filter(|id| !id.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            model_provider: get("MODEL_PROVIDER"),
            ollama_url: get("OLLAMA_API_URL").unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string()),
            ollama_model: get("OLLAMA_MODEL").unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            prompts_dir: get("PROMPTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_prompts_dir),
            settings_cache_ttl: Duration::from_secs(settings_cache_ttl),
            extensions,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn default_prompts_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/prompts"))
}
