//! Completion Provider Implementations
//!
//! `ProviderRouter` is the single dispatch point from `ProviderKind` to a
//! concrete backend.

mod gemini;
mod ollama;

use async_trait::async_trait;

use pantry::{CompletionClient, ConsumptionError, ProviderKind};

use crate::config::AppConfig;

pub use gemini::GeminiProvider;
pub use ollama::OllamaProvider;

/// CompletionClient over the configured backends
pub struct ProviderRouter {
    local: OllamaProvider,
    hosted: Option<GeminiProvider>,
}

impl ProviderRouter {
    pub fn new(local: OllamaProvider, hosted: Option<GeminiProvider>) -> Self {
        Self { local, hosted }
    }

    /// Build both backends from configuration; Gemini only with an API key
    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let local = OllamaProvider::new(&config.ollama_url, &config.ollama_model)?;
        let hosted = config
            .gemini_api_key
            .as_ref()
            .map(|key| GeminiProvider::new(key, &config.gemini_model))
            .transpose()?;

        Ok(Self::new(local, hosted))
    }
}

#[async_trait]
impl CompletionClient for ProviderRouter {
    async fn complete(
        &self,
        prompt: &str,
        provider: ProviderKind,
    ) -> Result<String, ConsumptionError> {
        match provider {
            ProviderKind::LocalCompletion => self.local.generate(prompt).await,
            ProviderKind::HostedCompletion => match &self.hosted {
                Some(gemini) => gemini.generate(prompt).await,
                None => Err(ConsumptionError::UnsupportedProvider(
                    "gemini (GEMINI_API_KEY is not configured)".to_string(),
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hosted_without_credentials_is_unsupported() {
        let router = ProviderRouter::from_config(&AppConfig::default()).unwrap();
        let result = router
            .complete("prompt", ProviderKind::HostedCompletion)
            .await;
        assert!(matches!(
            result,
            Err(ConsumptionError::UnsupportedProvider(_))
        ));
    }
}
