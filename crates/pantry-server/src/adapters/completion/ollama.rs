//! Local completion service (Ollama `/api/generate`)

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use pantry::ConsumptionError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Non-streaming client for an Ollama generate endpoint
#[derive(Clone)]
pub struct OllamaProvider {
    client: Client,
    url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaProvider {
    pub fn new(url: impl Into<String>, model: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            url: url.into(),
            model: model.into(),
        })
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, ConsumptionError> {
        tracing::info!(
            "Calling Ollama model {} ({} prompt chars)",
            self.model,
            prompt.len()
        );

        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| provider_error(format!("request to {} failed: {}", self.url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(provider_error(format!("Ollama returned {}: {}", status, body)));
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|e| provider_error(format!("malformed Ollama payload: {}", e)))?;

        tracing::debug!("Ollama response: {}", payload.response);
        Ok(payload.response)
    }
}

fn provider_error(message: String) -> ConsumptionError {
    tracing::error!("Ollama provider error: {}", message);
    ConsumptionError::Provider(message)
}
