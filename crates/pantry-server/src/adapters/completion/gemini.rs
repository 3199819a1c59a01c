//! Hosted completion service (Gemini `generateContent`)
//!
//! Decoding is pinned to temperature 0 with thinking disabled, so repeated
//! calls with the same prompt stay as close to deterministic as the API
//! allows.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use pantry::ConsumptionError;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Authenticated Gemini client
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, ConsumptionError> {
        tracing::info!(
            "Calling Gemini model {} ({} prompt chars)",
            self.model,
            prompt.len()
        );

        let url = format!("{}/{}:generateContent", BASE_URL, self.model);
        let request = GenerateContentRequest::new(prompt);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| provider_error(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(provider_error(describe_http_error(status, &body)));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| provider_error(format!("malformed Gemini payload: {}", e)))?;

        let text = extract_text(&payload)
            .ok_or_else(|| provider_error("Gemini returned no text candidates".to_string()))?;

        tracing::debug!("Gemini response: {}", text);
        Ok(text)
    }
}

// ============================================
// Request Types
// ============================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    thinking_config: ThinkingConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

impl GenerateContentRequest {
    fn new(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.0,
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            },
        }
    }
}

// ============================================
// Helper Functions
// ============================================

fn provider_error(message: String) -> ConsumptionError {
    tracing::error!("Gemini provider error: {}", message);
    ConsumptionError::Provider(message)
}

/// Concatenate the text parts of every candidate
fn extract_text(root: &Value) -> Option<String> {
    let candidates = root.get("candidates")?.as_array()?;

    let text: String = candidates
        .iter()
        .filter_map(|candidate| {
            candidate
                .get("content")
                .and_then(|content| content.get("parts"))
                .and_then(|parts| parts.as_array())
        })
        .flatten()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn describe_http_error(status: StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string());

    if status == StatusCode::TOO_MANY_REQUESTS {
        return format!("Gemini rate limited: {}", message);
    }

    format!("Gemini API error ({}): {}", status.as_u16(), message)
}
