//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: i64) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}

/// Errors raised by the consumption-inference pipeline
#[derive(Debug, Error)]
pub enum ConsumptionError {
    /// The user text was empty or blank
    #[error("No user input provided.")]
    NoInput,

    /// The configured provider is missing, unknown or lacks credentials
    #[error("Unsupported MODEL_PROVIDER: {0}. Use 'ollama' or 'gemini'.")]
    UnsupportedProvider(String),

    /// Transport, status or payload failure from the completion backend
    #[error("Completion provider error: {0}")]
    Provider(String),

    /// Every attempt produced an unusable response
    #[error("AI failed to provide a valid response after {attempts} attempts")]
    InferenceFailed { attempts: u32 },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
