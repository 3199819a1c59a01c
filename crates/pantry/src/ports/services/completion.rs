//! Completion Client Port
//!
//! Abstract interface for text-completion backends. The client sends a
//! prompt and returns raw text; it never interprets the content.

use async_trait::async_trait;

use crate::domain::{errors::ConsumptionError, ProviderKind};

/// Text completion across interchangeable providers
///
/// # Example
///
/// ```rust,ignore
/// use pantry::ports::CompletionClient;
///
/// struct ScriptedClient { /* ... */ }
///
/// #[async_trait]
/// impl CompletionClient for ScriptedClient {
///     async fn complete(&self, prompt: &str, provider: ProviderKind)
///         -> Result<String, ConsumptionError> {
///         // Return canned text
///     }
/// }
/// ```
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` to `provider` and return the generated text.
    ///
    /// Transport failures of any provider surface as
    /// `ConsumptionError::Provider`; a provider that cannot be used with the
    /// current configuration is `ConsumptionError::UnsupportedProvider`.
    async fn complete(&self, prompt: &str, provider: ProviderKind)
        -> Result<String, ConsumptionError>;
}
