//! Shared fixtures for service and router tests

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;

use pantry::{CompletionClient, ConsumptionError, ProviderKind};

use crate::adapters::memory::MemoryStore;
use crate::config::AppConfig;
use crate::AppState;

/// Replays canned responses, then keeps answering with prose
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<String, ConsumptionError>>>,
    calls: AtomicUsize,
}

impl ScriptedClient {
    pub fn new(responses: Vec<Result<String, ConsumptionError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn push(&self, response: String) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(
        &self,
        _prompt: &str,
        _provider: ProviderKind,
    ) -> Result<String, ConsumptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("I am not sure what you mean.".to_string()))
    }
}

/// Application state over an in-memory store and a scripted provider
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub client: Arc<ScriptedClient>,
    pub state: AppState,
}

impl TestApp {
    /// Configured with `MODEL_PROVIDER=ollama`
    pub fn new(responses: Vec<String>) -> Self {
        Self::with_provider(Some("ollama"), responses)
    }

    pub fn with_provider(provider: Option<&str>, responses: Vec<String>) -> Self {
        let provider = provider.map(str::to_string);
        let config = AppConfig::from_lookup(|key| match key {
            "MODEL_PROVIDER" => provider.clone(),
            _ => None,
        });

        let store = Arc::new(MemoryStore::new());
        let client = Arc::new(ScriptedClient::new(
            responses.into_iter().map(Ok).collect(),
        ));
        let state = AppState::build(
            config,
            store.clone(),
            store.clone(),
            store.clone(),
            client.clone(),
        );

        Self {
            store,
            client,
            state,
        }
    }

    pub fn script(&self, response: String) {
        self.client.push(response);
    }

    pub fn completion_calls(&self) -> usize {
        self.client.calls()
    }

    pub fn router(&self) -> Router {
        crate::routes::api_router().with_state(self.state.clone())
    }
}
