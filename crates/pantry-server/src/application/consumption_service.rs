//! Consumption Application Service (Use Case)
//!
//! Turns a free-text "what did I use up" statement into quantity
//! suggestions, and applies the suggestions the user confirmed.
//!
//! Inference runs per call:
//! build prompt -> call provider -> normalize -> accept or retry -> enrich.
//! At most `MAX_ATTEMPTS` provider calls are made. Only unusable responses
//! are retried; provider errors end the call immediately.
//!
//! There is no per-item locking. Two inferences may see the same snapshot
//! and `apply` is last write wins.

use std::sync::Arc;

use pantry::domain::validate_quantity;
use pantry::{
    normalize, AppliedChange, CompletionClient, ConsumptionCandidate, ConsumptionError,
    ConsumptionSuggestion, DomainError, InventoryEntry, ItemRepository, Language, ProviderKind,
    QuantityChange,
};

use super::prompt_templates::{compose_prompt, PromptTemplates};

pub const MAX_ATTEMPTS: u32 = 3;

/// Application service for consumption inference and application
pub struct ConsumptionService {
    items: Arc<dyn ItemRepository>,
    completion: Arc<dyn CompletionClient>,
    templates: PromptTemplates,
}

impl ConsumptionService {
    pub fn new(
        items: Arc<dyn ItemRepository>,
        completion: Arc<dyn CompletionClient>,
        templates: PromptTemplates,
    ) -> Self {
        Self {
            items,
            completion,
            templates,
        }
    }

    /// Suggest new quantities for what `user_text` says was consumed.
    ///
    /// `provider` is the configured provider name; it is resolved before
    /// any I/O happens.
    pub async fn infer(
        &self,
        user_text: &str,
        language: &Language,
        provider: Option<&str>,
    ) -> Result<Vec<ConsumptionSuggestion>, ConsumptionError> {
        if user_text.trim().is_empty() {
            return Err(ConsumptionError::NoInput);
        }
        let provider = ProviderKind::resolve(provider)?;

        let snapshot: Vec<InventoryEntry> = self
            .items
            .find_all()
            .await?
            .iter()
            .map(|item| item.to_entry())
            .collect();

        let template = self.templates.load(language).await;
        let prompt = compose_prompt(&template, &snapshot, user_text);

        tracing::info!(
            "Inferring consumption via {} ({} items, language {})",
            provider,
            snapshot.len(),
            language
        );

        let candidates = self.request_candidates(&prompt, provider).await?;
        self.enrich(candidates).await
    }

    async fn request_candidates(
        &self,
        prompt: &str,
        provider: ProviderKind,
    ) -> Result<Vec<ConsumptionCandidate>, ConsumptionError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let raw = self.completion.complete(prompt, provider).await?;
            let response = normalize(&raw);

            // Invalid entries are dropped but do not trigger a retry
            if response.is_usable() {
                tracing::debug!(
                    "Accepted {}/{} candidates on attempt {}",
                    response.candidates.len(),
                    response.entry_count,
                    attempt
                );
                return Ok(response.candidates);
            }

            tracing::warn!(
                "Model returned an unparseable response (attempt {}/{}): {}",
                attempt,
                MAX_ATTEMPTS,
                raw
            );
        }

        tracing::error!(
            "Failed to get a valid response after {} attempts",
            MAX_ATTEMPTS
        );
        Err(ConsumptionError::InferenceFailed {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Join candidates with live records; unknown ids are dropped and a
    /// repeated id keeps its first position with the last quantity
    async fn enrich(
        &self,
        candidates: Vec<ConsumptionCandidate>,
    ) -> Result<Vec<ConsumptionSuggestion>, ConsumptionError> {
        let mut merged: Vec<(i64, i32)> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            match merged.iter_mut().find(|(id, _)| *id == candidate.item_id) {
                Some(entry) => entry.1 = candidate.consumed_quantity,
                None => merged.push((candidate.item_id, candidate.consumed_quantity)),
            }
        }

        let mut suggestions = Vec::with_capacity(merged.len());
        for (item_id, consumed) in merged {
            match self.items.find_by_id(item_id).await? {
                Some(item) => suggestions.push(ConsumptionSuggestion::from_item(&item, consumed)),
                None => tracing::debug!("Dropping suggestion for unknown item {}", item_id),
            }
        }

        Ok(suggestions)
    }

    /// Write confirmed quantities item by item.
    ///
    /// Missing items are skipped. The batch is not atomic: a store error
    /// stops the remaining writes and earlier ones stay.
    pub async fn apply(
        &self,
        changes: &[QuantityChange],
    ) -> Result<Vec<AppliedChange>, ConsumptionError> {
        if changes.is_empty() {
            return Err(DomainError::Validation("No changes provided".to_string()).into());
        }
        for change in changes {
            validate_quantity("suggested_new_quantity", change.suggested_new_quantity)?;
        }

        let mut applied = Vec::with_capacity(changes.len());
        for change in changes {
            let Some(item) = self.items.find_by_id(change.item_id).await? else {
                tracing::debug!("Skipping change for unknown item {}", change.item_id);
                continue;
            };

            if !self
                .items
                .update_quantity(item.id, change.suggested_new_quantity)
                .await?
            {
                continue;
            }

            tracing::info!(
                "Applied consumption: {} {} -> {}",
                item.name,
                item.current_quantity,
                change.suggested_new_quantity
            );

            applied.push(AppliedChange {
                item_id: item.id,
                item_name: item.name,
                old_quantity: item.current_quantity,
                new_quantity: change.suggested_new_quantity,
            });
        }

        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;
    use crate::test_support::ScriptedClient;

    fn service(store: Arc<MemoryStore>, client: Arc<ScriptedClient>) -> ConsumptionService {
        let templates = PromptTemplates::new(concat!(env!("CARGO_MANIFEST_DIR"), "/prompts"));
        ConsumptionService::new(store, client, templates)
    }

    fn english() -> Language {
        Language::english()
    }

    #[tokio::test]
    async fn test_blank_input_makes_no_calls() {
        let client = Arc::new(ScriptedClient::new(vec![]));
        let service = service(Arc::new(MemoryStore::new()), client.clone());

        let result = service.infer("   ", &english(), Some("ollama")).await;
        assert!(matches!(result, Err(ConsumptionError::NoInput)));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_unsupported_provider_makes_no_calls() {
        let client = Arc::new(ScriptedClient::new(vec![]));
        let service = service(Arc::new(MemoryStore::new()), client.clone());

        for provider in [None, Some(""), Some("gpt")] {
            let result = service.infer("I ate an egg", &english(), provider).await;
            assert!(matches!(
                result,
                Err(ConsumptionError::UnsupportedProvider(_))
            ));
        }
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_gives_up_after_exactly_three_attempts() {
        let store = Arc::new(MemoryStore::new());
        store.seed_item("Eggs", 12, 6);
        let client = Arc::new(ScriptedClient::new(vec![]));
        let service = service(store, client.clone());

        let result = service.infer("I ate 2 eggs", &english(), Some("ollama")).await;
        assert!(matches!(
            result,
            Err(ConsumptionError::InferenceFailed { attempts: 3 })
        ));
        assert_eq!(client.calls(), 3);
    }

    #[tokio::test]
    async fn test_retries_until_parseable() {
        let store = Arc::new(MemoryStore::new());
        let eggs = store.seed_item("Eggs", 12, 6);
        let client = Arc::new(ScriptedClient::new(vec![
            Ok("not json at all".to_string()),
            Ok(format!(r#"Sure! {{"consumed":[{{"id":{},"consumed":2}}]}}"#, eggs)),
        ]));
        let service = service(store, client.clone());

        let suggestions = service
            .infer("I ate 2 eggs", &english(), Some("gemini"))
            .await
            .unwrap();
        assert_eq!(client.calls(), 2);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].suggested_new_quantity, 4);
    }

    #[tokio::test]
    async fn test_only_invalid_entries_are_accepted_without_retry() {
        let store = Arc::new(MemoryStore::new());
        let milk = store.seed_item("Milk", 5, 5);
        let client = Arc::new(ScriptedClient::new(vec![Ok(format!(
            r#"{{"consumed":[{{"id":{},"consumed":-1}}]}}"#,
            milk
        ))]));
        let service = service(store, client.clone());

        let suggestions = service
            .infer("I drank milk", &english(), Some("ollama"))
            .await
            .unwrap();
        assert_eq!(client.calls(), 1);
        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_provider_error_is_not_retried() {
        let client = Arc::new(ScriptedClient::new(vec![Err(ConsumptionError::Provider(
            "connection refused".to_string(),
        ))]));
        let service = service(Arc::new(MemoryStore::new()), client.clone());

        let result = service.infer("I ate 2 eggs", &english(), Some("ollama")).await;
        assert!(matches!(result, Err(ConsumptionError::Provider(_))));
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_dropped() {
        let store = Arc::new(MemoryStore::new());
        store.seed_item("Milk", 5, 5);
        let client = Arc::new(ScriptedClient::new(vec![Ok(
            r#"{"consumed":[{"id":99,"consumed":1}]}"#.to_string(),
        )]));
        let service = service(store, client);

        let suggestions = service
            .infer("I drank milk", &english(), Some("ollama"))
            .await
            .unwrap();
        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_suggested_quantity_floors_at_zero() {
        let store = Arc::new(MemoryStore::new());
        let milk = store.seed_item("Milk", 5, 5);
        let client = Arc::new(ScriptedClient::new(vec![Ok(format!(
            r#"{{"consumed":[{{"id":{},"consumed":10}}]}}"#,
            milk
        ))]));
        let service = service(store, client);

        let suggestions = service
            .infer("I drank all the milk", &english(), Some("ollama"))
            .await
            .unwrap();
        assert_eq!(suggestions[0].consumed_quantity, 10);
        assert_eq!(suggestions[0].suggested_new_quantity, 0);
    }

    #[tokio::test]
    async fn test_duplicate_ids_keep_first_position_and_last_quantity() {
        let store = Arc::new(MemoryStore::new());
        let eggs = store.seed_item("Eggs", 12, 12);
        let milk = store.seed_item("Milk", 2, 2);
        let client = Arc::new(ScriptedClient::new(vec![Ok(format!(
            r#"{{"consumed":[{{"id":{e},"consumed":1}},{{"id":{m},"consumed":1}},{{"id":{e},"consumed":3}}]}}"#,
            e = eggs,
            m = milk
        ))]));
        let service = service(store, client);

        let suggestions = service
            .infer("eggs, milk, more eggs", &english(), Some("ollama"))
            .await
            .unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].item_id, eggs);
        assert_eq!(suggestions[0].consumed_quantity, 3);
        assert_eq!(suggestions[1].item_id, milk);
    }

    #[tokio::test]
    async fn test_apply_is_idempotent() {
        let store = Arc::new(MemoryStore::new());
        let id = store.seed_item("Bread", 5, 5);
        let service = service(store.clone(), Arc::new(ScriptedClient::new(vec![])));
        let changes = [QuantityChange {
            item_id: id,
            suggested_new_quantity: 3,
        }];

        let applied = service.apply(&changes).await.unwrap();
        assert_eq!(
            applied,
            vec![AppliedChange {
                item_id: id,
                item_name: "Bread".to_string(),
                old_quantity: 5,
                new_quantity: 3,
            }]
        );
        assert_eq!(store.current_quantity(id), Some(3));

        let again = service.apply(&changes).await.unwrap();
        assert_eq!(again[0].old_quantity, 3);
        assert_eq!(again[0].new_quantity, 3);
        assert_eq!(store.current_quantity(id), Some(3));
    }

    #[tokio::test]
    async fn test_apply_skips_unknown_and_rejects_bad_input() {
        let store = Arc::new(MemoryStore::new());
        let id = store.seed_item("Bread", 5, 5);
        let service = service(store.clone(), Arc::new(ScriptedClient::new(vec![])));

        let applied = service
            .apply(&[
                QuantityChange {
                    item_id: 404,
                    suggested_new_quantity: 1,
                },
                QuantityChange {
                    item_id: id,
                    suggested_new_quantity: 2,
                },
            ])
            .await
            .unwrap();
        assert_eq!(applied.len(), 1);

        let empty = service.apply(&[]).await;
        assert!(matches!(
            empty,
            Err(ConsumptionError::Domain(DomainError::Validation(_)))
        ));

        let negative = service
            .apply(&[QuantityChange {
                item_id: id,
                suggested_new_quantity: -1,
            }])
            .await;
        assert!(matches!(
            negative,
            Err(ConsumptionError::Domain(DomainError::Validation(_)))
        ));
        assert_eq!(store.current_quantity(id), Some(2));
    }

    #[tokio::test]
    async fn test_apply_store_failure_propagates() {
        let store = Arc::new(MemoryStore::new());
        let id = store.seed_item("Bread", 5, 5);
        store.fail_quantity_updates();
        let service = service(store.clone(), Arc::new(ScriptedClient::new(vec![])));

        let result = service
            .apply(&[QuantityChange {
                item_id: id,
                suggested_new_quantity: 1,
            }])
            .await;
        assert!(matches!(
            result,
            Err(ConsumptionError::Domain(DomainError::Repository(_)))
        ));
        assert_eq!(store.current_quantity(id), Some(5));
    }

    #[tokio::test]
    async fn test_eggs_and_milk_end_to_end() {
        let store = Arc::new(MemoryStore::new());
        let eggs = store.seed_item("Eggs", 12, 12);
        let milk = store.seed_item("Milk", 2, 1);
        let client = Arc::new(ScriptedClient::new(vec![Ok(format!(
            r#"{{"consumed":[{{"id":{},"consumed":2}},{{"id":{},"consumed":1}}]}}"#,
            eggs, milk
        ))]));
        let service = service(store.clone(), client);

        let suggestions = service
            .infer("I ate 2 eggs and all the milk", &english(), Some("ollama"))
            .await
            .unwrap();
        let summary: Vec<(&str, i32)> = suggestions
            .iter()
            .map(|s| (s.item_name.as_str(), s.suggested_new_quantity))
            .collect();
        assert_eq!(summary, vec![("Eggs", 10), ("Milk", 0)]);

        let changes: Vec<QuantityChange> = suggestions
            .iter()
            .map(|s| QuantityChange {
                item_id: s.item_id,
                suggested_new_quantity: s.suggested_new_quantity,
            })
            .collect();
        service.apply(&changes).await.unwrap();

        assert_eq!(store.current_quantity(eggs), Some(10));
        assert_eq!(store.current_quantity(milk), Some(0));
    }
}
