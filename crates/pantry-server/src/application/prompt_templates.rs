//! Consumption prompt templates
//!
//! Templates live in `{dir}/{code}_consumption_analysis.txt`. A language
//! without its own file uses the English one, and the built-in template
//! covers a missing directory.

use std::path::PathBuf;

use pantry::{InventoryEntry, Language};

const BUILTIN_TEMPLATE: &str = r#"You keep a household inventory up to date.
Based on the inventory and the statement below, identify which items were consumed.
Only use ids from the inventory. Respond with JSON only, in this format:
{"consumed": [{"id": 1, "name": "item name", "consumed": 1}]}
If nothing was consumed, respond with {"consumed": []}
"#;

/// File-backed template lookup with a built-in fallback
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    dir: PathBuf,
}

impl PromptTemplates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, code: &str) -> PathBuf {
        self.dir.join(format!("{}_consumption_analysis.txt", code))
    }

    /// Instruction template for `language`
    pub async fn load(&self, language: &Language) -> String {
        let mut candidates = vec![self.path_for(language.code())];
        if !language.is_english() {
            candidates.push(self.path_for(Language::english().code()));
        }

        for path in candidates {
            match tokio::fs::read_to_string(&path).await {
                Ok(template) => return template,
                Err(e) => tracing::debug!("Prompt template {} unavailable: {}", path.display(), e),
            }
        }

        tracing::warn!(
            "⚠️  No prompt template for '{}' in {}, using built-in template",
            language,
            self.dir.display()
        );
        BUILTIN_TEMPLATE.to_string()
    }
}

/// Template, then the inventory snapshot as JSON, then the user's words verbatim
pub fn compose_prompt(template: &str, snapshot: &[InventoryEntry], user_text: &str) -> String {
    let inventory = serde_json::to_string(snapshot).unwrap_or_default();

    let mut prompt = String::with_capacity(template.len() + inventory.len() + user_text.len() + 128);
    prompt.push_str(template.trim_end());
    prompt.push_str("\n\n# Current inventory:\n");
    prompt.push_str(&inventory);
    prompt.push_str("\n\n# What the person said they consumed:\n");
    prompt.push_str(user_text);
    prompt.push('\n');
    prompt
}
