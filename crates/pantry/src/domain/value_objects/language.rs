//! Language - Two-letter code selecting the prompt template

use serde::{Deserialize, Serialize};

/// Lower-case two-letter language code, `en` when nothing usable is given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub fn english() -> Self {
        Self("en".to_string())
    }

    /// Accepts `cs`, `CS`, `cs-CZ`, `en_US`; anything else falls back to English.
    pub fn parse(value: &str) -> Self {
        let code: String = value
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_ascii_lowercase();

        if code.len() == 2 {
            Self(code)
        } else {
            Self::english()
        }
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn is_english(&self) -> bool {
        self.0 == "en"
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
