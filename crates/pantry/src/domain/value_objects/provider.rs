//! ProviderKind - Text-completion backend selection

use serde::{Deserialize, Serialize};

use crate::domain::errors::ConsumptionError;

/// Completion backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Completion service on the local network (Ollama)
    LocalCompletion,
    /// Hosted cloud model API (Gemini)
    HostedCompletion,
}

impl ProviderKind {
    /// Resolve the configured provider selection.
    ///
    /// Unset, blank and unknown values are all `UnsupportedProvider`; this is
    /// evaluated per call so that a bad setting never prevents startup.
    pub fn resolve(selection: Option<&str>) -> Result<Self, ConsumptionError> {
        match selection.map(str::trim) {
            None | Some("") => Err(ConsumptionError::UnsupportedProvider(
                "<unset>".to_string(),
            )),
            Some(value) => value.parse(),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::LocalCompletion => write!(f, "ollama"),
            ProviderKind::HostedCompletion => write!(f, "gemini"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = ConsumptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ollama" | "local" => Ok(ProviderKind::LocalCompletion),
            "gemini" | "hosted" => Ok(ProviderKind::HostedCompletion),
            _ => Err(ConsumptionError::UnsupportedProvider(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_known_providers() {
        assert_eq!(
            ProviderKind::resolve(Some("Ollama")).unwrap(),
            ProviderKind::LocalCompletion
        );
        assert_eq!(
            ProviderKind::resolve(Some(" gemini ")).unwrap(),
            ProviderKind::HostedCompletion
        );
        assert_eq!(
            "hosted".parse::<ProviderKind>().unwrap(),
            ProviderKind::HostedCompletion
        );
    }

    #[test]
    fn test_unset_and_unknown_are_unsupported() {
        assert!(matches!(
            ProviderKind::resolve(None),
            Err(ConsumptionError::UnsupportedProvider(_))
        ));
        assert!(matches!(
            ProviderKind::resolve(Some("  ")),
            Err(ConsumptionError::UnsupportedProvider(_))
        ));
        assert!(matches!(
            ProviderKind::resolve(Some("openai")),
            Err(ConsumptionError::UnsupportedProvider(name)) if name == "openai"
        ));
    }
}
