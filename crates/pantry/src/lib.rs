//! Pantry Domain Library
//!
//! Core domain types and interfaces for the Pantry household inventory.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Item, Attribute, UserSettings, consumption records)
//!   - `value_objects/`: Immutable value types (AttributeKind, ProviderKind, Language)
//!   - `services/`: Pure functions (attribute classifier, response normalizer)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces (text completion)
//!
//! # Usage
//!
//! ```rust,ignore
//! use pantry::domain::{Item, ProviderKind};
//! use pantry::ports::{ItemRepository, CompletionClient};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    classify, normalize, AppliedChange, Attribute, AttributeDefaults, AttributeKind,
    AttributeStyle, ConsumptionCandidate, ConsumptionError, ConsumptionSuggestion, DomainError,
    InventoryEntry, Item, Language, NewAttribute, NewItem, NormalizedResponse, ProviderKind,
    QuantityChange, ShoppingList, ShoppingListLine, UserSettings,
};
pub use ports::{AttributeRepository, CompletionClient, ItemRepository, SettingsRepository};
