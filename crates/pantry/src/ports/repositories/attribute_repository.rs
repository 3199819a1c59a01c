//! Attribute Repository Port
//!
//! Abstract interface for Tag and Location persistence. Both kinds share
//! one shape, so one trait serves both; every call names its kind.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Attribute, AttributeKind, NewAttribute};

/// Repository interface for Tags and Locations
#[async_trait]
pub trait AttributeRepository: Send + Sync {
    /// Find all attributes of a kind, ordered by name
    async fn find_all(&self, kind: AttributeKind) -> Result<Vec<Attribute>, DomainError>;

    /// Find an attribute by ID
    async fn find_by_id(&self, kind: AttributeKind, id: i64)
        -> Result<Option<Attribute>, DomainError>;

    /// Find an attribute by its unique name
    async fn find_by_name(
        &self,
        kind: AttributeKind,
        name: &str,
    ) -> Result<Option<Attribute>, DomainError>;

    /// Insert a new attribute
    async fn insert(&self, attribute: &NewAttribute) -> Result<Attribute, DomainError>;

    /// Update name, colour and emoji
    async fn update(&self, attribute: &Attribute) -> Result<Attribute, DomainError>;

    /// Delete an attribute by ID (item associations go with it)
    async fn delete(&self, kind: AttributeKind, id: i64) -> Result<bool, DomainError>;
}
