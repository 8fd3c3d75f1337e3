//! Key/value session store trait (port)

use std::time::Duration;

use async_trait::async_trait;

use crate::error::DomainError;

/// Pass-through byte store. Expired entries read as absent.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError>;
    /// Empty keys or values are ignored. `None` ttl never expires.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<(), DomainError>;
    async fn delete(&self, key: &str) -> Result<(), DomainError>;
    async fn reset(&self) -> Result<(), DomainError>;
}
