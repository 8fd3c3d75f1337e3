//! Key repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use portier_shared::{EntityId, Pagination};

use crate::domain::{Key, KeyChanges, NewKey};
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait KeyRepository: Send + Sync {
    async fn list(&self, page: Pagination) -> Result<Vec<Key>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Key>, DomainError>;
    async fn create(&self, key: &NewKey) -> Result<Key, DomainError>;
    async fn update(&self, id: EntityId, changes: &KeyChanges) -> Result<Option<Key>, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
