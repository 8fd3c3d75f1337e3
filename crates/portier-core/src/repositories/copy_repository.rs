//! Copy repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use portier_shared::{EntityId, Pagination};

use crate::domain::{CopyChanges, KeyCopy, NewCopy};
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CopyRepository: Send + Sync {
    async fn list(&self, page: Pagination) -> Result<Vec<KeyCopy>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<KeyCopy>, DomainError>;
    async fn create(&self, copy: &NewCopy) -> Result<KeyCopy, DomainError>;
    async fn update(&self, id: EntityId, changes: &CopyChanges) -> Result<Option<KeyCopy>, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
