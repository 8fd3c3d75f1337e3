// ============================================================================
// Portier Core - Key Service
// File: crates/portier-core/src/services/key_service.rs
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use portier_shared::{EntityId, Pagination};
use tracing::info;

use crate::domain::{Key, KeyChanges, NewKey};
use crate::error::DomainError;
use crate::pagination::{fetch_page, Page};
use crate::repositories::KeyRepository;

pub struct KeyService {
    repo: Arc<dyn KeyRepository>,
    list_timeout: Duration,
}

impl KeyService {
    pub fn new(repo: Arc<dyn KeyRepository>, list_timeout: Duration) -> Self {
        Self { repo, list_timeout }
    }

    pub async fn list(&self, page: Pagination) -> Result<Page<Key>, DomainError> {
        fetch_page(self.list_timeout, page, self.repo.list(page), self.repo.count()).await
    }

    pub async fn get(&self, id: EntityId) -> Result<Key, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "key", id })
    }

    /// Inserts an active key owned by the placeholder actor.
    pub async fn create(&self, name: String) -> Result<Key, DomainError> {
        let created = self.repo.create(&NewKey::new(name)).await?;
        info!("Key created: {}", created.id);
        Ok(created)
    }

    pub async fn update(&self, id: EntityId, name: String) -> Result<Key, DomainError> {
        let changes = KeyChanges::new(name);
        let updated = self.repo.update(id, &changes).await?;
        Ok(updated.unwrap_or_else(|| changes.echo(id)))
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.repo.delete(id).await
    }
}
