// ============================================================================
// Portier Core - Copy Service
// File: crates/portier-core/src/services/copy_service.rs
// ============================================================================
//! Key copies; new copies default to the first key

use std::sync::Arc;
use std::time::Duration;

use portier_shared::{EntityId, Pagination};
use tracing::{debug, info, warn};

use crate::domain::{CopyChanges, KeyCopy, NewCopy};
use crate::error::DomainError;
use crate::pagination::{fetch_page, Page};
use crate::repositories::{CopyRepository, KeyRepository};

pub struct CopyService {
    copies: Arc<dyn CopyRepository>,
    keys: Arc<dyn KeyRepository>,
    list_timeout: Duration,
}

impl CopyService {
    pub fn new(
        copies: Arc<dyn CopyRepository>,
        keys: Arc<dyn KeyRepository>,
        list_timeout: Duration,
    ) -> Self {
        Self { copies, keys, list_timeout }
    }

    pub async fn list(&self, page: Pagination) -> Result<Page<KeyCopy>, DomainError> {
        fetch_page(self.list_timeout, page, self.copies.list(page), self.copies.count()).await
    }

    pub async fn get(&self, id: EntityId) -> Result<KeyCopy, DomainError> {
        self.copies
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "copy", id })
    }

    /// `key_id` of `None` (or non-positive) attaches the copy to the first key.
    pub async fn create(&self, name: String, key_id: Option<EntityId>) -> Result<KeyCopy, DomainError> {
        let key_id = match key_id.filter(|id| *id > 0) {
            Some(id) => id,
            None => self.first_key_id().await?,
        };

        let created = self.copies.create(&NewCopy::new(name, key_id)).await?;
        info!("Copy created: {} (key {})", created.id, created.key_id);
        Ok(created)
    }

    pub async fn update(&self, id: EntityId, name: String) -> Result<KeyCopy, DomainError> {
        let changes = CopyChanges::new(name);
        let updated = self.copies.update(id, &changes).await?;
        Ok(updated.unwrap_or_else(|| changes.echo(id)))
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.copies.delete(id).await
    }

    async fn first_key_id(&self) -> Result<EntityId, DomainError> {
        let keys = self.keys.list(Pagination::first()).await?;
        match keys.first() {
            Some(key) => {
                debug!("Defaulting new copy to key {}", key.id);
                Ok(key.id)
            }
            None => {
                warn!("Cannot create copy: no keys exist");
                Err(DomainError::DependencyMissing("key"))
            }
        }
    }
}
