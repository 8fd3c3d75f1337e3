// ============================================================================
// Portier Core - Tenant Service
// File: crates/portier-core/src/services/tenant_service.rs
// ============================================================================
//! Tenant CRUD with paginated listing

use std::sync::Arc;
use std::time::Duration;

use portier_shared::{EntityId, Pagination};
use tracing::info;

use crate::domain::{NewTenant, Tenant, TenantChanges};
use crate::error::DomainError;
use crate::pagination::{fetch_page, Page};
use crate::repositories::TenantRepository;

pub struct TenantService {
    repo: Arc<dyn TenantRepository>,
    list_timeout: Duration,
}

impl TenantService {
    pub fn new(repo: Arc<dyn TenantRepository>, list_timeout: Duration) -> Self {
        Self { repo, list_timeout }
    }

    pub async fn list(&self, page: Pagination) -> Result<Page<Tenant>, DomainError> {
        fetch_page(self.list_timeout, page, self.repo.list(page), self.repo.count()).await
    }

    pub async fn get(&self, id: EntityId) -> Result<Tenant, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "tenant", id })
    }

    pub async fn create(&self, tenant: NewTenant) -> Result<Tenant, DomainError> {
        let created = self.repo.create(&tenant).await?;
        info!("Tenant created: {}", created.id);
        Ok(created)
    }

    /// Overwrites the mutable columns. A missing id is not an error; the
    /// input is echoed back with the id filled in.
    pub async fn update(&self, id: EntityId, changes: TenantChanges) -> Result<Tenant, DomainError> {
        let updated = self.repo.update(id, &changes).await?;
        Ok(updated.unwrap_or_else(|| changes.echo(id)))
    }

    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        self.repo.delete(id).await
    }
}
