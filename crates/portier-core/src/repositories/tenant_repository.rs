//! Tenant repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use portier_shared::{EntityId, Pagination};

use crate::domain::{NewTenant, Tenant, TenantChanges};
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Page of tenants ordered by ascending id.
    async fn list(&self, page: Pagination) -> Result<Vec<Tenant>, DomainError>;
    async fn count(&self) -> Result<i64, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Tenant>, DomainError>;
    async fn create(&self, tenant: &NewTenant) -> Result<Tenant, DomainError>;
    /// `Ok(None)` when no row has this id.
    async fn update(&self, id: EntityId, changes: &TenantChanges) -> Result<Option<Tenant>, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<(), DomainError>;
}
