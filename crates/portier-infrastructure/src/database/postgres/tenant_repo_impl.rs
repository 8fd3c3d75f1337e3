// ============================================================================
// Portier Infrastructure - PostgreSQL Tenant Repository
// File: crates/portier-infrastructure/src/database/postgres/tenant_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use portier_shared::{EntityId, Pagination};
use sqlx::{FromRow, PgPool};
use tracing::info;

use portier_core::domain::{NewTenant, Tenant, TenantChanges};
use portier_core::error::DomainError;
use portier_core::repositories::TenantRepository;

use super::db_error;

pub struct PgTenantRepository {
    pool: PgPool,
}

impl PgTenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct TenantRow {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        Tenant {
            id: row.id,
            name: row.name,
            address: row.address,
            status: row.status,
            created_at: row.created_at,
            is_active: row.is_active,
        }
    }
}

#[async_trait]
impl TenantRepository for PgTenantRepository {
    async fn list(&self, page: Pagination) -> Result<Vec<Tenant>, DomainError> {
        let rows: Vec<TenantRow> = sqlx::query_as(
            r#"
            SELECT id, name, address, status, created_at, is_active
            FROM tenants
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing tenants"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tenants")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("counting tenants"))
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Tenant>, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(
            r#"
            SELECT id, name, address, status, created_at, is_active
            FROM tenants
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding tenant by id"))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, tenant: &NewTenant) -> Result<Tenant, DomainError> {
        info!("Creating tenant: {}", tenant.name);

        let row: TenantRow = sqlx::query_as(
            r#"
            INSERT INTO tenants (name, address, status, created_at, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, address, status, created_at, is_active
            "#
        )
        .bind(&tenant.name)
        .bind(&tenant.address)
        .bind(&tenant.status)
        .bind(tenant.created_at)
        .bind(tenant.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating tenant"))?;

        Ok(row.into())
    }

    async fn update(&self, id: EntityId, changes: &TenantChanges) -> Result<Option<Tenant>, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(
            r#"
            UPDATE tenants
            SET
                name = $2,
                address = $3,
                status = $4,
                is_active = COALESCE($5, is_active)
            WHERE id = $1
            RETURNING id, name, address, status, created_at, is_active
            "#
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.address)
        .bind(&changes.status)
        .bind(changes.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("updating tenant"))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM tenants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting tenant"))?;

        Ok(())
    }
}
