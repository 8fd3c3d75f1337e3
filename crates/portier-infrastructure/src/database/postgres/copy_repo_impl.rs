// ============================================================================
// Portier Infrastructure - PostgreSQL Copy Repository
// File: crates/portier-infrastructure/src/database/postgres/copy_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use portier_shared::{EntityId, Pagination};
use sqlx::{FromRow, PgPool};

use portier_core::domain::{CopyChanges, KeyCopy, NewCopy};
use portier_core::error::DomainError;
use portier_core::repositories::CopyRepository;

use super::db_error;

pub struct PgCopyRepository {
    pool: PgPool,
}

impl PgCopyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CopyRow {
    pub id: i32,
    pub name: String,
    pub key_id: i32,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<i32>,
    pub is_active: bool,
}

impl From<CopyRow> for KeyCopy {
    fn from(row: CopyRow) -> Self {
        KeyCopy {
            id: row.id,
            name: row.name,
            key_id: row.key_id,
            created_at: row.created_at,
            created_by: row.created_by,
            is_active: row.is_active,
        }
    }
}

#[async_trait]
impl CopyRepository for PgCopyRepository {
    async fn list(&self, page: Pagination) -> Result<Vec<KeyCopy>, DomainError> {
        let rows: Vec<CopyRow> = sqlx::query_as(
            r#"
            SELECT id, name, key_id, created_at, created_by, is_active
            FROM copies
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing copies"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM copies")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("counting copies"))
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<KeyCopy>, DomainError> {
        let row: Option<CopyRow> = sqlx::query_as(
            r#"
            SELECT id, name, key_id, created_at, created_by, is_active
            FROM copies
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding copy by id"))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, copy: &NewCopy) -> Result<KeyCopy, DomainError> {
        let row: CopyRow = sqlx::query_as(
            r#"
            INSERT INTO copies (name, key_id, created_at, created_by, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, key_id, created_at, created_by, is_active
            "#
        )
        .bind(&copy.name)
        .bind(copy.key_id)
        .bind(copy.created_at)
        .bind(copy.created_by)
        .bind(copy.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating copy"))?;

        Ok(row.into())
    }

    async fn update(&self, id: EntityId, changes: &CopyChanges) -> Result<Option<KeyCopy>, DomainError> {
        // key_id is fixed at creation
        let row: Option<CopyRow> = sqlx::query_as(
            r#"
            UPDATE copies
            SET name = $2, is_active = $3
            WHERE id = $1
            RETURNING id, name, key_id, created_at, created_by, is_active
            "#
        )
        .bind(id)
        .bind(&changes.name)
        .bind(changes.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("updating copy"))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM copies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting copy"))?;

        Ok(())
    }
}
