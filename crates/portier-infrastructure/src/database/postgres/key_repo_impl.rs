// ============================================================================
// Portier Infrastructure - PostgreSQL Key Repository
// File: crates/portier-infrastructure/src/database/postgres/key_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use portier_shared::{EntityId, Pagination};
use sqlx::{FromRow, PgPool};

use portier_core::domain::{Key, KeyChanges, NewKey};
use portier_core::error::DomainError;
use portier_core::repositories::KeyRepository;

use super::db_error;

pub struct PgKeyRepository {
    pool: PgPool,
}

impl PgKeyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct KeyRow {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<i32>,
    pub is_active: bool,
}

impl From<KeyRow> for Key {
    fn from(row: KeyRow) -> Self {
        Key {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            created_by: row.created_by,
            is_active: row.is_active,
        }
    }
}

#[async_trait]
impl KeyRepository for PgKeyRepository {
    async fn list(&self, page: Pagination) -> Result<Vec<Key>, DomainError> {
        let rows: Vec<KeyRow> = sqlx::query_as(
            r#"
            SELECT id, name, created_at, created_by, is_active
            FROM keys
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing keys"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM keys")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("counting keys"))
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Key>, DomainError> {
        let row: Option<KeyRow> = sqlx::query_as(
            "SELECT id, name, created_at, created_by, is_active FROM keys WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding key by id"))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, key: &NewKey) -> Result<Key, DomainError> {
        let row: KeyRow = sqlx::query_as(
            r#"
            INSERT INTO keys (name, created_at, created_by, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, created_at, created_by, is_active
            "#
        )
        .bind(&key.name)
        .bind(key.created_at)
        .bind(key.created_by)
        .bind(key.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating key"))?;

        Ok(row.into())
    }

    async fn update(&self, id: EntityId, changes: &KeyChanges) -> Result<Option<Key>, DomainError> {
        let row: Option<KeyRow> = sqlx::query_as(
            r#"
            UPDATE keys
            SET name = $2, is_active = $3
            WHERE id = $1
            RETURNING id, name, created_at, created_by, is_active
            "#
        )
        .bind(id)
        .bind(&changes.name)
        .bind(changes.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("updating key"))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM keys WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting key"))?;

        Ok(())
    }
}
