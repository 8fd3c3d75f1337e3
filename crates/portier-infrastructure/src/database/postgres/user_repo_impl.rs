// ============================================================================
// Portier Infrastructure - PostgreSQL User Repository
// File: crates/portier-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use portier_shared::{EntityId, Pagination};
use sqlx::{FromRow, PgPool};
use tracing::{debug, info};

use portier_core::domain::{NewUser, User, UserChanges, UserFilter};
use portier_core::error::DomainError;
use portier_core::pagination::contains_pattern;
use portier_core::repositories::UserRepository;

use super::db_error;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub gender: bool,
    pub id_number: String,
    pub user_image: String,
    pub tenant_id: i32,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            email: row.email,
            password: row.password,
            name: row.name,
            gender: row.gender,
            id_number: row.id_number,
            user_image: row.user_image,
            tenant_id: row.tenant_id,
            created_at: row.created_at,
            is_active: row.is_active,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list(&self, page: Pagination, filter: &UserFilter) -> Result<Vec<User>, DomainError> {
        debug!("Listing users with filter {:?}", filter);

        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, password, name, gender, id_number,
                   user_image, tenant_id, created_at, is_active
            FROM users
            WHERE name ILIKE $3 AND id_number ILIKE $4
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#
        )
        .bind(page.limit)
        .bind(page.offset)
        .bind(contains_pattern(filter.name.as_deref()))
        .bind(contains_pattern(filter.id_number.as_deref()))
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing users"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self, filter: &UserFilter) -> Result<i64, DomainError> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE name ILIKE $1 AND id_number ILIKE $2"
        )
        .bind(contains_pattern(filter.name.as_deref()))
        .bind(contains_pattern(filter.id_number.as_deref()))
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("counting users"))
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, email, password, name, gender, id_number,
                   user_image, tenant_id, created_at, is_active
            FROM users
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("finding user by id"))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        info!("Creating user: {}", user.username);

        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (
                username, email, password, name, gender, id_number,
                user_image, tenant_id, created_at, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, username, email, password, name, gender, id_number,
                      user_image, tenant_id, created_at, is_active
            "#
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(user.gender)
        .bind(&user.id_number)
        .bind(&user.user_image)
        .bind(user.tenant_id)
        .bind(user.created_at)
        .bind(user.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("creating user"))?;

        Ok(row.into())
    }

    async fn update(&self, id: EntityId, changes: &UserChanges) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            UPDATE users
            SET
                username = $2,
                email = $3,
                password = COALESCE($4, password),
                name = $5,
                gender = $6,
                id_number = $7,
                user_image = $8,
                tenant_id = COALESCE($9, tenant_id),
                is_active = COALESCE($10, is_active)
            WHERE id = $1
            RETURNING id, username, email, password, name, gender, id_number,
                      user_image, tenant_id, created_at, is_active
            "#
        )
        .bind(id)
        .bind(&changes.username)
        .bind(&changes.email)
        .bind(changes.password_hash.as_deref())
        .bind(&changes.name)
        .bind(changes.gender)
        .bind(&changes.id_number)
        .bind(&changes.user_image)
        .bind(changes.tenant_id)
        .bind(changes.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("updating user"))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting user"))?;

        Ok(())
    }
}
