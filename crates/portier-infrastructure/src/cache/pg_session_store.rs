// ============================================================================
// Portier Infrastructure - PostgreSQL Session Store
// File: crates/portier-infrastructure/src/cache/pg_session_store.rs
// ============================================================================
//! Byte-oriented key/value store over a single table.
//!
//! Rows carry an absolute expiry in unix seconds (`e`), where 0 means the row
//! never expires. Expired rows are filtered on read and are never swept.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::debug;

use portier_core::error::DomainError;
use portier_core::repositories::SessionStore;

use crate::database::postgres::db_error;

pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Absolute expiry column value for a ttl relative to `now_secs`.
fn expiry_for(ttl: Option<Duration>, now_secs: i64) -> i64 {
    match ttl {
        Some(ttl) if !ttl.is_zero() => {
            let secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
            now_secs.saturating_add(secs.max(1))
        }
        _ => 0,
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        if key.is_empty() {
            return Ok(None);
        }

        sqlx::query_scalar("SELECT v FROM cache WHERE k = $1 AND (e = 0 OR e > $2)")
            .bind(key)
            .bind(Utc::now().timestamp())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("reading session entry"))
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<(), DomainError> {
        if key.is_empty() || value.is_empty() {
            debug!("Ignoring empty session write");
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO cache (k, v, e)
            VALUES ($1, $2, $3)
            ON CONFLICT (k) DO UPDATE SET v = EXCLUDED.v, e = EXCLUDED.e
            "#
        )
        .bind(key)
        .bind(value)
        .bind(expiry_for(ttl, Utc::now().timestamp()))
        .execute(&self.pool)
        .await
        .map_err(db_error("writing session entry"))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        if key.is_empty() {
            return Ok(());
        }

        sqlx::query("DELETE FROM cache WHERE k = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting session entry"))?;

        Ok(())
    }

    async fn reset(&self) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM cache")
            .execute(&self.pool)
            .await
            .map_err(db_error("resetting session store"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_ttl_never_expires() {
        assert_eq!(expiry_for(None, 1_000), 0);
        assert_eq!(expiry_for(Some(Duration::ZERO), 1_000), 0);
    }

    #[test]
    fn test_ttl_is_absolute() {
        assert_eq!(expiry_for(Some(Duration::from_secs(60)), 1_000), 1_060);
    }

    #[test]
    fn test_sub_second_ttl_rounds_up() {
        assert_eq!(expiry_for(Some(Duration::from_millis(200)), 1_000), 1_001);
    }

    #[test]
    fn test_huge_ttl_saturates() {
        assert_eq!(expiry_for(Some(Duration::from_secs(u64::MAX)), 1_000), i64::MAX);
    }
}
