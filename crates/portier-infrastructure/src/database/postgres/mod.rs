//! PostgreSQL repository implementations

pub mod tenant_repo_impl;
pub mod user_repo_impl;
pub mod key_repo_impl;
pub mod copy_repo_impl;

pub use tenant_repo_impl::PgTenantRepository;
pub use user_repo_impl::PgUserRepository;
pub use key_repo_impl::PgKeyRepository;
pub use copy_repo_impl::PgCopyRepository;

use portier_core::DomainError;
use tracing::error;

/// Logs the failure with its context and wraps it as a domain error.
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        error!("Database error {}: {}", context, e);
        DomainError::DatabaseError(e.to_string())
    }
}
