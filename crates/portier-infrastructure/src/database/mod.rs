//! Database module (PostgreSQL adapters)

pub mod connection;
pub mod postgres;

pub use connection::{create_pool, run_migrations, MigrationError};
pub use postgres::{PgCopyRepository, PgKeyRepository, PgTenantRepository, PgUserRepository};
