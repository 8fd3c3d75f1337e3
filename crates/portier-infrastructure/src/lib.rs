//! # Portier Infrastructure
//! 
//! Database and session-store implementations (adapters).

pub mod database;
pub mod cache;

pub use database::{
    create_pool, run_migrations, PgCopyRepository, PgKeyRepository, PgTenantRepository,
    PgUserRepository,
};
pub use cache::PgSessionStore;
