//! Session store backed by the `cache` table

mod pg_session_store;

pub use pg_session_store::PgSessionStore;
