use std::sync::Arc;

use portier_core::repositories::SessionStore;
use portier_core::services::{CopyService, KeyService, TenantService, UserService};
use portier_shared::config::AppConfig;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub tenants: Arc<TenantService>,
    pub users: Arc<UserService>,
    pub keys: Arc<KeyService>,
    pub copies: Arc<CopyService>,
    /// Shared key/value store for session data. No route reads it yet.
    pub sessions: Arc<dyn SessionStore>,
}

#[cfg(test)]
mod tests {
    use crate::testing::fixture;
    use portier_core::repositories::SessionStore;
    use std::time::Duration;

    #[tokio::test]
    async fn test_session_store_round_trip() {
        let sessions = fixture().state.sessions;

        sessions.set("sid-1", b"payload", Some(Duration::from_secs(60))).await.unwrap();
        assert_eq!(sessions.get("sid-1").await.unwrap(), Some(b"payload".to_vec()));

        sessions.delete("sid-1").await.unwrap();
        assert_eq!(sessions.get("sid-1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_session_store_ignores_empty_writes_and_resets() {
        let sessions = fixture().state.sessions;

        sessions.set("", b"payload", None).await.unwrap();
        sessions.set("sid-2", b"", None).await.unwrap();
        assert_eq!(sessions.get("sid-2").await.unwrap(), None);

        sessions.set("sid-3", b"x", None).await.unwrap();
        sessions.reset().await.unwrap();
        assert_eq!(sessions.get("sid-3").await.unwrap(), None);
    }
}
