use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use portier_api::{build_router, AppState};
use portier_core::services::{CopyService, KeyService, TenantService, UserService};
use portier_infrastructure::{
    create_pool, run_migrations, PgCopyRepository, PgKeyRepository, PgSessionStore,
    PgTenantRepository, PgUserRepository,
};
use portier_shared::config::AppConfig;
use portier_shared::utils::mask_dsn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    portier_shared::telemetry::init_telemetry();

    info!("Portier server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to database
    info!("Connecting to database at {}...", mask_dsn(&config.database.dsn));
    let pool = create_pool(&config.database).await?;
    info!("Database connection established.");

    if config.database.run_migrations {
        run_migrations(&pool).await?;
    }

    // Wire repositories and services
    let list_timeout = Duration::from_secs(config.database.list_timeout_secs);
    let tenant_repo = Arc::new(PgTenantRepository::new(pool.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let key_repo = Arc::new(PgKeyRepository::new(pool.clone()));
    let copy_repo = Arc::new(PgCopyRepository::new(pool.clone()));

    let state = AppState {
        db: pool.clone(),
        config: Arc::new(config.clone()),
        tenants: Arc::new(TenantService::new(tenant_repo.clone(), list_timeout)),
        users: Arc::new(UserService::new(user_repo, tenant_repo, list_timeout)),
        keys: Arc::new(KeyService::new(key_repo.clone(), list_timeout)),
        copies: Arc::new(CopyService::new(copy_repo, key_repo, list_timeout)),
        sessions: Arc::new(PgSessionStore::new(pool.clone())),
    };

    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting shutdown");
        }
    }
}
