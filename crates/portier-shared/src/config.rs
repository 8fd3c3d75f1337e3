//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::constants::DEFAULT_LIST_TIMEOUT_SECS;
use crate::error::AppError;
use crate::utils::expand_env;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    /// Connection string; `$VAR`/`${VAR}` references are expanded on load.
    #[serde(default)]
    pub dsn: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub list_timeout_secs: u64,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", env.as_str())?
            .set_default("app.name", "portier")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.max_connections", 10)?
            .set_default("database.acquire_timeout_secs", 3)?
            .set_default("database.list_timeout_secs", DEFAULT_LIST_TIMEOUT_SECS)?
            .set_default("database.run_migrations", true)?
            .set_default("cors.allowed_origins", vec!["*"])?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("PORTIER")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins"),
            )
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        debug!("Configuration loaded for environment '{}'", env);
        config.finalize()
    }

    /// Expands the DSN once and checks required values.
    fn finalize(mut self) -> Result<Self, AppError> {
        self.database.dsn = expand_env(&self.database.dsn);
        if self.database.dsn.trim().is_empty() {
            return Err(AppError::MissingConfig("database.dsn"));
        }
        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
