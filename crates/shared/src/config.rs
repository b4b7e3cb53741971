//! Application configuration management.

use serde::Deserialize;

use crate::session::AccessPolicy;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration (required for the `postgres` backend).
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    /// Ledger storage backend.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Session lookup configuration.
    #[serde(default)]
    pub session: SessionConfig,
    /// Role gating configuration.
    #[serde(default)]
    pub access: AccessConfig,
    /// Log output configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations on startup.
    #[serde(default)]
    pub run_migrations: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Where ledger records live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// PostgreSQL through SeaORM.
    #[default]
    Postgres,
    /// Process-local maps; data is lost on restart.
    Memory,
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Selected backend.
    #[serde(default)]
    pub backend: StorageBackend,
}

/// Session configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Cookie carrying the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Token registered as a demo admin session with the memory backend.
    #[serde(default)]
    pub demo_token: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            demo_token: None,
        }
    }
}

fn default_cookie_name() -> String {
    "rxerp_session".to_string()
}

/// Role gating configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessConfig {
    /// Roles allowed to open the financial ledger.
    #[serde(default = "default_ledger_roles")]
    pub ledger_roles: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            ledger_roles: default_ledger_roles(),
        }
    }
}

fn default_ledger_roles() -> Vec<String> {
    vec!["Admin".into(), "Guest".into(), "Accountant".into()]
}

impl AccessConfig {
    /// Builds the ledger access policy.
    #[must_use]
    pub fn ledger_policy(&self) -> AccessPolicy {
        AccessPolicy::from_names(&self.ledger_roles)
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("RXERP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("access.ledger_roles")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Returns the database settings, failing if the selected backend needs them.
    ///
    /// # Errors
    ///
    /// Returns an error if the postgres backend is selected without a database URL.
    pub fn require_database(&self) -> Result<&DatabaseConfig, config::ConfigError> {
        self.database
            .as_ref()
            .ok_or_else(|| config::ConfigError::NotFound("database.url".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            [
                "RXERP__SERVER__PORT",
                "RXERP__STORAGE__BACKEND",
                "RXERP__DATABASE__URL",
                "RXERP__ACCESS__LEDGER_ROLES",
            ],
            || {
                let config = AppConfig::load().expect("defaults should load");
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.storage.backend, StorageBackend::Postgres);
                assert_eq!(config.session.cookie_name, "rxerp_session");
                assert_eq!(config.logging.format, LogFormat::Pretty);
                assert!(config.database.is_none());
                assert!(config.require_database().is_err());
                assert!(config.access.ledger_policy().permits(&Role::Accountant));
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("RXERP__SERVER__PORT", Some("9090")),
                ("RXERP__STORAGE__BACKEND", Some("memory")),
                ("RXERP__DATABASE__URL", Some("postgres://localhost/rxerp")),
                ("RXERP__ACCESS__LEDGER_ROLES", Some("admin,auditor")),
            ],
            || {
                let config = AppConfig::load().expect("env config should load");
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.storage.backend, StorageBackend::Memory);
                assert_eq!(
                    config.require_database().unwrap().url,
                    "postgres://localhost/rxerp"
                );
                let policy = config.access.ledger_policy();
                assert!(policy.permits(&Role::parse("Auditor")));
                assert!(!policy.permits(&Role::Guest));
            },
        );
    }
}
