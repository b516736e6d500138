//! Configuration module
//!
//! Settings come from a TOML file (`~/.config/foodie-match/config.toml` by
//! default). Every section and field has a default, so a missing file or a
//! partial file is fine.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 5000
//!
//! [database]
//! path = "./foodie_match.db"
//!
//! [logging]
//! level = "info"
//! format = "text"
//!
//! [api]
//! status_codes = "typed"
//! swagger = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable that overrides `[database]` entirely.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Default config file location: `<config dir>/foodie-match/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("foodie-match")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
    pub api: ApiConfig,
}

impl AppConfig {
    /// Load from `path`. A file that does not exist yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown.
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Full connection URL; wins over `path` when set.
    pub url: Option<String>,
    /// SQLite file, created on first start.
    pub path: String,
    pub pool: PoolConfig,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            path: "./foodie_match.db".to_string(),
            pool: PoolConfig::default(),
        }
    }
}

impl DatabaseSettings {
    /// Resolve the connection URL: `DATABASE_URL`, then `url`, then `path`.
    pub fn connection_url(&self) -> String {
        self.resolve_url(std::env::var(DATABASE_URL_ENV).ok())
    }

    fn resolve_url(&self, env_url: Option<String>) -> String {
        env_url
            .filter(|u| !u.trim().is_empty())
            .or_else(|| self.url.clone())
            .unwrap_or_else(|| format!("sqlite://{}?mode=rwc", self.path))
    }
}

/// Connection pool sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: Option<u64>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 8,
            idle_timeout_secs: Some(300),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "foodie_match=debug,tower_http=info".
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub status_codes: StatusCodeMode,
    /// Serve Swagger UI at `/swagger-ui`.
    pub swagger: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            status_codes: StatusCodeMode::Typed,
            swagger: true,
        }
    }
}

/// How domain errors reach HTTP clients.
///
/// `Typed` answers 404 / 422 / 500 with a JSON error body. `Legacy` answers
/// every domain failure with a bare 500, for clients written against the
/// older service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCodeMode {
    #[default]
    Typed,
    Legacy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_section() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.server.address(), "0.0.0.0:5000");
        assert_eq!(cfg.api.status_codes, StatusCodeMode::Typed);
        assert!(cfg.api.swagger);
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert_eq!(cfg.database.pool.max_connections, 10);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            [server]
            port = 8080

            [api]
            status_codes = "legacy"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.api.status_codes, StatusCodeMode::Legacy);
        assert!(cfg.api.swagger);
        assert_eq!(cfg.database.path, "./foodie_match.db");
    }

    #[test]
    fn unknown_status_mode_is_rejected() {
        assert!(AppConfig::from_toml("[api]\nstatus_codes = \"loose\"").is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("foodie-match-does-not-exist.toml");
        let cfg = AppConfig::load(&path).unwrap();
        assert_eq!(cfg.server.port, 5000);
    }

    #[test]
    fn unreadable_toml_reports_path() {
        let path = std::env::temp_dir().join(format!(
            "foodie-match-bad-{}.toml",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("foodie-match-bad-"));
    }

    #[test]
    fn url_resolution_order() {
        let mut db = DatabaseSettings {
            path: "/var/lib/foodie.db".into(),
            ..Default::default()
        };
        assert_eq!(db.resolve_url(None), "sqlite:///var/lib/foodie.db?mode=rwc");

        db.url = Some("sqlite::memory:".into());
        assert_eq!(db.resolve_url(None), "sqlite::memory:");

        assert_eq!(
            db.resolve_url(Some("sqlite://./env.db".into())),
            "sqlite://./env.db"
        );
        assert_eq!(db.resolve_url(Some("  ".into())), "sqlite::memory:");
    }
}
