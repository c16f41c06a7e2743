//! Configuration loading and management
//!
//! Values come from, in increasing priority: built-in defaults, an optional
//! YAML file named by `BOOKSHELF_CONFIG`, and environment variables (a `.env`
//! file is loaded first when present).
//!
//! | Variable    | Field           | Default     |
//! |-------------|-----------------|-------------|
//! | `HOST`      | `host`          | `0.0.0.0`   |
//! | `PORT`      | `port`          | `8000`      |
//! | `DB_HOST`   | `database_url`  | unset       |
//! | `DB_NAME`   | `database_name` | `bookshelf` |
//! | `VIEWS_DIR` | `views_dir`     | `views`     |
//! | `LOG_LEVEL` | `log_filter`    | `info`      |

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable naming an optional YAML configuration file
pub const CONFIG_FILE_VAR: &str = "BOOKSHELF_CONFIG";

/// Process configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Interface to bind
    pub host: String,

    /// TCP port to listen on
    pub port: u16,

    /// MongoDB connection string; the in-memory backend is used when unset
    pub database_url: Option<String>,

    /// Database used when the connection string names none
    pub database_name: String,

    /// Directory holding the static HTML pages
    pub views_dir: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Body of `GET /`
    pub greeting: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_url: None,
            database_name: "bookshelf".to_string(),
            views_dir: PathBuf::from("views"),
            log_filter: "info".to_string(),
            greeting: "Bookshelf".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("invalid config file {}", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load the process configuration: `.env`, optional YAML file, then environment
    pub fn load() -> Result<Self> {
        // A missing .env file is the normal case in production.
        let _ = dotenvy::dotenv();

        let base = match std::env::var(CONFIG_FILE_VAR) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };

        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply variable overrides looked up through `lookup`
    ///
    /// Empty values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(host) = get("HOST") {
            self.host = host;
        }
        if let Some(port) = get("PORT") {
            self.port = port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got '{}'", port))?;
        }
        if let Some(url) = get("DB_HOST") {
            self.database_url = Some(url);
        }
        if let Some(name) = get("DB_NAME") {
            self.database_name = name;
        }
        if let Some(dir) = get("VIEWS_DIR") {
            self.views_dir = PathBuf::from(dir);
        }
        if let Some(filter) = get("LOG_LEVEL") {
            self.log_filter = filter;
        }

        Ok(self)
    }

    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
