//! Configuration management for the library catalog

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

/// Uniqueness policy applied by the catalog on insertion
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// When false, `add_book` rejects an ISBN already held by the catalog
    #[serde(default = "enabled")]
    pub allow_duplicate_isbn: bool,
    /// When false, `register_patron` rejects an id already registered
    #[serde(default = "enabled")]
    pub allow_duplicate_patron_id: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(environment())
            .set_override_option("logging.level", env::var("LOG_LEVEL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

/// LIBRARY_CATALOG__ALLOW_DUPLICATE_ISBN=false and friends
fn environment() -> Environment {
    Environment::with_prefix("LIBRARY")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

fn enabled() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            allow_duplicate_isbn: true,
            allow_duplicate_patron_id: true,
        }
    }
}
