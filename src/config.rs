//! Configuration management for the biblioteca session

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub catalog_file: String,
    pub members_file: String,
    pub loans_file: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files, environment variables and CLI overrides
    pub fn load(
        data_dir: Option<String>,
        log_level: Option<String>,
    ) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix BIBLIOTECA_)
            .add_source(
                Environment::with_prefix("BIBLIOTECA")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override data directory from BIBLIOTECA_DATA_DIR env var if present
            .set_override_option("storage.data_dir", env::var("BIBLIOTECA_DATA_DIR").ok())?
            // CLI flags beat everything else
            .set_override_option("storage.data_dir", data_dir)?
            .set_override_option("logging.level", log_level)?
            .build()?;

        config.try_deserialize()
    }
}

impl StorageConfig {
    /// Storage rooted at `dir` with the default snapshot names.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }

    pub fn members_path(&self) -> PathBuf {
        self.data_dir.join(&self.members_file)
    }

    pub fn loans_path(&self) -> PathBuf {
        self.data_dir.join(&self.loans_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            catalog_file: "libros.json".to_string(),
            members_file: "usuarios.json".to_string(),
            loans_file: "prestamos.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "biblioteca.log".to_string(),
        }
    }
}
