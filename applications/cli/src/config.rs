/// CLI configuration
use serde::{Deserialize, Serialize};
use setlist_history::HistoryConfig;
use std::path::{Path, PathBuf};

/// Default config file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "setlist.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_backend")]
    pub backend: Backend,

    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_scope")]
    pub scope: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Sqlite,
    File,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `path` (or `setlist.toml` if present), then applies `SETLIST_`
    /// environment overrides, e.g. `SETLIST_STORAGE__SCOPE=work` or
    /// `SETLIST_HISTORY__MAX_DEPTH=100`.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut settings = config::Config::builder();

        let config_path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);
        if path.is_some() || config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("SETLIST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        settings.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.storage.scope.trim().is_empty() {
            return Err("storage scope must not be empty (set SETLIST_STORAGE__SCOPE)".to_string());
        }

        if self.storage.backend == Backend::Sqlite && self.storage.database_url.is_empty() {
            return Err("database_url is required for the sqlite backend".to_string());
        }

        Ok(())
    }
}

// Default values
fn default_storage() -> StorageSettings {
    StorageSettings {
        backend: default_backend(),
        database_url: default_database_url(),
        data_dir: default_data_dir(),
        scope: default_scope(),
    }
}

fn default_backend() -> Backend {
    Backend::Sqlite
}

fn default_database_url() -> String {
    "sqlite://./data/setlist.db".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_scope() -> String {
    "default".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            history: HistoryConfig::default(),
        }
    }
}
