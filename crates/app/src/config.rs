use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use common::folder::Folder;
use common::gateway::seed_folders;
use common::tree::flatten;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "folder-picker.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulated gateway latency, in milliseconds
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Quiet period before search input is applied, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// JSON file holding the seed forest.
    ///  If not set the built-in demo forest is served
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
    /// Serve no forest at all, so every fetch fails
    #[serde(default)]
    pub missing_seed: bool,
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_latency_ms() -> u64 {
    250
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            debounce_ms: default_debounce_ms(),
            seed_path: None,
            missing_seed: false,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load the config file at `path`.
    ///
    /// Without a path, `folder-picker.toml` in the working directory is
    ///  used if present, and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::MissingFile(path.to_path_buf()));
                }
                path.to_path_buf()
            }
            None => {
                let default_path = PathBuf::from(CONFIG_FILE_NAME);
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let config_toml = fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;
        Ok(config)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn log_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    /// The forest the gateway should serve, `None` for no forest at all
    pub fn seed(&self) -> Result<Option<Vec<Folder>>, ConfigError> {
        if self.missing_seed {
            return Ok(None);
        }
        match &self.seed_path {
            Some(path) => {
                let seed_json = fs::read_to_string(path)?;
                let seed: Vec<Folder> = serde_json::from_str(&seed_json)?;
                let mut keys = BTreeSet::new();
                for folder in flatten(&seed) {
                    if !keys.insert(folder.key.as_str()) {
                        return Err(ConfigError::DuplicateKey(folder.key.clone()));
                    }
                }
                Ok(Some(seed))
            }
            None => Ok(Some(seed_folders())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing config file: {0}")]
    MissingFile(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("seed JSON error: {0}")]
    SeedJson(#[from] serde_json::Error),

    #[error("duplicate folder key in seed: {0}")]
    DuplicateKey(String),
}
