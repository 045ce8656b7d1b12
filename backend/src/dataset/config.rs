//! Engine configuration file support.
//!
//! Configuration is read from a TOML file and may be overridden by
//! environment variables (`DATASET_PATH`, `HOST`, `PORT`).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

/// Engine configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub cache: CacheSettings,
}

/// Data source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Memoization of query results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheSettings {
    #[serde(default)]
    pub enabled: bool,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("healthcare_dataset.csv")
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            EngineError::Load(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> EngineResult<Self> {
        toml::from_str(content)
            .map_err(|e| EngineError::Load(format!("Failed to parse config file: {}", e)))
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `insights.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> EngineResult<Option<Self>> {
        let search_paths = [
            PathBuf::from("insights.toml"),
            PathBuf::from("backend/insights.toml"),
            PathBuf::from("../insights.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration from {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Apply `DATASET_PATH`, `HOST` and `PORT` overrides.
    pub fn apply_env_overrides(mut self) -> EngineResult<Self> {
        if let Ok(path) = std::env::var("DATASET_PATH") {
            self.dataset.path = PathBuf::from(path);
        }
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| EngineError::Load(format!("Invalid PORT '{}': {}", port, e)))?;
        }
        Ok(self)
    }

    /// File configuration (or defaults) with environment overrides applied.
    pub fn resolve() -> EngineResult<Self> {
        Self::from_default_location()?
            .unwrap_or_default()
            .apply_env_overrides()
    }
}
