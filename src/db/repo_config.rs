//! Configuration file support.
//!
//! Deployments describe the repository backend, the optional seed file and
//! the HTTP bind address in a `rota.toml` file. Environment variables
//! (`REPOSITORY_TYPE`, `ROTA_DATA`, `HOST`, `PORT`) take precedence at the
//! call sites that consume these settings.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;

/// Application configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotaConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub seed: SeedSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// Seed file settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedSettings {
    /// Path to a rota seed JSON document loaded into the repository at
    /// startup; absent means start empty.
    #[serde(default)]
    pub path: Option<String>,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
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

impl RotaConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: RotaConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load configuration from the default locations.
    ///
    /// Searches for `rota.toml` in the current directory and the parent
    /// directory.
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = [PathBuf::from("rota.toml"), PathBuf::from("../rota.toml")];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No rota.toml found in standard locations",
        ))
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }
}
