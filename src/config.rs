// Session configuration loaded from YAML

use crate::sort::SortConfig;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const APP_DIR: &str = "todolist";
const CONFIG_FILE: &str = "config.yaml";

/// Startup settings for a to-do session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    /// Start with the starter tasks instead of an empty list
    pub seed_defaults: bool,
    /// Sort config active when the session opens
    pub sort: SortConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_defaults: true,
            sort: SortConfig::default(),
        }
    }
}

impl Config {
    /// Default config location: `<config_dir>/todolist/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load config from `path`, falling back to defaults when the file is absent
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = ?path, "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content).with_context(|| format!("Failed to parse config file {}", path.display()))?;

        info!(path = ?path, "Loaded config");
        Ok(config)
    }

    /// Load from an explicit path, or the default location when `None`
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => match Self::default_path() {
                Some(p) => Self::load(p),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }
}
