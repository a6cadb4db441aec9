use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::OverflowMode;

pub const DEFAULT_PROMPT: &str = "Enter a positive integer: ";

/// Config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "factorial.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub prompt: PromptConfig,
    pub compute: ComputeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub text: String,
    /// Persist REPL history in the home directory
    pub history: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeConfig {
    pub overflow: OverflowMode,
}

impl Default for PromptConfig {
    fn default() -> Self {
        PromptConfig {
            text: DEFAULT_PROMPT.to_string(),
            history: true,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {:?}", path.as_ref()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path.as_ref()))?;

        tracing::debug!(path = ?path.as_ref(), "loaded config");
        Ok(config)
    }

    /// Load config from default locations
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path` if given, otherwise from the default locations
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load_default(),
        }
    }

    /// First existing config file: `./factorial.toml`, then the user config dir
    pub fn default_path() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join("factorial").join("config.toml"))
            .filter(|path| path.exists())
    }

    /// Save config to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;

        fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config to {:?}", path.as_ref()))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "Failed to serialize config")
    }
}
