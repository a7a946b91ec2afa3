use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{heart, paths};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_source")]
    pub source: PathBuf,
    #[serde(default = "default_res_dir")]
    pub res_dir: PathBuf,
    #[serde(default = "default_master_size")]
    pub master_size: u32,
}

fn default_source() -> PathBuf {
    PathBuf::from(paths::DEFAULT_SOURCE)
}

fn default_res_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_RES_DIR)
}

fn default_master_size() -> u32 {
    heart::MASTER_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: default_source(),
            res_dir: default_res_dir(),
            master_size: default_master_size(),
        }
    }
}

impl Config {
    /// Load settings from `path`, or from `icons.yaml` in the working
    /// directory when present. Never writes a config file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_in(path, Path::new("."))
    }

    /// Same as [`Config::load`], looking for `icons.yaml` under `base_dir`.
    pub fn load_in(path: Option<&Path>, base_dir: &Path) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let fallback = base_dir.join(paths::DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(&fallback)?
                } else {
                    Config::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() {
            bail!("source path cannot be empty");
        }
        if self.res_dir.as_os_str().is_empty() {
            bail!("res_dir cannot be empty");
        }
        if self.master_size < 64 {
            bail!("master_size must be >= 64");
        }
        if self.master_size > 4096 {
            bail!("master_size must be <= 4096");
        }

        Ok(())
    }
}
