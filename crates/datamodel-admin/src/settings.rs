//! Admin settings file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join("datamodel"))
}

pub fn data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .context("Could not determine data directory")
        .map(|p| p.join("datamodel"))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
    /// Catalog used when `--catalog` is not given
    pub catalog_path: Option<PathBuf>,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter used when RUST_LOG is unset
    pub default_filter: String,
    /// Directory for JSON log files; none disables file logging
    pub json_log_dir: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            default_filter: "warn,datamodel_core=info,datamodel_metadata_table=info,datamodel_admin=info"
                .to_string(),
            json_log_dir: None,
        }
    }
}

impl AdminSettings {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path()?)
    }

    /// Read settings from `path`, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        serde_json::from_str(&content).with_context(|| "Failed to parse settings JSON")
    }

    pub fn settings_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("settings.json"))
    }

    /// The catalog to open: the flag wins over the settings file, which wins
    /// over `<data_dir>/datamodel/catalog.json`.
    pub fn catalog_path(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = flag.or_else(|| self.catalog_path.clone()) {
            return Ok(path);
        }
        Ok(data_dir()?.join("catalog.json"))
    }
}
