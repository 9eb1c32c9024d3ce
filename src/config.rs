//! Application settings read from `config.json` in the platform config
//! directory.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, ExportError},
    models::WeightUnit,
};

pub const APP_NAME: &str = "gymApp";
pub const CONFIG_FILE: &str = "config.json";
pub const DOCUMENTS_DIR: &str = "documents";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where workout files are exported. Defaults to a `documents` folder
    /// in the app's data directory.
    pub documents_dir: Option<PathBuf>,
    pub default_unit: WeightUnit,
    pub max_slider_weight: f64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            documents_dir: None,
            default_unit: WeightUnit::Kg,
            max_slider_weight: 100.0,
            log_level: "info".to_string(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

impl AppConfig {
    /// Location of the config file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|d| d.config_dir().join(CONFIG_FILE))
    }

    /// Reads config from `path`. A missing file is not an error and yields
    /// the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Reads config from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn documents_dir(&self) -> Result<PathBuf, ExportError> {
        if let Some(dir) = &self.documents_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|d| d.data_dir().join(DOCUMENTS_DIR))
            .ok_or(ExportError::NoDocumentsDir)
    }

    /// Slider upper bound, never below zero.
    pub fn slider_max(&self) -> f64 {
        self.max_slider_weight.max(0.0)
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
