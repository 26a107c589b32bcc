use crate::error::{Result, TaskMapperError};
use crate::loader::DEFAULT_PATH_COLUMN;
use crate::matcher::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use task_mapper_common::ColumnMapping;

/// Default folder for mapped tables
pub const DEFAULT_OUTPUT_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where mapped tables are written
    pub output_dir: PathBuf,
    /// Fuzzy scores must be strictly above this
    pub threshold: f64,
    /// Scan result column holding the file path
    pub path_column: String,
    /// Default task table column names
    pub columns: ColumnMapping,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            threshold: DEFAULT_THRESHOLD,
            path_column: DEFAULT_PATH_COLUMN.into(),
            columns: ColumnMapping::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Missing file means defaults; a stored threshold outside 0-100 is rejected
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            validate_threshold(config.threshold)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TaskMapperError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("task-mapper").join("config.json"))
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.output_dir = dir;
        self.save()
    }

    pub fn set_threshold(&mut self, threshold: f64) -> Result<()> {
        validate_threshold(threshold)?;
        self.threshold = threshold;
        self.save()
    }
}

/// Threshold must be a score on the 0-100 scale
pub fn validate_threshold(threshold: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&threshold) {
        return Err(TaskMapperError::InvalidInput(format!(
            "threshold must be between 0 and 100, got {}",
            threshold
        )));
    }
    Ok(())
}
