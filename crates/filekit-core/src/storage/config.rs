use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HASHED_DIR_PREFIX, DEFAULT_HASHED_FILE_PREFIX, DEFAULT_TEMP_DIR_PREFIX,
    DEFAULT_TEMP_FILE_PREFIX,
};
use crate::storage::content::write_to_file;
use crate::storage::error::{FsError, Result};
use crate::storage::lifecycle::{create_hashed_dir, create_hashed_file};
use crate::storage::temp::TempSpace;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ConfigFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }
}

/// Naming and placement settings for the helpers that invent file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsConfig {
    /// Directory for temporary files; the platform temp dir when unset
    pub temp_root: Option<PathBuf>,
    pub temp_file_prefix: String,
    pub temp_dir_prefix: String,
    pub hashed_file_prefix: String,
    pub hashed_dir_prefix: String,
}

impl Default for FsConfig {
    fn default() -> Self {
        Self {
            temp_root: None,
            temp_file_prefix: DEFAULT_TEMP_FILE_PREFIX.to_string(),
            temp_dir_prefix: DEFAULT_TEMP_DIR_PREFIX.to_string(),
            hashed_file_prefix: DEFAULT_HASHED_FILE_PREFIX.to_string(),
            hashed_dir_prefix: DEFAULT_HASHED_DIR_PREFIX.to_string(),
        }
    }
}

impl FsConfig {
    /// Load a configuration file, choosing the format from its extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = Self::format_for(path)?;
        let data = fs::read_to_string(path).map_err(|e| FsError::io(e, "read_config", path))?;
        debug!("Loading {:?} configuration from {}", format, path.display());
        Self::deserialize(&data, format)
    }

    /// Write this configuration to `path` in the format its extension names
    pub fn save(&self, path: &Path) -> Result<()> {
        let format = Self::format_for(path)?;
        let data = self.serialize(format)?;
        write_to_file(path, &data)
    }

    /// Serialize to string based on format
    pub fn serialize(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|e| {
                FsError::Serialization { format: "json".into(), source: Box::new(e) }
            }),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| {
                FsError::Serialization { format: "yaml".into(), source: Box::new(e) }
            }),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| {
                FsError::Serialization { format: "toml".into(), source: Box::new(e) }
            }),
        }
    }

    /// Deserialize from string based on format
    pub fn deserialize(data: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Json => serde_json::from_str(data).map_err(|e| {
                FsError::Deserialization { format: "json".into(), source: Box::new(e) }
            }),
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => serde_yaml::from_str(data).map_err(|e| {
                FsError::Deserialization { format: "yaml".into(), source: Box::new(e) }
            }),
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => toml::from_str(data).map_err(|e| {
                FsError::Deserialization { format: "toml".into(), source: Box::new(e) }
            }),
        }
    }

    /// Temp-file helper rooted and named according to this configuration
    pub fn temp_space(&self) -> TempSpace {
        let root = self.temp_root.clone().unwrap_or_else(std::env::temp_dir);
        TempSpace::new(root)
            .with_file_prefix(&self.temp_file_prefix)
            .with_dir_prefix(&self.temp_dir_prefix)
    }

    /// Create a hash-named file in `dir` using the configured prefix
    pub fn create_hashed_file(&self, dir: &Path, hash: i32) -> Result<PathBuf> {
        create_hashed_file(dir, hash, &self.hashed_file_prefix)
    }

    /// Create a hash-named directory in `dir` using the configured prefix
    pub fn create_hashed_dir(&self, dir: &Path, hash: i32) -> Result<PathBuf> {
        create_hashed_dir(dir, hash, &self.hashed_dir_prefix)
    }

    fn format_for(path: &Path) -> Result<ConfigFormat> {
        ConfigFormat::from_path(path)
            .ok_or_else(|| FsError::UnsupportedConfigFormat(path.display().to_string()))
    }
}
