//! Application configuration persisted as TOML under the `.namevox` root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings loaded from `config.toml`. Every field carries a serde default
/// so configs written by older builds keep parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Dataset document to load instead of the embedded demo catalog.
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
    /// Directory audio locators are resolved against.
    #[serde(default)]
    pub audio_root: Option<PathBuf>,
    /// File extension used when deriving audio locators.
    #[serde(default = "default_audio_ext")]
    pub audio_ext: String,
    /// Master output volume (0.0-1.0).
    #[serde(default = "default_volume")]
    pub volume: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            audio_root: None,
            audio_ext: default_audio_ext(),
            volume: default_volume(),
        }
    }
}

fn default_audio_ext() -> String {
    "mp3".to_string()
}

fn default_volume() -> f32 {
    1.0
}

/// Errors raised while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not resolve the application config directory: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Path of the config file inside the application root.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the persisted configuration, falling back to defaults when no file
/// exists yet.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    load_from_path(&path)
}

/// Load configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist configuration to disk, overwriting any previous contents.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_path()?;
    save_to_path(config, &path)
}

/// Save configuration to a specific path, creating parent directories as
/// needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(config)?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trips_through_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = AppConfig {
            dataset_path: Some(PathBuf::from("names.json")),
            audio_root: Some(PathBuf::from("/media/voice")),
            audio_ext: "ogg".to_string(),
            volume: 0.5,
        };
        save_to_path(&config, &path).unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "volume = 0.25\n").unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded.volume, 0.25);
        assert_eq!(loaded.audio_ext, "mp3");
        assert_eq!(loaded.dataset_path, None);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "future_feature = true\n").unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }
}
