//! Configuration loading

use std::path::{Path, PathBuf};

use spotlight_core::StageConfig;

/// File name looked up inside the application's config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

const APP_DIR_NAME: &str = "spotlight-stage";

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Deserialize(#[from] ron::error::SpannedError),
}

/// Loads the stage configuration, falling back to defaults.
pub struct ConfigManager {
    config: StageConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load from the OS-standard location. Failures are logged and the
    /// defaults are used.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        let config = match config_path.as_deref() {
            Some(path) => Self::load_or_default(path),
            None => {
                tracing::warn!("No configuration directory available, using defaults");
                StageConfig::default()
            }
        };

        Self {
            config,
            config_path,
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    fn load_or_default(path: &Path) -> StageConfig {
        match Self::load_from_path(path) {
            Ok(Some(config)) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Ok(None) => {
                tracing::info!("No config file found, using defaults");
                StageConfig::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring config file: {}", e);
                StageConfig::default()
            }
        }
    }

    /// Read a config file. A missing file is not an error.
    pub fn load_from_path(path: &Path) -> Result<Option<StageConfig>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&content).map(Some)
    }

    /// Parse RON text into a config. Missing fields keep their defaults.
    pub fn parse(content: &str) -> Result<StageConfig, ConfigError> {
        let config: StageConfig = ron::from_str(content)?;
        if config.version > StageConfig::CURRENT_VERSION {
            tracing::warn!(
                "Config version {} is newer than supported version {}",
                config.version,
                StageConfig::CURRENT_VERSION
            );
        }
        Ok(config)
    }

    /// Get a reference to the current configuration
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Where the configuration was looked up, for display purposes.
    pub fn path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            config: StageConfig::default(),
            config_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config = ConfigManager::parse(
            "(params: (animate_lights: true, light_spacing: 3.0), lights: (intensity: 0.5))",
        )
        .unwrap();

        assert!(config.params.animate_lights);
        assert_eq!(config.params.light_spacing, 3.0);
        assert_eq!(config.params.cylinder_spacing, 1.5);
        assert_eq!(config.lights.intensity, 0.5);
        assert_eq!(config.lights.shadow_map_size, 2048);
        assert_eq!(config.camera.fov_degrees, 27.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = ConfigManager::parse("(params: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialize(_)));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("spotlight-stage-missing/config.ron");
        assert!(matches!(ConfigManager::load_from_path(&path), Ok(None)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("spotlight-stage-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, "(max_pixel_ratio: 1.0, controls: (enable_damping: false))").unwrap();

        let config = ConfigManager::load_from_path(&path).unwrap().unwrap();
        assert_eq!(config.max_pixel_ratio, 1.0);
        assert!(!config.controls.enable_damping);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_default_manager_has_default_config() {
        let manager = ConfigManager::default();
        assert_eq!(manager.config(), &StageConfig::default());
        assert!(manager.path().is_none());
    }
}
