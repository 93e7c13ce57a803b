use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

use crate::application::DEFAULT_ANIMATION_FPS;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "TWENTY48_CONFIG";

/// File picked up from the working directory when the variable is unset
pub const DEFAULT_CONFIG_FILE: &str = "twenty48.toml";

/// Runtime settings. Every field is optional in the TOML file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Fixed seed for tile spawns; `None` uses OS entropy
    pub seed: Option<u64>,
    /// Animation frames per second
    pub animation_fps: f32,
    pub window: WindowConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            animation_fps: DEFAULT_ANIMATION_FPS,
            window: WindowConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 500,
            resizable: false,
        }
    }
}

impl GameConfig {
    /// Parse a configuration file
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&contents).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load from `$TWENTY48_CONFIG`, else `twenty48.toml` if it exists,
    /// else fall back to defaults
    pub fn load() -> Result<Self> {
        match Self::locate() {
            Some(path) => {
                info!("loading config from {}", path.display());
                Self::from_toml(path)
            }
            None => {
                info!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn locate() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.is_file().then_some(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.window.width, 400);
        assert_eq!(config.window.height, 500);
        assert_eq!(config.animation_fps, 60.0);
    }

    #[test]
    fn test_animation_rate_override() {
        let config = GameConfig::from_toml_str("animation_fps = 30.0").unwrap();
        assert_eq!(config.animation_fps, 30.0);
    }

    #[test]
    fn test_partial_window_table() {
        let config = GameConfig::from_toml_str("seed = 7\n[window]\nwidth = 600\n").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.window.width, 600);
        assert_eq!(config.window.height, 500);
        assert!(!config.window.resizable);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(GameConfig::from_toml_str("grid_size = 5").is_err());
    }

    #[test]
    fn test_error_names_the_file() {
        let dir = std::env::temp_dir().join(format!("twenty48-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "seed = \"not a number\"").unwrap();

        let err = GameConfig::from_toml(&path).unwrap_err();
        assert!(format!("{err}").contains("broken.toml"));

        let missing = GameConfig::from_toml(dir.join("missing.toml")).unwrap_err();
        assert!(format!("{missing}").contains("missing.toml"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
