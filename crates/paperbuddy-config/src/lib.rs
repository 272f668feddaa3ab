//! Configuration file handling for the PaperBuddy starfield.
//!
//! Settings live in `config.toml` under the platform config directory. Every
//! key is optional; a missing file yields the defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use paperbuddy_core::{AnimationSpeed, Palette};
use serde::{Deserialize, Serialize};

/// Default number of stars.
pub const DEFAULT_STAR_COUNT: usize = 200;

/// Default target frame rate in Hz.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Upper bound on the star count.
pub const MAX_STAR_COUNT: usize = 10_000;

/// Upper bound on the frame rate.
pub const MAX_FRAME_RATE: u32 = 240;

const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
    #[error("frame_rate must be between 1 and {max}, got {0}", max = MAX_FRAME_RATE)]
    InvalidFrameRate(u32),
    #[error("star_count must be at most {max}, got {0}", max = MAX_STAR_COUNT)]
    TooManyStars(usize),
    #[error("could not determine a config directory for this platform")]
    NoConfigDir,
}

/// User-facing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of stars in the field.
    pub star_count: usize,
    /// Target frames per second.
    pub frame_rate: u32,
    /// Global drift speed.
    pub speed: AnimationSpeed,
    /// Fixed RNG seed; random when unset.
    pub seed: Option<u64>,
    /// Whether the hero text is drawn over the stars.
    pub show_hero: bool,
    /// Background and star colors.
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            frame_rate: DEFAULT_FRAME_RATE,
            speed: AnimationSpeed::default(),
            seed: None,
            show_hero: true,
            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Path of the config file for this platform.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "paperbuddy").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the platform config path, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()
    }

    /// Save to the platform config path.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            return Err(ConfigError::InvalidFrameRate(self.frame_rate));
        }
        if self.star_count > MAX_STAR_COUNT {
            return Err(ConfigError::TooManyStars(self.star_count));
        }
        Ok(self)
    }
}
