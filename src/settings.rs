//! Process settings
//!
//! Loaded once at startup from the JSON file named by `CHOCO_JUMP_SETTINGS`.
//! A missing variable means defaults; a broken file is fatal.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::TICKS_PER_SECOND;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Process settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gameplay balance
    pub tuning: Tuning,
    /// Fixed RNG seed (None = seed from the wall clock)
    pub seed: Option<u64>,

    // === Demo driver ===
    /// Ticks the headless driver runs before exiting
    pub demo_ticks: u64,
    /// Let the autopilot play (otherwise the player never jumps)
    pub autopilot: bool,
    /// Restart automatically after game over
    pub auto_restart: bool,

    // === Assets ===
    /// Asset root to verify at startup (None = skip asset loading)
    pub asset_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            seed: None,

            demo_ticks: 60 * TICKS_PER_SECOND as u64,
            autopilot: true,
            auto_restart: true,

            asset_dir: None,
        }
    }
}

impl Settings {
    /// Environment variable holding the settings file path
    pub const ENV_VAR: &'static str = "CHOCO_JUMP_SETTINGS";

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from the file named by [`Settings::ENV_VAR`], or defaults
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("{} not set, using default settings", Self::ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    /// Seed for this process: the pinned one, or the wall clock
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(crate::seed_from_clock)
    }
}
