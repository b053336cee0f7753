//! Game settings and preferences
//!
//! Persisted as a small JSON file next to the executable's working
//! directory. Missing or unreadable files fall back to defaults; settings
//! are never a fatal error.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Mute everything
    pub muted: bool,
    /// Fixed RNG seed for reproducible runs; `None` derives one from the
    /// engine clock at startup
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "rain-catcher-settings.json";

    /// Load settings from a JSON file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("ignoring malformed settings file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as JSON. Failure is logged, not propagated.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("could not save settings to {}: {e}", path.display());
                }
            }
            Err(e) => log::warn!("could not serialize settings: {e}"),
        }
    }

    /// Effective sound-effect gain after master volume and mute
    pub fn sfx_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.sfx_volume * self.master_volume).clamp(0.0, 1.0)
        }
    }

    /// Effective music gain after master volume and mute
    pub fn music_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.music_volume * self.master_volume).clamp(0.0, 1.0)
        }
    }

    /// The seed to run with: the configured override, or one derived from
    /// the current time.
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
