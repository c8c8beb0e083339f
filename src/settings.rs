use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const SETTINGS_PATH: &str = "snake_settings.json";

/// Optional presentation settings read from a JSON file at startup.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub sound_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid settings in {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut settings: Settings = serde_json::from_str(text)?;
        settings.sound_volume = settings.sound_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Playback volume after muting.
    pub fn volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.sound_volume }
    }
}
