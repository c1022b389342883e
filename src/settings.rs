//! Host settings
//!
//! Read from `settings.json` in the working directory. Missing or broken
//! files fall back to defaults; gameplay tuning lives in [`crate::consts`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::audio::AudioQueue;
use crate::debug::DebugState;
use crate::platform::PlatformError;

/// Default settings file name
pub const SETTINGS_FILE: &str = "settings.json";
/// Environment variable that overrides the RNG seed
pub const SEED_ENV: &str = "FLAPPY_SEED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; a time-based one is picked when absent
    pub seed: Option<u64>,
    /// Start with the collision overlay on
    pub show_collision_debugger: bool,
    /// Initial simulation speed multiplier
    pub sim_speed: f32,
    /// Simulated seconds the headless demo runs for
    pub demo_seconds: f32,
    /// Where the high score file lives
    pub data_dir: PathBuf,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            show_collision_debugger: false,
            sim_speed: 1.0,
            demo_seconds: 30.0,
            data_dir: PathBuf::from("data"),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Load `settings.json` and apply the seed override from the environment
    pub fn load() -> Self {
        let mut settings = Self::load_from(Path::new(SETTINGS_FILE));
        settings.apply_seed_override(std::env::var(SEED_ENV).ok().as_deref());
        settings
    }

    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Option<Self>, PlatformError> {
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), PlatformError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Replace the seed with `value` when it parses as a `u64`
    pub fn apply_seed_override(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };
        match value.trim().parse::<u64>() {
            Ok(seed) => {
                log::info!("Seed {} from {}", seed, SEED_ENV);
                self.seed = Some(seed);
            }
            Err(e) => log::warn!("Ignoring {}={:?}: {}", SEED_ENV, value, e),
        }
    }

    /// The configured seed, or one derived from the clock
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Push the volume settings into a sound queue
    pub fn apply_audio(&self, audio: &mut AudioQueue) {
        audio.set_master_volume(self.master_volume);
        audio.set_sfx_volume(self.sfx_volume);
        audio.set_muted(self.muted);
    }

    pub fn debug_state(&self) -> DebugState {
        let mut debug = DebugState {
            show_collision_debugger: self.show_collision_debugger,
            ..DebugState::default()
        };
        debug.set_sim_speed(self.sim_speed);
        debug
    }
}
