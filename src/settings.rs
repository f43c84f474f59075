//! User preferences
//!
//! Persisted separately from ritual results, under `SETTINGS_KEY`.

use serde::{Deserialize, Serialize};

use crate::persistence::{self, PersistenceStore, SETTINGS_KEY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Ambient sound on/off
    #[serde(default = "default_true")]
    pub sound_enabled: bool,
    /// Skip confetti and screen flashes on reveal
    #[serde(default)]
    pub reduced_motion: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults when missing or unreadable
    pub fn load<S: PersistenceStore + ?Sized>(store: &S) -> Self {
        match persistence::load_json(store, SETTINGS_KEY) {
            Some(settings) => {
                log::info!("Loaded settings");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings. Failures are logged, never fatal.
    pub fn save<S: PersistenceStore + ?Sized>(&self, store: &mut S) {
        match persistence::save_json(store, SETTINGS_KEY, self) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Failed to save settings: {}", e),
        }
    }

    /// Flip the sound flag, returning the new value
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Icon shown on the sound control
    pub fn sound_icon(&self) -> &'static str {
        if self.sound_enabled { "🔊" } else { "🔇" }
    }

    /// Whether the renderer should play the reveal celebration
    pub fn celebrate_reveal(&self) -> bool {
        !self.reduced_motion
    }
}
