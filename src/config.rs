//! Session configuration, stored at ~/.guardian/config.json.

use crate::core::constants::*;
use crate::utils::persistence::{data_path, load_json_or_default, save_json};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Player-facing settings. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub player_name: String,
    /// Lines kept in a battle log.
    pub log_capacity: usize,
    /// Lines shown in the battle log panel.
    pub log_window: usize,
    pub muted: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_name: BASE_PLAYER_NAME.to_string(),
            log_capacity: BATTLE_LOG_CAPACITY,
            log_window: BATTLE_LOG_WINDOW,
            muted: false,
        }
    }
}

impl SessionConfig {
    /// Loads ~/.guardian/config.json, or defaults if it is missing or unreadable.
    pub fn load() -> Self {
        match data_path(CONFIG_FILE_NAME) {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!(error = %e, "no config directory, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let config: Self = load_json_or_default(path);
        config.sanitized()
    }

    pub fn save(&self) -> io::Result<()> {
        self.save_to(&data_path(CONFIG_FILE_NAME)?)
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        save_json(path, self)
    }

    /// Fixes values a hand-edited file could break.
    fn sanitized(mut self) -> Self {
        if self.player_name.trim().is_empty() {
            self.player_name = BASE_PLAYER_NAME.to_string();
        }
        self.log_capacity = self.log_capacity.max(1);
        self.log_window = self.log_window.clamp(1, self.log_capacity);
        self
    }
}
