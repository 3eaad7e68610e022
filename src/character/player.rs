use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// The player-controlled guardian.
///
/// `level` is always `xp / XP_PER_LEVEL + 1`; only the progression engine
/// changes `xp`, so it keeps the two in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub power: u32,
    pub gold: u32,
    pub xp: u32,
    pub level: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(BASE_PLAYER_NAME.to_string())
    }
}

impl Player {
    /// Creates a player with the fixed baseline stats.
    pub fn new(name: String) -> Self {
        Self {
            name,
            health: BASE_PLAYER_HEALTH,
            max_health: BASE_PLAYER_HEALTH,
            power: BASE_PLAYER_POWER,
            gold: BASE_PLAYER_GOLD,
            xp: 0,
            level: 1,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Restores health, never past `max_health`.
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Health as a 0-100 percentage for health bars.
    pub fn health_percent(&self) -> u32 {
        if self.max_health == 0 {
            return 0;
        }
        (self.health as u64 * 100 / self.max_health as u64) as u32
    }

    /// Back to baseline stats, keeping the name.
    pub fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.name));
    }
}

/// Level tier for a total amount of experience.
pub fn level_for_xp(xp: u32) -> u32 {
    xp / XP_PER_LEVEL + 1
}

/// Progress through the current level as (current, needed).
pub fn xp_progress(xp: u32) -> (u32, u32) {
    (xp % XP_PER_LEVEL, XP_PER_LEVEL)
}
