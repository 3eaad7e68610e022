//! Per-session monster roster.

use super::data::{Monster, MONSTER_DEFS};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The monsters available in one session. Each session owns its roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    monsters: Vec<Monster>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Builds the full-health roster from the static definitions.
    pub fn new() -> Self {
        Self {
            monsters: MONSTER_DEFS.iter().map(|def| def.spawn()).collect(),
        }
    }

    pub fn from_monsters(monsters: Vec<Monster>) -> Self {
        Self { monsters }
    }

    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Monster> {
        self.monsters.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Monster> {
        self.monsters.get_mut(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.monsters.iter().position(|m| m.name == name)
    }

    /// Indices of monsters that can still be challenged.
    pub fn alive_indices(&self) -> Vec<usize> {
        self.monsters
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_alive())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn all_defeated(&self) -> bool {
        self.monsters.iter().all(|m| !m.is_alive())
    }

    /// Picks a living monster uniformly at random.
    pub fn random_alive(&self, rng: &mut impl Rng) -> Option<usize> {
        let alive = self.alive_indices();
        if alive.is_empty() {
            return None;
        }
        Some(alive[rng.gen_range(0..alive.len())])
    }

    /// Restores every monster to full health.
    pub fn reset(&mut self) {
        for monster in &mut self.monsters {
            monster.reset_health();
        }
    }
}
