//! Per-run statistics, accumulated from session events.

use crate::audio::Cue;
use crate::character::Player;
use crate::combat::CombatEvent;
use crate::core::SessionEvent;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RunOutcome {
    Victory,
    GameOver,
    /// Hit the action cap first.
    TimedOut,
}

/// Results of a single simulated session.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub outcome: RunOutcome,
    pub actions: u32,
    pub final_player: Player,
    pub monsters_defeated: u32,
    pub purchases: u32,
    pub gold_spent: u32,
    pub level_ups: u32,
    pub hits: u32,
    pub misses: u32,
    pub damage_taken: u32,
    pub cues: Vec<Cue>,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            outcome: RunOutcome::TimedOut,
            actions: 0,
            final_player: Player::default(),
            monsters_defeated: 0,
            purchases: 0,
            gold_spent: 0,
            level_ups: 0,
            hits: 0,
            misses: 0,
            damage_taken: 0,
            cues: Vec::new(),
        }
    }

    /// Folds one batch of session events into the counters.
    pub fn record(&mut self, events: &[SessionEvent]) {
        for event in events {
            match event {
                SessionEvent::Combat { event, .. } => {
                    match event {
                        CombatEvent::PlayerHit { .. } => self.hits += 1,
                        CombatEvent::PlayerMissed { .. } => self.misses += 1,
                        _ => {}
                    }
                    self.damage_taken += event.damage_taken();
                }
                SessionEvent::MonsterDefeated { .. } => self.monsters_defeated += 1,
                SessionEvent::LevelUp { .. } => self.level_ups += 1,
                SessionEvent::ItemPurchased { price, .. } => {
                    self.purchases += 1;
                    self.gold_spent += price;
                }
                _ => {}
            }
        }
    }

    pub fn cue_count(&self, cue: Cue) -> usize {
        self.cues.iter().filter(|&&c| c == cue).count()
    }

    pub fn hit_rate(&self) -> f64 {
        let swings = self.hits + self.misses;
        if swings == 0 {
            0.0
        } else {
            self.hits as f64 / swings as f64
        }
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}
