use crate::character::Player;
use crate::core::constants::{BATTLE_LOG_CAPACITY, BATTLE_LOG_WINDOW};
use crate::monsters::Monster;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A player-initiated battle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleAction {
    Attack,
    Block,
    Flee,
}

impl BattleAction {
    pub fn all() -> [BattleAction; 3] {
        [BattleAction::Attack, BattleAction::Block, BattleAction::Flee]
    }

    pub fn label(&self) -> &'static str {
        match self {
            BattleAction::Attack => "Attack",
            BattleAction::Block => "Block",
            BattleAction::Flee => "Run Away",
        }
    }
}

/// What a single resolved action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatEvent {
    /// Attack landed on the monster.
    PlayerHit { damage: u32 },
    /// Attack missed and the monster struck back.
    PlayerMissed { counter_damage: u32 },
    BlockSucceeded,
    BlockFailed { damage: u32 },
    /// Fleeing always costs a monster hit.
    Fled { damage: u32 },
    /// Action against a defeated monster or by a defeated player. Nothing changed.
    Ignored,
}

impl CombatEvent {
    /// Damage the player took from this event.
    pub fn damage_taken(&self) -> u32 {
        match *self {
            CombatEvent::PlayerMissed { counter_damage } => counter_damage,
            CombatEvent::BlockFailed { damage } | CombatEvent::Fled { damage } => damage,
            _ => 0,
        }
    }

    /// Damage the monster took from this event.
    pub fn damage_dealt(&self) -> u32 {
        match *self {
            CombatEvent::PlayerHit { damage } => damage,
            _ => 0,
        }
    }

    /// Battle log line for this event.
    pub fn narrate(&self, monster_name: &str) -> String {
        match *self {
            CombatEvent::PlayerHit { damage } => {
                format!("You hit the {} for {} damage!", monster_name, damage)
            }
            CombatEvent::PlayerMissed { counter_damage } => format!(
                "You missed! The {} counterattacks for {} damage!",
                monster_name, counter_damage
            ),
            CombatEvent::BlockSucceeded => "Block successful! No damage taken.".to_string(),
            CombatEvent::BlockFailed { damage } => {
                format!("Block failed! You took {} damage.", damage)
            }
            CombatEvent::Fled { damage } => format!(
                "You ran from the {}, taking {} damage on the way out.",
                monster_name, damage
            ),
            CombatEvent::Ignored => format!("The {} is no longer a threat.", monster_name),
        }
    }
}

/// Updated combatants after one resolved action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub player: Player,
    pub monster: Monster,
    pub event: CombatEvent,
}

impl Resolution {
    pub fn log_line(&self) -> String {
        self.event.narrate(&self.monster.name)
    }
}

/// Rolling battle log. Oldest lines drop off once capacity is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for BattleLog {
    fn default() -> Self {
        Self::new(BATTLE_LOG_CAPACITY)
    }
}

impl BattleLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, message: String) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    /// The newest `window` lines, oldest first.
    pub fn visible(&self, window: usize) -> Vec<&str> {
        let skip = self.entries.len().saturating_sub(window);
        self.entries.iter().skip(skip).map(String::as_str).collect()
    }
}

/// The ephemeral encounter between the player and one roster monster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleSession {
    /// Roster index of the active monster.
    pub monster_index: usize,
    pub log: BattleLog,
    /// Set while an action is in flight; further actions are refused.
    pub animating: bool,
    pub pending: Option<BattleAction>,
    /// Rewards for defeating the active monster were granted.
    pub rewarded: bool,
    pub log_window: usize,
}

impl BattleSession {
    pub fn new(monster_index: usize, log_capacity: usize, log_window: usize) -> Self {
        Self {
            monster_index,
            log: BattleLog::new(log_capacity),
            animating: false,
            pending: None,
            rewarded: false,
            log_window,
        }
    }

    /// Lines shown in the battle log panel.
    pub fn visible_log(&self) -> Vec<&str> {
        self.log.visible(self.log_window)
    }
}

impl Default for BattleSession {
    fn default() -> Self {
        Self::new(0, BATTLE_LOG_CAPACITY, BATTLE_LOG_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_labels() {
        let labels: Vec<_> = BattleAction::all().iter().map(BattleAction::label).collect();
        assert_eq!(labels, vec!["Attack", "Block", "Run Away"]);
    }

    #[test]
    fn test_battle_log_drops_oldest() {
        let mut log = BattleLog::new(3);
        for i in 0..5 {
            log.push(format!("line {}", i));
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.visible(10), vec!["line 2", "line 3", "line 4"]);
        assert_eq!(log.last(), Some("line 4"));
    }

    #[test]
    fn test_battle_log_visible_window() {
        let mut log = BattleLog::new(20);
        for i in 0..8 {
            log.push(format!("line {}", i));
        }
        assert_eq!(
            log.visible(5),
            vec!["line 3", "line 4", "line 5", "line 6", "line 7"]
        );
    }

    #[test]
    fn test_battle_log_zero_capacity_keeps_one() {
        let mut log = BattleLog::new(0);
        log.push("a".to_string());
        log.push("b".to_string());
        assert_eq!(log.visible(5), vec!["b"]);
    }

    #[test]
    fn test_event_damage_accounting() {
        assert_eq!(CombatEvent::PlayerHit { damage: 20 }.damage_dealt(), 20);
        assert_eq!(CombatEvent::PlayerHit { damage: 20 }.damage_taken(), 0);
        assert_eq!(
            CombatEvent::PlayerMissed { counter_damage: 7 }.damage_taken(),
            7
        );
        assert_eq!(CombatEvent::Fled { damage: 4 }.damage_taken(), 4);
        assert_eq!(CombatEvent::BlockSucceeded.damage_taken(), 0);
    }

    #[test]
    fn test_narrate_mentions_monster() {
        let line = CombatEvent::PlayerHit { damage: 20 }.narrate("Worm");
        assert_eq!(line, "You hit the Worm for 20 damage!");
        assert!(CombatEvent::PlayerMissed { counter_damage: 3 }
            .narrate("Dragon")
            .contains("Dragon"));
    }

    #[test]
    fn test_new_battle_session_idle() {
        let battle = BattleSession::new(2, 20, 5);
        assert_eq!(battle.monster_index, 2);
        assert!(!battle.animating);
        assert!(battle.pending.is_none());
        assert!(!battle.rewarded);
        assert!(battle.visible_log().is_empty());
    }
}
