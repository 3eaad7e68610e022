//! Events produced by session operations.
//!
//! The presentation layer maps these to log panels, banners and sound. The
//! game logic never touches presentation types directly.

use crate::audio::Cue;
use crate::combat::{BattleAction, CombatEvent};
use crate::store::StoreItemId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    GameStarted {
        player_name: String,
    },

    // ── Battle ──────────────────────────────────────────────────
    /// A battle opened against a roster monster.
    MonsterAppeared {
        monster: String,
        message: String,
    },
    /// An action was accepted and is waiting to resolve.
    ActionStarted {
        action: BattleAction,
    },
    /// An action resolved.
    Combat {
        monster: String,
        event: CombatEvent,
        message: String,
    },
    MonsterDefeated {
        monster: String,
        gold_gained: u32,
        xp_gained: u32,
        message: String,
    },
    /// At most one per reward grant, however many levels were crossed.
    LevelUp {
        new_level: u32,
        levels_gained: u32,
        message: String,
    },
    ReturnedToMap,

    // ── Store ───────────────────────────────────────────────────
    ItemPurchased {
        item: StoreItemId,
        price: u32,
        message: String,
    },

    // ── Session ─────────────────────────────────────────────────
    Victory {
        message: String,
    },
    GameOver {
        message: String,
    },
    GameReset,
}

impl SessionEvent {
    /// Sound effect for this event, if any.
    pub fn cue(&self) -> Option<Cue> {
        match self {
            SessionEvent::ActionStarted { action } => Some(match action {
                BattleAction::Attack => Cue::Attack,
                BattleAction::Block | BattleAction::Flee => Cue::Block,
            }),
            SessionEvent::MonsterDefeated { .. } => Some(Cue::MonsterDefeat),
            SessionEvent::LevelUp { .. } => Some(Cue::LevelUp),
            SessionEvent::ItemPurchased { .. } => Some(Cue::Purchase),
            SessionEvent::Victory { .. } => Some(Cue::Victory),
            _ => None,
        }
    }

    /// Human-readable line, if the event carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            SessionEvent::MonsterAppeared { message, .. }
            | SessionEvent::Combat { message, .. }
            | SessionEvent::MonsterDefeated { message, .. }
            | SessionEvent::LevelUp { message, .. }
            | SessionEvent::ItemPurchased { message, .. }
            | SessionEvent::Victory { message }
            | SessionEvent::GameOver { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Cues for a batch of events, in order.
pub fn cues_for(events: &[SessionEvent]) -> Vec<Cue> {
    events.iter().filter_map(SessionEvent::cue).collect()
}
