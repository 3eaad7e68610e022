//! Game session state machine.
//!
//! A [`Session`] owns one player and one roster. Phases move
//! `Menu -> Map -> Battling -> {Victory | GameOver}`, with `Battling -> Map`
//! on a successful escape or after a win, and `reset_game` returning to
//! `Menu` from anywhere. End conditions are re-checked after every mutating
//! operation.
//!
//! Operations that are not valid in the current phase return a
//! [`SessionError`] and leave the session untouched.

use crate::audio::{play_cues, track_for, CueSink, Track};
use crate::character::Player;
use crate::combat::{self, BattleAction, BattleSession, CombatEvent};
use crate::config::SessionConfig;
use crate::core::events::{cues_for, SessionEvent};
use crate::core::progression::grant_rewards;
use crate::monsters::{Monster, Roster};
use crate::store::{self, PurchaseError, StoreItemId};
use rand::Rng;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    /// World map: pick a monster or visit the store.
    Map,
    Battling(BattleSession),
    Victory,
    GameOver,
}

impl GamePhase {
    pub fn name(&self) -> &'static str {
        match self {
            GamePhase::Menu => "menu",
            GamePhase::Map => "map",
            GamePhase::Battling(_) => "battle",
            GamePhase::Victory => "victory",
            GamePhase::GameOver => "game over",
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GamePhase::Map | GamePhase::Battling(_))
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, GamePhase::Victory | GamePhase::GameOver)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {action} during {phase}")]
    WrongPhase {
        action: &'static str,
        phase: &'static str,
    },
    #[error("an action is already in progress")]
    Busy,
    #[error("no action is waiting to resolve")]
    NoPendingAction,
    #[error("unknown monster: {0}")]
    UnknownMonster(String),
    #[error("the {0} has already been defeated")]
    MonsterDefeated(String),
    #[error("the {0} is still standing")]
    MonsterStillStanding(String),
    #[error(transparent)]
    Purchase(#[from] PurchaseError),
}

impl SessionError {
    /// Sound for the rejection. Only a refused purchase is audible.
    pub fn cue(&self) -> Option<crate::audio::Cue> {
        match self {
            SessionError::Purchase(_) => Some(crate::audio::Cue::Error),
            _ => None,
        }
    }
}

pub type SessionResult = Result<Vec<SessionEvent>, SessionError>;

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub player: Player,
    pub roster: Roster,
    phase: GamePhase,
    config: SessionConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    /// New session in the menu with a baseline player and full-health roster.
    pub fn new(config: SessionConfig) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(session = %id, player = %config.player_name, "session created");
        Self {
            id,
            player: Player::new(config.player_name.clone()),
            roster: Roster::new(),
            phase: GamePhase::Menu,
            config,
        }
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn battle(&self) -> Option<&BattleSession> {
        match &self.phase {
            GamePhase::Battling(battle) => Some(battle),
            _ => None,
        }
    }

    /// The monster in the current battle.
    pub fn active_monster(&self) -> Option<&Monster> {
        self.battle()
            .and_then(|battle| self.roster.get(battle.monster_index))
    }

    /// Battle log lines currently on screen.
    pub fn visible_log(&self) -> Vec<&str> {
        self.battle()
            .map(BattleSession::visible_log)
            .unwrap_or_default()
    }

    // ── Audio ───────────────────────────────────────────────────

    pub fn is_muted(&self) -> bool {
        self.config.muted
    }

    /// Flips mute and returns the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.config.muted = !self.config.muted;
        self.config.muted
    }

    /// Background track for the current phase, `None` while muted.
    pub fn soundtrack(&self) -> Option<Track> {
        if self.config.muted {
            None
        } else {
            Some(track_for(&self.phase))
        }
    }

    /// Sends the events' cues to `sink`. Failures are ignored.
    pub fn play_cues(&self, events: &[SessionEvent], sink: &mut dyn CueSink) -> usize {
        if self.config.muted {
            return 0;
        }
        play_cues(cues_for(events), sink)
    }

    /// Plays the cue for a rejected operation, if it has one.
    pub fn play_error_cue(&self, error: &SessionError, sink: &mut dyn CueSink) -> bool {
        match error.cue() {
            Some(cue) if !self.config.muted => play_cues([cue], sink) == 1,
            _ => false,
        }
    }

    // ── Transitions ─────────────────────────────────────────────

    fn wrong_phase(&self, action: &'static str) -> SessionError {
        SessionError::WrongPhase {
            action,
            phase: self.phase.name(),
        }
    }

    /// Menu -> Map with a fresh baseline player.
    pub fn start_game(&mut self) -> SessionResult {
        if self.phase != GamePhase::Menu {
            return Err(self.wrong_phase("start a game"));
        }
        self.player = Player::new(self.config.player_name.clone());
        self.phase = GamePhase::Map;
        tracing::info!(session = %self.id, "game started");
        Ok(vec![SessionEvent::GameStarted {
            player_name: self.player.name.clone(),
        }])
    }

    /// Map -> Battling against a living roster monster.
    pub fn select_monster(&mut self, name: &str) -> SessionResult {
        if self.phase != GamePhase::Map {
            return Err(self.wrong_phase("start a battle"));
        }
        let index = self
            .roster
            .index_of(name)
            .ok_or_else(|| SessionError::UnknownMonster(name.to_string()))?;
        if !self.roster.monsters()[index].is_alive() {
            return Err(SessionError::MonsterDefeated(name.to_string()));
        }
        let message = format!("A wild {} appears!", name);
        Ok(vec![self.open_battle(index, message)])
    }

    fn open_battle(&mut self, index: usize, message: String) -> SessionEvent {
        let mut battle =
            BattleSession::new(index, self.config.log_capacity, self.config.log_window);
        battle.log.push(message.clone());
        let monster = self.roster.monsters()[index].name.clone();
        tracing::debug!(session = %self.id, monster = %monster, "battle opened");
        self.phase = GamePhase::Battling(battle);
        SessionEvent::MonsterAppeared { monster, message }
    }

    /// Accepts an action and marks the battle busy until it resolves.
    pub fn begin_action(&mut self, action: BattleAction) -> SessionResult {
        let phase = self.phase.name();
        let GamePhase::Battling(battle) = &mut self.phase else {
            return Err(SessionError::WrongPhase {
                action: "act",
                phase,
            });
        };
        if battle.animating {
            return Err(SessionError::Busy);
        }
        let monster = self
            .roster
            .get(battle.monster_index)
            .ok_or_else(|| SessionError::UnknownMonster(battle.monster_index.to_string()))?;
        if !monster.is_alive() {
            return Err(SessionError::MonsterDefeated(monster.name.clone()));
        }

        battle.animating = true;
        battle.pending = Some(action);
        Ok(vec![SessionEvent::ActionStarted { action }])
    }

    /// Resolves the pending action, then grants rewards and checks end conditions.
    pub fn resolve_action(&mut self, rng: &mut impl Rng) -> SessionResult {
        let phase = self.phase.name();
        let GamePhase::Battling(battle) = &mut self.phase else {
            return Err(SessionError::WrongPhase {
                action: "resolve an action",
                phase,
            });
        };
        let action = battle.pending.ok_or(SessionError::NoPendingAction)?;
        let monster = self
            .roster
            .get_mut(battle.monster_index)
            .ok_or_else(|| SessionError::UnknownMonster(battle.monster_index.to_string()))?;

        battle.pending = None;
        battle.animating = false;

        let resolution = combat::resolve(action, &self.player, monster, rng);
        let message = resolution.log_line();
        let event = resolution.event;
        tracing::debug!(
            session = %self.id,
            monster = %monster.name,
            ?action,
            dealt = event.damage_dealt(),
            taken = event.damage_taken(),
            "action resolved"
        );

        self.player = resolution.player;
        *monster = resolution.monster;
        battle.log.push(message.clone());

        let mut events = vec![SessionEvent::Combat {
            monster: monster.name.clone(),
            event,
            message,
        }];

        if !monster.is_alive() && !battle.rewarded {
            battle.rewarded = true;
            let reward = grant_rewards(&self.player, monster, rng);
            let message = format!(
                "The {} has been defeated! +{} Gold, +{} XP",
                monster.name, reward.gold_gained, reward.xp_gained
            );
            battle.log.push(message.clone());
            tracing::info!(
                session = %self.id,
                monster = %monster.name,
                gold = reward.gold_gained,
                xp = reward.xp_gained,
                "monster defeated"
            );
            events.push(SessionEvent::MonsterDefeated {
                monster: monster.name.clone(),
                gold_gained: reward.gold_gained,
                xp_gained: reward.xp_gained,
                message,
            });
            if reward.leveled_up() {
                let new_level = reward.player.level;
                let message = format!("Level Up! You are now level {}!", new_level);
                battle.log.push(message.clone());
                tracing::info!(session = %self.id, level = new_level, "level up");
                events.push(SessionEvent::LevelUp {
                    new_level,
                    levels_gained: reward.levels_gained,
                    message,
                });
            }
            self.player = reward.player;
        }

        let escaped = matches!(event, CombatEvent::Fled { .. }) && self.player.is_alive();
        if escaped {
            self.phase = GamePhase::Map;
            events.push(SessionEvent::ReturnedToMap);
        }

        events.extend(self.check_end_conditions());
        Ok(events)
    }

    /// Begin and resolve in one call, for callers without animation pacing.
    pub fn act(&mut self, action: BattleAction, rng: &mut impl Rng) -> SessionResult {
        let mut events = self.begin_action(action)?;
        events.extend(self.resolve_action(rng)?);
        Ok(events)
    }

    fn defeated_battle_monster(&self, action: &'static str) -> Result<(), SessionError> {
        let GamePhase::Battling(battle) = &self.phase else {
            return Err(self.wrong_phase(action));
        };
        match self.roster.get(battle.monster_index) {
            Some(monster) if monster.is_alive() => {
                Err(SessionError::MonsterStillStanding(monster.name.clone()))
            }
            _ => Ok(()),
        }
    }

    /// After a win, battle a random living monster. With none left the game is won.
    pub fn fight_another(&mut self, rng: &mut impl Rng) -> SessionResult {
        self.defeated_battle_monster("fight another monster")?;
        match self.roster.random_alive(rng) {
            Some(index) => {
                let message = format!("A new {} appears!", self.roster.monsters()[index].name);
                Ok(vec![self.open_battle(index, message)])
            }
            None => {
                self.phase = GamePhase::Map;
                let mut events = vec![SessionEvent::ReturnedToMap];
                events.extend(self.check_end_conditions());
                Ok(events)
            }
        }
    }

    /// After a win, go back to the world map.
    pub fn return_to_map(&mut self) -> SessionResult {
        self.defeated_battle_monster("return to the map")?;
        self.phase = GamePhase::Map;
        let mut events = vec![SessionEvent::ReturnedToMap];
        events.extend(self.check_end_conditions());
        Ok(events)
    }

    /// Buys an item from the store. Only open on the world map.
    pub fn purchase(&mut self, item: StoreItemId) -> SessionResult {
        if self.phase != GamePhase::Map {
            return Err(self.wrong_phase("visit the store"));
        }
        let item = item.item();
        match store::purchase(&self.player, item) {
            Ok(updated) => {
                self.player = updated;
                tracing::info!(session = %self.id, item = item.name, price = item.price, "purchase");
                Ok(vec![SessionEvent::ItemPurchased {
                    item: item.id,
                    price: item.price,
                    message: format!("Purchased {}!", item.name),
                }])
            }
            Err(e) => {
                tracing::debug!(session = %self.id, error = %e, "purchase refused");
                Err(e.into())
            }
        }
    }

    /// Back to the menu with a baseline player and a full-health roster.
    pub fn reset_game(&mut self) -> SessionResult {
        self.player.reset();
        self.roster.reset();
        self.phase = GamePhase::Menu;
        tracing::info!(session = %self.id, "game reset");
        Ok(vec![SessionEvent::GameReset])
    }

    /// Enters GameOver or Victory when their conditions hold.
    ///
    /// A fallen player in battle loses. Outside a battle, an all-defeated
    /// roster wins. The check itself is deterministic.
    pub fn check_end_conditions(&mut self) -> Vec<SessionEvent> {
        match self.phase {
            GamePhase::Battling(_) | GamePhase::Map if !self.player.is_alive() => {
                self.phase = GamePhase::GameOver;
                tracing::info!(session = %self.id, xp = self.player.xp, "game over");
                vec![SessionEvent::GameOver {
                    message: format!(
                        "You have fallen! Final Stats: {} XP • {} Gold",
                        self.player.xp, self.player.gold
                    ),
                }]
            }
            GamePhase::Map if self.roster.all_defeated() => {
                self.phase = GamePhase::Victory;
                tracing::info!(session = %self.id, level = self.player.level, "victory");
                vec![SessionEvent::Victory {
                    message: format!(
                        "All monsters have been defeated! Final Stats: {} XP • {} Gold • Level {}",
                        self.player.xp, self.player.gold, self.player.level
                    ),
                }]
            }
            _ => Vec::new(),
        }
    }
}
