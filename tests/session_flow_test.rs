//! Session flow integration tests
//!
//! Drives a `Session` through whole games with forced random draws and
//! checks phase transitions, rewards, store purchases and reset.

use guardian::audio::{Cue, CueRecorder};
use guardian::combat::{BattleAction, CombatEvent};
use guardian::core::{apply_level_ups, cues_for, GamePhase, Session, SessionError, SessionEvent};
use guardian::store::{PurchaseError, StoreItemId};
use guardian::{Player, Roster, SessionConfig};
use rand::rngs::mock::StepRng;

/// Every draw is 0.0: attacks hit, blocks hold, xp rolls are 0.
fn low_rolls() -> StepRng {
    StepRng::new(0, 0)
}

/// Every draw is just under 1.0: attacks miss, blocks fail.
fn high_rolls() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn session_on_map() -> Session {
    let mut session = Session::new(SessionConfig::default());
    session.start_game().unwrap();
    session
}

fn defeat(session: &mut Session, name: &str) {
    let index = session.roster.index_of(name).unwrap();
    session.roster.get_mut(index).unwrap().health = 0;
}

fn assert_baseline(session: &Session) {
    assert_eq!(session.player.health, 100);
    assert_eq!(session.player.max_health, 100);
    assert_eq!(session.player.gold, 50);
    assert_eq!(session.player.xp, 0);
    assert_eq!(session.player.power, 20);
    assert_eq!(session.player.level, 1);
    for monster in session.roster.monsters() {
        assert_eq!(monster.health, monster.max_health);
    }
}

// ============================================================================
// Battle
// ============================================================================

#[test]
fn test_fresh_player_hits_worm_for_twenty() {
    let mut session = session_on_map();
    session.select_monster("Worm").unwrap();

    let events = session.act(BattleAction::Attack, &mut low_rolls()).unwrap();

    assert!(events.iter().any(|e| matches!(
        e,
        SessionEvent::Combat {
            event: CombatEvent::PlayerHit { damage: 20 },
            ..
        }
    )));
    assert_eq!(session.active_monster().unwrap().health, 80);
    assert_eq!(session.player.health, 100);
    assert_eq!(
        session.visible_log().last().copied(),
        Some("You hit the Worm for 20 damage!")
    );
}

#[test]
fn test_full_fight_against_worm() {
    let mut session = session_on_map();
    session.select_monster("Worm").unwrap();

    let mut all_events = Vec::new();
    for _ in 0..5 {
        all_events.extend(session.act(BattleAction::Attack, &mut low_rolls()).unwrap());
    }

    assert!(!session.active_monster().unwrap().is_alive());
    assert_eq!(session.player.gold, 60);
    assert_eq!(session.player.xp, 10);
    assert_eq!(
        cues_for(&all_events)
            .iter()
            .filter(|&&c| c == Cue::MonsterDefeat)
            .count(),
        1
    );

    session.return_to_map().unwrap();
    assert_eq!(session.phase(), &GamePhase::Map);
    assert_eq!(
        session.select_monster("Worm"),
        Err(SessionError::MonsterDefeated("Worm".to_string()))
    );
}

#[test]
fn test_battle_log_window_shows_last_five() {
    let mut session = session_on_map();
    session.select_monster("Sonath").unwrap();
    for _ in 0..8 {
        session.act(BattleAction::Block, &mut low_rolls()).unwrap();
    }
    let visible = session.visible_log();
    assert_eq!(visible.len(), 5);
    assert!(visible
        .iter()
        .all(|line| *line == "Block successful! No damage taken."));
}

// ============================================================================
// Progression
// ============================================================================

#[test]
fn test_double_level_up_in_one_grant() {
    let mut player = Player::default();
    player.xp = 90;
    player.health = 50;

    player.xp += 120;
    let gained = apply_level_ups(&mut player);

    assert_eq!(gained, 2);
    assert_eq!(player.level, 3);
    assert_eq!(player.power, 30);
    assert_eq!(player.max_health, 120);
    assert_eq!(player.health, 90);
}

#[test]
fn test_level_two_to_three_is_one_level() {
    let mut player = Player::default();
    player.xp = 150;
    player.level = 2;
    player.power = 25;
    player.max_health = 110;

    player.xp += 60;

    assert_eq!(apply_level_ups(&mut player), 1);
    assert_eq!(player.level, 3);
    assert_eq!(player.power, 30);
    assert_eq!(player.max_health, 120);
}

#[test]
fn test_level_up_announced_once() {
    let mut session = session_on_map();
    session.player.xp = 95;
    session.select_monster("Sonath").unwrap();
    session.roster.get_mut(2).unwrap().health = 10;

    let events = session.act(BattleAction::Attack, &mut low_rolls()).unwrap();
    let level_ups = events
        .iter()
        .filter(|e| matches!(e, SessionEvent::LevelUp { .. }))
        .count();
    assert_eq!(level_ups, 1);
    assert_eq!(session.player.level, 2);
    assert_eq!(session.player.xp, 135);
}

// ============================================================================
// Store
// ============================================================================

#[test]
fn test_power_sword_rejected_when_poor() {
    let mut session = session_on_map();
    session.player.gold = 20;
    let before = session.player.clone();

    let result = session.purchase(StoreItemId::PowerSword);

    assert_eq!(
        result,
        Err(SessionError::Purchase(PurchaseError::InsufficientFunds {
            item: "Power Sword",
            price: 100,
            gold: 20,
        }))
    );
    assert_eq!(session.player, before);
}

#[test]
fn test_power_sword_bought_with_exact_gold() {
    let mut session = session_on_map();
    session.player.gold = 100;

    session.purchase(StoreItemId::PowerSword).unwrap();

    assert_eq!(session.player.gold, 0);
    assert_eq!(session.player.power, 30);
}

#[test]
fn test_store_closed_outside_map() {
    let mut session = Session::default();
    assert!(matches!(
        session.purchase(StoreItemId::HealthPotion),
        Err(SessionError::WrongPhase { .. })
    ));
}

// ============================================================================
// End conditions and reset
// ============================================================================

#[test]
fn test_victory_when_roster_cleared_outside_battle() {
    let mut session = session_on_map();
    defeat(&mut session, "Worm");
    defeat(&mut session, "Dragon");
    defeat(&mut session, "Sonath");

    let events = session.check_end_conditions();

    assert_eq!(session.phase(), &GamePhase::Victory);
    assert_eq!(cues_for(&events), vec![Cue::Victory]);
}

#[test]
fn test_victory_after_last_kill() {
    let mut session = session_on_map();
    defeat(&mut session, "Worm");
    defeat(&mut session, "Dragon");
    session.select_monster("Sonath").unwrap();
    session.roster.get_mut(2).unwrap().health = 15;

    session.act(BattleAction::Attack, &mut low_rolls()).unwrap();
    // Still inside the battle until the player leaves it
    assert!(matches!(session.phase(), GamePhase::Battling(_)));

    let events = session.return_to_map().unwrap();
    assert_eq!(session.phase(), &GamePhase::Victory);
    assert!(events
        .iter()
        .any(|e| matches!(e, SessionEvent::Victory { .. })));
}

#[test]
fn test_game_over_then_reset() {
    let mut session = session_on_map();
    session.select_monster("Worm").unwrap();
    session.player.health = 5;

    session.act(BattleAction::Block, &mut high_rolls()).unwrap();
    assert_eq!(session.player.health, 0);
    assert_eq!(session.phase(), &GamePhase::GameOver);

    assert!(matches!(
        session.act(BattleAction::Attack, &mut low_rolls()),
        Err(SessionError::WrongPhase { .. })
    ));

    session.reset_game().unwrap();
    assert_eq!(session.phase(), &GamePhase::Menu);
    assert_baseline(&session);
}

#[test]
fn test_reset_is_idempotent() {
    let mut session = session_on_map();
    session.player.gold = 999;
    session.player.xp = 420;
    session.roster.get_mut(1).unwrap().health = 3;

    session.reset_game().unwrap();
    let once = (session.player.clone(), session.roster.clone());
    session.reset_game().unwrap();

    assert_eq!((session.player.clone(), session.roster.clone()), once);
    assert_eq!(session.roster, Roster::new());
    assert_baseline(&session);
}

#[test]
fn test_flee_escape_keeps_monster_damage() {
    let mut session = session_on_map();
    session.select_monster("Dragon").unwrap();
    session.act(BattleAction::Attack, &mut low_rolls()).unwrap();
    session.act(BattleAction::Flee, &mut low_rolls()).unwrap();

    assert_eq!(session.phase(), &GamePhase::Map);
    assert_eq!(session.player.health, 75);
    assert_eq!(session.roster.get(1).unwrap().health, 130);
}

// ============================================================================
// Audio
// ============================================================================

#[test]
fn test_cues_reach_sink() {
    let mut session = session_on_map();
    let mut recorder = CueRecorder::new();

    let events = session.purchase(StoreItemId::HealthPotion).unwrap();
    session.play_cues(&events, &mut recorder);

    let error = session.purchase(StoreItemId::MysticElixir).unwrap_err();
    assert_eq!(error.cue(), Some(Cue::Error));
    assert!(session.play_error_cue(&error, &mut recorder));
    assert_eq!(recorder.played, vec![Cue::Purchase, Cue::Error]);
}
