//! Plays whole sessions with a scripted policy.
//!
//! The runner drives a real [`Session`], so every number in the report comes
//! from the same rules a player would face. Statistics are tracked
//! externally from the returned session events.

use super::config::SimConfig;
use super::report::SimReport;
use super::stats::{RunOutcome, RunStats};
use crate::audio::{play_cues, CueRecorder};
use crate::combat::BattleAction;
use crate::core::{cues_for, GamePhase, Session, SessionResult};
use crate::store::{can_afford, StoreItemId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {:?} after {} actions, Level {}, XP {}, Gold {}, Kills {}, Purchases {}",
                run_idx + 1,
                config.num_runs,
                stats.outcome,
                stats.actions,
                stats.final_player.level,
                stats.final_player.xp,
                stats.final_player.gold,
                stats.monsters_defeated,
                stats.purchases
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Play one session from the menu until it ends or hits the action cap.
pub fn simulate_single_run(config: &SimConfig, rng: &mut impl Rng) -> RunStats {
    let mut session = Session::new(config.session.clone());
    let mut recorder = CueRecorder::new();
    let mut stats = RunStats::new();

    while stats.actions < config.max_actions_per_run && !session.phase().is_finished() {
        stats.actions += 1;
        let result = next_step(&mut session, config, rng);
        match result {
            Ok(events) => {
                play_cues(cues_for(&events), &mut recorder);
                stats.record(&events);
            }
            Err(e) => {
                tracing::warn!(session = %session.id, error = %e, "policy made an invalid move");
                break;
            }
        }
    }

    stats.outcome = match session.phase() {
        GamePhase::Victory => RunOutcome::Victory,
        GamePhase::GameOver => RunOutcome::GameOver,
        _ => RunOutcome::TimedOut,
    };
    stats.final_player = session.player.clone();
    stats.cues = recorder.played;
    tracing::debug!(
        session = %session.id,
        outcome = ?stats.outcome,
        actions = stats.actions,
        "run finished"
    );
    stats
}

/// One policy decision, applied to the session.
fn next_step(session: &mut Session, config: &SimConfig, rng: &mut impl Rng) -> SessionResult {
    match session.phase() {
        GamePhase::Menu => session.start_game(),
        GamePhase::Map => {
            if config.shopping {
                if let Some(item) = shopping_choice(session) {
                    return session.purchase(item);
                }
            }
            match weakest_living_monster(session) {
                Some(name) => session.select_monster(&name),
                None => Ok(session.check_end_conditions()),
            }
        }
        GamePhase::Battling(_) => {
            let monster_alive = session.active_monster().is_some_and(|m| m.is_alive());
            if monster_alive {
                session.act(BattleAction::Attack, rng)
            } else {
                session.return_to_map()
            }
        }
        GamePhase::Victory | GamePhase::GameOver => Ok(Vec::new()),
    }
}

/// Potion when below half health, otherwise a sword whenever it is affordable.
fn shopping_choice(session: &Session) -> Option<StoreItemId> {
    let player = &session.player;
    let potion = StoreItemId::HealthPotion.item();
    if player.health * 2 < player.max_health && can_afford(player, potion) {
        return Some(StoreItemId::HealthPotion);
    }
    if can_afford(player, StoreItemId::PowerSword.item()) {
        return Some(StoreItemId::PowerSword);
    }
    None
}

fn weakest_living_monster(session: &Session) -> Option<String> {
    session
        .roster
        .monsters()
        .iter()
        .filter(|m| m.is_alive())
        .min_by_key(|m| m.power)
        .map(|m| m.name.clone())
}

/// Events the policy saw for one run, in order. Used by tests.
#[cfg(test)]
fn trace_run(config: &SimConfig, rng: &mut impl Rng) -> Vec<crate::core::SessionEvent> {
    let mut session = Session::new(config.session.clone());
    let mut events = Vec::new();
    for _ in 0..config.max_actions_per_run {
        if session.phase().is_finished() {
            break;
        }
        match next_step(&mut session, config, rng) {
            Ok(batch) => events.extend(batch),
            Err(_) => break,
        }
    }
    events
}
