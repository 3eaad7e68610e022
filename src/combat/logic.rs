//! Battle resolution.
//!
//! Pure functions: each takes the current combatants and an injected random
//! source and returns the updated copies. Nothing here touches session state.

use super::types::{BattleAction, CombatEvent, Resolution};
use crate::character::Player;
use crate::core::constants::{BLOCK_CHANCE, HIT_CHANCE, MIN_MONSTER_DAMAGE};
use crate::monsters::Monster;
use rand::Rng;

/// Returns true with the given probability.
pub fn roll_chance(chance: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < chance
}

/// `floor(random() * limit)`: uniform in `0..limit`, or 0 when `limit` is 0.
pub fn roll_below(limit: u32, rng: &mut impl Rng) -> u32 {
    (rng.gen::<f64>() * limit as f64).floor() as u32
}

/// Damage the player deals on a hit: `power + floor(random() * xp)`.
///
/// Experience raises offense here while it lowers incoming damage in
/// [`monster_damage`]. Both directions are intentional.
pub fn player_damage(player: &Player, rng: &mut impl Rng) -> u32 {
    player.power.saturating_add(roll_below(player.xp, rng))
}

/// Damage a monster deals to the player: `max(1, power - floor(random() * xp))`.
pub fn monster_damage(monster: &Monster, player: &Player, rng: &mut impl Rng) -> u32 {
    monster
        .power
        .saturating_sub(roll_below(player.xp, rng))
        .max(MIN_MONSTER_DAMAGE)
}

fn can_fight(player: &Player, monster: &Monster) -> bool {
    player.is_alive() && monster.is_alive()
}

fn unchanged(player: &Player, monster: &Monster) -> Resolution {
    Resolution {
        player: player.clone(),
        monster: monster.clone(),
        event: CombatEvent::Ignored,
    }
}

/// Half the time the attack lands; otherwise the monster counterattacks.
pub fn attack(player: &Player, monster: &Monster, rng: &mut impl Rng) -> Resolution {
    if !can_fight(player, monster) {
        return unchanged(player, monster);
    }

    let mut player = player.clone();
    let mut monster = monster.clone();

    let event = if roll_chance(HIT_CHANCE, rng) {
        let damage = player_damage(&player, rng);
        monster.take_damage(damage);
        CombatEvent::PlayerHit { damage }
    } else {
        let counter_damage = monster_damage(&monster, &player, rng);
        player.take_damage(counter_damage);
        CombatEvent::PlayerMissed { counter_damage }
    };

    Resolution {
        player,
        monster,
        event,
    }
}

/// Half the time the block holds; otherwise the monster hits.
pub fn block(player: &Player, monster: &Monster, rng: &mut impl Rng) -> Resolution {
    if !can_fight(player, monster) {
        return unchanged(player, monster);
    }

    let mut player = player.clone();

    let event = if roll_chance(BLOCK_CHANCE, rng) {
        CombatEvent::BlockSucceeded
    } else {
        let damage = monster_damage(monster, &player, rng);
        player.take_damage(damage);
        CombatEvent::BlockFailed { damage }
    };

    Resolution {
        player,
        monster: monster.clone(),
        event,
    }
}

/// Running away is never free: the monster always lands one hit.
pub fn flee(player: &Player, monster: &Monster, rng: &mut impl Rng) -> Resolution {
    if !can_fight(player, monster) {
        return unchanged(player, monster);
    }

    let mut player = player.clone();
    let damage = monster_damage(monster, &player, rng);
    player.take_damage(damage);

    Resolution {
        player,
        monster: monster.clone(),
        event: CombatEvent::Fled { damage },
    }
}

pub fn resolve(
    action: BattleAction,
    player: &Player,
    monster: &Monster,
    rng: &mut impl Rng,
) -> Resolution {
    match action {
        BattleAction::Attack => attack(player, monster, rng),
        BattleAction::Block => block(player, monster, rng),
        BattleAction::Flee => flee(player, monster, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monsters::MONSTER_DEFS;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Every f64 draw is 0.0: hits land, blocks hold, xp rolls are 0.
    fn low_rolls() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Every f64 draw is just under 1.0: attacks miss, blocks fail, xp rolls max out.
    fn high_rolls() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn worm() -> Monster {
        MONSTER_DEFS[0].spawn()
    }

    #[test]
    fn test_roll_below_zero_limit() {
        let mut rng = high_rolls();
        assert_eq!(roll_below(0, &mut rng), 0);
    }

    #[test]
    fn test_roll_below_bounds() {
        assert_eq!(roll_below(50, &mut low_rolls()), 0);
        assert_eq!(roll_below(50, &mut high_rolls()), 49);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(roll_below(7, &mut rng) < 7);
        }
    }

    #[test]
    fn test_attack_hit_without_xp_deals_power() {
        let player = Player::default();
        let result = attack(&player, &worm(), &mut low_rolls());
        assert_eq!(result.event, CombatEvent::PlayerHit { damage: 20 });
        assert_eq!(result.monster.health, 80);
        assert_eq!(result.player, player);
    }

    #[test]
    fn test_attack_hit_scales_with_xp() {
        let mut player = Player::default();
        player.xp = 30;
        let mut monster = worm();
        monster.health = 100;
        // Hit roll must be low, xp roll high.
        let mut rng = StepRng::new(0, u64::MAX);
        let result = attack(&player, &monster, &mut rng);
        assert_eq!(result.event, CombatEvent::PlayerHit { damage: 49 });
        assert_eq!(result.monster.health, 51);
    }

    #[test]
    fn test_attack_miss_counterattacks() {
        let player = Player::default();
        let result = attack(&player, &worm(), &mut high_rolls());
        assert_eq!(
            result.event,
            CombatEvent::PlayerMissed { counter_damage: 10 }
        );
        assert_eq!(result.player.health, 90);
        assert_eq!(result.monster.health, 100);
    }

    #[test]
    fn test_monster_health_clamped_at_zero() {
        let mut player = Player::default();
        player.power = 500;
        let result = attack(&player, &worm(), &mut low_rolls());
        assert_eq!(result.monster.health, 0);
        assert!(!result.monster.is_alive());
    }

    #[test]
    fn test_monster_damage_floor_of_one() {
        let mut player = Player::default();
        player.xp = 1000;
        // xp roll of 999 dwarfs the worm's power
        let damage = monster_damage(&worm(), &player, &mut high_rolls());
        assert_eq!(damage, 1);
    }

    #[test]
    fn test_block_success_no_damage() {
        let player = Player::default();
        let result = block(&player, &worm(), &mut low_rolls());
        assert_eq!(result.event, CombatEvent::BlockSucceeded);
        assert_eq!(result.player, player);
    }

    #[test]
    fn test_block_failure_takes_hit() {
        let player = Player::default();
        let result = block(&player, &worm(), &mut high_rolls());
        assert_eq!(result.event, CombatEvent::BlockFailed { damage: 10 });
        assert_eq!(result.player.health, 90);
    }

    #[test]
    fn test_flee_always_costs_health() {
        let player = Player::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let result = flee(&player, &worm(), &mut rng);
            assert!(result.player.health < player.health);
            assert!(matches!(result.event, CombatEvent::Fled { .. }));
        }
    }

    #[test]
    fn test_flee_can_kill() {
        let mut player = Player::default();
        player.health = 5;
        let result = flee(&player, &worm(), &mut low_rolls());
        assert_eq!(result.player.health, 0);
        assert!(!result.player.is_alive());
    }

    #[test]
    fn test_actions_against_defeated_monster_ignored() {
        let player = Player::default();
        let mut monster = worm();
        monster.health = 0;
        for action in BattleAction::all() {
            let result = resolve(action, &player, &monster, &mut low_rolls());
            assert_eq!(result.event, CombatEvent::Ignored);
            assert_eq!(result.player, player);
            assert_eq!(result.monster, monster);
        }
    }

    #[test]
    fn test_resolve_dispatches() {
        let player = Player::default();
        let monster = worm();
        assert!(matches!(
            resolve(BattleAction::Attack, &player, &monster, &mut low_rolls()).event,
            CombatEvent::PlayerHit { .. }
        ));
        assert_eq!(
            resolve(BattleAction::Block, &player, &monster, &mut low_rolls()).event,
            CombatEvent::BlockSucceeded
        );
        assert!(matches!(
            resolve(BattleAction::Flee, &player, &monster, &mut low_rolls()).event,
            CombatEvent::Fled { .. }
        ));
    }

    #[test]
    fn test_hit_rate_roughly_half() {
        let player = Player::default();
        let monster = worm();
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let hits = (0..10_000)
            .filter(|_| {
                matches!(
                    attack(&player, &monster, &mut rng).event,
                    CombatEvent::PlayerHit { .. }
                )
            })
            .count();
        assert!((4_500..=5_500).contains(&hits), "hits = {}", hits);
    }
}
