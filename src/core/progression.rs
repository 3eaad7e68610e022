//! Rewards for defeating a monster and the level-up rule.

use crate::character::{level_for_xp, Player};
use crate::combat::roll_below;
use crate::core::constants::*;
use crate::monsters::Monster;
use rand::Rng;

/// Outcome of a single reward grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardOutcome {
    pub player: Player,
    pub gold_gained: u32,
    pub xp_gained: u32,
    /// Levels crossed by this grant (0 when no level-up).
    pub levels_gained: u32,
}

impl RewardOutcome {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Gold equals the monster's power; xp adds up to 19 bonus points.
pub fn grant_rewards(player: &Player, monster: &Monster, rng: &mut impl Rng) -> RewardOutcome {
    let gold_gained = monster.power;
    let xp_gained = monster
        .power
        .saturating_add(roll_below(REWARD_XP_BONUS_RANGE, rng));

    let mut player = player.clone();
    player.gold = player.gold.saturating_add(gold_gained);
    player.xp = player.xp.saturating_add(xp_gained);
    let levels_gained = apply_level_ups(&mut player);

    RewardOutcome {
        player,
        gold_gained,
        xp_gained,
        levels_gained,
    }
}

/// Brings `level` in line with total xp. Returns the number of levels gained.
///
/// Stat growth is applied once per level crossed, so a grant that jumps two
/// levels gives twice the power and max health.
pub fn apply_level_ups(player: &mut Player) -> u32 {
    let new_level = level_for_xp(player.xp);
    if new_level <= player.level {
        return 0;
    }

    let gained = new_level - player.level;
    player.level = new_level;
    player.power = player
        .power
        .saturating_add(LEVEL_UP_POWER_GAIN.saturating_mul(gained));
    player.max_health = player
        .max_health
        .saturating_add(LEVEL_UP_MAX_HEALTH_GAIN.saturating_mul(gained));
    player.heal(LEVEL_UP_HEAL.saturating_mul(gained));
    gained
}
