//! Hall of fame shown on the leaderboard screen.
//!
//! The board is static and never persisted. A finished player can be placed
//! against it to see where they would rank.

use crate::character::Player;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub name: &'static str,
    pub level: u32,
    pub xp: u32,
    pub gold: u32,
}

/// Already sorted best-first.
pub const HALL_OF_FAME: [LeaderboardEntry; 5] = [
    LeaderboardEntry {
        name: "GrootMaster",
        level: 15,
        xp: 1450,
        gold: 2500,
    },
    LeaderboardEntry {
        name: "GuardianPro",
        level: 12,
        xp: 1180,
        gold: 2100,
    },
    LeaderboardEntry {
        name: "TreeWarrior",
        level: 10,
        xp: 950,
        gold: 1800,
    },
    LeaderboardEntry {
        name: "GalaxyHero",
        level: 8,
        xp: 720,
        gold: 1400,
    },
    LeaderboardEntry {
        name: "CosmicGuard",
        level: 6,
        xp: 580,
        gold: 1100,
    },
];

/// Higher level first, then higher xp.
fn compare(level: u32, xp: u32, entry: &LeaderboardEntry) -> Ordering {
    (level, xp).cmp(&(entry.level, entry.xp))
}

/// 1-based rank the player would take. Ties rank below existing entries.
pub fn rank_for(player: &Player) -> usize {
    HALL_OF_FAME
        .iter()
        .take_while(|entry| compare(player.level, player.xp, entry) != Ordering::Greater)
        .count()
        + 1
}

/// Whether the player would make the top five.
pub fn makes_board(player: &Player) -> bool {
    rank_for(player) <= HALL_OF_FAME.len()
}
