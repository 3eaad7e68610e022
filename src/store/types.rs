//! Store catalog.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// What an item does to the player when bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemEffect {
    /// Restore health, clamped to max health.
    Heal(u32),
    /// Restore health to max.
    FullHeal,
    PowerBoost(u32),
    /// Raise max health and current health by the same amount.
    MaxHealthBoost(u32),
    /// Apply each effect in order.
    Composite(&'static [ItemEffect]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreItemId {
    HealthPotion,
    PowerSword,
    ShieldOfProtection,
    MysticElixir,
}

impl StoreItemId {
    pub fn all() -> [StoreItemId; 4] {
        [
            StoreItemId::HealthPotion,
            StoreItemId::PowerSword,
            StoreItemId::ShieldOfProtection,
            StoreItemId::MysticElixir,
        ]
    }

    /// Catalog number shown in the shop (1-based).
    pub fn number(&self) -> u32 {
        match self {
            StoreItemId::HealthPotion => 1,
            StoreItemId::PowerSword => 2,
            StoreItemId::ShieldOfProtection => 3,
            StoreItemId::MysticElixir => 4,
        }
    }

    pub fn from_number(number: u32) -> Option<Self> {
        Self::all().into_iter().find(|id| id.number() == number)
    }

    pub fn item(&self) -> &'static StoreItem {
        match self {
            StoreItemId::HealthPotion => &CATALOG[0],
            StoreItemId::PowerSword => &CATALOG[1],
            StoreItemId::ShieldOfProtection => &CATALOG[2],
            StoreItemId::MysticElixir => &CATALOG[3],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreItem {
    pub id: StoreItemId,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub icon: &'static str,
    pub effect: ItemEffect,
}

const ELIXIR_EFFECTS: [ItemEffect; 2] = [
    ItemEffect::FullHeal,
    ItemEffect::PowerBoost(MYSTIC_ELIXIR_POWER_BOOST),
];

/// Every item sold in the Guardian's Store, in shop order.
pub const CATALOG: [StoreItem; 4] = [
    StoreItem {
        id: StoreItemId::HealthPotion,
        name: "Health Potion",
        description: "Restore 50 health points",
        price: HEALTH_POTION_PRICE,
        icon: "❤️",
        effect: ItemEffect::Heal(HEALTH_POTION_HEAL),
    },
    StoreItem {
        id: StoreItemId::PowerSword,
        name: "Power Sword",
        description: "Increase attack power by 10",
        price: POWER_SWORD_PRICE,
        icon: "⚔️",
        effect: ItemEffect::PowerBoost(POWER_SWORD_BOOST),
    },
    StoreItem {
        id: StoreItemId::ShieldOfProtection,
        name: "Shield of Protection",
        description: "Increase max health by 20",
        price: SHIELD_PRICE,
        icon: "🛡️",
        effect: ItemEffect::MaxHealthBoost(SHIELD_MAX_HEALTH_BOOST),
    },
    StoreItem {
        id: StoreItemId::MysticElixir,
        name: "Mystic Elixir",
        description: "Restore full health and increase power by 5",
        price: MYSTIC_ELIXIR_PRICE,
        icon: "🧪",
        effect: ItemEffect::Composite(&ELIXIR_EFFECTS),
    },
];
