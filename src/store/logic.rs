//! Purchase validation and effect application.

use super::types::{ItemEffect, StoreItem};
use crate::character::Player;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("Not enough gold! {item} costs {price}, you have {gold}")]
    InsufficientFunds {
        item: &'static str,
        price: u32,
        gold: u32,
    },
}

pub fn can_afford(player: &Player, item: &StoreItem) -> bool {
    player.gold >= item.price
}

/// Applies an item effect to a copy of the player.
pub fn apply_effect(player: &Player, effect: ItemEffect) -> Player {
    let mut player = player.clone();
    match effect {
        ItemEffect::Heal(amount) => player.heal(amount),
        ItemEffect::FullHeal => player.health = player.max_health,
        ItemEffect::PowerBoost(amount) => player.power = player.power.saturating_add(amount),
        ItemEffect::MaxHealthBoost(amount) => {
            player.max_health = player.max_health.saturating_add(amount);
            player.heal(amount);
        }
        ItemEffect::Composite(effects) => {
            for &inner in effects {
                player = apply_effect(&player, inner);
            }
        }
    }
    player
}

/// Buys `item`: the effect is applied first, then the price comes off the
/// resulting gold. On rejection the caller's player is untouched.
pub fn purchase(player: &Player, item: &StoreItem) -> Result<Player, PurchaseError> {
    if !can_afford(player, item) {
        return Err(PurchaseError::InsufficientFunds {
            item: item.name,
            price: item.price,
            gold: player.gold,
        });
    }
    let mut updated = apply_effect(player, item.effect);
    updated.gold -= item.price;
    Ok(updated)
}
