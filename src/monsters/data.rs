//! Monster data definitions.

use serde::{Deserialize, Serialize};

/// A monster on the world map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub image: String,
    pub power: u32,
    pub health: u32,
    pub max_health: u32,
    pub description: String,
}

impl Monster {
    pub fn new(name: &str, image: &str, power: u32, max_health: u32, description: &str) -> Self {
        Self {
            name: name.to_string(),
            image: image.to_string(),
            power,
            health: max_health,
            max_health,
            description: description.to_string(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn reset_health(&mut self) {
        self.health = self.max_health;
    }
}

/// Static monster definition as shipped with the game.
#[derive(Debug, Clone, Copy)]
pub struct MonsterDef {
    pub name: &'static str,
    pub image: &'static str,
    pub power: u32,
    pub max_health: u32,
    pub description: &'static str,
}

impl MonsterDef {
    pub fn spawn(&self) -> Monster {
        Monster::new(
            self.name,
            self.image,
            self.power,
            self.max_health,
            self.description,
        )
    }
}

/// The three monsters of the world map, weakest first.
pub const MONSTER_DEFS: [MonsterDef; 3] = [
    MonsterDef {
        name: "Worm",
        image: "/worm_sprite.png",
        power: 10,
        max_health: 100,
        description: "A slimy underground creature",
    },
    MonsterDef {
        name: "Dragon",
        image: "/dragon_sprite.png",
        power: 25,
        max_health: 150,
        description: "A fearsome fire-breathing beast",
    },
    MonsterDef {
        name: "Sonath",
        image: "/sonath_sprite.png",
        power: 40,
        max_health: 200,
        description: "A legendary cosmic entity",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monster_creation() {
        let worm = MONSTER_DEFS[0].spawn();
        assert_eq!(worm.name, "Worm");
        assert_eq!(worm.power, 10);
        assert_eq!(worm.health, 100);
        assert_eq!(worm.max_health, 100);
        assert!(worm.is_alive());
    }

    #[test]
    fn test_monster_take_damage_no_underflow() {
        let mut dragon = MONSTER_DEFS[1].spawn();
        dragon.take_damage(100);
        assert_eq!(dragon.health, 50);
        dragon.take_damage(100);
        assert_eq!(dragon.health, 0);
        assert!(!dragon.is_alive());
    }

    #[test]
    fn test_monster_reset_health() {
        let mut sonath = MONSTER_DEFS[2].spawn();
        sonath.take_damage(150);
        sonath.reset_health();
        assert_eq!(sonath.health, 200);
    }

    #[test]
    fn test_monster_names_unique() {
        for (i, a) in MONSTER_DEFS.iter().enumerate() {
            for b in &MONSTER_DEFS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
