// Player baseline
pub const BASE_PLAYER_NAME: &str = "Groot";
pub const BASE_PLAYER_HEALTH: u32 = 100;
pub const BASE_PLAYER_GOLD: u32 = 50;
pub const BASE_PLAYER_POWER: u32 = 20;

// Combat rolls
pub const HIT_CHANCE: f64 = 0.5;
pub const BLOCK_CHANCE: f64 = 0.5;
pub const MIN_MONSTER_DAMAGE: u32 = 1;

// XP and leveling
pub const XP_PER_LEVEL: u32 = 100;
pub const REWARD_XP_BONUS_RANGE: u32 = 20;
pub const LEVEL_UP_POWER_GAIN: u32 = 5;
pub const LEVEL_UP_MAX_HEALTH_GAIN: u32 = 10;
pub const LEVEL_UP_HEAL: u32 = 20;

// Battle log
pub const BATTLE_LOG_CAPACITY: usize = 20;
pub const BATTLE_LOG_WINDOW: usize = 5;

// Store prices
pub const HEALTH_POTION_PRICE: u32 = 25;
pub const POWER_SWORD_PRICE: u32 = 100;
pub const SHIELD_PRICE: u32 = 150;
pub const MYSTIC_ELIXIR_PRICE: u32 = 200;

// Store effects
pub const HEALTH_POTION_HEAL: u32 = 50;
pub const POWER_SWORD_BOOST: u32 = 10;
pub const SHIELD_MAX_HEALTH_BOOST: u32 = 20;
pub const MYSTIC_ELIXIR_POWER_BOOST: u32 = 5;

// Config directory under $HOME
pub const CONFIG_DIR_NAME: &str = ".guardian";
pub const CONFIG_FILE_NAME: &str = "config.json";
