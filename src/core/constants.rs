// Leveling
pub const MAX_LEVEL: u32 = 90;
pub const BASE_EXP_TO_NEXT: u64 = 100;
pub const EXP_TO_NEXT_GROWTH_PERCENT: u64 = 115;
pub const CORE_STAT_GROWTH_PERCENT: u64 = 108;
pub const CRIT_RATE_PER_LEVEL: f64 = 0.01;
pub const CRIT_RATE_CAP: f64 = 1.0;
pub const CRIT_DAMAGE_PER_LEVEL: f64 = 0.45;
pub const CRIT_DAMAGE_CAP: f64 = 45.0;
pub const HEALING_BONUS_PER_LEVEL: f64 = 4.0;
pub const HEALING_BONUS_CAP: f64 = 400.0;

// Healing
pub const HEAL_BASE_AMOUNT: f64 = 300.0;

// Player baseline
pub const DEFAULT_PLAYER_NAME: &str = "Wanderer";
pub const PLAYER_BASE_MAX_HP: u64 = 1200;
pub const PLAYER_BASE_ATTACK: u32 = 300;
pub const PLAYER_BASE_DEFENSE: u32 = 100;
pub const PLAYER_BASE_SPEED: u32 = 110;
pub const PLAYER_BASE_CRIT_RATE: f64 = 0.1;
pub const PLAYER_BASE_CRIT_DAMAGE: f64 = 0.5;
pub const PLAYER_BASE_HEALING_BONUS: f64 = 0.2;
pub const PLAYER_BASE_HEALING_ITEMS: u32 = 1;

// Regular enemy scaling: base + battle_index * step
pub const ENEMY_HP_BASE: f64 = 1000.0;
pub const ENEMY_HP_STEP: f64 = 80.0;
pub const ENEMY_ATTACK_BASE: f64 = 300.0;
pub const ENEMY_ATTACK_STEP: f64 = 29.30;
pub const ENEMY_DEFENSE_BASE: f64 = 120.0;
pub const ENEMY_DEFENSE_STEP: f64 = 7.5;
pub const ENEMY_SPEED_BASE: u32 = 100;
pub const ENEMY_SPEED_INTERVAL: u32 = 10; // +1 speed every N battles
pub const ENEMY_STAT_FLUCTUATION: f64 = 0.10;
pub const ENEMY_LEVEL_INTERVAL: u32 = 5;
pub const ENEMY_LEVEL_CAP: u32 = 80;
pub const ENEMY_CRIT_RATE_BASE: f64 = 0.1;
pub const ENEMY_CRIT_RATE_STEP: f64 = 0.002;
pub const ENEMY_CRIT_RATE_BONUS_CAP: f64 = 0.25;
pub const ENEMY_CRIT_DAMAGE_BASE: f64 = 0.4;
pub const ENEMY_CRIT_DAMAGE_STEP: f64 = 0.0045;
pub const ENEMY_CRIT_DAMAGE_BONUS_CAP: f64 = 0.45;

// Final boss, derived from the player's stats as exact fractions (num, den)
pub const BOSS_NAME: &str = "Flame Reaver";
pub const BOSS_HP_MULTIPLIER: u64 = 80;
pub const BOSS_ATTACK_FRACTION: (u64, u64) = (4, 5);
pub const BOSS_DEFENSE_FRACTION: (u64, u64) = (6, 5);
pub const BOSS_SPEED_FRACTION: (u64, u64) = (4, 5);
pub const BOSS_CRIT_RATE: f64 = 0.2;
pub const BOSS_CRIT_DAMAGE: f64 = 1.5;
pub const BOSS_HEALING_BONUS: f64 = 0.1;

// Campaign rewards
pub const REWARD_EXP_BASE: u64 = 500;
pub const REWARD_EXP_PER_BATTLE: u64 = 15;
pub const REGULAR_DROP_CHANCE: f64 = 0.4;
pub const BOSS_REWARD_EXP: u64 = 0;
pub const BOSS_DROP_CHANCE: f64 = 0.0;

// Rounds before a battle with no decisive damage is called a stalemate
pub const MAX_BATTLE_ROUNDS: u32 = 10_000;
