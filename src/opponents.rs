//! Opponent stat blocks: regular enemies scaled by encounter index, and the
//! final boss scaled from the player.

use rand::Rng;

use crate::character::{BaseStats, Character, Role};
use crate::core::constants::*;

const ENEMY_TITLES: [&str; 8] = [
    "Kroco", "Brute", "Marauder", "Cutthroat", "Ravager", "Warden", "Reaper", "Zealot",
];

/// Display name for the enemy of a given encounter.
pub fn enemy_name(battle_index: u32) -> String {
    let title = ENEMY_TITLES[(battle_index as usize).saturating_sub(1) % ENEMY_TITLES.len()];
    format!("{} #{}", title, battle_index)
}

/// Multiplies `base` by a uniform fluctuation in `[-f, +f]`, truncating.
fn fluctuate(base: f64, rng: &mut impl Rng) -> f64 {
    let variation = rng.gen_range(-ENEMY_STAT_FLUCTUATION..=ENEMY_STAT_FLUCTUATION);
    (base * (1.0 + variation)).max(0.0).floor()
}

pub fn enemy_level(battle_index: u32) -> u32 {
    (1 + battle_index / ENEMY_LEVEL_INTERVAL).min(ENEMY_LEVEL_CAP)
}

pub fn enemy_crit_rate(battle_index: u32) -> f64 {
    ENEMY_CRIT_RATE_BASE
        + (battle_index as f64 * ENEMY_CRIT_RATE_STEP).min(ENEMY_CRIT_RATE_BONUS_CAP)
}

pub fn enemy_crit_damage(battle_index: u32) -> f64 {
    ENEMY_CRIT_DAMAGE_BASE
        + (battle_index as f64 * ENEMY_CRIT_DAMAGE_STEP).min(ENEMY_CRIT_DAMAGE_BONUS_CAP)
}

/// Generates the regular enemy for encounter `battle_index` (1-based).
///
/// Health, attack, defense and speed each get an independent ±10% roll,
/// drawn in that order. Enemies never carry healing items.
pub fn scaled_enemy(battle_index: u32, rng: &mut impl Rng) -> Character {
    let index = battle_index.max(1);
    let n = index as f64;

    let base_hp = ENEMY_HP_BASE + n * ENEMY_HP_STEP;
    let base_attack = ENEMY_ATTACK_BASE + n * ENEMY_ATTACK_STEP;
    let base_defense = ENEMY_DEFENSE_BASE + n * ENEMY_DEFENSE_STEP;
    let base_speed = (ENEMY_SPEED_BASE + index / ENEMY_SPEED_INTERVAL) as f64;

    let max_hp = fluctuate(base_hp, rng) as u64;
    let attack = fluctuate(base_attack, rng) as u32;
    let defense = fluctuate(base_defense, rng) as u32;
    let speed = fluctuate(base_speed, rng) as u32;

    Character::new(
        enemy_name(index),
        Role::Enemy,
        enemy_level(index),
        BaseStats {
            max_hp,
            attack,
            defense,
            speed,
            crit_rate: enemy_crit_rate(index),
            crit_damage: enemy_crit_damage(index),
            healing_bonus: 0.0,
            healing_items: 0,
        },
    )
}

fn scale(value: u64, (num, den): (u64, u64)) -> u64 {
    value.saturating_mul(num) / den
}

fn scale_u32(value: u32, fraction: (u64, u64)) -> u32 {
    scale(value as u64, fraction).min(u32::MAX as u64) as u32
}

/// Builds the final boss from a snapshot of the player's current stats.
pub fn final_boss(player: &Character) -> Character {
    Character::new(
        BOSS_NAME.to_string(),
        Role::Boss,
        MAX_LEVEL,
        BaseStats {
            max_hp: player.max_hp.saturating_mul(BOSS_HP_MULTIPLIER),
            attack: scale_u32(player.attack, BOSS_ATTACK_FRACTION),
            defense: scale_u32(player.defense, BOSS_DEFENSE_FRACTION),
            speed: scale_u32(player.speed, BOSS_SPEED_FRACTION),
            crit_rate: BOSS_CRIT_RATE,
            crit_damage: BOSS_CRIT_DAMAGE,
            healing_bonus: BOSS_HEALING_BONUS,
            healing_items: 0,
        },
    )
}
