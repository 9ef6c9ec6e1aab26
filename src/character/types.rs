use serde::{Deserialize, Serialize};

use crate::core::constants::*;

/// Which side of the campaign a combatant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Player,
    Enemy,
    Boss,
}

/// Starting stat block for a new combatant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub max_hp: u64,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub crit_rate: f64,
    pub crit_damage: f64,
    pub healing_bonus: f64,
    pub healing_items: u32,
}

impl BaseStats {
    /// The fixed stat block every campaign starts the player with.
    pub fn player() -> Self {
        Self {
            max_hp: PLAYER_BASE_MAX_HP,
            attack: PLAYER_BASE_ATTACK,
            defense: PLAYER_BASE_DEFENSE,
            speed: PLAYER_BASE_SPEED,
            crit_rate: PLAYER_BASE_CRIT_RATE,
            crit_damage: PLAYER_BASE_CRIT_DAMAGE,
            healing_bonus: PLAYER_BASE_HEALING_BONUS,
            healing_items: PLAYER_BASE_HEALING_ITEMS,
        }
    }
}

/// Any combatant: the player, a regular enemy, or the final boss.
///
/// `hp` stays within `0..=max_hp` and `level` never exceeds [`MAX_LEVEL`];
/// every mutating method on this type preserves both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub role: Role,
    pub level: u32,
    pub exp: u64,
    pub exp_to_next: u64,
    pub max_hp: u64,
    pub hp: u64,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    /// Chance per strike in `[0, 1)` sample space. Values above 1.0 always crit.
    pub crit_rate: f64,
    /// Extra damage on a crit: a crit deals `base * (1 + crit_damage)`.
    pub crit_damage: f64,
    /// Multiplicative bonus on the base heal amount.
    pub healing_bonus: f64,
    pub healing_items: u32,
}

/// Serializable copy of a character's public stats, carried by events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSheet {
    pub name: String,
    pub level: u32,
    pub exp: u64,
    pub exp_to_next: u64,
    pub hp: u64,
    pub max_hp: u64,
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
    pub crit_rate: f64,
    pub crit_damage: f64,
    pub healing_bonus: f64,
    pub healing_items: u32,
}

impl Character {
    pub fn new(name: String, role: Role, level: u32, stats: BaseStats) -> Self {
        Self {
            name,
            role,
            level: level.clamp(1, MAX_LEVEL),
            exp: 0,
            exp_to_next: BASE_EXP_TO_NEXT,
            max_hp: stats.max_hp,
            hp: stats.max_hp,
            attack: stats.attack,
            defense: stats.defense,
            speed: stats.speed,
            crit_rate: stats.crit_rate,
            crit_damage: stats.crit_damage,
            healing_bonus: stats.healing_bonus,
            healing_items: stats.healing_items,
        }
    }

    /// A fresh level 1 player with the baseline stat block.
    pub fn player(name: impl Into<String>) -> Self {
        Self::new(name.into(), Role::Player, 1, BaseStats::player())
    }

    pub fn is_player(&self) -> bool {
        self.role == Role::Player
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    /// Subtracts `amount` from current health, flooring at zero.
    /// Returns the health remaining.
    pub fn take_damage(&mut self, amount: u64) -> u64 {
        self.hp = self.hp.saturating_sub(amount).min(self.max_hp);
        self.hp
    }

    /// Sets current health, clamped into `0..=max_hp`.
    pub fn set_hp(&mut self, hp: u64) {
        self.hp = hp.min(self.max_hp);
    }

    pub fn restore_full_hp(&mut self) {
        self.hp = self.max_hp;
    }

    pub fn sheet(&self) -> StatSheet {
        StatSheet {
            name: self.name.clone(),
            level: self.level,
            exp: self.exp,
            exp_to_next: self.exp_to_next,
            hp: self.hp,
            max_hp: self.max_hp,
            attack: self.attack,
            defense: self.defense,
            speed: self.speed,
            crit_rate: self.crit_rate,
            crit_damage: self.crit_damage,
            healing_bonus: self.healing_bonus,
            healing_items: self.healing_items,
        }
    }
}
