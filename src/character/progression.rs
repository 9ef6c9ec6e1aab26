//! Experience and level-up growth.

use tracing::trace;

use super::types::Character;
use crate::core::constants::*;
use crate::events::{EventSink, GameEvent};

/// Integer growth by a whole percentage, truncating.
fn grow(value: u64, percent: u64) -> u64 {
    value.saturating_mul(percent) / 100
}

fn grow_u32(value: u32, percent: u64) -> u32 {
    grow(value as u64, percent).min(u32::MAX as u64) as u32
}

impl Character {
    /// Raises the character one level and refills health.
    ///
    /// Does nothing at [`MAX_LEVEL`]; no stat is touched in that case.
    pub fn level_up(&mut self, events: &mut impl EventSink) {
        if self.level >= MAX_LEVEL {
            return;
        }

        self.level += 1;
        self.exp_to_next = grow(self.exp_to_next, EXP_TO_NEXT_GROWTH_PERCENT);
        self.max_hp = grow(self.max_hp, CORE_STAT_GROWTH_PERCENT);
        self.attack = grow_u32(self.attack, CORE_STAT_GROWTH_PERCENT);
        self.defense = grow_u32(self.defense, CORE_STAT_GROWTH_PERCENT);
        self.crit_rate = (self.crit_rate + CRIT_RATE_PER_LEVEL).min(CRIT_RATE_CAP);
        self.crit_damage = (self.crit_damage + CRIT_DAMAGE_PER_LEVEL).min(CRIT_DAMAGE_CAP);
        self.healing_bonus = (self.healing_bonus + HEALING_BONUS_PER_LEVEL).min(HEALING_BONUS_CAP);
        self.hp = self.max_hp;

        trace!(name = %self.name, level = self.level, "level up");
        events.emit(GameEvent::LevelUp {
            stats: self.sheet(),
        });
    }

    /// Adds experience and applies every level-up it pays for.
    ///
    /// Ignored entirely at [`MAX_LEVEL`]. Experience left over when the cap is
    /// reached mid-grant stays in `exp`.
    pub fn gain_exp(&mut self, amount: u64, events: &mut impl EventSink) {
        if self.level >= MAX_LEVEL {
            return;
        }

        self.exp = self.exp.saturating_add(amount);
        events.emit(GameEvent::ExpGained {
            name: self.name.clone(),
            amount,
        });

        while self.exp >= self.exp_to_next && self.level < MAX_LEVEL {
            self.exp -= self.exp_to_next;
            self.level_up(events);
        }
    }
}
