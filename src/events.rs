//! Notifications emitted by the engine.
//!
//! The engine never prints. Everything a presentation layer might show is
//! reported as a [`GameEvent`] through an [`EventSink`] supplied by the caller.

use serde::{Deserialize, Serialize};

use crate::character::StatSheet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    // ── Character ───────────────────────────────────────────────
    /// A character gained a level. `stats` is the sheet after growth.
    LevelUp { stats: StatSheet },

    ExpGained { name: String, amount: u64 },

    /// A healing item was consumed. `amount` is the full heal value, even
    /// when part of it was wasted against max health.
    Healed {
        name: String,
        amount: u64,
        hp: u64,
        max_hp: u64,
    },

    ItemFound { name: String, healing_items: u32 },

    // ── Battle ──────────────────────────────────────────────────
    BattleStarted { player: String, enemy: String },

    /// Precedes the [`GameEvent::Hit`] it applies to.
    CriticalHit { attacker: String },

    Hit {
        attacker: String,
        target: String,
        damage: u64,
        target_hp: u64,
        target_max_hp: u64,
    },

    BattleWon { winner: String, loser: String },

    BattleLost { name: String },

    /// The round cap was reached with both sides standing.
    BattleStalled {
        player: String,
        enemy: String,
        rounds: u32,
    },

    // ── Campaign ────────────────────────────────────────────────
    EncounterStarted { battle: u32 },

    FinalBattleUnlocked,

    StatusReport { battle: u32, stats: StatSheet },

    CampaignVictory { battles: u32 },

    /// The player fell. Reports how many battles were started.
    CampaignOver { battles: u32 },
}

/// Receiver for engine notifications.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Collects every event in order.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}
