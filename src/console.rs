//! Maps [`GameEvent`]s to console lines.
//!
//! This is a binary-only module (not part of `lib.rs`): the engine emits
//! events and never prints, so all text formatting lives here.

use reaver::{EventSink, GameEvent, StatSheet};
use tracing::error;

/// One-line stat summary.
pub fn stat_line(c: &StatSheet) -> String {
    format!(
        "{} (Lvl {}) HP: {}/{} | ATK: {} | DEF: {} | SPD: {} | EXP: {}/{} | Heals: {} | CRIT Rate: {:.1}% | CRIT Damage: {:.1}% | Healing Bonus: {:.1}%",
        c.name,
        c.level,
        c.hp,
        c.max_hp,
        c.attack,
        c.defense,
        c.speed,
        c.exp,
        c.exp_to_next,
        c.healing_items,
        c.crit_rate * 100.0,
        c.crit_damage * 100.0,
        c.healing_bonus * 100.0,
    )
}

/// Text for one event. May span several lines.
pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::LevelUp { stats } => format!(
            "\n*** {} leveled up to {}! ***\n{}",
            stats.name,
            stats.level,
            stat_line(stats)
        ),
        GameEvent::ExpGained { name, amount } => format!("{} gains {} EXP.", name, amount),
        GameEvent::Healed {
            name,
            amount,
            hp,
            max_hp,
        } => format!("{} heals for {}! (HP: {}/{})", name, amount, hp, max_hp),
        GameEvent::ItemFound {
            name,
            healing_items,
        } => format!(
            "{} found a healing item! (Total: {})",
            name, healing_items
        ),
        GameEvent::BattleStarted { player, enemy } => {
            format!("\n--- BATTLE: {} vs {} ---", player, enemy)
        }
        GameEvent::CriticalHit { .. } => "** CRITICAL HIT! **".to_string(),
        GameEvent::Hit {
            attacker,
            target,
            damage,
            target_hp,
            target_max_hp,
        } => format!(
            "{} hits {} for {} damage! (HP: {}/{})",
            attacker, target, damage, target_hp, target_max_hp
        ),
        GameEvent::BattleWon { winner, loser } => format!("\n{} defeated {}!", winner, loser),
        GameEvent::BattleLost { name } => format!("\n--- {} was defeated... GAME OVER ---", name),
        GameEvent::BattleStalled {
            player,
            enemy,
            rounds,
        } => format!(
            "\n--- {} and {} cannot wound each other. Battle called after {} rounds. ---",
            player, enemy, rounds
        ),
        GameEvent::EncounterStarted { battle } => format!("\n[ BATTLE {} ]", battle),
        GameEvent::FinalBattleUnlocked => "\n>>> Final Battle Unlocked! <<<".to_string(),
        GameEvent::StatusReport { battle, stats } => format!(
            "\n--- Status after battle {} ---\n{}",
            battle,
            stat_line(stats)
        ),
        GameEvent::CampaignVictory { .. } => {
            "\n=== YOU HAVE DEFEATED THE FINAL BOSS. VICTORY! ===".to_string()
        }
        GameEvent::CampaignOver { battles } => {
            format!("\n=== Game Over after {} battles. ===", battles)
        }
    }
}

/// Prints every event to stdout, as text or as JSON lines.
pub struct ConsoleSink {
    json: bool,
}

impl ConsoleSink {
    pub fn text() -> Self {
        Self { json: false }
    }

    pub fn json() -> Self {
        Self { json: true }
    }
}

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: GameEvent) {
        if !self.json {
            println!("{}", describe(&event));
            return;
        }
        match serde_json::to_string(&event) {
            Ok(line) => println!("{}", line),
            Err(e) => error!(error = %e, "failed to encode event"),
        }
    }
}
