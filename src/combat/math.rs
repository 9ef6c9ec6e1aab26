//! Pure strike math shared by the battle engine and the simulator.
//!
//! Nothing here mutates a combatant. Randomness comes only from the `rng`
//! argument, so a seeded generator makes every result reproducible.

use rand::Rng;

use crate::character::Character;

/// Outcome of a single strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackResult {
    /// Damage dealt (after crit multiplier if applicable).
    pub damage: u64,
    /// Whether this strike was a critical hit.
    pub is_crit: bool,
}

/// Roll for critical hit against a `[0, 1)` sample.
///
/// A rate of 0.0 never crits and any rate of 1.0 or more always does.
pub fn roll_crit(crit_rate: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < crit_rate
}

/// Damage before crits: attack minus defense, never negative.
pub fn base_damage(attack: u32, defense: u32) -> u64 {
    attack.saturating_sub(defense) as u64
}

/// Applies a crit multiplier of `1 + crit_damage`, truncating.
pub fn apply_crit(base: u64, crit_damage: f64) -> u64 {
    (base as f64 * (1.0 + crit_damage.max(0.0))).floor() as u64
}

/// Resolves one strike from `attacker` to `defender`.
///
/// Exactly one random sample is drawn per call, even when the base damage
/// is zero.
pub fn calculate_damage(
    attacker: &Character,
    defender: &Character,
    rng: &mut impl Rng,
) -> AttackResult {
    let base = base_damage(attacker.attack, defender.defense);

    if roll_crit(attacker.crit_rate, rng) {
        AttackResult {
            damage: apply_crit(base, attacker.crit_damage),
            is_crit: true,
        }
    } else {
        AttackResult {
            damage: base,
            is_crit: false,
        }
    }
}
