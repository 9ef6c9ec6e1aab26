//! Runs a single encounter between the player and one opponent.

use rand::Rng;
use tracing::{debug, warn};

use super::math::calculate_damage;
use crate::character::Character;
use crate::core::constants::MAX_BATTLE_ROUNDS;
use crate::events::{EventSink, GameEvent};

/// Which of the two combatants is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Enemy,
}

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// The opponent fell and rewards were granted.
    Victory,
    /// The player fell.
    Defeat,
    /// Neither side fell within the round cap.
    Stalemate { rounds: u32 },
}

impl BattleOutcome {
    /// True only when the player won.
    pub fn survived(&self) -> bool {
        matches!(self, BattleOutcome::Victory)
    }
}

/// Rewards and limits for one battle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BattleConfig {
    pub reward_exp: u64,
    /// Probability in `[0, 1]` of finding a healing item on victory.
    pub drop_chance: f64,
    pub max_rounds: u32,
}

impl BattleConfig {
    /// `drop_chance` is clamped into `[0, 1]`; NaN counts as 0.
    pub fn new(reward_exp: u64, drop_chance: f64) -> Self {
        let drop_chance = if drop_chance.is_nan() {
            0.0
        } else {
            drop_chance.clamp(0.0, 1.0)
        };
        Self {
            reward_exp,
            drop_chance,
            max_rounds: MAX_BATTLE_ROUNDS,
        }
    }

    /// Caps the battle length. At least one round is always fought.
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds.max(1);
        self
    }
}

/// What happened over the course of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    pub rounds: u32,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub crits: u32,
    pub heals_used: u32,
    pub item_found: bool,
}

/// Fixed action order for the whole battle. Ties go to the player.
pub fn turn_order(player: &Character, enemy: &Character) -> [Side; 2] {
    if player.speed >= enemy.speed {
        [Side::Player, Side::Enemy]
    } else {
        [Side::Enemy, Side::Player]
    }
}

/// Fights to completion with the default round cap.
///
/// Returns the outcome; use [`BattleOutcome::survived`] for a plain
/// won/lost answer.
pub fn battle(
    player: &mut Character,
    enemy: &mut Character,
    reward_exp: u64,
    drop_chance: f64,
    rng: &mut impl Rng,
    events: &mut impl EventSink,
) -> BattleOutcome {
    run_battle(
        player,
        enemy,
        BattleConfig::new(reward_exp, drop_chance),
        rng,
        events,
    )
    .outcome
}

/// Fights to completion and reports what happened.
pub fn run_battle(
    player: &mut Character,
    enemy: &mut Character,
    config: BattleConfig,
    rng: &mut impl Rng,
    events: &mut impl EventSink,
) -> BattleReport {
    events.emit(GameEvent::BattleStarted {
        player: player.name.clone(),
        enemy: enemy.name.clone(),
    });

    let order = turn_order(player, enemy);
    debug!(player = %player.name, enemy = %enemy.name, ?order, "battle started");

    let mut report = BattleReport {
        outcome: BattleOutcome::Defeat,
        rounds: 0,
        damage_dealt: 0,
        damage_taken: 0,
        crits: 0,
        heals_used: 0,
        item_found: false,
    };

    while player.is_alive() && enemy.is_alive() {
        if report.rounds >= config.max_rounds {
            warn!(
                player = %player.name,
                enemy = %enemy.name,
                rounds = report.rounds,
                "battle stalled"
            );
            events.emit(GameEvent::BattleStalled {
                player: player.name.clone(),
                enemy: enemy.name.clone(),
                rounds: report.rounds,
            });
            report.outcome = BattleOutcome::Stalemate {
                rounds: report.rounds,
            };
            return report;
        }
        report.rounds += 1;

        for side in order {
            let (actor, target) = match side {
                Side::Player => (&mut *player, &mut *enemy),
                Side::Enemy => (&mut *enemy, &mut *player),
            };
            if !actor.is_alive() {
                continue;
            }
            if side == Side::Player && actor.auto_heal(events) {
                report.heals_used += 1;
            }

            let attack = calculate_damage(actor, target, rng);
            if attack.is_crit {
                report.crits += 1;
                events.emit(GameEvent::CriticalHit {
                    attacker: actor.name.clone(),
                });
            }

            let before = target.hp;
            let remaining = target.take_damage(attack.damage);
            match side {
                Side::Player => report.damage_dealt += before - remaining,
                Side::Enemy => report.damage_taken += before - remaining,
            }

            events.emit(GameEvent::Hit {
                attacker: actor.name.clone(),
                target: target.name.clone(),
                damage: attack.damage,
                target_hp: remaining,
                target_max_hp: target.max_hp,
            });

            if remaining == 0 {
                break;
            }
        }
    }

    if player.is_alive() {
        events.emit(GameEvent::BattleWon {
            winner: player.name.clone(),
            loser: enemy.name.clone(),
        });
        player.gain_exp(config.reward_exp, events);

        if rng.gen::<f64>() < config.drop_chance {
            player.healing_items += 1;
            report.item_found = true;
            events.emit(GameEvent::ItemFound {
                name: player.name.clone(),
                healing_items: player.healing_items,
            });
        }
        report.outcome = BattleOutcome::Victory;
    } else {
        events.emit(GameEvent::BattleLost {
            name: player.name.clone(),
        });
        report.outcome = BattleOutcome::Defeat;
    }

    debug!(outcome = ?report.outcome, rounds = report.rounds, "battle finished");
    report
}
