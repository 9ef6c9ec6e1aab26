//! The battle-to-battle campaign loop.
//!
//! A campaign owns the player for its whole lifetime. Each [`Campaign::step`]
//! fights exactly one battle: a scaled regular enemy while the player is below
//! [`MAX_LEVEL`], then a single final-boss encounter that always ends the run.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::character::Character;
use crate::combat::{run_battle, BattleConfig, BattleOutcome};
use crate::core::constants::*;
use crate::events::{EventSink, GameEvent};
use crate::opponents::{final_boss, scaled_enemy};

/// Settings for a new campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignConfig {
    pub player_name: String,
    /// Per-battle round cap before a stalemate is declared
    pub max_battle_rounds: u32,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            max_battle_rounds: MAX_BATTLE_ROUNDS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignOutcome {
    /// The final boss was defeated.
    Victory,
    /// The player fell.
    Defeat,
    /// A battle hit the round cap with both sides standing.
    Stalemate,
}

/// End-of-campaign summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignSummary {
    pub outcome: CampaignOutcome,
    pub battles: u32,
    pub final_level: u32,
    pub healing_items: u32,
}

/// Experience granted for winning regular encounter `battle`.
pub fn reward_exp(battle: u32) -> u64 {
    REWARD_EXP_BASE + battle as u64 * REWARD_EXP_PER_BATTLE
}

#[derive(Debug, Clone)]
pub struct Campaign {
    player: Character,
    battle_count: u32,
    boss: Option<Character>,
    max_battle_rounds: u32,
    outcome: Option<CampaignOutcome>,
}

impl Campaign {
    /// Starts a campaign with a fresh baseline player.
    pub fn new(config: &CampaignConfig) -> Self {
        Self::with_player(Character::player(config.player_name.clone()))
            .with_max_battle_rounds(config.max_battle_rounds)
    }

    /// Starts a campaign from an arbitrary player state.
    pub fn with_player(player: Character) -> Self {
        Self {
            player,
            battle_count: 0,
            boss: None,
            max_battle_rounds: MAX_BATTLE_ROUNDS,
            outcome: None,
        }
    }

    /// Per-battle round cap, raised to 1 if zero.
    pub fn with_max_battle_rounds(mut self, max_battle_rounds: u32) -> Self {
        self.max_battle_rounds = max_battle_rounds.max(1);
        self
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn battle_count(&self) -> u32 {
        self.battle_count
    }

    /// The final boss, once it has been generated.
    pub fn boss(&self) -> Option<&Character> {
        self.boss.as_ref()
    }

    pub fn outcome(&self) -> Option<CampaignOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Fights the next battle. Returns the final outcome once the campaign
    /// is over; further calls return it again without fighting.
    pub fn step(
        &mut self,
        rng: &mut impl Rng,
        events: &mut impl EventSink,
    ) -> Option<CampaignOutcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }
        if !self.player.is_alive() {
            return Some(self.finish(CampaignOutcome::Defeat, events));
        }

        self.battle_count += 1;

        if self.player.is_max_level() {
            return Some(self.fight_final_boss(rng, events));
        }

        let battle = self.battle_count;
        events.emit(GameEvent::EncounterStarted { battle });
        let mut enemy = scaled_enemy(battle, rng);
        let config = BattleConfig::new(reward_exp(battle), REGULAR_DROP_CHANCE)
            .with_max_rounds(self.max_battle_rounds);

        match run_battle(&mut self.player, &mut enemy, config, rng, events).outcome {
            BattleOutcome::Victory => {
                events.emit(GameEvent::StatusReport {
                    battle,
                    stats: self.player.sheet(),
                });
                None
            }
            BattleOutcome::Defeat => Some(self.finish(CampaignOutcome::Defeat, events)),
            BattleOutcome::Stalemate { .. } => {
                Some(self.finish(CampaignOutcome::Stalemate, events))
            }
        }
    }

    fn fight_final_boss(
        &mut self,
        rng: &mut impl Rng,
        events: &mut impl EventSink,
    ) -> CampaignOutcome {
        events.emit(GameEvent::FinalBattleUnlocked);

        let player = &mut self.player;
        let boss = self.boss.get_or_insert_with(|| final_boss(player));
        debug!(boss_hp = boss.max_hp, boss_attack = boss.attack, "final boss generated");

        let config = BattleConfig::new(BOSS_REWARD_EXP, BOSS_DROP_CHANCE)
            .with_max_rounds(self.max_battle_rounds);

        let outcome = match run_battle(player, boss, config, rng, events).outcome {
            BattleOutcome::Victory => {
                events.emit(GameEvent::CampaignVictory {
                    battles: self.battle_count,
                });
                CampaignOutcome::Victory
            }
            BattleOutcome::Defeat => CampaignOutcome::Defeat,
            BattleOutcome::Stalemate { .. } => CampaignOutcome::Stalemate,
        };
        self.finish(outcome, events)
    }

    fn finish(&mut self, outcome: CampaignOutcome, events: &mut impl EventSink) -> CampaignOutcome {
        if !self.player.is_alive() {
            events.emit(GameEvent::CampaignOver {
                battles: self.battle_count,
            });
        }
        info!(
            ?outcome,
            battles = self.battle_count,
            level = self.player.level,
            "campaign finished"
        );
        self.outcome = Some(outcome);
        outcome
    }

    /// Fights battles until the campaign ends.
    pub fn run(&mut self, rng: &mut impl Rng, events: &mut impl EventSink) -> CampaignSummary {
        let outcome = loop {
            if let Some(outcome) = self.step(rng, events) {
                break outcome;
            }
        };
        self.summary(outcome)
    }

    fn summary(&self, outcome: CampaignOutcome) -> CampaignSummary {
        CampaignSummary {
            outcome,
            battles: self.battle_count,
            final_level: self.player.level,
            healing_items: self.player.healing_items,
        }
    }
}

/// Runs a full campaign from the baseline player.
pub fn run_campaign(
    config: &CampaignConfig,
    rng: &mut impl Rng,
    events: &mut impl EventSink,
) -> CampaignSummary {
    Campaign::new(config).run(rng, events)
}
