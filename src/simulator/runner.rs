//! Plays full campaigns and tracks what happened from the event stream.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use super::config::SimConfig;
use super::report::SimReport;
use crate::core::campaign::{Campaign, CampaignConfig, CampaignOutcome};
use crate::events::{EventSink, GameEvent};

/// Statistics for one simulated campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub outcome: CampaignOutcome,
    pub battles: u32,
    pub final_level: u32,
    pub level_ups: u32,
    pub heals_used: u32,
    pub items_found: u32,
    pub crits_dealt: u64,
    pub crits_taken: u64,
    pub reached_boss: bool,
    /// Battle number at which each level was first reached
    pub level_reached_at: BTreeMap<u32, u32>,
}

/// Accumulates run statistics from engine events.
struct SimStats {
    player_name: String,
    current_battle: u32,
    level_ups: u32,
    heals_used: u32,
    items_found: u32,
    crits_dealt: u64,
    crits_taken: u64,
    reached_boss: bool,
    level_reached_at: BTreeMap<u32, u32>,
}

impl SimStats {
    fn new(player_name: &str) -> Self {
        let mut level_reached_at = BTreeMap::new();
        level_reached_at.insert(1, 0);

        Self {
            player_name: player_name.to_string(),
            current_battle: 0,
            level_ups: 0,
            heals_used: 0,
            items_found: 0,
            crits_dealt: 0,
            crits_taken: 0,
            reached_boss: false,
            level_reached_at,
        }
    }
}

impl EventSink for SimStats {
    fn emit(&mut self, event: GameEvent) {
        match event {
            GameEvent::EncounterStarted { battle } => self.current_battle = battle,
            GameEvent::FinalBattleUnlocked => {
                self.current_battle += 1;
                self.reached_boss = true;
            }
            GameEvent::LevelUp { stats } => {
                self.level_ups += 1;
                self.level_reached_at
                    .entry(stats.level)
                    .or_insert(self.current_battle);
            }
            GameEvent::Healed { .. } => self.heals_used += 1,
            GameEvent::ItemFound { .. } => self.items_found += 1,
            GameEvent::CriticalHit { attacker } => {
                if attacker == self.player_name {
                    self.crits_dealt += 1;
                } else {
                    self.crits_taken += 1;
                }
            }
            _ => {}
        }
    }
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            info!(
                run = run_idx + 1,
                total = config.num_runs,
                outcome = ?run.outcome,
                battles = run.battles,
                level = run.final_level,
                heals = run.heals_used,
                "simulated campaign"
            );
        }
        all_runs.push(run);
    }

    let report = SimReport::from_runs(all_runs);
    if config.verbosity >= 1 {
        info!(
            runs = report.num_runs,
            victories = report.victories,
            defeats = report.defeats,
            stalemates = report.stalemates,
            "simulation finished"
        );
    }
    report
}

/// Simulate one campaign from the baseline player.
fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let campaign_config = CampaignConfig {
        max_battle_rounds: config.max_battle_rounds,
        ..Default::default()
    };
    let mut campaign = Campaign::new(&campaign_config);
    let mut stats = SimStats::new(&campaign_config.player_name);

    let summary = campaign.run(rng, &mut stats);

    RunStats {
        outcome: summary.outcome,
        battles: summary.battles,
        final_level: summary.final_level,
        level_ups: stats.level_ups,
        heals_used: stats.heals_used,
        items_found: stats.items_found,
        crits_dealt: stats.crits_dealt,
        crits_taken: stats.crits_taken,
        reached_boss: stats.reached_boss,
        level_reached_at: stats.level_reached_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_run() {
        let config = SimConfig::quick(12345);
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let stats = simulate_single_run(&config, &mut rng);

        assert!(stats.battles >= 1);
        assert_eq!(stats.final_level, 1 + stats.level_ups);
        if stats.outcome == CampaignOutcome::Victory {
            assert!(stats.reached_boss);
        }
        // Every level between 1 and the final one was recorded once.
        assert_eq!(stats.level_reached_at.len() as u32, stats.final_level);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = SimConfig::quick(42);
        let a = simulate_single_run(&config, &mut ChaCha8Rng::seed_from_u64(42));
        let b = simulate_single_run(&config, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_simulation() {
        let config = SimConfig {
            num_runs: 5,
            ..SimConfig::quick(7)
        };

        let report = run_simulation(&config);

        assert_eq!(report.num_runs, 5);
        assert_eq!(
            report.victories + report.defeats + report.stalemates,
            report.num_runs
        );
        assert!(report.avg_battles >= 1.0);
        assert_eq!(report.run_stats.len(), 5);
    }

    #[test]
    fn test_stats_sink_splits_crits_by_side() {
        let mut stats = SimStats::new("Hero");
        stats.emit(GameEvent::CriticalHit {
            attacker: "Hero".to_string(),
        });
        stats.emit(GameEvent::CriticalHit {
            attacker: "Kroco #1".to_string(),
        });
        stats.emit(GameEvent::CriticalHit {
            attacker: "Kroco #1".to_string(),
        });
        assert_eq!(stats.crits_dealt, 1);
        assert_eq!(stats.crits_taken, 2);
    }
}
