//! Simulation report generation.

use std::collections::BTreeMap;

use super::runner::RunStats;
use crate::core::campaign::CampaignOutcome;
use crate::core::constants::MAX_LEVEL;

/// Aggregated results from multiple simulated campaigns.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub victories: u32,
    pub defeats: u32,
    pub stalemates: u32,
    pub reached_boss: u32,

    // Aggregated stats
    pub avg_battles: f64,
    pub max_battles: u32,
    pub avg_final_level: f64,
    pub avg_heals_used: f64,
    pub avg_items_found: f64,
    pub avg_crits_dealt: f64,
    pub avg_crits_taken: f64,
    /// Mean battle number at which the player first hit each level
    pub avg_battle_for_level: BTreeMap<u32, f64>,

    // Distribution data
    pub level_distribution: BTreeMap<u32, u32>,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

fn mean(values: impl Iterator<Item = f64>, count: u32) -> f64 {
    values.sum::<f64>() / count.max(1) as f64
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let count = |outcome: CampaignOutcome| {
            runs.iter().filter(|r| r.outcome == outcome).count() as u32
        };
        let victories = count(CampaignOutcome::Victory);
        let defeats = count(CampaignOutcome::Defeat);
        let stalemates = count(CampaignOutcome::Stalemate);
        let reached_boss = runs.iter().filter(|r| r.reached_boss).count() as u32;

        let avg_battles = mean(runs.iter().map(|r| r.battles as f64), num_runs);
        let max_battles = runs.iter().map(|r| r.battles).max().unwrap_or(0);
        let avg_final_level = mean(runs.iter().map(|r| r.final_level as f64), num_runs);
        let avg_heals_used = mean(runs.iter().map(|r| r.heals_used as f64), num_runs);
        let avg_items_found = mean(runs.iter().map(|r| r.items_found as f64), num_runs);
        let avg_crits_dealt = mean(runs.iter().map(|r| r.crits_dealt as f64), num_runs);
        let avg_crits_taken = mean(runs.iter().map(|r| r.crits_taken as f64), num_runs);

        let mut avg_battle_for_level = BTreeMap::new();
        for level in 1..=MAX_LEVEL {
            let reached: Vec<f64> = runs
                .iter()
                .filter_map(|r| r.level_reached_at.get(&level).map(|&b| b as f64))
                .collect();
            if !reached.is_empty() {
                let n = reached.len() as u32;
                avg_battle_for_level.insert(level, mean(reached.into_iter(), n));
            }
        }

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        Self {
            num_runs,
            victories,
            defeats,
            stalemates,
            reached_boss,
            avg_battles,
            max_battles,
            avg_final_level,
            avg_heals_used,
            avg_items_found,
            avg_crits_dealt,
            avg_crits_taken,
            avg_battle_for_level,
            level_distribution,
            run_stats: runs,
        }
    }

    pub fn win_rate(&self) -> f64 {
        self.victories as f64 / self.num_runs.max(1) as f64
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} victories, {} defeats, {} stalemates\n",
            self.num_runs, self.victories, self.defeats, self.stalemates
        ));
        report.push_str(&format!(
            "Win rate: {:.1}%   Reached final boss: {}\n\n",
            self.win_rate() * 100.0,
            self.reached_boss
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Battles:         {:.1}\n", self.avg_battles));
        report.push_str(&format!("  Max Battles:         {}\n", self.max_battles));
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        for (level, battle) in self
            .avg_battle_for_level
            .iter()
            .filter(|(level, _)| **level % 10 == 0)
        {
            report.push_str(&format!("  Level {:2} at battle:  {:.0}\n", level, battle));
        }
        report.push('\n');

        report.push_str("── RESOURCES ────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Heals Used:      {:.1}\n", self.avg_heals_used));
        report.push_str(&format!("  Avg Items Found:     {:.1}\n", self.avg_items_found));
        report.push_str(&format!("  Avg Crits Dealt:     {:.1}\n", self.avg_crits_dealt));
        report.push_str(&format!("  Avg Crits Taken:     {:.1}\n\n", self.avg_crits_taken));

        report.push_str("── FINAL LEVEL ──────────────────────────────────────────────────\n");
        for (level, runs) in &self.level_distribution {
            let pct = (*runs as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Level {:2}: {:>5.1}% {}\n", level, pct, bar));
        }

        report
    }
}
