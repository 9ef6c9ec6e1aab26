//! Simulation configuration.

use crate::core::constants::MAX_BATTLE_ROUNDS;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of campaigns to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Per-battle round cap before a stalemate is declared
    pub max_battle_rounds: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_battle_rounds: MAX_BATTLE_ROUNDS,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small seeded batch for quick balance checks
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 50,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }
}
