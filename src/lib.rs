//! Reaver - Turn-Based Combat Campaign Engine
//!
//! A player character fights an endless line of scaled opponents, levels up,
//! rations healing items and finally faces a boss built from its own stats.
//! Presentation is left to the caller: the engine reports everything through
//! [`events::EventSink`].

pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod events;
pub mod opponents;
pub mod simulator;

pub use crate::character::{BaseStats, Character, Role, StatSheet};
pub use crate::combat::{battle, calculate_damage, run_battle, BattleConfig, BattleOutcome};
pub use crate::core::campaign::{
    run_campaign, Campaign, CampaignConfig, CampaignOutcome, CampaignSummary,
};
pub use crate::core::constants::MAX_LEVEL;
pub use crate::events::{EventSink, GameEvent, NullSink};
pub use crate::opponents::{final_boss, scaled_enemy};
