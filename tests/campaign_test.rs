//! Integration test: Campaign loop
//!
//! Plays whole seeded campaigns and checks the event stream and the
//! hand-off to the final boss.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reaver::simulator::{run_simulation, SimConfig};
use reaver::{
    final_boss, run_campaign, Campaign, CampaignConfig, CampaignOutcome, Character, EventSink,
    GameEvent, NullSink, MAX_LEVEL,
};

/// Validates the event stream as it arrives instead of buffering it.
#[derive(Default)]
struct StreamChecker {
    battles_started: u32,
    last_encounter: u32,
    level_ups: u32,
    final_unlocked: u32,
    victories: u32,
    game_overs: u32,
    last_event: Option<GameEvent>,
}

impl EventSink for StreamChecker {
    fn emit(&mut self, event: GameEvent) {
        match &event {
            GameEvent::EncounterStarted { battle } => {
                assert_eq!(*battle, self.last_encounter + 1);
                self.last_encounter = *battle;
            }
            GameEvent::BattleStarted { .. } => self.battles_started += 1,
            GameEvent::Hit {
                target_hp,
                target_max_hp,
                ..
            } => assert!(target_hp <= target_max_hp),
            GameEvent::Healed { hp, max_hp, .. } => assert!(hp <= max_hp),
            GameEvent::LevelUp { stats } => {
                assert!(stats.level <= MAX_LEVEL);
                self.level_ups += 1;
            }
            GameEvent::FinalBattleUnlocked => self.final_unlocked += 1,
            GameEvent::CampaignVictory { .. } => self.victories += 1,
            GameEvent::CampaignOver { .. } => self.game_overs += 1,
            _ => {}
        }
        self.last_event = Some(event);
    }
}

#[test]
fn test_seeded_campaigns_end_consistently() {
    for seed in [1u64, 2, 3] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut checker = StreamChecker::default();

        let summary = run_campaign(&CampaignConfig::default(), &mut rng, &mut checker);

        assert_eq!(checker.battles_started, summary.battles);
        assert_eq!(checker.level_ups + 1, summary.final_level);
        assert!(checker.final_unlocked <= 1);

        match summary.outcome {
            CampaignOutcome::Victory => {
                assert_eq!(summary.final_level, MAX_LEVEL);
                assert_eq!(checker.final_unlocked, 1);
                assert_eq!(checker.victories, 1);
                assert_eq!(checker.game_overs, 0);
                assert_eq!(
                    checker.last_event,
                    Some(GameEvent::CampaignVictory {
                        battles: summary.battles
                    })
                );
            }
            CampaignOutcome::Defeat => {
                assert_eq!(checker.victories, 0);
                assert_eq!(checker.game_overs, 1);
                assert_eq!(
                    checker.last_event,
                    Some(GameEvent::CampaignOver {
                        battles: summary.battles
                    })
                );
            }
            CampaignOutcome::Stalemate => {
                assert_eq!(checker.game_overs, 0);
            }
        }
    }
}

#[test]
fn test_same_seed_same_campaign() {
    let config = CampaignConfig::default();
    let a = run_campaign(&config, &mut ChaCha8Rng::seed_from_u64(99), &mut NullSink);
    let b = run_campaign(&config, &mut ChaCha8Rng::seed_from_u64(99), &mut NullSink);
    assert_eq!(a, b);
}

#[test]
fn test_player_name_from_config() {
    let config = CampaignConfig {
        player_name: "Herta".to_string(),
        ..Default::default()
    };
    let campaign = Campaign::new(&config);
    assert_eq!(campaign.player().name, "Herta");
    assert_eq!(campaign.player().level, 1);
    assert_eq!(campaign.battle_count(), 0);
    assert!(campaign.boss().is_none());
}

#[test]
fn test_boss_is_built_from_stats_at_max_level() {
    let mut player = Character::player("Hero");
    player.level = MAX_LEVEL - 1;
    player.exp_to_next = 1_000;
    player.exp = 999;
    player.max_hp = 10_000;
    player.hp = 10_000;
    player.attack = 1_000_000;
    player.defense = 100_000;
    player.speed = 1_000;
    player.crit_rate = 0.0;

    let mut campaign = Campaign::with_player(player);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut events: Vec<GameEvent> = Vec::new();

    // Regular encounter one pushes the player to the cap.
    assert_eq!(campaign.step(&mut rng, &mut events), None);
    assert_eq!(campaign.player().level, MAX_LEVEL);
    assert!(campaign.boss().is_none());

    let at_cap = campaign.player().clone();
    let outcome = campaign.step(&mut rng, &mut events);

    assert_eq!(outcome, Some(CampaignOutcome::Victory));
    assert_eq!(campaign.battle_count(), 2);

    let boss = campaign.boss().unwrap();
    let expected = final_boss(&at_cap);
    assert_eq!(boss.max_hp, 864_000);
    assert_eq!(boss.max_hp, expected.max_hp);
    assert_eq!(boss.attack, 864_000);
    assert_eq!(boss.defense, 129_600);
    assert_eq!(boss.speed, 800);
    assert_eq!(boss.hp, 0);

    assert!(events.contains(&GameEvent::FinalBattleUnlocked));
    assert_eq!(events.last(), Some(&GameEvent::CampaignVictory { battles: 2 }));
}

#[test]
fn test_boss_scaling_fractions() {
    let mut player = Character::player("Hero");
    player.max_hp = 5_000;
    player.attack = 400;
    player.defense = 200;
    player.speed = 150;

    let boss = final_boss(&player);
    assert_eq!(
        (boss.max_hp, boss.attack, boss.defense, boss.speed),
        (400_000, 320, 240, 120)
    );
}

#[test]
fn test_simulation_report_totals() {
    let config = SimConfig {
        num_runs: 3,
        ..SimConfig::quick(314)
    };
    let report = run_simulation(&config);

    assert_eq!(report.num_runs, 3);
    assert_eq!(report.victories + report.defeats + report.stalemates, 3);
    assert!(report.reached_boss >= report.victories);
    assert!(report.avg_final_level >= 1.0);
    assert!(report.to_text().contains("SIMULATION REPORT"));
}
