//! Integration test: Battle engine
//!
//! Exercises full battles between the baseline player and generated
//! opponents: health bounds, termination progress, stalemates and rewards.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reaver::combat::{calculate_damage, run_battle, turn_order, BattleConfig, Side};
use reaver::{
    battle, scaled_enemy, BaseStats, BattleOutcome, Character, GameEvent, NullSink, Role,
};

fn enemy_with(max_hp: u64, attack: u32, defense: u32, speed: u32) -> Character {
    Character::new(
        "Sentinel".to_string(),
        Role::Enemy,
        1,
        BaseStats {
            max_hp,
            attack,
            defense,
            speed,
            crit_rate: 0.2,
            crit_damage: 0.5,
            healing_bonus: 0.0,
            healing_items: 0,
        },
    )
}

fn hit_damages(events: &[GameEvent]) -> Vec<u64> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Hit { damage, .. } => Some(*damage),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Health bounds
// =============================================================================

#[test]
fn test_health_stays_in_bounds_across_battles() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for battle_index in 1..=40 {
        let mut player = Character::player("Hero");
        player.healing_items = 5;
        let mut enemy = scaled_enemy(battle_index, &mut rng);
        let mut events: Vec<GameEvent> = Vec::new();

        battle(&mut player, &mut enemy, 0, 0.5, &mut rng, &mut events);

        assert!(player.hp <= player.max_hp);
        assert!(enemy.hp <= enemy.max_hp);
        for event in &events {
            match event {
                GameEvent::Hit {
                    target_hp,
                    target_max_hp,
                    ..
                } => assert!(target_hp <= target_max_hp),
                GameEvent::Healed { hp, max_hp, .. } => assert!(hp <= max_hp),
                _ => {}
            }
        }
    }
}

// =============================================================================
// Termination
// =============================================================================

#[test]
fn test_health_drops_at_least_every_two_rounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);

    for battle_index in [1, 5, 20, 60] {
        let mut player = Character::player("Hero");
        let mut enemy = scaled_enemy(battle_index, &mut rng);
        let mut events: Vec<GameEvent> = Vec::new();

        let outcome = battle(&mut player, &mut enemy, 0, 0.0, &mut rng, &mut events);
        assert_ne!(outcome, BattleOutcome::Stalemate { rounds: 10_000 });

        // Two rounds are at most four strikes.
        let damages = hit_damages(&events);
        for window in damages.windows(4) {
            assert!(
                window.iter().any(|&d| d > 0),
                "possible stalemate against enemy {}",
                battle_index
            );
        }
    }
}

#[test]
fn test_mutual_zero_damage_is_reported_as_stalemate() {
    // Player attack 300 vs defense 500 and enemy attack 100 vs defense 100:
    // no strike can ever land, crit or not.
    let mut player = Character::player("Hero");
    let mut enemy = enemy_with(5_000, 100, 500, 50);
    assert_eq!(turn_order(&player, &enemy), [Side::Player, Side::Enemy]);

    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for _ in 0..100 {
        assert_eq!(calculate_damage(&player, &enemy, &mut rng).damage, 0);
        assert_eq!(calculate_damage(&enemy, &player, &mut rng).damage, 0);
    }

    let mut events: Vec<GameEvent> = Vec::new();
    let report = run_battle(
        &mut player,
        &mut enemy,
        BattleConfig::new(500, 1.0).with_max_rounds(200),
        &mut rng,
        &mut events,
    );

    assert_eq!(report.outcome, BattleOutcome::Stalemate { rounds: 200 });
    assert!(!report.outcome.survived());
    assert_eq!(player.hp, player.max_hp);
    assert_eq!(enemy.hp, enemy.max_hp);
    assert_eq!(player.exp, 0);
    assert!(hit_damages(&events).iter().all(|&d| d == 0));
    assert!(matches!(
        events.last(),
        Some(GameEvent::BattleStalled { rounds: 200, .. })
    ));
}

#[test]
fn test_default_round_cap_ends_stalemate() {
    let mut player = Character::player("Hero");
    let mut enemy = enemy_with(5_000, 100, 500, 50);
    let mut rng = ChaCha8Rng::seed_from_u64(10);

    let outcome = battle(&mut player, &mut enemy, 500, 0.4, &mut rng, &mut NullSink);
    assert_eq!(outcome, BattleOutcome::Stalemate { rounds: 10_000 });
}

// =============================================================================
// Rewards
// =============================================================================

#[test]
fn test_victory_grants_exp_then_rolls_drop() {
    let mut player = Character::player("Hero");
    player.crit_rate = 0.0;
    let mut enemy = enemy_with(100, 0, 0, 0);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut events: Vec<GameEvent> = Vec::new();

    let outcome = battle(&mut player, &mut enemy, 250, 1.0, &mut rng, &mut events);

    assert!(outcome.survived());
    assert_eq!(player.level, 3);
    assert_eq!(player.exp, 35);
    assert_eq!(player.healing_items, 2);

    let won = events
        .iter()
        .position(|e| matches!(e, GameEvent::BattleWon { .. }))
        .unwrap();
    let exp = events
        .iter()
        .position(|e| matches!(e, GameEvent::ExpGained { amount: 250, .. }))
        .unwrap();
    let item = events
        .iter()
        .position(|e| matches!(e, GameEvent::ItemFound { healing_items: 2, .. }))
        .unwrap();
    assert!(won < exp && exp < item);
}

#[test]
fn test_crit_notification_precedes_its_hit() {
    let mut player = Character::player("Hero");
    player.crit_rate = 1.0;
    let mut enemy = enemy_with(100, 0, 0, 0);
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    let mut events: Vec<GameEvent> = Vec::new();

    battle(&mut player, &mut enemy, 0, 0.0, &mut rng, &mut events);

    assert_eq!(
        events[1],
        GameEvent::CriticalHit {
            attacker: "Hero".to_string()
        }
    );
    assert!(matches!(
        &events[2],
        GameEvent::Hit { attacker, damage: 450, target_hp: 0, .. } if attacker == "Hero"
    ));
}
