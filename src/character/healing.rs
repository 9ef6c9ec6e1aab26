//! Healing item use.

use super::types::Character;
use crate::core::constants::HEAL_BASE_AMOUNT;
use crate::events::{EventSink, GameEvent};

impl Character {
    /// Health restored by one healing item at the current healing bonus.
    pub fn heal_amount(&self) -> u64 {
        (HEAL_BASE_AMOUNT * (1.0 + self.healing_bonus)).max(0.0).floor() as u64
    }

    /// Consumes one healing item. Returns false when none are left.
    pub fn heal(&mut self, events: &mut impl EventSink) -> bool {
        if self.healing_items == 0 {
            return false;
        }

        let amount = self.heal_amount();
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.healing_items -= 1;

        events.emit(GameEvent::Healed {
            name: self.name.clone(),
            amount,
            hp: self.hp,
            max_hp: self.max_hp,
        });
        true
    }

    /// Heals only when below half health and an item is available.
    pub fn auto_heal(&mut self, events: &mut impl EventSink) -> bool {
        if self.hp < self.max_hp / 2 && self.healing_items > 0 {
            self.heal(events)
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NullSink;

    #[test]
    fn test_heal_amount_uses_bonus() {
        let mut player = Character::player("Tester");
        player.healing_bonus = 0.5;
        assert_eq!(player.heal_amount(), 450);
        player.healing_bonus = 0.0;
        assert_eq!(player.heal_amount(), 300);
        player.healing_bonus = 4.0;
        assert_eq!(player.heal_amount(), 1500);
    }

    #[test]
    fn test_heal_consumes_item_and_restores() {
        let mut player = Character::player("Tester");
        player.healing_bonus = 0.5;
        player.set_hp(100);
        let mut events: Vec<GameEvent> = Vec::new();

        assert!(player.heal(&mut events));
        assert_eq!(player.hp, 550);
        assert_eq!(player.healing_items, 0);
        assert_eq!(
            events,
            vec![GameEvent::Healed {
                name: "Tester".to_string(),
                amount: 450,
                hp: 550,
                max_hp: 1200,
            }]
        );
    }

    #[test]
    fn test_heal_without_items_is_noop() {
        let mut player = Character::player("Tester");
        player.healing_items = 0;
        player.set_hp(100);
        let mut events: Vec<GameEvent> = Vec::new();

        assert!(!player.heal(&mut events));
        assert_eq!(player.hp, 100);
        assert!(events.is_empty());
    }

    #[test]
    fn test_heal_never_exceeds_max_hp() {
        let mut player = Character::player("Tester");
        player.healing_items = 3;
        player.set_hp(1100);
        player.heal(&mut NullSink);
        assert_eq!(player.hp, player.max_hp);
        player.heal(&mut NullSink);
        assert_eq!(player.hp, player.max_hp);
        assert_eq!(player.healing_items, 1);
    }

    #[test]
    fn test_auto_heal_threshold() {
        let mut player = Character::player("Tester");

        // Exactly half is not below half.
        player.set_hp(600);
        assert!(!player.auto_heal(&mut NullSink));
        assert_eq!(player.healing_items, 1);

        player.set_hp(599);
        assert!(player.auto_heal(&mut NullSink));
        assert_eq!(player.healing_items, 0);
    }

    #[test]
    fn test_auto_heal_odd_max_uses_floor_half() {
        let mut player = Character::player("Tester");
        player.max_hp = 1201;
        player.set_hp(600);
        assert!(!player.auto_heal(&mut NullSink));
        player.set_hp(599);
        assert!(player.auto_heal(&mut NullSink));
    }

    #[test]
    fn test_auto_heal_without_items() {
        let mut player = Character::player("Tester");
        player.healing_items = 0;
        player.set_hp(1);
        assert!(!player.auto_heal(&mut NullSink));
        assert_eq!(player.hp, 1);
    }
}
