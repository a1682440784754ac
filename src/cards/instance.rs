//! Card instances - runtime card state.
//!
//! A `Card` is one physical copy. Its uid never changes; its owner changes
//! when A Playful Pixie steals it, and a long card's health changes when it
//! takes damage. Everything else is read through the definition.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardKind, CardName};
use crate::core::{CardUid, Side};

/// One physical card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub uid: CardUid,
    pub card_id: u16,
    pub name: CardName,
    /// Current owner. Changes when the card is stolen.
    pub owner: Side,
    /// Current health, long cards only.
    pub health: Option<i32>,
    /// Health restored when the card leaves the battlefield.
    pub starting_health: Option<i32>,
}

impl Card {
    /// Create a fresh copy of `name` with the given uid.
    #[must_use]
    pub fn new(uid: CardUid, name: CardName) -> Self {
        let definition = name.definition();
        Self {
            uid,
            card_id: name.card_id(),
            name,
            owner: definition.deck,
            health: definition.health,
            starting_health: definition.health,
        }
    }

    #[must_use]
    pub fn definition(&self) -> &'static CardDefinition {
        self.name.definition()
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.definition().kind
    }

    #[must_use]
    pub fn is_long(&self) -> bool {
        self.kind() == CardKind::Long
    }

    #[must_use]
    pub fn power_cost(&self) -> i32 {
        self.definition().power_cost
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        self.definition().text
    }

    /// Apply damage to a long card. Short cards have no health and are
    /// unaffected.
    pub fn damage(&mut self, amount: i32) {
        if let Some(health) = self.health.as_mut() {
            *health -= amount;
        }
    }

    /// Whether this long card has been reduced to zero health.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        matches!(self.health, Some(health) if health <= 0)
    }

    /// Restore starting health.
    pub fn restore_health(&mut self) {
        self.health = self.starting_health;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_copies_definition() {
        let pawn = Card::new(CardUid(20), CardName::MonstersPawn);
        assert_eq!(pawn.card_id, 9);
        assert_eq!(pawn.owner, Side::Monster);
        assert_eq!(pawn.health, Some(3));
        assert_eq!(pawn.power_cost(), 3);
        assert!(pawn.is_long());
    }

    #[test]
    fn test_damage_and_restore() {
        let mut sun = Card::new(CardUid(6), CardName::TheSun);
        sun.damage(2);
        assert!(sun.is_dead());
        sun.restore_health();
        assert_eq!(sun.health, Some(2));
        assert!(!sun.is_dead());
    }

    #[test]
    fn test_short_cards_ignore_damage() {
        let mut peek = Card::new(CardUid(37), CardName::Peek);
        peek.damage(4);
        assert_eq!(peek.health, None);
        assert!(!peek.is_dead());
    }

    #[test]
    fn test_card_round_trips_with_starting_health() {
        let mut dragon = Card::new(CardUid(12), CardName::APearlescentDragon);
        dragon.damage(3);
        dragon.owner = Side::Monster;

        let json = serde_json::to_string(&dragon).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dragon);
        assert_eq!(back.starting_health, Some(4));
        assert_eq!(back.health, Some(1));
    }
}
