//! Card definitions - static card data.
//!
//! `CardName` identifies one of the eighteen printed cards and
//! `CardDefinition` holds its immutable properties: owner deck, kind,
//! power cost, starting health, copies per deck, and rules text.
//!
//! Instance-specific data (uid, current health, current owner) lives on
//! [`Card`](super::Card).

use serde::{Deserialize, Serialize};

use super::registry::CATALOG;
use crate::core::Side;

/// The eighteen printed cards, in catalogue order.
///
/// The discriminant is the per-name card id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardName {
    // Hero deck
    Awakening,
    #[serde(rename = "Healthy Eating")]
    HealthyEating,
    #[serde(rename = "The Sun")]
    TheSun,
    #[serde(rename = "The Moon")]
    TheMoon,
    #[serde(rename = "A Playful Pixie")]
    APlayfulPixie,
    #[serde(rename = "A Pearlescent Dragon")]
    APearlescentDragon,
    #[serde(rename = "Last Stand")]
    LastStand,
    Reconsider,
    #[serde(rename = "Noble Sacrifice")]
    NobleSacrifice,
    // Monster deck
    #[serde(rename = "Monster's Pawn")]
    MonstersPawn,
    #[serde(rename = "Power Trip")]
    PowerTrip,
    #[serde(rename = "Go All In")]
    GoAllIn,
    Fold,
    #[serde(rename = "Poker Face")]
    PokerFace,
    #[serde(rename = "Cheap Shot")]
    CheapShot,
    #[serde(rename = "The 'Ol Switcheroo")]
    TheOlSwitcheroo,
    Ultimatum,
    Peek,
}

impl CardName {
    /// Every card name, in card id order.
    pub const ALL: [CardName; 18] = [
        CardName::Awakening,
        CardName::HealthyEating,
        CardName::TheSun,
        CardName::TheMoon,
        CardName::APlayfulPixie,
        CardName::APearlescentDragon,
        CardName::LastStand,
        CardName::Reconsider,
        CardName::NobleSacrifice,
        CardName::MonstersPawn,
        CardName::PowerTrip,
        CardName::GoAllIn,
        CardName::Fold,
        CardName::PokerFace,
        CardName::CheapShot,
        CardName::TheOlSwitcheroo,
        CardName::Ultimatum,
        CardName::Peek,
    ];

    /// The per-name card id.
    #[must_use]
    pub const fn card_id(self) -> u16 {
        self as u16
    }

    /// The printed name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardName::Awakening => "Awakening",
            CardName::HealthyEating => "Healthy Eating",
            CardName::TheSun => "The Sun",
            CardName::TheMoon => "The Moon",
            CardName::APlayfulPixie => "A Playful Pixie",
            CardName::APearlescentDragon => "A Pearlescent Dragon",
            CardName::LastStand => "Last Stand",
            CardName::Reconsider => "Reconsider",
            CardName::NobleSacrifice => "Noble Sacrifice",
            CardName::MonstersPawn => "Monster's Pawn",
            CardName::PowerTrip => "Power Trip",
            CardName::GoAllIn => "Go All In",
            CardName::Fold => "Fold",
            CardName::PokerFace => "Poker Face",
            CardName::CheapShot => "Cheap Shot",
            CardName::TheOlSwitcheroo => "The 'Ol Switcheroo",
            CardName::Ultimatum => "Ultimatum",
            CardName::Peek => "Peek",
        }
    }

    /// Static data for this card.
    #[must_use]
    pub fn definition(self) -> &'static CardDefinition {
        &CATALOG[self as usize]
    }
}

impl std::fmt::Display for CardName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short cards resolve once and go to the graveyard. Long cards stay on the
/// battlefield with health until they die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Short,
    Long,
}

/// Static card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardDefinition {
    pub name: CardName,
    /// Deck the card is built into.
    pub deck: Side,
    pub kind: CardKind,
    /// Power needed to play face up. Zero means free.
    pub power_cost: i32,
    /// Starting health, long cards only.
    pub health: Option<i32>,
    /// Copies per deck.
    pub quantity: u8,
    pub text: &'static str,
}

impl CardDefinition {
    /// Per-name card id.
    #[must_use]
    pub const fn card_id(&self) -> u16 {
        self.name.card_id()
    }

    #[must_use]
    pub const fn is_long(&self) -> bool {
        matches!(self.kind, CardKind::Long)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_json() {
        for name in CardName::ALL {
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{}\"", name.as_str()));
            let back: CardName = serde_json::from_str(&json).unwrap();
            assert_eq!(back, name);
        }
    }

    #[test]
    fn test_card_ids_follow_catalogue_order() {
        for (index, name) in CardName::ALL.iter().enumerate() {
            assert_eq!(name.card_id() as usize, index);
            assert_eq!(name.definition().name, *name);
        }
    }

    #[test]
    fn test_definition_lookup() {
        let dragon = CardName::APearlescentDragon.definition();
        assert_eq!(dragon.power_cost, 5);
        assert_eq!(dragon.health, Some(4));
        assert!(dragon.is_long());
        assert_eq!(dragon.deck, Side::Hero);

        let peek = CardName::Peek.definition();
        assert_eq!(peek.kind, CardKind::Short);
        assert_eq!(peek.health, None);
        assert_eq!(peek.deck, Side::Monster);
    }
}
