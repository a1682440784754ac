//! The card catalogue and deck building.
//!
//! `CATALOG` lists every printed card in card id order. Decks are built by
//! expanding each entry into `quantity` copies, assigning uids sequentially
//! across both decks (hero first).

use rustc_hash::{FxHashMap, FxHashSet};

use super::definition::{CardDefinition, CardKind, CardName};
use super::instance::Card;
use crate::core::{CardUid, Side};
use crate::error::{EngineError, Result};

/// Every printed card, indexed by card id.
pub static CATALOG: [CardDefinition; 18] = [
    CardDefinition {
        name: CardName::Awakening,
        deck: Side::Hero,
        kind: CardKind::Short,
        power_cost: 3,
        health: None,
        quantity: 3,
        text: "Flip over your power cards, revealing them. Any that are short cards return to your hand. Any that are long cards stay on the board face-up.",
    },
    CardDefinition {
        name: CardName::HealthyEating,
        deck: Side::Hero,
        kind: CardKind::Short,
        power_cost: 2,
        health: None,
        quantity: 3,
        text: "Draw a card. You can play an extra power card this turn.",
    },
    CardDefinition {
        name: CardName::TheSun,
        deck: Side::Hero,
        kind: CardKind::Long,
        power_cost: 2,
        health: Some(2),
        quantity: 2,
        text: "The Monster can only play 1 face-up card per turn.",
    },
    CardDefinition {
        name: CardName::TheMoon,
        deck: Side::Hero,
        kind: CardKind::Long,
        power_cost: 3,
        health: Some(2),
        quantity: 2,
        text: "The Monster can't play any more power cards.",
    },
    CardDefinition {
        name: CardName::APlayfulPixie,
        deck: Side::Hero,
        kind: CardKind::Long,
        power_cost: 4,
        health: Some(4),
        quantity: 2,
        text: "At the start of your turn, you get to steal the top card of the Monster's deck. (Repeat this every turn.)",
    },
    CardDefinition {
        name: CardName::APearlescentDragon,
        deck: Side::Hero,
        kind: CardKind::Long,
        power_cost: 5,
        health: Some(4),
        quantity: 2,
        text: "At the start of your turn, you get to steal 5 health from the Monster. (Repeat this every turn.)",
    },
    CardDefinition {
        name: CardName::LastStand,
        deck: Side::Hero,
        kind: CardKind::Short,
        power_cost: 0,
        health: None,
        quantity: 1,
        text: "Shuffle 3 other cards from your discard pile into your deck. Until your next turn starts, your health can't reach 0 (damage that would put it to less than 1 puts it to 1 instead.)",
    },
    CardDefinition {
        name: CardName::Reconsider,
        deck: Side::Hero,
        kind: CardKind::Short,
        power_cost: 1,
        health: None,
        quantity: 2,
        text: "Look at the top 3 cards of your deck, and put them back in any order you choose.",
    },
    CardDefinition {
        name: CardName::NobleSacrifice,
        deck: Side::Hero,
        kind: CardKind::Short,
        power_cost: 1,
        health: None,
        quantity: 3,
        text: "As an additional cost to play this card, you must sacrifice a long card. Look at your opponent's hand and discard a card from it.",
    },
    CardDefinition {
        name: CardName::MonstersPawn,
        deck: Side::Monster,
        kind: CardKind::Long,
        power_cost: 3,
        health: Some(3),
        quantity: 3,
        text: "Your first short card each turn costs no power to play.",
    },
    CardDefinition {
        name: CardName::PowerTrip,
        deck: Side::Monster,
        kind: CardKind::Short,
        power_cost: 0,
        health: None,
        quantity: 1,
        text: "Gain +2 power (for this turn only).",
    },
    CardDefinition {
        name: CardName::GoAllIn,
        deck: Side::Monster,
        kind: CardKind::Short,
        power_cost: 3,
        health: None,
        quantity: 3,
        text: "Choose a player. They draw 3 cards and lose 5 health.",
    },
    CardDefinition {
        name: CardName::Fold,
        deck: Side::Monster,
        kind: CardKind::Short,
        power_cost: 0,
        health: None,
        quantity: 1,
        text: "Choose a player. They gain 4 health and discard the top 2 cards of their deck.",
    },
    CardDefinition {
        name: CardName::PokerFace,
        deck: Side::Monster,
        kind: CardKind::Short,
        power_cost: 2,
        health: None,
        quantity: 3,
        text: "Deal 4 damage (to any player or long card).",
    },
    CardDefinition {
        name: CardName::CheapShot,
        deck: Side::Monster,
        kind: CardKind::Short,
        power_cost: 2,
        health: None,
        quantity: 3,
        text: "Deal 2 damage (to any player or long card). Draw a card.",
    },
    CardDefinition {
        name: CardName::TheOlSwitcheroo,
        deck: Side::Monster,
        kind: CardKind::Short,
        power_cost: 3,
        health: None,
        quantity: 1,
        text: "The Hero and the Monster switch health.",
    },
    CardDefinition {
        name: CardName::Ultimatum,
        deck: Side::Monster,
        kind: CardKind::Short,
        power_cost: 1,
        health: None,
        quantity: 2,
        text: "Search your deck for any two cards you want with different names and reveal them. Your opponent chooses one of them. Put the chosen card into your hand, and shuffle the other back into your deck.",
    },
    CardDefinition {
        name: CardName::Peek,
        deck: Side::Monster,
        kind: CardKind::Short,
        power_cost: 1,
        health: None,
        quantity: 3,
        text: "Look at the top 2 cards of your deck and put one into your hand, and the other on the bottom of your deck.",
    },
];

/// Total cards across both decks.
#[must_use]
pub fn card_count() -> u16 {
    CATALOG.iter().map(|def| u16::from(def.quantity)).sum()
}

/// Build both decks in catalogue order, unshuffled.
///
/// Returns `(hero_deck, monster_deck)`.
#[must_use]
pub fn build_decks() -> (Vec<Card>, Vec<Card>) {
    let mut hero = Vec::new();
    let mut monster = Vec::new();
    let mut next_uid = 0u16;

    for definition in &CATALOG {
        for _ in 0..definition.quantity {
            let card = Card::new(CardUid(next_uid), definition.name);
            next_uid += 1;
            match definition.deck {
                Side::Hero => hero.push(card),
                Side::Monster => monster.push(card),
            }
        }
    }
    (hero, monster)
}

/// Per-deck copy counts, keyed by name.
#[must_use]
pub fn deck_list(side: Side) -> FxHashMap<CardName, u8> {
    CATALOG
        .iter()
        .filter(|def| def.deck == side)
        .map(|def| (def.name, def.quantity))
        .collect()
}

/// Check the catalogue is internally consistent.
///
/// Long cards need health, short cards must not have it, ids must follow
/// catalogue order, and every copy must get a distinct uid.
pub fn validate() -> Result<()> {
    for (index, definition) in CATALOG.iter().enumerate() {
        if definition.name as usize != index {
            return Err(EngineError::InvalidConfig(format!(
                "{} is listed at position {} but has card id {}",
                definition.name,
                index,
                definition.card_id()
            )));
        }
        match (definition.kind, definition.health) {
            (CardKind::Long, Some(health)) if health > 0 => {}
            (CardKind::Short, None) => {}
            _ => {
                return Err(EngineError::InvalidConfig(format!(
                    "{} has health {:?} for a {:?} card",
                    definition.name, definition.health, definition.kind
                )))
            }
        }
        if definition.quantity == 0 || definition.power_cost < 0 {
            return Err(EngineError::InvalidConfig(format!(
                "{} has quantity {} and cost {}",
                definition.name, definition.quantity, definition.power_cost
            )));
        }
    }

    let (hero, monster) = build_decks();
    check_deck(Side::Hero, &hero)?;
    check_deck(Side::Monster, &monster)?;
    let mut seen = FxHashSet::default();
    for card in hero.iter().chain(monster.iter()) {
        if !seen.insert(card.uid) {
            return Err(EngineError::InvalidConfig(format!("duplicate uid {}", card.uid)));
        }
    }
    Ok(())
}

/// Check a built deck against its deck list: every card belongs to `side`
/// and each name appears exactly as often as listed.
fn check_deck(side: Side, cards: &[Card]) -> Result<()> {
    let mut counts: FxHashMap<CardName, u8> = FxHashMap::default();
    for card in cards {
        if card.owner != side {
            return Err(EngineError::InvalidConfig(format!("{} is in the {side} deck", card.name)));
        }
        *counts.entry(card.name).or_default() += 1;
    }
    if counts != deck_list(side) {
        return Err(EngineError::InvalidConfig(format!("{side} deck does not match its deck list")));
    }
    Ok(())
}
