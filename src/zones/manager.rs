//! Per-side zone storage and card movement.
//!
//! Each side owns five zones. Only deck order is meaningful: the front of
//! the deck is its top, and draws and mills take from there. The other
//! zones keep insertion order so that rendering and snapshots are stable.
//!
//! Zones are `im::Vector`s, so cloning a whole game state for speculative
//! legality checks shares structure instead of copying forty cards.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::CardUid;
use crate::error::{EngineError, Result};

/// One of a side's five zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand,
    Battlefield,
    Graveyard,
    PowerCards,
}

impl Zone {
    pub const ALL: [Zone; 5] = [Zone::Deck, Zone::Hand, Zone::Battlefield, Zone::Graveyard, Zone::PowerCards];
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Deck => "deck",
            Zone::Hand => "hand",
            Zone::Battlefield => "battlefield",
            Zone::Graveyard => "graveyard",
            Zone::PowerCards => "power cards",
        };
        f.write_str(name)
    }
}

/// Where to put a card in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Front of the zone (top of deck).
    Top,
    /// Back of the zone (bottom of deck).
    Bottom,
}

/// The five zones belonging to one side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerZones {
    pub deck: Vector<Card>,
    pub hand: Vector<Card>,
    pub battlefield: Vector<Card>,
    pub graveyard: Vector<Card>,
    pub power_cards: Vector<Card>,
}

impl PlayerZones {
    /// Zones with `deck` in deck order and everything else empty.
    #[must_use]
    pub fn with_deck(deck: impl IntoIterator<Item = Card>) -> Self {
        Self {
            deck: deck.into_iter().collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn get(&self, zone: Zone) -> &Vector<Card> {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
            Zone::Battlefield => &self.battlefield,
            Zone::Graveyard => &self.graveyard,
            Zone::PowerCards => &self.power_cards,
        }
    }

    pub fn get_mut(&mut self, zone: Zone) -> &mut Vector<Card> {
        match zone {
            Zone::Deck => &mut self.deck,
            Zone::Hand => &mut self.hand,
            Zone::Battlefield => &mut self.battlefield,
            Zone::Graveyard => &mut self.graveyard,
            Zone::PowerCards => &mut self.power_cards,
        }
    }

    /// Index of a card within a zone.
    #[must_use]
    pub fn position(&self, zone: Zone, uid: CardUid) -> Option<usize> {
        self.get(zone).iter().position(|card| card.uid == uid)
    }

    #[must_use]
    pub fn contains(&self, zone: Zone, uid: CardUid) -> bool {
        self.position(zone, uid).is_some()
    }

    /// Look up a card within a zone.
    #[must_use]
    pub fn find(&self, zone: Zone, uid: CardUid) -> Option<&Card> {
        self.get(zone).iter().find(|card| card.uid == uid)
    }

    /// Look up a card within a zone, mutably.
    pub fn find_mut(&mut self, zone: Zone, uid: CardUid) -> Option<&mut Card> {
        self.get_mut(zone).iter_mut().find(|card| card.uid == uid)
    }

    /// Remove a card from a zone.
    pub fn take(&mut self, zone: Zone, uid: CardUid) -> Result<Card> {
        let index = self
            .position(zone, uid)
            .ok_or(EngineError::CardNotFound { uid, zone })?;
        Ok(self.get_mut(zone).remove(index))
    }

    /// Move a card between two of this side's zones, appending it.
    pub fn transfer(&mut self, from: Zone, to: Zone, uid: CardUid) -> Result<()> {
        let card = self.take(from, uid)?;
        self.get_mut(to).push_back(card);
        Ok(())
    }

    /// Put a card into the deck at the top or bottom.
    pub fn put_in_deck(&mut self, card: Card, position: ZonePosition) {
        match position {
            ZonePosition::Top => self.deck.push_front(card),
            ZonePosition::Bottom => self.deck.push_back(card),
        }
    }

    /// The top `count` cards of the deck, top first.
    pub fn deck_top(&self, count: usize) -> impl Iterator<Item = &Card> {
        self.deck.iter().take(count)
    }

    /// Which zone a card is in, if any.
    #[must_use]
    pub fn locate(&self, uid: CardUid) -> Option<Zone> {
        Zone::ALL.into_iter().find(|&zone| self.contains(zone, uid))
    }

    /// Every card across all five zones.
    pub fn iter_all(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .iter()
            .chain(self.hand.iter())
            .chain(self.battlefield.iter())
            .chain(self.graveyard.iter())
            .chain(self.power_cards.iter())
    }

    /// Total cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        Zone::ALL.iter().map(|&zone| self.get(zone).len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardName;

    fn zones() -> PlayerZones {
        PlayerZones::with_deck(vec![
            Card::new(CardUid(0), CardName::Awakening),
            Card::new(CardUid(6), CardName::TheSun),
            Card::new(CardUid(15), CardName::Reconsider),
        ])
    }

    #[test]
    fn test_with_deck_keeps_order() {
        let zones = zones();
        let uids: Vec<_> = zones.deck_top(3).map(|c| c.uid).collect();
        assert_eq!(uids, vec![CardUid(0), CardUid(6), CardUid(15)]);
        assert_eq!(zones.len(), 3);
    }

    #[test]
    fn test_transfer_and_locate() {
        let mut zones = zones();
        zones.transfer(Zone::Deck, Zone::Battlefield, CardUid(6)).unwrap();

        assert_eq!(zones.locate(CardUid(6)), Some(Zone::Battlefield));
        assert_eq!(zones.deck.len(), 2);
        assert_eq!(zones.len(), 3);
    }

    #[test]
    fn test_take_missing_card_reports_zone() {
        let mut zones = zones();
        let err = zones.take(Zone::Hand, CardUid(0)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::CardNotFound { uid: CardUid(0), zone: Zone::Hand }
        ));
    }

    #[test]
    fn test_put_in_deck_top_and_bottom() {
        let mut zones = zones();
        let sun = zones.take(Zone::Deck, CardUid(6)).unwrap();
        zones.put_in_deck(sun, ZonePosition::Bottom);
        assert_eq!(zones.deck.back().map(|c| c.uid), Some(CardUid(6)));

        let sun = zones.take(Zone::Deck, CardUid(6)).unwrap();
        zones.put_in_deck(sun, ZonePosition::Top);
        assert_eq!(zones.deck.front().map(|c| c.uid), Some(CardUid(6)));
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut zones = zones();
        zones.transfer(Zone::Deck, Zone::Battlefield, CardUid(6)).unwrap();
        zones.find_mut(Zone::Battlefield, CardUid(6)).unwrap().damage(1);
        assert_eq!(zones.find(Zone::Battlefield, CardUid(6)).unwrap().health, Some(1));
    }
}
