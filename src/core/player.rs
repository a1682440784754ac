//! Sides, per-side storage, and the player record.
//!
//! ## Side
//!
//! The game always has exactly two sides, the Hero and the Monster.
//!
//! ## SideMap
//!
//! Per-side data storage with field access and indexing by `Side`.
//!
//! ## Player
//!
//! One side's zones and scalar state together with the zone-transition
//! primitives (draw, mill, discard, shuffle, paying costs, power plays).
//! Turn lifecycle and face-up plays need the whole game state and live on
//! [`GameState`](crate::core::GameState).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use tracing::trace;

use super::entity::CardUid;
use super::rng::GameRng;
use crate::cards::{Card, CardKind};
use crate::error::Result;
use crate::zones::{PlayerZones, Zone};

/// One of the two sides of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Hero,
    Monster,
}

impl Side {
    /// Both sides, hero first.
    pub const ALL: [Side; 2] = [Side::Hero, Side::Monster];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Hero => Side::Monster,
            Side::Monster => Side::Hero,
        }
    }

    /// Lowercase name, as used in logs and records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Hero => "hero",
            Side::Monster => "monster",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-side data storage.
///
/// ```
/// use poker_monster::core::{Side, SideMap};
///
/// let mut health = SideMap::with_value(15);
/// health[Side::Monster] -= 4;
/// assert_eq!(health[Side::Hero], 15);
/// assert_eq!(health[Side::Monster], 11);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub hero: T,
    pub monster: T,
}

impl<T> SideMap<T> {
    /// Create a SideMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        let hero = factory(Side::Hero);
        let monster = factory(Side::Monster);
        Self { hero, monster }
    }

    /// Create a SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            hero: value.clone(),
            monster: value,
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Hero => &self.hero,
            Side::Monster => &self.monster,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Hero => &mut self.hero,
            Side::Monster => &mut self.monster,
        }
    }

    /// Mutable references to both entries, the given side first.
    pub fn pair_mut(&mut self, first: Side) -> (&mut T, &mut T) {
        match first {
            Side::Hero => (&mut self.hero, &mut self.monster),
            Side::Monster => (&mut self.monster, &mut self.hero),
        }
    }

    /// Iterate over (Side, &T) pairs, hero first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Hero, &self.hero), (Side::Monster, &self.monster)].into_iter()
    }

    /// Iterate over (Side, &mut T) pairs, hero first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        [(Side::Hero, &mut self.hero), (Side::Monster, &mut self.monster)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

/// Who is making decisions for a side.
///
/// Automated players are held to stricter legality rules: they never see
/// dead-end choices and cannot cancel or inspect cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    #[default]
    Computer,
}

impl PlayerKind {
    #[must_use]
    pub const fn is_automated(self) -> bool {
        matches!(self, PlayerKind::Computer)
    }
}

/// One side's zones and scalar state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub side: Side,
    pub kind: PlayerKind,
    pub zones: PlayerZones,

    pub health: i32,
    /// Spent to play cards face up. May exceed any soft ceiling.
    pub power: i32,
    pub power_plays_left: i32,
    pub power_plays_made_this_turn: i32,

    pub going_first: bool,
    /// Damage cannot take health below 1 while set.
    pub last_stand_buff: bool,
    /// The next short card costs no power while set.
    pub monsters_pawn_buff: bool,

    /// Every attempted action, legal or not.
    pub action_number: u32,
}

impl Player {
    /// Create a player holding `deck` in deck order.
    #[must_use]
    pub fn new(side: Side, kind: PlayerKind, deck: impl IntoIterator<Item = Card>, starting_health: i32) -> Self {
        Self {
            side,
            kind,
            zones: PlayerZones::with_deck(deck),
            health: starting_health,
            power: 0,
            power_plays_left: 1,
            power_plays_made_this_turn: 0,
            going_first: false,
            last_stand_buff: false,
            monsters_pawn_buff: false,
            action_number: 0,
        }
    }

    /// Move up to `count` cards from the top of the deck to the hand.
    ///
    /// Draws fewer if the deck runs out; an empty deck is a loss condition
    /// checked elsewhere.
    pub fn draw(&mut self, count: usize) -> usize {
        let mut drawn = 0;
        while drawn < count {
            let Some(card) = self.zones.deck.pop_front() else { break };
            trace!(side = %self.side, card = %card.name, "draw");
            self.zones.hand.push_back(card);
            drawn += 1;
        }
        drawn
    }

    /// Move up to `count` cards from the top of the deck to the graveyard.
    pub fn mill(&mut self, count: usize) -> usize {
        let mut milled = 0;
        while milled < count {
            let Some(card) = self.zones.deck.pop_front() else { break };
            trace!(side = %self.side, card = %card.name, "mill");
            self.zones.graveyard.push_back(card);
            milled += 1;
        }
        milled
    }

    /// Randomize deck order.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.zones.deck.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.zones.deck = cards.into_iter().collect();
    }

    /// Move a card from hand to graveyard.
    pub fn discard(&mut self, uid: CardUid) -> Result<()> {
        let card = self.zones.take(Zone::Hand, uid)?;
        trace!(side = %self.side, card = %card.name, "discard");
        self.zones.graveyard.push_back(card);
        Ok(())
    }

    /// Pay for a face-up play.
    ///
    /// A short card consumes the Monster's Pawn buff instead of power when
    /// the buff is active. Long cards always cost power.
    pub fn pay_power_cost(&mut self, card: &Card) {
        match card.kind() {
            CardKind::Short if self.monsters_pawn_buff => {
                self.monsters_pawn_buff = false;
            }
            _ => self.power -= card.power_cost(),
        }
    }

    /// Play a card from hand face down as a power card.
    ///
    /// Power cards grant their point of power immediately.
    pub fn play_power_card(&mut self, uid: CardUid) -> Result<()> {
        let card = self.zones.take(Zone::Hand, uid)?;
        trace!(side = %self.side, card = %card.name, "power card");
        self.zones.power_cards.push_back(card);
        self.power_plays_left -= 1;
        self.power_plays_made_this_turn += 1;
        self.power += 1;
        Ok(())
    }

    /// Whether a long card with this name is on this side's battlefield.
    #[must_use]
    pub fn controls(&self, name: crate::cards::CardName) -> bool {
        self.zones.battlefield.iter().any(|card| card.name == name)
    }

    /// Every card this side currently holds, across all five zones.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.zones.iter_all()
    }
}
