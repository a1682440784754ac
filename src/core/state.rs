//! Game state: both players and the shared turn context.
//!
//! ## GameState
//!
//! - Both players (zones, health, power, buffs)
//! - Whose turn it is, the phase, and the resolving card
//! - Turn counter and per-turn flags
//! - Terminal winner
//! - The game's RNG, so snapshots replay future shuffles exactly
//!
//! ## Cross-cutting checks
//!
//! After every legal action the action framework calls
//! [`GameState::run_checks`], which in order recomputes the Monster's Pawn
//! buff, sweeps dead long cards off both battlefields, and evaluates the
//! win condition.
//!
//! Zones are `im` vectors, so `clone()` is cheap enough to speculate on.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::EngineConfig;
use super::entity::CardUid;
use super::player::{Player, PlayerKind, Side, SideMap};
use super::rng::GameRng;
use crate::cards::{registry, Card, CardName};
use crate::effects::{EffectResolver, Resolution, Selection};
use crate::error::{EngineError, Result};
use crate::rules::{GamePhase, Winner};
use crate::zones::Zone;

/// Complete game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub players: SideMap<Player>,

    /// The side that acts next. Normally the side whose turn it is; the
    /// opponent briefly holds it while choosing from an Ultimatum.
    pub turn_priority: Side,
    pub phase: GamePhase,
    /// The card currently being played, if any.
    pub resolution: Option<Resolution>,

    /// Starts at 0 and counts turn transitions.
    pub turn_number: u32,
    /// Any card played face up this turn (The Sun).
    pub card_played_this_turn: bool,
    /// A short card played this turn (Monster's Pawn).
    pub short_card_played_this_turn: bool,

    /// Set once and never changed.
    pub winner: Option<Winner>,

    pub config: EngineConfig,
    pub rng: GameRng,
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.players == other.players
            && self.turn_priority == other.turn_priority
            && self.phase == other.phase
            && self.resolution == other.resolution
            && self.turn_number == other.turn_number
            && self.card_played_this_turn == other.card_played_this_turn
            && self.short_card_played_this_turn == other.short_card_played_this_turn
            && self.winner == other.winner
            && self.config == other.config
            && self.rng.state() == other.rng.state()
    }
}

impl GameState {
    /// Set up a fresh game.
    ///
    /// Builds both decks, flips a coin for who goes first, shuffles, and
    /// deals the opening hands. The first player's turn does not run its
    /// turn-start steps.
    #[must_use]
    pub fn new_game(config: &EngineConfig, hero_kind: PlayerKind, monster_kind: PlayerKind, mut rng: GameRng) -> Self {
        let (hero_deck, monster_deck) = registry::build_decks();
        let mut players = SideMap {
            hero: Player::new(Side::Hero, hero_kind, hero_deck, config.starting_health),
            monster: Player::new(Side::Monster, monster_kind, monster_deck, config.starting_health),
        };

        let first = if rng.gen_range(0..2) == 0 { Side::Monster } else { Side::Hero };
        players[first].going_first = true;

        for (_, player) in players.iter_mut() {
            player.power_plays_left = config.power_plays_per_turn;
            player.shuffle(&mut rng);
            player.draw(config.opening_hand);
        }
        debug!(first = %first, seed = rng.seed(), "new game");

        Self {
            players,
            turn_priority: first,
            phase: GamePhase::AwaitingInput,
            resolution: None,
            turn_number: 0,
            card_played_this_turn: false,
            short_card_played_this_turn: false,
            winner: None,
            config: config.clone(),
            rng,
        }
    }

    // === Perspective ===

    /// The side that acts next.
    #[must_use]
    pub fn active(&self) -> Side {
        self.turn_priority
    }

    /// The acting player.
    #[must_use]
    pub fn me(&self) -> &Player {
        &self.players[self.turn_priority]
    }

    /// The acting player's opponent.
    #[must_use]
    pub fn opp(&self) -> &Player {
        &self.players[self.turn_priority.opponent()]
    }

    pub fn me_mut(&mut self) -> &mut Player {
        &mut self.players[self.turn_priority]
    }

    pub fn opp_mut(&mut self) -> &mut Player {
        &mut self.players[self.turn_priority.opponent()]
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    // === Lookup ===

    /// Where a card is, across both sides.
    #[must_use]
    pub fn locate(&self, uid: CardUid) -> Option<(Side, Zone)> {
        self.players
            .iter()
            .find_map(|(side, player)| player.zones.locate(uid).map(|zone| (side, zone)))
    }

    /// Find a card anywhere in the game.
    #[must_use]
    pub fn card(&self, uid: CardUid) -> Option<&Card> {
        let (side, zone) = self.locate(uid)?;
        self.players[side].zones.find(zone, uid)
    }

    /// The card being played. It is still in the acting player's hand.
    pub fn resolving_card(&self) -> Result<&Card> {
        let resolution = self
            .resolution
            .as_ref()
            .ok_or(EngineError::MissingResolution { phase: self.phase })?;
        let uid = resolution.card();
        self.players[self.resolving_side()]
            .zones
            .find(Zone::Hand, uid)
            .ok_or(EngineError::CardNotFound { uid, zone: Zone::Hand })
    }

    /// The side playing the resolving card. While the opponent chooses
    /// from an Ultimatum this is not the side with priority.
    #[must_use]
    pub fn resolving_side(&self) -> Side {
        match self.phase {
            GamePhase::OppChoosingFromUltimatum => self.turn_priority.opponent(),
            _ => self.turn_priority,
        }
    }

    /// Names of every card the resolution references, for diagnostics.
    #[must_use]
    pub fn resolution_names(&self) -> Vec<String> {
        self.resolution
            .iter()
            .flat_map(Resolution::uids)
            .map(|uid| match self.card(uid) {
                Some(card) => card.name.to_string(),
                None => uid.to_string(),
            })
            .collect()
    }

    /// Every card uid in the game, sorted.
    #[must_use]
    pub fn all_uids(&self) -> Vec<CardUid> {
        let mut uids: Vec<CardUid> = self
            .players
            .iter()
            .flat_map(|(_, player)| player.all_cards().map(|card| card.uid))
            .collect();
        uids.sort_unstable();
        uids
    }

    // === Turn flow ===

    /// Hand priority to the other side.
    pub fn pass_priority(&mut self) {
        self.turn_priority = self.turn_priority.opponent();
        debug!(priority = %self.turn_priority, "passed priority");
    }

    /// Clear the resolving card and return to awaiting input.
    pub fn reset_resolution(&mut self) {
        self.resolution = None;
        self.phase = GamePhase::AwaitingInput;
    }

    /// End the active turn and start the opponent's.
    pub fn turn_transition(&mut self) -> Result<()> {
        let ending = self.turn_priority;
        self.end_turn(ending);
        self.turn_number += 1;
        self.card_played_this_turn = false;
        self.short_card_played_this_turn = false;
        debug!(ended = %ending, turn = self.turn_number, "turn transition");
        self.start_turn(self.turn_priority)
    }

    /// Turn-end bookkeeping for `side`, then pass priority.
    ///
    /// Power is only zeroed at the end of the very first turn; after that
    /// it carries over.
    pub fn end_turn(&mut self, side: Side) {
        if self.turn_number == 0 {
            self.players[side].power = 0;
        }
        self.pass_priority();
    }

    /// Turn-start bookkeeping for `side`.
    ///
    /// Refreshes power plays, adds a point of power per power card, draws,
    /// fires every non-passive long card's trigger, and expires Last Stand.
    pub fn start_turn(&mut self, side: Side) -> Result<()> {
        let player = &mut self.players[side];
        player.power_plays_left = self.config.power_plays_per_turn;
        player.power_plays_made_this_turn = 0;
        player.power += player.zones.power_cards.len() as i32;
        player.draw(1);

        let triggers: Vec<CardName> = player.zones.battlefield.iter().map(|card| card.name).collect();
        for name in triggers {
            EffectResolver::trigger_turn_start(self, side, name)?;
        }

        self.players[side].last_stand_buff = false;
        Ok(())
    }

    // === Playing cards ===

    /// Play a card from `side`'s hand face up.
    ///
    /// Long cards are paid for and put on the battlefield. Short cards are
    /// paid for, resolve with `selection` unless `suppress_effect` is set
    /// (the effect was already applied directly to a player), and go to the
    /// graveyard.
    pub fn play_face_up(&mut self, side: Side, uid: CardUid, selection: &Selection, suppress_effect: bool) -> Result<()> {
        let card = self.players[side]
            .zones
            .find(Zone::Hand, uid)
            .cloned()
            .ok_or(EngineError::CardNotFound { uid, zone: Zone::Hand })?;
        self.players[side].pay_power_cost(&card);

        if card.is_long() {
            debug!(side = %side, card = %card.name, "long card enters battlefield");
            self.players[side].zones.transfer(Zone::Hand, Zone::Battlefield, uid)?;
        } else {
            let card = self.players[side].zones.take(Zone::Hand, uid)?;
            if !suppress_effect {
                EffectResolver::resolve(self, side, card.name, selection)?;
            }
            self.players[side].zones.graveyard.push_back(card);
            self.short_card_played_this_turn = true;
        }
        self.card_played_this_turn = true;
        Ok(())
    }

    /// Play a card from `side`'s hand face down as a power card.
    pub fn play_face_down(&mut self, side: Side, uid: CardUid) -> Result<()> {
        self.players[side].play_power_card(uid)
    }

    // === Cross-cutting checks ===

    /// Run the post-action checks in order.
    pub fn run_checks(&mut self) -> Result<()> {
        self.update_pawn_buff()?;
        self.check_long_card_deaths()?;
        self.check_game_over();
        Ok(())
    }

    /// Recompute the Monster's Pawn buff.
    ///
    /// The acting side's pawns re-grant it unless a short card has been
    /// played this turn. A side without a pawn loses it.
    pub fn update_pawn_buff(&mut self) -> Result<()> {
        let me = self.turn_priority;
        let pawns = self.players[me]
            .zones
            .battlefield
            .iter()
            .filter(|card| card.name == CardName::MonstersPawn)
            .count();
        for _ in 0..pawns {
            EffectResolver::trigger_turn_start(self, me, CardName::MonstersPawn)?;
        }

        for (_, player) in self.players.iter_mut() {
            if !player.controls(CardName::MonstersPawn) {
                player.monsters_pawn_buff = false;
            }
        }
        Ok(())
    }

    /// Move long cards at zero health or less to the graveyard, restored
    /// to starting health.
    pub fn check_long_card_deaths(&mut self) -> Result<()> {
        for (side, player) in self.players.iter_mut() {
            let dead: Vec<CardUid> = player
                .zones
                .battlefield
                .iter()
                .filter(|card| card.is_dead())
                .map(|card| card.uid)
                .collect();
            for uid in dead {
                let mut card = player.zones.take(Zone::Battlefield, uid)?;
                debug!(side = %side, card = %card.name, "long card died");
                card.restore_health();
                player.zones.graveyard.push_back(card);
            }
        }
        Ok(())
    }

    /// Decide the winner, if any.
    ///
    /// A side loses with an empty deck or health below 1. Last Stand holds
    /// health at 1 instead. Both sides losing together is a tie. Once a
    /// winner is set this does nothing.
    pub fn check_game_over(&mut self) {
        if self.winner.is_some() {
            return;
        }

        let mut lost = SideMap::with_value(false);
        for (side, player) in self.players.iter_mut() {
            if player.zones.deck.is_empty() {
                lost[side] = true;
            }
            if player.health < 1 {
                if player.last_stand_buff {
                    player.health = 1;
                } else {
                    lost[side] = true;
                }
            }
        }

        self.winner = Winner::from_losses(lost.hero, lost.monster);
        if let Some(winner) = self.winner {
            debug!(%winner, turn = self.turn_number, "game over");
        }
    }

    // === Snapshots ===

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to compact bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
