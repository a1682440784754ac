//! Effect resolution - executing card effects on game state.
//!
//! `EffectResolver` applies a card's [`CardEffect`] on behalf of its
//! controller. Multi-step cards arrive here with their [`Selection`]
//! already complete; legality has been checked by the action that
//! finished the selection.

use tracing::debug;

use super::effect::CardEffect;
use super::resolution::Selection;
use crate::cards::CardName;
use crate::core::{CardUid, GameState, Side};
use crate::error::{EngineError, Result};
use crate::zones::{Zone, ZonePosition};

/// Resolves card effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve `name`'s effect for `controller` with the given choices.
    pub fn resolve(state: &mut GameState, controller: Side, name: CardName, selection: &Selection) -> Result<()> {
        let effect = name.effect();
        debug!(card = %name, controller = %controller, ?effect, "resolving effect");

        match (effect, selection) {
            (CardEffect::Passive, _) => Ok(()),
            (CardEffect::FlipPowerCards, _) => {
                let player = &mut state.players[controller];
                let flipped = std::mem::take(&mut player.zones.power_cards);
                for card in flipped {
                    if card.is_long() {
                        player.zones.battlefield.push_back(card);
                    } else {
                        player.zones.hand.push_back(card);
                    }
                }
                Ok(())
            }
            (CardEffect::DrawAndExtraPowerPlay, _) => {
                let player = &mut state.players[controller];
                player.draw(1);
                player.power_plays_left += 1;
                Ok(())
            }
            (CardEffect::StealTopCard, _) => {
                let (me, opp) = state.players.pair_mut(controller);
                if let Some(mut card) = opp.zones.deck.pop_front() {
                    debug!(card = %card.name, thief = %controller, "stole top card");
                    card.owner = controller;
                    me.zones.hand.push_back(card);
                }
                Ok(())
            }
            (CardEffect::DrainHealth(amount), _) => {
                let (me, opp) = state.players.pair_mut(controller);
                opp.health -= amount;
                me.health += amount;
                Ok(())
            }
            (CardEffect::ReshuffleFromGraveyard, Selection::None) => {
                Self::reshuffle_from_graveyard(state, controller, &[])
            }
            (CardEffect::ReshuffleFromGraveyard, Selection::Cards(chosen)) => {
                Self::reshuffle_from_graveyard(state, controller, chosen)
            }
            (CardEffect::ReorderTop, Selection::Cards(order)) => {
                let zones = &mut state.players[controller].zones;
                let mut cards = Vec::with_capacity(order.len());
                for &uid in order.iter() {
                    cards.push(zones.take(Zone::Deck, uid)?);
                }
                for card in cards.into_iter().rev() {
                    zones.put_in_deck(card, ZonePosition::Top);
                }
                Ok(())
            }
            (CardEffect::SacrificeAndDiscard, Selection::Sacrifice { sacrifice, discard }) => {
                let (me, opp) = state.players.pair_mut(controller);
                let mut card = me.zones.take(Zone::Battlefield, *sacrifice)?;
                card.restore_health();
                me.zones.graveyard.push_back(card);
                if let Some(discard) = discard {
                    opp.discard(*discard)?;
                }
                Ok(())
            }
            (CardEffect::FreeShortCard, _) => {
                state.players[controller].monsters_pawn_buff = !state.short_card_played_this_turn;
                Ok(())
            }
            (CardEffect::GainPower(amount), _) => {
                state.players[controller].power += amount;
                Ok(())
            }
            (CardEffect::Strike { damage, controller_draws }, Selection::Target(target)) => {
                let (me, opp) = state.players.pair_mut(controller);
                let card = match me.zones.find_mut(Zone::Battlefield, *target) {
                    Some(card) => card,
                    None => opp
                        .zones
                        .find_mut(Zone::Battlefield, *target)
                        .ok_or(EngineError::CardNotFound { uid: *target, zone: Zone::Battlefield })?,
                };
                card.damage(damage);
                me.draw(controller_draws);
                Ok(())
            }
            (CardEffect::SwapHealth, _) => {
                let players = &mut state.players;
                std::mem::swap(&mut players.hero.health, &mut players.monster.health);
                Ok(())
            }
            (CardEffect::Ultimatum, Selection::Ultimatum { offered, chosen }) => {
                let player = &mut state.players[controller];
                if let Some(&missing) = offered.iter().find(|&&uid| !player.zones.contains(Zone::Deck, uid)) {
                    return Err(EngineError::CardNotFound { uid: missing, zone: Zone::Deck });
                }
                player.zones.transfer(Zone::Deck, Zone::Hand, *chosen)?;
                player.shuffle(&mut state.rng);
                Ok(())
            }
            (CardEffect::Peek, Selection::Peek { chosen }) => {
                let zones = &mut state.players[controller].zones;
                zones.transfer(Zone::Deck, Zone::Hand, *chosen)?;
                if let Some(other) = zones.deck.pop_front() {
                    zones.put_in_deck(other, ZonePosition::Bottom);
                }
                Ok(())
            }
            (_, selection) => Err(EngineError::SelectionMismatch {
                card: name,
                selection: selection.to_string(),
            }),
        }
    }

    /// Resolve a player-targeting card directly against `target`.
    ///
    /// Used when the target is a player rather than a long card; the card
    /// is then played with its effect suppressed.
    pub fn resolve_player_target(state: &mut GameState, controller: Side, name: CardName, target: Side) -> Result<()> {
        debug!(card = %name, controller = %controller, target = %target, "resolving against player");
        match name.effect() {
            CardEffect::PlayerChoice { health_delta, draw, mill } => {
                let player = &mut state.players[target];
                player.health += health_delta;
                player.draw(draw);
                player.mill(mill);
                Ok(())
            }
            CardEffect::Strike { damage, controller_draws } => {
                state.players[target].health -= damage;
                state.players[controller].draw(controller_draws);
                Ok(())
            }
            _ => Err(EngineError::SelectionMismatch {
                card: name,
                selection: format!("player target {target}"),
            }),
        }
    }

    /// Fire a battlefield card's turn-start trigger. Passive cards do
    /// nothing.
    pub fn trigger_turn_start(state: &mut GameState, controller: Side, name: CardName) -> Result<()> {
        if name.effect().is_passive() {
            return Ok(());
        }
        Self::resolve(state, controller, name, &Selection::None)
    }

    fn reshuffle_from_graveyard(state: &mut GameState, controller: Side, chosen: &[CardUid]) -> Result<()> {
        let player = &mut state.players[controller];
        for &uid in chosen {
            player.zones.transfer(Zone::Graveyard, Zone::Deck, uid)?;
        }
        player.shuffle(&mut state.rng);
        player.last_stand_buff = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::{CardUid, EngineConfig, GameRng, PlayerKind};
    use smallvec::smallvec;

    fn state() -> GameState {
        GameState::new_game(
            &EngineConfig::default(),
            PlayerKind::Computer,
            PlayerKind::Computer,
            GameRng::new(11),
        )
    }

    fn uid_in(state: &GameState, side: Side, zone: Zone, name: CardName) -> Option<CardUid> {
        state.players[side].zones.get(zone).iter().find(|c| c.name == name).map(|c| c.uid)
    }

    /// Move a named card from wherever it is on `side` into `zone`.
    fn place(state: &mut GameState, side: Side, name: CardName, zone: Zone) -> CardUid {
        let zones = &mut state.players[side].zones;
        let (from, uid) = Zone::ALL
            .into_iter()
            .filter(|&z| z != zone)
            .find_map(|z| zones.get(z).iter().find(|c| c.name == name).map(|c| (z, c.uid)))
            .unwrap();
        zones.transfer(from, zone, uid).unwrap();
        uid
    }

    #[test]
    fn test_flip_power_cards() {
        let mut state = state();
        let sun = place(&mut state, Side::Hero, CardName::TheSun, Zone::PowerCards);
        let eating = place(&mut state, Side::Hero, CardName::HealthyEating, Zone::PowerCards);

        EffectResolver::resolve(&mut state, Side::Hero, CardName::Awakening, &Selection::None).unwrap();

        let hero = &state.players.hero;
        assert!(hero.zones.power_cards.is_empty());
        assert!(hero.zones.contains(Zone::Battlefield, sun));
        assert!(hero.zones.contains(Zone::Hand, eating));
    }

    #[test]
    fn test_healthy_eating() {
        let mut state = state();
        let hand = state.players.hero.zones.hand.len();
        EffectResolver::resolve(&mut state, Side::Hero, CardName::HealthyEating, &Selection::None).unwrap();
        assert_eq!(state.players.hero.zones.hand.len(), hand + 1);
        assert_eq!(state.players.hero.power_plays_left, 2);
    }

    #[test]
    fn test_pixie_steals_and_changes_owner() {
        let mut state = state();
        let top = state.players.monster.zones.deck[0].uid;

        EffectResolver::trigger_turn_start(&mut state, Side::Hero, CardName::APlayfulPixie).unwrap();

        let stolen = state.players.hero.zones.find(Zone::Hand, top).unwrap();
        assert_eq!(stolen.owner, Side::Hero);
        assert!(!state.players.monster.zones.contains(Zone::Deck, top));
    }

    #[test]
    fn test_pixie_with_empty_deck_does_nothing() {
        let mut state = state();
        state.players.monster.zones.deck.clear();
        let hand = state.players.hero.zones.hand.len();
        EffectResolver::trigger_turn_start(&mut state, Side::Hero, CardName::APlayfulPixie).unwrap();
        assert_eq!(state.players.hero.zones.hand.len(), hand);
    }

    #[test]
    fn test_dragon_drains() {
        let mut state = state();
        EffectResolver::trigger_turn_start(&mut state, Side::Hero, CardName::APearlescentDragon).unwrap();
        assert_eq!(state.players.hero.health, 20);
        assert_eq!(state.players.monster.health, 10);
    }

    #[test]
    fn test_passive_cards_do_not_trigger() {
        let mut state = state();
        let before = state.clone();
        EffectResolver::trigger_turn_start(&mut state, Side::Hero, CardName::TheMoon).unwrap();
        assert_eq!(state.players, before.players);
    }

    #[test]
    fn test_last_stand_reshuffles_and_buffs() {
        let mut state = state();
        let first = place(&mut state, Side::Hero, CardName::TheSun, Zone::Graveyard);
        let second = place(&mut state, Side::Hero, CardName::TheMoon, Zone::Graveyard);
        let deck = state.players.hero.zones.deck.len();

        let chosen = Selection::Cards(smallvec![first, second]);
        EffectResolver::resolve(&mut state, Side::Hero, CardName::LastStand, &chosen).unwrap();

        let hero = &state.players.hero;
        assert!(hero.last_stand_buff);
        assert!(hero.zones.graveyard.is_empty());
        assert_eq!(hero.zones.deck.len(), deck + 2);
    }

    #[test]
    fn test_reconsider_reorders_top() {
        let mut state = state();
        let top: Vec<CardUid> = state.players.hero.zones.deck_top(3).map(|c| c.uid).collect();
        let order = smallvec![top[2], top[0], top[1]];

        EffectResolver::resolve(&mut state, Side::Hero, CardName::Reconsider, &Selection::Cards(order)).unwrap();

        let after: Vec<CardUid> = state.players.hero.zones.deck_top(3).map(|c| c.uid).collect();
        assert_eq!(after, vec![top[2], top[0], top[1]]);
    }

    #[test]
    fn test_noble_sacrifice_restores_health_and_discards() {
        let mut state = state();
        let sun = place(&mut state, Side::Hero, CardName::TheSun, Zone::Battlefield);
        state.players.hero.zones.find_mut(Zone::Battlefield, sun).unwrap().damage(1);
        let discard = state.players.monster.zones.hand[0].uid;

        let selection = Selection::Sacrifice { sacrifice: sun, discard: Some(discard) };
        EffectResolver::resolve(&mut state, Side::Hero, CardName::NobleSacrifice, &selection).unwrap();

        let buried = state.players.hero.zones.find(Zone::Graveyard, sun).unwrap();
        assert_eq!(buried.health, Some(2));
        assert!(state.players.monster.zones.contains(Zone::Graveyard, discard));
    }

    #[test]
    fn test_pawn_buff_depends_on_short_card_flag() {
        let mut state = state();
        EffectResolver::trigger_turn_start(&mut state, Side::Monster, CardName::MonstersPawn).unwrap();
        assert!(state.players.monster.monsters_pawn_buff);

        state.short_card_played_this_turn = true;
        EffectResolver::trigger_turn_start(&mut state, Side::Monster, CardName::MonstersPawn).unwrap();
        assert!(!state.players.monster.monsters_pawn_buff);
    }

    #[test]
    fn test_go_all_in_and_fold_against_players() {
        let mut state = state();
        let hand = state.players.hero.zones.hand.len();

        EffectResolver::resolve_player_target(&mut state, Side::Monster, CardName::GoAllIn, Side::Hero).unwrap();
        assert_eq!(state.players.hero.health, 10);
        assert_eq!(state.players.hero.zones.hand.len(), hand + 3);

        let graveyard = state.players.monster.zones.graveyard.len();
        EffectResolver::resolve_player_target(&mut state, Side::Monster, CardName::Fold, Side::Monster).unwrap();
        assert_eq!(state.players.monster.health, 19);
        assert_eq!(state.players.monster.zones.graveyard.len(), graveyard + 2);
    }

    #[test]
    fn test_cheap_shot_player_target_draws_for_controller() {
        let mut state = state();
        let hand = state.players.monster.zones.hand.len();
        EffectResolver::resolve_player_target(&mut state, Side::Monster, CardName::CheapShot, Side::Hero).unwrap();
        assert_eq!(state.players.hero.health, 13);
        assert_eq!(state.players.monster.zones.hand.len(), hand + 1);
    }

    #[test]
    fn test_strike_damages_long_card() {
        let mut state = state();
        let dragon = place(&mut state, Side::Hero, CardName::APearlescentDragon, Zone::Battlefield);

        EffectResolver::resolve(&mut state, Side::Monster, CardName::PokerFace, &Selection::Target(dragon)).unwrap();

        let card = state.players.hero.zones.find(Zone::Battlefield, dragon).unwrap();
        assert!(card.is_dead());
    }

    #[test]
    fn test_non_targeting_card_rejects_player_target() {
        let mut state = state();
        let err = EffectResolver::resolve_player_target(&mut state, Side::Monster, CardName::Peek, Side::Hero)
            .unwrap_err();
        assert!(matches!(err, EngineError::SelectionMismatch { card: CardName::Peek, .. }));
    }

    #[test]
    fn test_strike_without_target_is_a_fault() {
        let mut state = state();
        let err = EffectResolver::resolve(&mut state, Side::Monster, CardName::PokerFace, &Selection::None)
            .unwrap_err();
        assert!(matches!(err, EngineError::SelectionMismatch { .. }));
    }

    #[test]
    fn test_switcheroo() {
        let mut state = state();
        state.players.hero.health = 3;
        EffectResolver::resolve(&mut state, Side::Monster, CardName::TheOlSwitcheroo, &Selection::None).unwrap();
        assert_eq!(state.players.hero.health, 15);
        assert_eq!(state.players.monster.health, 3);
    }

    #[test]
    fn test_ultimatum_moves_chosen_and_keeps_other() {
        let mut state = state();
        let fold = uid_in(&state, Side::Monster, Zone::Deck, CardName::Fold)
            .unwrap_or_else(|| place(&mut state, Side::Monster, CardName::Fold, Zone::Deck));
        let trip = uid_in(&state, Side::Monster, Zone::Deck, CardName::PowerTrip)
            .unwrap_or_else(|| place(&mut state, Side::Monster, CardName::PowerTrip, Zone::Deck));
        let deck = state.players.monster.zones.deck.len();

        let selection = Selection::Ultimatum { offered: [fold, trip], chosen: trip };
        EffectResolver::resolve(&mut state, Side::Monster, CardName::Ultimatum, &selection).unwrap();

        let monster = &state.players.monster;
        assert!(monster.zones.contains(Zone::Hand, trip));
        assert!(monster.zones.contains(Zone::Deck, fold));
        assert_eq!(monster.zones.deck.len(), deck - 1);
    }

    #[test]
    fn test_peek_sends_other_to_bottom() {
        let mut state = state();
        let top: Vec<CardUid> = state.players.monster.zones.deck_top(2).map(|c| c.uid).collect();

        EffectResolver::resolve(&mut state, Side::Monster, CardName::Peek, &Selection::Peek { chosen: top[1] }).unwrap();

        let monster = &state.players.monster;
        assert!(monster.zones.contains(Zone::Hand, top[1]));
        assert_eq!(monster.zones.deck.back().map(|c: &Card| c.uid), Some(top[0]));
    }
}
