//! Player-kind legality carve-outs.
//!
//! Automated players are kept away from moves that are legal but always
//! harmful or dead ends, and they may not cancel or inspect cards. These
//! rules sit on top of the card rules; they only ever remove options.

use crate::cards::{Card, CardName};
use crate::core::{CardUid, GameState, PlayerKind, Side};
use crate::zones::Zone;

/// Extra legality rules applied per player kind.
pub trait LegalityPolicy: Sync {
    /// Whether cancel and card info are available.
    fn may_use_menu(&self) -> bool;

    /// Whether a hand pick must leave at least one way to play the card.
    fn requires_continuation(&self) -> bool;

    /// Veto playing `card` face up for the acting player.
    fn veto_face_up(&self, state: &GameState, card: &Card) -> bool;

    /// Veto playing `card` face down for the acting player.
    fn veto_face_down(&self, state: &GameState, card: &Card) -> bool;

    /// Veto aiming a damage card at the long card `target`.
    fn veto_battlefield_target(&self, state: &GameState, target: CardUid) -> bool;
}

/// No carve-outs.
#[derive(Clone, Copy, Debug, Default)]
pub struct HumanPolicy;

impl LegalityPolicy for HumanPolicy {
    fn may_use_menu(&self) -> bool {
        true
    }

    fn requires_continuation(&self) -> bool {
        false
    }

    fn veto_face_up(&self, _state: &GameState, _card: &Card) -> bool {
        false
    }

    fn veto_face_down(&self, _state: &GameState, _card: &Card) -> bool {
        false
    }

    fn veto_battlefield_target(&self, _state: &GameState, _target: CardUid) -> bool {
        false
    }
}

/// Carve-outs for computer players.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutomatedPolicy;

impl LegalityPolicy for AutomatedPolicy {
    fn may_use_menu(&self) -> bool {
        false
    }

    fn requires_continuation(&self) -> bool {
        true
    }

    fn veto_face_up(&self, state: &GameState, card: &Card) -> bool {
        let (me, opp) = (state.me(), state.opp());
        match card.name {
            CardName::NobleSacrifice => opp.zones.hand.is_empty(),
            CardName::TheOlSwitcheroo => me.health >= opp.health,
            CardName::Awakening => !me.zones.power_cards.iter().any(Card::is_long),
            _ => false,
        }
    }

    fn veto_face_down(&self, state: &GameState, card: &Card) -> bool {
        let me = state.me();
        match (me.side, card.name) {
            (Side::Monster, CardName::GoAllIn | CardName::TheOlSwitcheroo) => true,
            (Side::Hero, CardName::Awakening) => {
                me.zones.hand.iter().filter(|c| c.name == CardName::Awakening).count() == 1
            }
            _ => false,
        }
    }

    fn veto_battlefield_target(&self, state: &GameState, target: CardUid) -> bool {
        state.me().zones.contains(Zone::Battlefield, target)
    }
}

/// The policy for a player kind.
#[must_use]
pub fn policy_for(kind: PlayerKind) -> &'static dyn LegalityPolicy {
    if kind.is_automated() {
        &AutomatedPolicy
    } else {
        &HumanPolicy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineConfig, GameRng};

    fn state_for(side: Side) -> GameState {
        let mut state = GameState::new_game(
            &EngineConfig::default(),
            PlayerKind::Computer,
            PlayerKind::Computer,
            GameRng::new(21),
        );
        if state.active() != side {
            state.pass_priority();
        }
        state
    }

    fn card_named(state: &GameState, side: Side, name: CardName) -> Card {
        state.players[side].all_cards().find(|c| c.name == name).cloned().unwrap()
    }

    #[test]
    fn test_policy_follows_player_kind() {
        let computer = policy_for(PlayerKind::Computer);
        assert!(computer.requires_continuation());
        assert!(!computer.may_use_menu());

        let human = policy_for(PlayerKind::Human);
        assert!(!human.requires_continuation());
        assert!(human.may_use_menu());
    }

    #[test]
    fn test_human_has_no_vetoes() {
        let state = state_for(Side::Monster);
        let switcheroo = card_named(&state, Side::Monster, CardName::TheOlSwitcheroo);
        let policy = policy_for(PlayerKind::Human);

        assert!(policy.may_use_menu());
        assert!(!policy.requires_continuation());
        assert!(!policy.veto_face_up(&state, &switcheroo));
        assert!(!policy.veto_face_down(&state, &switcheroo));
    }

    #[test]
    fn test_switcheroo_only_when_behind() {
        let mut state = state_for(Side::Monster);
        let switcheroo = card_named(&state, Side::Monster, CardName::TheOlSwitcheroo);
        let policy = AutomatedPolicy;

        assert!(policy.veto_face_up(&state, &switcheroo));
        state.players.monster.health = 4;
        assert!(!policy.veto_face_up(&state, &switcheroo));
    }

    #[test]
    fn test_noble_sacrifice_needs_opponent_hand() {
        let mut state = state_for(Side::Hero);
        let sacrifice = card_named(&state, Side::Hero, CardName::NobleSacrifice);

        assert!(!AutomatedPolicy.veto_face_up(&state, &sacrifice));
        state.players.monster.zones.hand.clear();
        assert!(AutomatedPolicy.veto_face_up(&state, &sacrifice));
    }

    #[test]
    fn test_awakening_needs_long_power_card() {
        let mut state = state_for(Side::Hero);
        let awakening = card_named(&state, Side::Hero, CardName::Awakening);
        assert!(AutomatedPolicy.veto_face_up(&state, &awakening));

        let moon = card_named(&state, Side::Hero, CardName::TheMoon);
        let zone = state.players.hero.zones.locate(moon.uid).unwrap();
        state.players.hero.zones.transfer(zone, Zone::PowerCards, moon.uid).unwrap();
        assert!(!AutomatedPolicy.veto_face_up(&state, &awakening));
    }

    #[test]
    fn test_monster_keeps_go_all_in_out_of_power_cards() {
        let state = state_for(Side::Monster);
        let go_all_in = card_named(&state, Side::Monster, CardName::GoAllIn);
        let peek = card_named(&state, Side::Monster, CardName::Peek);

        assert!(AutomatedPolicy.veto_face_down(&state, &go_all_in));
        assert!(!AutomatedPolicy.veto_face_down(&state, &peek));
    }

    #[test]
    fn test_hero_keeps_last_awakening_in_hand() {
        let mut state = state_for(Side::Hero);
        state.players.hero.draw(20);
        let awakening = card_named(&state, Side::Hero, CardName::Awakening);
        assert!(!AutomatedPolicy.veto_face_down(&state, &awakening));

        let others: Vec<CardUid> = state
            .players
            .hero
            .zones
            .hand
            .iter()
            .filter(|c| c.name == CardName::Awakening && c.uid != awakening.uid)
            .map(|c| c.uid)
            .collect();
        for uid in others {
            state.players.hero.discard(uid).unwrap();
        }
        assert!(AutomatedPolicy.veto_face_down(&state, &awakening));
    }

    #[test]
    fn test_own_battlefield_target_vetoed() {
        let mut state = state_for(Side::Monster);
        let pawn = card_named(&state, Side::Monster, CardName::MonstersPawn);
        let zone = state.players.monster.zones.locate(pawn.uid).unwrap();
        state.players.monster.zones.transfer(zone, Zone::Battlefield, pawn.uid).unwrap();

        assert!(AutomatedPolicy.veto_battlefield_target(&state, pawn.uid));
        assert!(!HumanPolicy.veto_battlefield_target(&state, pawn.uid));
    }
}
