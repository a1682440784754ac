//! Effect definitions.
//!
//! Every card name maps to exactly one `CardEffect`. The mapping is an
//! exhaustive match, so adding a card without deciding its effect does not
//! compile.

use serde::{Deserialize, Serialize};

use crate::cards::CardName;

/// What a card does when it resolves or, for long cards, when its
/// controller's turn starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// Static restriction checked by legality rules (The Sun, The Moon).
    Passive,
    /// Power cards flip: short ones to hand, long ones to the battlefield.
    FlipPowerCards,
    /// Draw a card and gain an extra power play this turn.
    DrawAndExtraPowerPlay,
    /// Take the top card of the opponent's deck into hand.
    StealTopCard,
    /// Move health from the opponent to the controller.
    DrainHealth(i32),
    /// Shuffle chosen graveyard cards into the deck and gain the
    /// damage floor until the controller's next turn.
    ReshuffleFromGraveyard,
    /// Put the top of the deck back in the chosen order.
    ReorderTop,
    /// Sacrifice a long card, then discard a card from the opponent's hand.
    SacrificeAndDiscard,
    /// The first short card each turn costs no power.
    FreeShortCard,
    GainPower(i32),
    /// The chosen player changes health, then draws and mills.
    PlayerChoice { health_delta: i32, draw: usize, mill: usize },
    /// Damage to a player or long card, then the controller draws.
    Strike { damage: i32, controller_draws: usize },
    SwapHealth,
    /// Offer two deck cards; the opponent picks which goes to hand.
    Ultimatum,
    /// One of the top two to hand, the other to the bottom.
    Peek,
}

impl CardEffect {
    /// Passive cards have nothing to trigger.
    #[must_use]
    pub const fn is_passive(self) -> bool {
        matches!(self, CardEffect::Passive)
    }

    /// Effects whose target is one of the two players.
    #[must_use]
    pub const fn targets_players(self) -> bool {
        matches!(self, CardEffect::PlayerChoice { .. } | CardEffect::Strike { .. })
    }
}

impl CardName {
    /// The effect printed on this card.
    #[must_use]
    pub const fn effect(self) -> CardEffect {
        match self {
            CardName::Awakening => CardEffect::FlipPowerCards,
            CardName::HealthyEating => CardEffect::DrawAndExtraPowerPlay,
            CardName::TheSun | CardName::TheMoon => CardEffect::Passive,
            CardName::APlayfulPixie => CardEffect::StealTopCard,
            CardName::APearlescentDragon => CardEffect::DrainHealth(5),
            CardName::LastStand => CardEffect::ReshuffleFromGraveyard,
            CardName::Reconsider => CardEffect::ReorderTop,
            CardName::NobleSacrifice => CardEffect::SacrificeAndDiscard,
            CardName::MonstersPawn => CardEffect::FreeShortCard,
            CardName::PowerTrip => CardEffect::GainPower(2),
            CardName::GoAllIn => CardEffect::PlayerChoice { health_delta: -5, draw: 3, mill: 0 },
            CardName::Fold => CardEffect::PlayerChoice { health_delta: 4, draw: 0, mill: 2 },
            CardName::PokerFace => CardEffect::Strike { damage: 4, controller_draws: 0 },
            CardName::CheapShot => CardEffect::Strike { damage: 2, controller_draws: 1 },
            CardName::TheOlSwitcheroo => CardEffect::SwapHealth,
            CardName::Ultimatum => CardEffect::Ultimatum,
            CardName::Peek => CardEffect::Peek,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_sun_and_moon_are_passive() {
        let passive: Vec<_> = CardName::ALL.iter().filter(|n| n.effect().is_passive()).collect();
        assert_eq!(passive, vec![&CardName::TheSun, &CardName::TheMoon]);
    }

    #[test]
    fn test_player_targeting_cards() {
        let targeting: Vec<_> = CardName::ALL
            .iter()
            .copied()
            .filter(|n| n.effect().targets_players())
            .collect();
        assert_eq!(
            targeting,
            vec![CardName::GoAllIn, CardName::Fold, CardName::PokerFace, CardName::CheapShot]
        );
    }
}
