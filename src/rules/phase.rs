//! Game phases.
//!
//! The phase decides which actions an id can dispatch to. Multi-step cards
//! move the game through their own phases while their choices are made
//! and return it to `AwaitingInput` once they resolve.

use serde::{Deserialize, Serialize};

/// Every phase the game can be in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    AwaitingInput,
    PlayingSelectedCard,
    ViewingCardInfo,
    SelectingGraveyardCard,
    ReorderingDeckTop3,
    SacrificingLongCard,
    DiscardingFromOppHand,
    ChoosingGoAllInTarget,
    ChoosingFoldTarget,
    ChoosingPokerFaceTarget,
    ChoosingCheapShotTarget,
    ChoosingUltimatumCard,
    OppChoosingFromUltimatum,
    ChoosingFromDeckTop2,
    HandFullDiscarding,
}

impl GamePhase {
    /// Number of phases.
    pub const COUNT: usize = 15;

    /// Every phase, in table column order.
    pub const ALL: [GamePhase; Self::COUNT] = [
        GamePhase::AwaitingInput,
        GamePhase::PlayingSelectedCard,
        GamePhase::ViewingCardInfo,
        GamePhase::SelectingGraveyardCard,
        GamePhase::ReorderingDeckTop3,
        GamePhase::SacrificingLongCard,
        GamePhase::DiscardingFromOppHand,
        GamePhase::ChoosingGoAllInTarget,
        GamePhase::ChoosingFoldTarget,
        GamePhase::ChoosingPokerFaceTarget,
        GamePhase::ChoosingCheapShotTarget,
        GamePhase::ChoosingUltimatumCard,
        GamePhase::OppChoosingFromUltimatum,
        GamePhase::ChoosingFromDeckTop2,
        GamePhase::HandFullDiscarding,
    ];

    /// Column index in the dispatch table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The description shown to players.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            GamePhase::AwaitingInput => "Awaiting input.",
            GamePhase::PlayingSelectedCard => "Choosing how to play selected card.",
            GamePhase::ViewingCardInfo => "Viewing card info.",
            GamePhase::SelectingGraveyardCard => "Choosing card from graveyard.",
            GamePhase::ReorderingDeckTop3 => {
                "Reordering top 3 cards of deck. First card chosen goes on top, second card below that, and third is last."
            }
            GamePhase::SacrificingLongCard => "Choosing a Noble Sacrifice.",
            GamePhase::DiscardingFromOppHand => "Looking at opponent's hand and discarding a card from it.",
            GamePhase::ChoosingGoAllInTarget => "Choosing Go All In target.",
            GamePhase::ChoosingFoldTarget => "Choosing Fold target.",
            GamePhase::ChoosingPokerFaceTarget => "Choosing Poker Face target.",
            GamePhase::ChoosingCheapShotTarget => "Choosing Cheap Shot target.",
            GamePhase::ChoosingUltimatumCard => "Choosing an Ultimatum card from deck.",
            GamePhase::OppChoosingFromUltimatum => {
                "Choosing from Ultimatum. Chosen card goes into opp hand, other is shuffled into their deck."
            }
            GamePhase::ChoosingFromDeckTop2 => "Choosing from Peek.",
            GamePhase::HandFullDiscarding => "Hand full, discarding card.",
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
