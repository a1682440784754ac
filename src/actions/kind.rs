//! The closed set of action variants.

use serde::{Deserialize, Serialize};

/// What an action id does in a given phase.
///
/// The dispatch table maps every `(id, phase)` pair to one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionKind {
    /// Unmapped pair. Always illegal.
    Invalid,
    SelectFromHand,
    PlayFaceUp,
    PlayFaceDown,
    GetCardInfo,
    Cancel,
    EndTurn,
    TargetHero,
    TargetMonster,
    /// Poker Face and Cheap Shot aimed at a long card.
    SelectFromBattlefield,
    /// Noble Sacrifice choosing its sacrifice.
    SelectFromOwnBattlefield,
    /// Noble Sacrifice choosing the discard.
    SelectFromOppHand,
    /// Peek.
    SelectFromDeckTop2,
    /// Last Stand.
    SelectFromGraveyard,
    /// Ultimatum building its offer.
    SelectFromDeck,
    /// The opponent answering an Ultimatum.
    SelectFromUltimatum,
    /// Reconsider.
    SelectFromDeckTop3,
}

impl ActionKind {
    pub const COUNT: usize = 17;

    pub const ALL: [ActionKind; Self::COUNT] = [
        ActionKind::Invalid,
        ActionKind::SelectFromHand,
        ActionKind::PlayFaceUp,
        ActionKind::PlayFaceDown,
        ActionKind::GetCardInfo,
        ActionKind::Cancel,
        ActionKind::EndTurn,
        ActionKind::TargetHero,
        ActionKind::TargetMonster,
        ActionKind::SelectFromBattlefield,
        ActionKind::SelectFromOwnBattlefield,
        ActionKind::SelectFromOppHand,
        ActionKind::SelectFromDeckTop2,
        ActionKind::SelectFromGraveyard,
        ActionKind::SelectFromDeck,
        ActionKind::SelectFromUltimatum,
        ActionKind::SelectFromDeckTop3,
    ];

    /// Name shown in the action menu.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Invalid => "InvalidAction",
            ActionKind::SelectFromHand => "SelectFromHand",
            ActionKind::PlayFaceUp => "PlayFaceUp",
            ActionKind::PlayFaceDown => "PlayFaceDown",
            ActionKind::GetCardInfo => "GetCardInfo",
            ActionKind::Cancel => "Cancel",
            ActionKind::EndTurn => "EndTurn",
            ActionKind::TargetHero => "TargetHero",
            ActionKind::TargetMonster => "TargetMonster",
            ActionKind::SelectFromBattlefield => "SelectFromBattlefield",
            ActionKind::SelectFromOwnBattlefield => "SelectFromOwnBattlefield",
            ActionKind::SelectFromOppHand => "SelectFromOppHand",
            ActionKind::SelectFromDeckTop2 => "SelectFromDeckTop2",
            ActionKind::SelectFromGraveyard => "SelectFromGraveyard",
            ActionKind::SelectFromDeck => "SelectFromDeck",
            ActionKind::SelectFromUltimatum => "SelectFromUltimatum",
            ActionKind::SelectFromDeckTop3 => "SelectFromDeckTop3",
        }
    }

    /// Variants whose id is a card uid.
    #[must_use]
    pub const fn selects_card(self) -> bool {
        matches!(
            self,
            ActionKind::SelectFromHand
                | ActionKind::SelectFromBattlefield
                | ActionKind::SelectFromOwnBattlefield
                | ActionKind::SelectFromOppHand
                | ActionKind::SelectFromDeckTop2
                | ActionKind::SelectFromGraveyard
                | ActionKind::SelectFromDeck
                | ActionKind::SelectFromUltimatum
                | ActionKind::SelectFromDeckTop3
        )
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
