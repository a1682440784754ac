//! Why an action was refused.

use serde::{Deserialize, Serialize};

/// Closed set of reasons an action can be illegal.
///
/// The `Display` text is what the action menu shows next to `(Invalid)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IllegalReason {
    /// The id does not name anything actionable in this phase.
    InvalidSelection,
    /// The opponent's The Sun allows only one face-up card per turn.
    EnemyHasTheSun,
    /// The opponent's The Moon forbids power cards.
    EnemyHasTheMoon,
    CantPlayAnotherPowerCard,
    NotEnoughPower,
    /// Noble Sacrifice needs a long card to sacrifice.
    NoSacrifice,
    MustPickDifferentCard,
    MustHaveDifferentName,
    /// The selected card could not be played either way.
    NoFurtherMoves,
    ComputersCantDo,
    WithheldFromAi,
}

impl IllegalReason {
    /// The message shown to players.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            IllegalReason::InvalidSelection => "Invalid selection.",
            IllegalReason::EnemyHasTheSun => "Enemy has The Sun, you can't play more than one card per turn.",
            IllegalReason::EnemyHasTheMoon => "Enemy has The Moon, you can't play power cards.",
            IllegalReason::CantPlayAnotherPowerCard => "You can't play another power card this turn.",
            IllegalReason::NotEnoughPower => "Not enough power to play this card.",
            IllegalReason::NoSacrifice => {
                "As an additional cost to play this card, you must sacrifice a long card."
            }
            IllegalReason::MustPickDifferentCard => "Can't pick the same card twice.",
            IllegalReason::MustHaveDifferentName => "Card must have a different name.",
            IllegalReason::NoFurtherMoves => "No further moves available with this card.",
            IllegalReason::ComputersCantDo => "Computers can't do this action.",
            IllegalReason::WithheldFromAi => "This action is witheld from AIs since it would harm their strategy",
        }
    }

    /// Whether the menu hides this reason.
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, IllegalReason::InvalidSelection)
    }
}

impl std::fmt::Display for IllegalReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
