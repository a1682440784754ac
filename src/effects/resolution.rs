//! The resolution context of a multi-step card and the choices handed to
//! its effect.
//!
//! ## Resolution
//!
//! While a card waits for choices the state carries a `Resolution`. It
//! only references cards by uid: every card stays in its zone until the
//! effect moves it.
//!
//! ## Selection
//!
//! Once every choice is made the resolution is turned into a `Selection`
//! and handed to the effect resolver.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardUid;

/// Cards picked during a multi-step resolution.
pub type Picks = SmallVec<[CardUid; 3]>;

/// A card partway through being played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Picked from hand. Used while choosing how to play it and while
    /// choosing a target for it.
    Selected { card: CardUid },
    /// Last Stand collecting graveyard cards.
    Graveyard { card: CardUid, chosen: Picks },
    /// Reconsider collecting the new deck order, top first.
    Reorder { card: CardUid, chosen: Picks },
    /// Noble Sacrifice with its sacrifice chosen, waiting for the discard.
    Sacrifice { card: CardUid, sacrifice: CardUid },
    /// Ultimatum collecting the two offered cards.
    Ultimatum { card: CardUid, offered: SmallVec<[CardUid; 2]> },
}

impl Resolution {
    /// The card being played.
    #[must_use]
    pub fn card(&self) -> CardUid {
        match self {
            Resolution::Selected { card }
            | Resolution::Graveyard { card, .. }
            | Resolution::Reorder { card, .. }
            | Resolution::Sacrifice { card, .. }
            | Resolution::Ultimatum { card, .. } => *card,
        }
    }

    /// Cards chosen so far, in the order they were chosen.
    #[must_use]
    pub fn picks(&self) -> &[CardUid] {
        match self {
            Resolution::Selected { .. } => &[],
            Resolution::Graveyard { chosen, .. } | Resolution::Reorder { chosen, .. } => chosen,
            Resolution::Sacrifice { sacrifice, .. } => std::slice::from_ref(sacrifice),
            Resolution::Ultimatum { offered, .. } => offered,
        }
    }

    /// The resolving card followed by every pick.
    pub fn uids(&self) -> impl Iterator<Item = CardUid> + '_ {
        std::iter::once(self.card()).chain(self.picks().iter().copied())
    }

    /// Short name of the flow, for diagnostics.
    #[must_use]
    pub const fn flow(&self) -> &'static str {
        match self {
            Resolution::Selected { .. } => "selected",
            Resolution::Graveyard { .. } => "graveyard",
            Resolution::Reorder { .. } => "reorder",
            Resolution::Sacrifice { .. } => "sacrifice",
            Resolution::Ultimatum { .. } => "ultimatum",
        }
    }
}

/// The choices a card effect resolves with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing to choose.
    None,
    /// A long card on either battlefield.
    Target(CardUid),
    /// Graveyard cards to reshuffle, or the new top-of-deck order.
    Cards(Picks),
    /// The sacrificed long card and the card discarded from the opponent's
    /// hand, if the opponent had one.
    Sacrifice { sacrifice: CardUid, discard: Option<CardUid> },
    /// Both offered cards and the one the opponent chose.
    Ultimatum { offered: [CardUid; 2], chosen: CardUid },
    /// The card from the top two that goes to hand.
    Peek { chosen: CardUid },
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::None => f.write_str("no selection"),
            Selection::Target(uid) => write!(f, "target {uid}"),
            Selection::Cards(uids) => write!(f, "{} cards", uids.len()),
            Selection::Sacrifice { sacrifice, .. } => write!(f, "sacrifice {sacrifice}"),
            Selection::Ultimatum { chosen, .. } => write!(f, "ultimatum choice {chosen}"),
            Selection::Peek { chosen } => write!(f, "peek choice {chosen}"),
        }
    }
}
