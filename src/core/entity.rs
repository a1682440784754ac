//! Card instance identification.
//!
//! Every physical card in a game carries a `CardUid` that is unique across
//! both decks. Uids are assigned sequentially at deck-build time: the hero's
//! cards first, then the monster's.
//!
//! The uid doubles as the action identifier for "select this card", so the
//! uid range `0..card_count` is also the low end of the action id range.
//!
//! ```
//! use poker_monster::core::CardUid;
//!
//! let uid = CardUid::new(12);
//! assert_eq!(uid.index(), 12);
//! assert_eq!(format!("{}", uid), "Card(12)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for one physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardUid(pub u16);

impl CardUid {
    /// Create a new card uid.
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the raw uid value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get the uid as an index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl From<u16> for CardUid {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}
