//! Game outcome.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Hero,
    Monster,
    /// Both sides met a loss condition on the same action.
    Tie,
}

impl Winner {
    /// The single winning side, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Winner::Hero => Some(Side::Hero),
            Winner::Monster => Some(Side::Monster),
            Winner::Tie => None,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// Terminal rewards: +1 to the winner, -1 to the loser, 0 each on a tie.
    #[must_use]
    pub fn rewards(self) -> SideMap<f64> {
        SideMap::new(|side| match self.side() {
            None => 0.0,
            Some(winner) if winner == side => 1.0,
            Some(_) => -1.0,
        })
    }

    /// Outcome from the two loss flags.
    #[must_use]
    pub const fn from_losses(hero_lost: bool, monster_lost: bool) -> Option<Self> {
        match (hero_lost, monster_lost) {
            (true, true) => Some(Winner::Tie),
            (true, false) => Some(Winner::Monster),
            (false, true) => Some(Winner::Hero),
            (false, false) => None,
        }
    }
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Hero => Winner::Hero,
            Side::Monster => Winner::Monster,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Hero => f.write_str("hero"),
            Winner::Monster => f.write_str("monster"),
            Winner::Tie => f.write_str("tie"),
        }
    }
}
