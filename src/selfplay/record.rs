//! Game records.

use serde::{Deserialize, Serialize};

use crate::actions::ActionId;
use crate::core::{Side, SideMap};
use crate::error::Result;
use crate::rules::Winner;

/// One decision: what the acting side saw, what it chose, and what it saw
/// afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub side: Side,
    /// State summary before the action.
    pub before: String,
    pub action_id: ActionId,
    /// The menu line that was chosen.
    pub action_text: String,
    /// State summary after the action, from the point of view of the side
    /// that acts next.
    pub after: String,
}

/// A complete (or truncated) game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub steps: Vec<StepRecord>,
    /// Final rewards; `None` when the game was cut short.
    pub rewards: Option<SideMap<f64>>,
    pub winner: Option<Winner>,
    /// Seed of the engine the game was dealt from.
    pub seed: u64,
}

impl GameRecord {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }

    pub fn push(&mut self, step: StepRecord) {
        self.steps.push(step);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether the game reached a winner.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Steps taken by one side.
    pub fn side_steps(&self, side: Side) -> impl Iterator<Item = &StepRecord> {
        self.steps.iter().filter(move |step| step.side == side)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Results over a batch of games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub hero_wins: u32,
    pub monster_wins: u32,
    pub ties: u32,
    /// Games stopped by the step limit.
    pub unfinished: u32,
}

impl Tally {
    pub fn record(&mut self, game: &GameRecord) {
        match game.winner {
            Some(Winner::Hero) => self.hero_wins += 1,
            Some(Winner::Monster) => self.monster_wins += 1,
            Some(Winner::Tie) => self.ties += 1,
            None => self.unfinished += 1,
        }
    }

    #[must_use]
    pub fn games(&self) -> u32 {
        self.hero_wins + self.monster_wins + self.ties + self.unfinished
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "games: {} | hero: {} | monster: {} | ties: {} | unfinished: {}",
            self.games(),
            self.hero_wins,
            self.monster_wins,
            self.ties,
            self.unfinished
        )
    }
}
