//! The phase × action-id dispatch table.
//!
//! ## Id layout
//!
//! Ids `0..card_count` are card uids. Four reserved ids follow:
//!
//! | id               | meaning                                   |
//! |------------------|-------------------------------------------|
//! | `card_count`     | target the hero                           |
//! | `card_count + 1` | target the monster                        |
//! | `card_count + 2` | end turn, or card info while choosing how to play |
//! | `card_count + 3` | cancel                                    |
//!
//! While choosing how to play a selected card, ids 0 and 1 mean face up
//! and face down instead of card uids.
//!
//! The table is built once and never mutated.

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::kind::ActionKind;
use crate::cards::registry;
use crate::core::CardUid;
use crate::error::{EngineError, Result};
use crate::rules::GamePhase;

/// The single integer a player submits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionId(pub u16);

impl ActionId {
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The card uid this id names when it is used as a selection.
    #[must_use]
    pub const fn as_card(self) -> CardUid {
        CardUid(self.0)
    }
}

impl From<u16> for ActionId {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ids above the card range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservedAction {
    TargetHero,
    TargetMonster,
    /// End turn, or card info while choosing how to play a card.
    EndTurnOrInfo,
    Cancel,
}

impl ReservedAction {
    pub const COUNT: u16 = 4;

    pub const ALL: [ReservedAction; 4] = [
        ReservedAction::TargetHero,
        ReservedAction::TargetMonster,
        ReservedAction::EndTurnOrInfo,
        ReservedAction::Cancel,
    ];

    /// Offset past the last card id.
    #[must_use]
    pub const fn offset(self) -> u16 {
        match self {
            ReservedAction::TargetHero => 0,
            ReservedAction::TargetMonster => 1,
            ReservedAction::EndTurnOrInfo => 2,
            ReservedAction::Cancel => 3,
        }
    }
}

/// Which actions a phase offers.
#[derive(Clone, Copy, Debug)]
struct PhaseMenu {
    select: Option<ActionKind>,
    face_up_down: bool,
    target_players: bool,
    end_turn: bool,
    card_info: bool,
    cancel: bool,
}

impl PhaseMenu {
    const EMPTY: PhaseMenu = PhaseMenu {
        select: None,
        face_up_down: false,
        target_players: false,
        end_turn: false,
        card_info: false,
        cancel: false,
    };

    const fn selecting(kind: ActionKind) -> Self {
        Self { select: Some(kind), ..Self::EMPTY }
    }

    // Phases that reveal hidden cards offer no cancel.
    const fn of(phase: GamePhase) -> Self {
        match phase {
            GamePhase::AwaitingInput => Self { end_turn: true, ..Self::selecting(ActionKind::SelectFromHand) },
            GamePhase::ViewingCardInfo => Self { cancel: true, ..Self::EMPTY },
            GamePhase::PlayingSelectedCard => Self {
                face_up_down: true,
                card_info: true,
                cancel: true,
                ..Self::EMPTY
            },
            GamePhase::ReorderingDeckTop3 => Self::selecting(ActionKind::SelectFromDeckTop3),
            GamePhase::SacrificingLongCard => {
                Self { cancel: true, ..Self::selecting(ActionKind::SelectFromOwnBattlefield) }
            }
            GamePhase::DiscardingFromOppHand => Self::selecting(ActionKind::SelectFromOppHand),
            GamePhase::SelectingGraveyardCard => {
                Self { cancel: true, ..Self::selecting(ActionKind::SelectFromGraveyard) }
            }
            GamePhase::ChoosingGoAllInTarget | GamePhase::ChoosingFoldTarget => Self {
                target_players: true,
                cancel: true,
                ..Self::EMPTY
            },
            GamePhase::ChoosingPokerFaceTarget | GamePhase::ChoosingCheapShotTarget => Self {
                target_players: true,
                cancel: true,
                ..Self::selecting(ActionKind::SelectFromBattlefield)
            },
            GamePhase::ChoosingUltimatumCard => Self::selecting(ActionKind::SelectFromDeck),
            GamePhase::OppChoosingFromUltimatum => Self::selecting(ActionKind::SelectFromUltimatum),
            GamePhase::ChoosingFromDeckTop2 => Self::selecting(ActionKind::SelectFromDeckTop2),
            GamePhase::HandFullDiscarding => Self { cancel: true, ..Self::selecting(ActionKind::SelectFromHand) },
        }
    }
}

/// Maps `(action id, phase)` to an action variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchTable {
    card_count: u16,
    rows: Vec<[ActionKind; GamePhase::COUNT]>,
}

impl DispatchTable {
    /// Build and validate the table for `card_count` card uids.
    pub fn build(card_count: u16) -> Result<Self> {
        if card_count < 2 {
            return Err(EngineError::DispatchTable(format!(
                "face up and face down need ids 0 and 1, but only {card_count} card ids exist"
            )));
        }
        let num_actions = card_count
            .checked_add(ReservedAction::COUNT)
            .ok_or_else(|| EngineError::DispatchTable(format!("{card_count} cards overflow the id range")))?;

        let mut table = Self {
            card_count,
            rows: vec![[ActionKind::Invalid; GamePhase::COUNT]; usize::from(num_actions)],
        };
        for phase in GamePhase::ALL {
            table.fill(phase, PhaseMenu::of(phase));
        }
        table.validate()?;
        Ok(table)
    }

    /// The table for the standard two decks.
    pub fn standard() -> Result<Self> {
        Self::build(registry::card_count())
    }

    fn fill(&mut self, phase: GamePhase, menu: PhaseMenu) {
        let col = phase.index();
        if let Some(kind) = menu.select {
            for row in &mut self.rows[..usize::from(self.card_count)] {
                row[col] = kind;
            }
        }
        if menu.face_up_down {
            self.rows[0][col] = ActionKind::PlayFaceUp;
            self.rows[1][col] = ActionKind::PlayFaceDown;
        }
        if menu.target_players {
            self.set(ReservedAction::TargetHero, col, ActionKind::TargetHero);
            self.set(ReservedAction::TargetMonster, col, ActionKind::TargetMonster);
        }
        if menu.end_turn {
            self.set(ReservedAction::EndTurnOrInfo, col, ActionKind::EndTurn);
        }
        if menu.card_info {
            self.set(ReservedAction::EndTurnOrInfo, col, ActionKind::GetCardInfo);
        }
        if menu.cancel {
            self.set(ReservedAction::Cancel, col, ActionKind::Cancel);
        }
    }

    fn set(&mut self, reserved: ReservedAction, col: usize, kind: ActionKind) {
        let row = self.reserved(reserved).index();
        self.rows[row][col] = kind;
    }

    /// Check the layout: card-selecting variants only on card ids, reserved
    /// variants only on their reserved ids, and every phase offers at least
    /// one action.
    pub fn validate(&self) -> Result<()> {
        let expected = usize::from(self.card_count) + usize::from(ReservedAction::COUNT);
        if self.rows.len() != expected {
            return Err(EngineError::DispatchTable(format!(
                "{} rows for {} card ids",
                self.rows.len(),
                self.card_count
            )));
        }

        for id in self.ids() {
            for phase in GamePhase::ALL {
                let kind = self.lookup(id, phase);
                let in_card_range = id.raw() < self.card_count;
                let misplaced = match kind {
                    ActionKind::Invalid => false,
                    ActionKind::PlayFaceUp => id.raw() != 0,
                    ActionKind::PlayFaceDown => id.raw() != 1,
                    ActionKind::TargetHero => id != self.reserved(ReservedAction::TargetHero),
                    ActionKind::TargetMonster => id != self.reserved(ReservedAction::TargetMonster),
                    ActionKind::EndTurn | ActionKind::GetCardInfo => {
                        id != self.reserved(ReservedAction::EndTurnOrInfo)
                    }
                    ActionKind::Cancel => id != self.reserved(ReservedAction::Cancel),
                    _ => !in_card_range,
                };
                if misplaced {
                    return Err(EngineError::DispatchTable(format!("{kind} mapped to id {id} in phase '{phase}'")));
                }
            }
        }

        for phase in GamePhase::ALL {
            if self.ids().all(|id| self.lookup(id, phase) == ActionKind::Invalid) {
                return Err(EngineError::DispatchTable(format!("phase '{phase}' offers no actions")));
            }
        }
        Ok(())
    }

    /// The variant an id dispatches to. Ids out of range are invalid.
    #[must_use]
    pub fn lookup(&self, id: ActionId, phase: GamePhase) -> ActionKind {
        self.rows
            .get(id.index())
            .map_or(ActionKind::Invalid, |row| row[phase.index()])
    }

    /// The concrete action for an id in a phase.
    #[must_use]
    pub fn action(&self, id: ActionId, phase: GamePhase) -> Action {
        Action::new(self.lookup(id, phase), id)
    }

    #[must_use]
    pub fn reserved(&self, reserved: ReservedAction) -> ActionId {
        ActionId(self.card_count + reserved.offset())
    }

    #[must_use]
    pub fn card_count(&self) -> u16 {
        self.card_count
    }

    /// Total number of ids, card uids plus reserved.
    #[must_use]
    pub fn num_actions(&self) -> u16 {
        self.card_count + ReservedAction::COUNT
    }

    /// Every id, ascending.
    pub fn ids(&self) -> impl Iterator<Item = ActionId> {
        (0..self.num_actions()).map(ActionId)
    }
}
