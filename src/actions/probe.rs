//! Legality probing.
//!
//! Checks read a shared borrow of the state, so probing every id can never
//! disturb the game. Speculation runs the action on a clone; the `im`
//! zones make that clone cheap.

use super::action::Legality;
use super::dispatch::{ActionId, DispatchTable, ReservedAction};
use super::kind::ActionKind;
use crate::core::GameState;
use crate::error::Result;

impl GameState {
    /// What submitting `id` would do right now.
    #[must_use]
    pub fn check_action(&self, table: &DispatchTable, id: ActionId) -> Legality {
        table.action(id, self.phase).check(self)
    }

    /// Every legal id, ascending.
    #[must_use]
    pub fn all_legal_action_ids(&self, table: &DispatchTable) -> Vec<ActionId> {
        table
            .ids()
            .filter(|&id| self.check_action(table, id).is_legal())
            .collect()
    }

    /// One legal id per action variant: the lowest id of each variant
    /// that is legal. Cancel is never offered.
    #[must_use]
    pub fn legal_actions(&self, table: &DispatchTable) -> Vec<ActionId> {
        let cancel = table.reserved(ReservedAction::Cancel);
        let mut seen = [false; ActionKind::COUNT];
        let mut legal = Vec::new();

        for id in table.ids().filter(|&id| id != cancel) {
            let kind = table.lookup(id, self.phase);
            if seen[kind as usize] {
                continue;
            }
            if self.check_action(table, id).is_legal() {
                seen[kind as usize] = true;
                legal.push(id);
            }
        }
        legal
    }

    /// Enact `id` on a copy of the state and return the legality together
    /// with the resulting state. `self` is untouched.
    pub fn speculate(&self, table: &DispatchTable, id: ActionId) -> Result<(Legality, GameState)> {
        let mut next = self.clone();
        let legality = table.action(id, next.phase).enact(&mut next)?;
        Ok((legality, next))
    }
}
