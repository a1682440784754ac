//! Player actions.
//!
//! - `ActionKind`: The closed set of action variants
//! - `DispatchTable`: Maps an action id and the current phase to a variant
//! - `Action`: Legality check, execution, and enactment
//! - `IllegalReason`: Why an action was refused
//!
//! Probing (`GameState::legal_actions`, `GameState::speculate`) lives in
//! `probe`.

mod action;
mod dispatch;
mod kind;
mod probe;
mod reason;

pub use action::{Action, Legality};
pub use dispatch::{ActionId, DispatchTable, ReservedAction};
pub use kind::ActionKind;
pub use reason::IllegalReason;
