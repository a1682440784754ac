//! Game rules that sit above the raw state: phases, outcomes, and the
//! per-player-kind legality policy.

pub mod outcome;
pub mod phase;
pub mod policy;

pub use outcome::Winner;
pub use phase::GamePhase;
pub use policy::{policy_for, AutomatedPolicy, HumanPolicy, LegalityPolicy};
