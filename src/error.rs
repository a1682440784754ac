//! Engine error types.
//!
//! Illegal moves are not errors: they are reported as
//! [`Legality::Illegal`](crate::actions::Legality) with an
//! [`IllegalReason`](crate::actions::IllegalReason) and leave the state
//! untouched. `EngineError` covers integrity faults, where a legal action
//! could not be carried out, and misuse of the facade or snapshots.

use thiserror::Error;

use crate::cards::CardName;
use crate::core::CardUid;
use crate::rules::GamePhase;
use crate::zones::Zone;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised by the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A card expected in a zone was not there.
    #[error("{uid} not found in {zone}")]
    CardNotFound { uid: CardUid, zone: Zone },

    /// A phase that needs a resolving card had none.
    #[error("no card is resolving in phase '{phase}'")]
    MissingResolution { phase: GamePhase },

    /// The resolution context does not match the flow the phase expects.
    #[error("unexpected resolution in phase '{phase}': {found}")]
    UnexpectedResolution { phase: GamePhase, found: String },

    /// A card effect was handed a choice it cannot use.
    #[error("{card} cannot resolve with {selection}")]
    SelectionMismatch { card: CardName, selection: String },

    /// An action passed its legality check but failed while executing.
    #[error("{action} (id {action_id}) failed in phase '{phase}' with resolution [{resolution}]: {source}")]
    ExecutionFault {
        action: &'static str,
        action_id: u16,
        phase: GamePhase,
        resolution: String,
        #[source]
        source: Box<EngineError>,
    },

    /// The invalid action was executed directly.
    #[error("action id {action_id} does nothing in phase '{phase}'")]
    NotExecutable { action_id: u16, phase: GamePhase },

    /// The dispatch table failed its build-time checks.
    #[error("invalid dispatch table: {0}")]
    DispatchTable(String),

    /// The game already has a winner.
    #[error("the game is over")]
    GameFinished,

    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Snapshot encoding or decoding failed.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}
