//! # poker-monster
//!
//! Rules engine for Poker Monster, a two-player card game between the Hero
//! and the Monster, driven through a fixed numeric action space.
//!
//! ## Design Principles
//!
//! 1. **Numeric Actions**: Every decision is an id in `0..num_actions`.
//!    A dispatch table maps the id and the current phase to an action.
//!
//! 2. **Side-Effect-Free Legality**: Checks read `&GameState`, so probing
//!    every id can never disturb the game. Speculation runs on a clone.
//!
//! 3. **Text Boundary**: Agents see a state summary and a numbered menu,
//!    both rendered from the acting player's point of view.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Zones are `im` vectors, so cloning a
//!   state for speculation or self-play is cheap.
//!
//! - **Seeded Randomness**: The game RNG lives in the state; snapshots
//!   reproduce future shuffles.
//!
//! ## Modules
//!
//! - `core`: Card uids, sides, players, state, RNG, configuration
//! - `cards`: Card catalogue and instances
//! - `zones`: Per-player zones
//! - `effects`: Card effects and multi-step resolutions
//! - `rules`: Phases, outcomes, legality policies
//! - `actions`: Action variants, dispatch, legality, execution
//! - `engine`: The facade and text rendering
//! - `selfplay`: Agents and game records

pub mod error;
pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod rules;
pub mod actions;
pub mod engine;
pub mod selfplay;

// Re-export commonly used types
pub use crate::error::{EngineError, Result};

pub use crate::core::{
    CardUid, Side, SideMap, Player, PlayerKind,
    GameRng, GameRngState, EngineConfig, GameState,
};

pub use crate::cards::{Card, CardDefinition, CardKind, CardName};

pub use crate::zones::{PlayerZones, Zone};

pub use crate::effects::{CardEffect, EffectResolver, Resolution, Selection};

pub use crate::rules::{GamePhase, Winner, LegalityPolicy, AutomatedPolicy, HumanPolicy};

pub use crate::actions::{Action, ActionId, ActionKind, DispatchTable, IllegalReason, Legality, ReservedAction};

pub use crate::engine::Engine;

pub use crate::selfplay::{Agent, FirstLegalAgent, RandomAgent, GameRecord, StepRecord, SelfPlayConfig, Tally, play_game};
