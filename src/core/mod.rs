//! Core engine types: card uids, sides and players, state, RNG, configuration.
//!
//! Everything else in the crate builds on these. The game state is plain
//! data with `im` collections, so it can be cloned for speculation and
//! serialized for snapshots.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod state;

pub use entity::CardUid;
pub use player::{Player, PlayerKind, Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::EngineConfig;
pub use state::GameState;
