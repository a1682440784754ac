//! Self-play driver.
//!
//! Plays whole games through the [`Engine`](crate::Engine) facade with
//! pluggable agents and records every decision as text, the way an external
//! experience store consumes it.
//!
//! ## Overview
//!
//! - **Agent**: Picks an action id from the menu's legal ids
//! - **GameRecord**: The steps of one game and its final rewards
//! - **Tally**: Win counts over many games

mod agent;
mod play;
mod record;

pub use agent::{Agent, FirstLegalAgent, RandomAgent};
pub use play::{play_game, SelfPlayConfig};
pub use record::{GameRecord, StepRecord, Tally};
