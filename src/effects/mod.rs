//! Card effects and multi-step resolution.
//!
//! - `CardEffect`: What each card does, one variant per behaviour
//! - `Resolution`: A card partway through being played, referencing the
//!   cards chosen so far by uid
//! - `Selection`: The completed choices handed to an effect
//! - `EffectResolver`: Executes effects on game state

mod effect;
mod resolution;
mod resolver;

pub use effect::CardEffect;
pub use resolution::{Picks, Resolution, Selection};
pub use resolver::EffectResolver;
