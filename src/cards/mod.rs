//! Card system: definitions, instances, and the catalogue.
//!
//! ## Key Types
//!
//! - `CardName`: One of the eighteen printed cards
//! - `CardDefinition`: Static card data (cost, kind, health, text)
//! - `Card`: One physical copy with uid, owner, and current health
//! - `registry`: The catalogue and deck building

pub mod definition;
pub mod instance;
pub mod registry;

pub use crate::core::CardUid;
pub use definition::{CardDefinition, CardKind, CardName};
pub use instance::Card;
