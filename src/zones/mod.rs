//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `Zone`: Deck, hand, battlefield, graveyard, or power cards
//! - `PlayerZones`: The five zones one side owns
//! - `ZonePosition`: Top or bottom of the deck

pub mod manager;

pub use manager::{PlayerZones, Zone, ZonePosition};
