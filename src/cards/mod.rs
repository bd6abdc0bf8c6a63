//! Card system: taxonomy, deck composition, and hand ordering.
//!
//! ## Key Types
//!
//! - `CardId`: Unique identity of a physical card
//! - `Card`: Id plus face (`CardKind`)
//! - `build_deck`: The fixed 108-card composition
//!
//! ## Identity
//!
//! Two copies of every rank exist per color, so every removal goes through
//! `remove_by_identity`. Never compare cards by face to find "the" card.

pub mod card;
pub mod deck;
pub mod sort;

pub use card::{Card, CardId, CardKind, Color, MAX_RANK, MIN_RANK};
pub use deck::{build_deck, find_by_identity, remove_by_identity, score, shuffle, DECK_SIZE};
pub use sort::{sort_cards, sorted};
