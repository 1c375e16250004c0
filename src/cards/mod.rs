//! Cards and decks.
//!
//! ## Key Types
//!
//! - `CardId`: index of a card within its own deck
//! - `Card` / `CardKind`: city, event, role or epidemic
//! - `Role` / `Capability`: the seven roles and the rules they bend
//! - `EventKind`: the five event cards
//! - `Deck`: card arena plus zone ledger, with shuffle, deal, draw and
//!   discard

pub mod card;
pub mod deck;
pub mod events;
pub mod roles;

pub use card::{Card, CardId, CardKind};
pub use deck::{Deck, DeckKind};
pub use events::EventKind;
pub use roles::{Capability, Role};
