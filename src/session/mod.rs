//! Game session: construction, the operations the turn engine calls back
//! into, export and persistence.
//!
//! ## Key Types
//!
//! - `Session`: owns the board, the three decks, the players and the turns
//! - `SessionBuilder`: validated construction and setup

pub mod builder;
pub mod snapshot;
pub mod state;

pub use builder::SessionBuilder;
pub use state::Session;
