//! Core engine types: players, actions, RNG, configuration.
//!
//! Everything here is plain data shared by the board, the decks and the
//! turn engine.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord, EventPlay};
pub use config::{Difficulty, SessionConfig};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
