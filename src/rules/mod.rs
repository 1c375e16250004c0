//! Rules engine trait.
//!
//! `Session` implements `RulesEngine`; hosts and tests drive play through
//! it and never need to know how turns, decks or the board are wired.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
