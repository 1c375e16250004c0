//! Error types for the rules engine.
//!
//! Three families, matching how each one is handled:
//!
//! - [`ConfigError`]: the session could not be built. Nothing was created.
//! - [`Defeat`]: the players lost. Returned from board and deck operations
//!   and turned into a terminal [`GameResult`] by the session.
//! - [`ActionError`]: the caller asked for something the session does not
//!   offer right now. State is untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Color;
use crate::core::Action;
use crate::rules::GameResult;

/// Problems detected while building a session.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("city table is malformed: {0}")]
    MalformedTable(#[from] serde_json::Error),

    #[error("city {city} lists unknown adjacent city {adjacent}")]
    UnknownAdjacentCity { city: String, adjacent: String },

    #[error("city {city} lists {adjacent} as adjacent, but not the other way round")]
    AsymmetricAdjacency { city: String, adjacent: String },

    #[error("city {0} appears more than once")]
    DuplicateCity(String),

    #[error("city {city} has unknown color {color}")]
    UnknownColor { city: String, color: String },

    #[error("city table has {0} cities, at most 256 are supported")]
    TooManyCities(usize),

    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error("unsupported player count {0} (expected 2-4)")]
    UnsupportedPlayerCount(usize),

    #[error("{given} roles given for {players} players")]
    NotEnoughRoles { given: usize, players: usize },

    #[error("role {0} assigned more than once")]
    DuplicateRole(String),

    #[error("player deck could not be seeded with epidemics")]
    DeckSeeding,

    #[error("persistence error: {0}")]
    Persistence(#[from] bincode::Error),
}

/// Ways the players can lose. Each one ends the game immediately.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Defeat {
    #[error("more than 7 outbreaks")]
    OutbreakLimit,

    #[error("ran out of {0} disease cubes")]
    CubesExhausted(Color),

    #[error("player deck exhausted")]
    PlayerDeckExhausted,
}

/// Rejected action requests.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ActionError {
    #[error("action is not currently offered: {0:?}")]
    Illegal(Action),

    #[error("game is over: {0:?}")]
    GameOver(GameResult),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
