//! # pandemic-rules
//!
//! Rules engine for a cooperative disease-containment board game: four
//! diseases spread across a 48-city world map while two to four players
//! race to cure them.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every shuffle comes from a seeded ChaCha stream, so
//!    the same seed and the same chosen actions replay to the same board.
//!
//! 2. **Offered Actions Only**: the engine computes the legal action set from
//!    the current state on every query, and only ever executes members of it.
//!
//! 3. **Cards Move, Never Vanish**: each deck has one zone ledger. A card is in
//!    exactly one zone at a time and cube counts are conserved per color.
//!
//! ## Architecture
//!
//! - **Arena Map**: cities live in a `Vec` addressed by `CityId`; adjacency is
//!   a list of ids in table order, which fixes the outbreak spread order.
//!
//! - **Explicit Cascade State**: the outbreak cascade threads its visited set
//!   through the recursion instead of keeping it on the board.
//!
//! - **Persistent History**: turns and action records are kept in `im`
//!   vectors, so cloning a session is cheap.
//!
//! ## Modules
//!
//! - `core`: Players, actions, RNG, configuration and rule constants
//! - `zones`: Card location ledger
//! - `board`: Cities, the disease ledger, infection and outbreaks
//! - `cards`: Cards, roles, events and decks
//! - `turn`: Phases, legal action enumeration, execution and epidemics
//! - `session`: Setup, the game session, export and persistence
//! - `rules`: RulesEngine trait and game results
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use pandemic_rules::{RulesEngine, SessionBuilder};
//!
//! let mut session = SessionBuilder::new().player_count(2).seed(42).build().unwrap();
//!
//! while session.is_terminal().is_none() && session.current_turn().number < 4 {
//!     let action = session.legal_actions()[0].clone();
//!     session.apply_action(&action).unwrap();
//! }
//!
//! assert!(session.history().len() > 0);
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod error;
pub mod rules;
pub mod session;
pub mod turn;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{Action, ActionRecord, Difficulty, EventPlay, GameRng, Player, PlayerId, SessionConfig};

pub use crate::zones::{Zone, ZoneManager, ZonePosition};

pub use crate::board::{Board, BoardView, CascadeReport, City, CityGraph, CityId, CityTable, CityView, Color};

pub use crate::cards::{Capability, Card, CardId, CardKind, Deck, DeckKind, EventKind, Role};

pub use crate::turn::{Phase, Turn};

pub use crate::session::{Session, SessionBuilder};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::error::{ActionError, ConfigError, Defeat};
