//! Game constants and session configuration.
//!
//! Rule numbers live here as named constants so the turn engine, decks and
//! board never carry magic numbers. `SessionConfig` is the per-game knob set
//! a host passes to `SessionBuilder`.

use serde::{Deserialize, Serialize};

use crate::cards::Role;

/// Disease cubes per color in the shared supply.
pub const CUBES_PER_COLOR: u8 = 24;

/// Maximum cubes of one color a city can hold.
pub const MAX_CUBES_PER_CITY: u8 = 3;

/// Outbreaks the players can survive. One more ends the game.
pub const OUTBREAK_LIMIT: u8 = 7;

/// Cards a player may hold before being forced to discard.
pub const HAND_LIMIT: usize = 7;

/// Actions each player gets per turn.
pub const ACTIONS_PER_TURN: u8 = 4;

/// Player cards drawn at the end of every turn.
pub const CARDS_DRAWN_PER_TURN: usize = 2;

/// Research stations in the box.
pub const RESEARCH_STATIONS: u8 = 6;

/// Same-colored city cards needed to discover a cure.
pub const CURE_CARD_COUNT: usize = 5;

/// Cure requirement for roles with `Capability::ReducedCure`.
pub const REDUCED_CURE_CARD_COUNT: usize = 4;

/// Cards revealed and reordered by the Forecast event.
pub const FORECAST_DEPTH: usize = 6;

/// Cubes placed by the epidemic "infect" step.
pub const EPIDEMIC_CUBES: u8 = 3;

/// Infection rate per position on the track. The index advances once per
/// epidemic and saturates on the last entry.
pub const INFECTION_RATE_TRACK: [u8; 7] = [2, 2, 2, 3, 3, 4, 4];

/// Cities infected during setup, in groups receiving 1, 2 and 3 cubes.
pub const INITIAL_INFECTION_GROUPS: [u8; 3] = [1, 2, 3];

/// Cities per initial infection group.
pub const INITIAL_INFECTION_GROUP_SIZE: usize = 3;

/// City every pawn and the first research station starts in.
pub const STARTING_CITY: &str = "Atlanta";

/// Infection rate for a position on the track.
#[must_use]
pub fn infection_rate(index: usize) -> u8 {
    INFECTION_RATE_TRACK[index.min(INFECTION_RATE_TRACK.len() - 1)]
}

/// Opening hand size per player for a given table size.
///
/// ```
/// use pandemic_rules::core::config::cards_per_player;
///
/// assert_eq!(cards_per_player(2), Some(4));
/// assert_eq!(cards_per_player(4), Some(2));
/// assert_eq!(cards_per_player(5), None);
/// ```
#[must_use]
pub const fn cards_per_player(player_count: usize) -> Option<usize> {
    match player_count {
        2 => Some(4),
        3 => Some(3),
        4 => Some(2),
        _ => None,
    }
}

/// Difficulty controls how many epidemics are shuffled into the player deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Epidemic cards seeded into the player deck.
    #[must_use]
    pub const fn epidemics(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 5,
            Difficulty::Hard => 6,
        }
    }
}

/// Everything a host chooses before the game starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of players (2-4).
    pub player_count: usize,

    pub difficulty: Difficulty,

    /// Seed for every shuffle in the session.
    pub seed: u64,

    /// Fixed role per seat. `None` deals roles from the shuffled role deck.
    pub roles: Option<Vec<Role>>,

    /// Display names per seat. `None` uses `player1`..`playerN`.
    pub names: Option<Vec<String>>,

    /// Run the nine-card opening infection.
    pub initial_infection: bool,
}

impl SessionConfig {
    /// Create a configuration with defaults for everything but the table size.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            difficulty: Difficulty::default(),
            seed: 0,
            roles: None,
            names: None,
            initial_infection: true,
        }
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = Some(roles);
        self
    }

    #[must_use]
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = Some(names);
        self
    }

    #[must_use]
    pub fn without_initial_infection(mut self) -> Self {
        self.initial_infection = false;
        self
    }

    /// Display name for a seat.
    #[must_use]
    pub fn name_for(&self, seat: usize) -> String {
        self.names
            .as_ref()
            .and_then(|names| names.get(seat).cloned())
            .unwrap_or_else(|| format!("player{}", seat + 1))
    }
}
