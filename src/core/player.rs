//! Player identification and the per-player record.
//!
//! ## PlayerId
//!
//! Type-safe seat index. Seats rotate in a fixed order and wrap after the
//! last player.
//!
//! ## Player
//!
//! Name, pawn location and role. A player's cards are not stored here: the
//! player deck's zone ledger holds them under `Zone::Hand(player)` (and
//! `Zone::Saved(player)` for the Contingency Planner), so a card can never be
//! in a hand and a pile at the same time.

use serde::{Deserialize, Serialize};

use crate::board::CityId;
use crate::cards::Role;

/// Seat index, 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that plays after this one.
    ///
    /// ```
    /// use pandemic_rules::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn next(self, player_count: usize) -> Self {
        Self(((self.0 as usize + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player{}", self.0 + 1)
    }
}

/// A participant: who they are, where their pawn stands, what they can do.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// City the pawn currently stands in.
    pub location: CityId,
    pub role: Role,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, location: CityId, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            role,
        }
    }

    /// Shorthand for `self.role.has(capability)`.
    #[must_use]
    pub fn can(&self, capability: crate::cards::Capability) -> bool {
        self.role.has(capability)
    }
}
