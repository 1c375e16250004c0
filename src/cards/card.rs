//! Cards and card ids.
//!
//! A `Card` is immutable once built. Where it currently sits is the deck's
//! `ZoneManager`'s business, not the card's.

use serde::{Deserialize, Serialize};

use super::events::EventKind;
use super::roles::Role;
use crate::board::CityId;

/// Index of a card in its deck's arena.
///
/// Ids are only meaningful within one deck: infection card 3 and player
/// card 3 are unrelated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What a card is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Linked to one city of the map.
    City(CityId),
    Event(EventKind),
    Role(Role),
    /// Synthesized while dealing; resolved the moment it is drawn.
    Epidemic,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub kind: CardKind,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    /// The city this card names, for city cards.
    #[must_use]
    pub fn city(&self) -> Option<CityId> {
        match self.kind {
            CardKind::City(city) => Some(city),
            _ => None,
        }
    }

    #[must_use]
    pub fn event(&self) -> Option<EventKind> {
        match self.kind {
            CardKind::Event(event) => Some(event),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_epidemic(&self) -> bool {
        self.kind == CardKind::Epidemic
    }
}
