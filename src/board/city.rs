//! Cities and disease colors.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::MAX_CUBES_PER_CITY;

/// The four diseases, one per region of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Black,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Yellow, Color::Black];

    /// Slot of this color in per-color arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Yellow => 2,
            Color::Black => 3,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Black => "black",
        }
    }

    /// Parse a lowercase color name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Color::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Index of a city in the `CityGraph` arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityId(pub u8);

impl CityId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "City({})", self.0)
    }
}

/// A node of the map with its mutable disease state.
///
/// Adjacency is stored as arena indices in table order, which fixes the
/// order outbreaks spread in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    /// Geographic coordinate, opaque to the rules.
    pub location: String,
    pub color: Color,
    pub adjacent: SmallVec<[CityId; 6]>,
    cubes: [u8; 4],
    pub research_station: bool,
}

impl City {
    #[must_use]
    pub fn new(id: CityId, name: impl Into<String>, location: impl Into<String>, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            color,
            adjacent: SmallVec::new(),
            cubes: [0; 4],
            research_station: false,
        }
    }

    /// Cubes of one color on this city.
    #[must_use]
    pub fn cubes(&self, color: Color) -> u8 {
        self.cubes[color.index()]
    }

    /// Sum over all colors.
    #[must_use]
    pub fn total_cubes(&self) -> u8 {
        self.cubes.iter().sum()
    }

    #[must_use]
    pub fn is_adjacent(&self, other: CityId) -> bool {
        self.adjacent.contains(&other)
    }

    /// Callers move the same number of cubes out of the ledger pool.
    pub(crate) fn add_cubes(&mut self, color: Color, amount: u8) {
        let slot = &mut self.cubes[color.index()];
        debug_assert!(amount <= MAX_CUBES_PER_CITY - *slot);
        *slot += amount;
    }

    /// Returns how many cubes were actually removed.
    pub(crate) fn remove_cubes(&mut self, color: Color, amount: u8) -> u8 {
        let slot = &mut self.cubes[color.index()];
        let removed = amount.min(*slot);
        *slot -= removed;
        removed
    }
}
