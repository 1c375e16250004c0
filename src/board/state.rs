//! Shared board: the city graph, the disease ledger and the two global
//! counters (outbreaks and research stations left in the box).

use serde::{Deserialize, Serialize};

use super::city::{CityId, Color};
use super::disease::DiseaseLedger;
use super::graph::CityGraph;
use crate::core::config::{MAX_CUBES_PER_CITY, RESEARCH_STATIONS};

/// Everything on the table that is not a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub cities: CityGraph,
    pub diseases: DiseaseLedger,
    pub(crate) outbreaks: u8,
    station_supply: u8,
}

impl Board {
    #[must_use]
    pub fn new(cities: CityGraph) -> Self {
        Self {
            cities,
            diseases: DiseaseLedger::new(),
            outbreaks: 0,
            station_supply: RESEARCH_STATIONS,
        }
    }

    /// Outbreaks so far this game.
    #[must_use]
    pub fn outbreaks(&self) -> u8 {
        self.outbreaks
    }

    /// Research stations still in the box.
    #[must_use]
    pub fn station_supply(&self) -> u8 {
        self.station_supply
    }

    #[must_use]
    pub fn has_station(&self, city: CityId) -> bool {
        self.cities.get(city).research_station
    }

    #[must_use]
    pub fn can_build_station(&self, city: CityId) -> bool {
        self.station_supply > 0 && !self.has_station(city)
    }

    /// Place a research station. Returns false if the city already has one
    /// or the box is empty.
    pub fn build_station(&mut self, city: CityId) -> bool {
        if !self.can_build_station(city) {
            return false;
        }

        self.station_supply -= 1;
        self.cities.get_mut(city).research_station = true;
        log::debug!("research station built in {}", self.cities.get(city).name);
        true
    }

    /// Remove cubes of one color from a city and return them to the pool.
    ///
    /// Removes every cube of that color when `fully` is set or the disease
    /// is cured, otherwise exactly one. Returns the number removed.
    pub fn treat(&mut self, city: CityId, color: Color, fully: bool) -> u8 {
        let amount = if fully || self.diseases.is_cured(color) {
            MAX_CUBES_PER_CITY
        } else {
            1
        };
        let removed = self.cities.get_mut(city).remove_cubes(color, amount);
        if removed > 0 {
            self.diseases.restore(color, removed);
        }
        removed
    }

    /// Clear every cured color from a city. Returns the cubes removed.
    pub fn clear_cured(&mut self, city: CityId) -> u8 {
        let mut removed = 0;
        for color in Color::ALL {
            if self.diseases.is_cured(color) {
                removed += self.treat(city, color, true);
            }
        }
        removed
    }

    /// `pool + cubes on board` for one color. Always 24.
    #[must_use]
    pub fn cube_total(&self, color: Color) -> u32 {
        self.cities.cubes_on_board(color) + u32::from(self.diseases.pool(color))
    }
}
