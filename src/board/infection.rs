//! Infection and the outbreak cascade.
//!
//! ## Rules, in order
//!
//! 1. An eradicated disease never places cubes.
//! 2. A shielded city (a Quarantine Specialist's city or one next to it)
//!    ignores the infection.
//! 3. If the city would go above 3 cubes of the color it is topped up to 3
//!    and an outbreak follows.
//! 4. Otherwise the cubes are placed.
//!
//! Every cube placed comes out of the ledger pool first, so running the pool
//! dry is a `Defeat` before the board changes.
//!
//! ## Cycle safety
//!
//! A `Cascade` is created per top-level [`Board::infect`] call and threaded
//! through the recursion. It holds the set of cities that already broke out
//! in this cascade; reaching one of them again spreads nothing and counts
//! nothing.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::city::{CityId, Color};
use super::state::Board;
use crate::core::config::{MAX_CUBES_PER_CITY, OUTBREAK_LIMIT};
use crate::error::Defeat;

/// What one top-level infection did to the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeReport {
    /// Cities that broke out, in the order they did.
    pub outbreaks: Vec<CityId>,
    /// Cubes taken from the pool.
    pub cubes_placed: u32,
}

struct Cascade<'a> {
    visited: FxHashSet<CityId>,
    shielded: &'a FxHashSet<CityId>,
    report: CascadeReport,
}

impl Board {
    /// Add `amount` cubes of `color` (the city's own color when `None`) to
    /// `city`, running any outbreaks this causes.
    ///
    /// `shielded` lists the cities protected by quarantine this turn.
    pub fn infect(
        &mut self,
        city: CityId,
        amount: u8,
        color: Option<Color>,
        shielded: &FxHashSet<CityId>,
    ) -> Result<CascadeReport, Defeat> {
        let color = color.unwrap_or(self.cities.get(city).color);
        let mut cascade = Cascade {
            visited: FxHashSet::default(),
            shielded,
            report: CascadeReport::default(),
        };

        self.spread(city, amount, color, &mut cascade)?;
        Ok(cascade.report)
    }

    fn spread(&mut self, city: CityId, amount: u8, color: Color, cascade: &mut Cascade<'_>) -> Result<(), Defeat> {
        if self.diseases.is_eradicated(color) || cascade.shielded.contains(&city) {
            return Ok(());
        }

        let current = self.cities.get(city).cubes(color);
        if amount > MAX_CUBES_PER_CITY - current {
            self.place(city, color, MAX_CUBES_PER_CITY - current, cascade)?;
            self.outbreak(city, color, cascade)
        } else {
            self.place(city, color, amount, cascade)
        }
    }

    fn place(&mut self, city: CityId, color: Color, amount: u8, cascade: &mut Cascade<'_>) -> Result<(), Defeat> {
        if amount == 0 {
            return Ok(());
        }

        self.diseases.take(color, amount)?;
        self.cities.get_mut(city).add_cubes(color, amount);
        cascade.report.cubes_placed += u32::from(amount);
        Ok(())
    }

    fn outbreak(&mut self, city: CityId, color: Color, cascade: &mut Cascade<'_>) -> Result<(), Defeat> {
        if !cascade.visited.insert(city) {
            return Ok(());
        }

        self.outbreaks += 1;
        cascade.report.outbreaks.push(city);
        log::info!(
            "outbreak of {} in {} (outbreak {})",
            color,
            self.cities.get(city).name,
            self.outbreaks
        );
        if self.outbreaks > OUTBREAK_LIMIT {
            return Err(Defeat::OutbreakLimit);
        }

        let neighbors = self.cities.get(city).adjacent.clone();
        for neighbor in neighbors {
            self.spread(neighbor, 1, color, cascade)?;
        }
        Ok(())
    }
}
