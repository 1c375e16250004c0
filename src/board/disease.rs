//! Disease ledger: the shared cube supply and cure progress per color.
//!
//! Cubes are never created or destroyed. They move between a color's pool
//! and the cities, so `pool + cubes on board == 24` for every color.

use serde::{Deserialize, Serialize};

use super::city::Color;
use crate::core::config::CUBES_PER_COLOR;
use crate::error::Defeat;

/// Ledger entry for one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseState {
    /// Cubes left in the supply.
    pub pool: u8,
    pub cured: bool,
    /// Only ever set on a cured disease.
    pub eradicated: bool,
}

impl Default for DiseaseState {
    fn default() -> Self {
        Self {
            pool: CUBES_PER_COLOR,
            cured: false,
            eradicated: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseLedger {
    states: [DiseaseState; 4],
}

impl DiseaseLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, color: Color) -> &DiseaseState {
        &self.states[color.index()]
    }

    #[must_use]
    pub fn pool(&self, color: Color) -> u8 {
        self.get(color).pool
    }

    #[must_use]
    pub fn is_cured(&self, color: Color) -> bool {
        self.get(color).cured
    }

    #[must_use]
    pub fn is_eradicated(&self, color: Color) -> bool {
        self.get(color).eradicated
    }

    #[must_use]
    pub fn all_cured(&self) -> bool {
        self.states.iter().all(|s| s.cured)
    }

    /// Take cubes out of the supply to place on the board.
    ///
    /// Running the supply dry is a loss; the pool is left untouched.
    pub fn take(&mut self, color: Color, amount: u8) -> Result<(), Defeat> {
        let state = &mut self.states[color.index()];
        state.pool = state
            .pool
            .checked_sub(amount)
            .ok_or(Defeat::CubesExhausted(color))?;
        Ok(())
    }

    /// Return cubes removed from the board.
    ///
    /// Returns true if this made the disease eradicated.
    pub fn restore(&mut self, color: Color, amount: u8) -> bool {
        let state = &mut self.states[color.index()];
        state.pool += amount;
        debug_assert!(state.pool <= CUBES_PER_COLOR);
        self.refresh_eradication(color)
    }

    /// Mark a disease cured. Returns true if it is also eradicated now.
    pub fn cure(&mut self, color: Color) -> bool {
        self.states[color.index()].cured = true;
        self.refresh_eradication(color)
    }

    /// A cured disease with every cube back in the supply is eradicated.
    ///
    /// Returns true only on the transition.
    pub fn refresh_eradication(&mut self, color: Color) -> bool {
        let state = &mut self.states[color.index()];
        if state.cured && !state.eradicated && state.pool == CUBES_PER_COLOR {
            state.eradicated = true;
            log::info!("{} disease eradicated", color);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ledger() {
        let ledger = DiseaseLedger::new();
        for color in Color::ALL {
            assert_eq!(ledger.pool(color), 24);
            assert!(!ledger.is_cured(color));
            assert!(!ledger.is_eradicated(color));
        }
        assert!(!ledger.all_cured());
    }

    #[test]
    fn test_take_and_restore() {
        let mut ledger = DiseaseLedger::new();

        ledger.take(Color::Red, 3).unwrap();
        assert_eq!(ledger.pool(Color::Red), 21);

        assert!(!ledger.restore(Color::Red, 3));
        assert_eq!(ledger.pool(Color::Red), 24);
    }

    #[test]
    fn test_exhausting_pool_is_defeat() {
        let mut ledger = DiseaseLedger::new();
        ledger.take(Color::Black, 23).unwrap();

        assert_eq!(ledger.take(Color::Black, 2), Err(Defeat::CubesExhausted(Color::Black)));
        assert_eq!(ledger.pool(Color::Black), 1);

        ledger.take(Color::Black, 1).unwrap();
        assert_eq!(ledger.pool(Color::Black), 0);
    }

    #[test]
    fn test_cure_with_clean_board_eradicates() {
        let mut ledger = DiseaseLedger::new();

        assert!(ledger.cure(Color::Blue));
        assert!(ledger.is_eradicated(Color::Blue));
        // Only reported once.
        assert!(!ledger.refresh_eradication(Color::Blue));
    }

    #[test]
    fn test_eradication_waits_for_last_cube() {
        let mut ledger = DiseaseLedger::new();
        ledger.take(Color::Yellow, 1).unwrap();

        assert!(!ledger.cure(Color::Yellow));
        assert!(ledger.is_cured(Color::Yellow));
        assert!(!ledger.is_eradicated(Color::Yellow));

        assert!(ledger.restore(Color::Yellow, 1));
        assert!(ledger.is_eradicated(Color::Yellow));
    }

    #[test]
    fn test_uncured_disease_never_eradicates() {
        let mut ledger = DiseaseLedger::new();
        assert!(!ledger.refresh_eradication(Color::Red));
        assert!(!ledger.is_eradicated(Color::Red));
    }
}
