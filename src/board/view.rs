//! Read-only export of the board for renderers.

use serde::{Deserialize, Serialize};

use super::city::{CityId, Color};
use super::state::Board;

/// What a renderer needs to draw one city.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityView {
    pub id: CityId,
    pub name: String,
    pub color: Color,
    /// Cubes of all colors combined.
    pub total_cubes: u8,
    pub location: String,
    pub research_station: bool,
}

/// Snapshot of the whole map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub cities: Vec<CityView>,
    /// Each adjacency once, lower id first.
    pub edges: Vec<(CityId, CityId)>,
    pub outbreaks: u8,
}

impl Board {
    #[must_use]
    pub fn view(&self) -> BoardView {
        let cities = self
            .cities
            .iter()
            .map(|city| CityView {
                id: city.id,
                name: city.name.clone(),
                color: city.color,
                total_cubes: city.total_cubes(),
                location: city.location.clone(),
                research_station: city.research_station,
            })
            .collect();

        BoardView {
            cities,
            edges: self.cities.edges(),
            outbreaks: self.outbreaks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CityGraph;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_view_reflects_board() {
        let mut board = Board::new(CityGraph::standard().unwrap());
        let lima = board.cities.require("Lima").unwrap();
        board.infect(lima, 2, None, &FxHashSet::default()).unwrap();
        board.infect(lima, 1, Some(Color::Blue), &FxHashSet::default()).unwrap();
        board.build_station(lima);

        let view = board.view();
        let city = &view.cities[lima.index()];

        assert_eq!(view.cities.len(), 48);
        assert_eq!(city.name, "Lima");
        assert_eq!(city.total_cubes, 3);
        assert!(city.research_station);
        assert!(view.edges.iter().all(|(a, b)| a < b));
    }
}
