//! The city graph: an arena of cities addressed by `CityId`.
//!
//! Built once from a `CityTable` and never changed structurally afterwards.
//! Loading validates the whole table up front: unknown or one-way adjacency
//! entries, duplicate names and unknown colors all reject the load.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::city::{City, CityId, Color};
use crate::error::{ConfigError, Result};

/// The 48-city world map shipped with the crate.
const STANDARD_TABLE: &str = include_str!("../../data/cities.json");

/// One row of the city table as supplied by the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub location: String,
    pub color: String,
    pub adjacent: Vec<String>,
}

/// Raw, unvalidated city data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityTable {
    pub records: Vec<CityRecord>,
}

impl CityTable {
    /// Parse a JSON array of `{name, location, color, adjacent}` records.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The standard world map.
    pub fn standard() -> Result<Self> {
        Self::from_json(STANDARD_TABLE)
    }
}

/// Linked, validated cities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityGraph {
    cities: Vec<City>,
    by_name: FxHashMap<String, CityId>,
}

impl CityGraph {
    /// Build the graph, resolving every adjacency name.
    pub fn load(table: &CityTable) -> Result<Self> {
        let mut cities = Vec::with_capacity(table.records.len());
        let mut by_name = FxHashMap::default();

        for (i, record) in table.records.iter().enumerate() {
            let color = Color::parse(&record.color).ok_or_else(|| ConfigError::UnknownColor {
                city: record.name.clone(),
                color: record.color.clone(),
            })?;
            let id = u8::try_from(i)
                .map(CityId::new)
                .map_err(|_| ConfigError::TooManyCities(table.records.len()))?;
            if by_name.insert(record.name.clone(), id).is_some() {
                return Err(ConfigError::DuplicateCity(record.name.clone()));
            }
            cities.push(City::new(id, record.name.as_str(), record.location.as_str(), color));
        }

        for (i, record) in table.records.iter().enumerate() {
            for adjacent in &record.adjacent {
                let other = by_name.get(adjacent).copied().ok_or_else(|| {
                    ConfigError::UnknownAdjacentCity {
                        city: record.name.clone(),
                        adjacent: adjacent.clone(),
                    }
                })?;
                cities[i].adjacent.push(other);
            }
        }

        for city in &cities {
            for &other in &city.adjacent {
                if !cities[other.index()].is_adjacent(city.id) {
                    return Err(ConfigError::AsymmetricAdjacency {
                        city: city.name.clone(),
                        adjacent: cities[other.index()].name.clone(),
                    });
                }
            }
        }

        Ok(Self { cities, by_name })
    }

    /// Load the standard world map.
    pub fn standard() -> Result<Self> {
        Self::load(&CityTable::standard()?)
    }

    /// Look up a city by name.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<CityId> {
        self.by_name.get(name).copied()
    }

    /// Look up a city by name, failing with a configuration error.
    pub fn require(&self, name: &str) -> Result<CityId> {
        self.id(name).ok_or_else(|| ConfigError::UnknownCity(name.to_string()))
    }

    #[must_use]
    pub fn get(&self, id: CityId) -> &City {
        &self.cities[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: CityId) -> &mut City {
        &mut self.cities[id.index()]
    }

    /// Look up a city by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&City> {
        self.id(name).map(|id| self.get(id))
    }

    /// Cities of one base color.
    pub fn by_color(&self, color: Color) -> impl Iterator<Item = &City> {
        self.cities.iter().filter(move |c| c.color == color)
    }

    #[must_use]
    pub fn adjacent(&self, id: CityId) -> &[CityId] {
        &self.get(id).adjacent
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = CityId> + '_ {
        self.cities.iter().map(|c| c.id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Cities with a research station, in table order.
    pub fn stations(&self) -> impl Iterator<Item = CityId> + '_ {
        self.cities.iter().filter(|c| c.research_station).map(|c| c.id)
    }

    /// Cubes of one color across the whole map.
    #[must_use]
    pub fn cubes_on_board(&self, color: Color) -> u32 {
        self.cities.iter().map(|c| u32::from(c.cubes(color))).sum()
    }

    /// Each undirected edge once, lower id first.
    #[must_use]
    pub fn edges(&self) -> Vec<(CityId, CityId)> {
        self.cities
            .iter()
            .flat_map(|c| c.adjacent.iter().filter(move |&&o| c.id < o).map(move |&o| (c.id, o)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, color: &str, adjacent: &[&str]) -> CityRecord {
        CityRecord {
            name: name.into(),
            location: "0,0".into(),
            color: color.into(),
            adjacent: adjacent.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_standard_map_loads() {
        let graph = CityGraph::standard().unwrap();

        assert_eq!(graph.len(), 48);
        for color in Color::ALL {
            assert_eq!(graph.by_color(color).count(), 12);
        }
    }

    #[test]
    fn test_pick_city_by_name() {
        let graph = CityGraph::standard().unwrap();
        let london = graph.by_name("London").unwrap();

        assert_eq!(london.name, "London");
        assert_eq!(london.color, Color::Blue);
        assert!(graph.by_name("Atlantis").is_none());
    }

    #[test]
    fn test_adjacency_keeps_table_order() {
        let graph = CityGraph::standard().unwrap();
        let khartoum = graph.require("Khartoum").unwrap();
        let names: Vec<_> = graph
            .adjacent(khartoum)
            .iter()
            .map(|&id| graph.get(id).name.as_str())
            .collect();

        assert_eq!(names, vec!["Cairo", "Johannesburg", "Kinshasa", "Lagos"]);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let graph = CityGraph::standard().unwrap();
        for city in graph.iter() {
            for &other in &city.adjacent {
                assert!(graph.get(other).is_adjacent(city.id), "{} <-> {}", city.name, graph.get(other).name);
            }
        }
    }

    #[test]
    fn test_edges_are_deduplicated() {
        let graph = CityGraph::standard().unwrap();
        let directed: usize = graph.iter().map(|c| c.adjacent.len()).sum();

        assert_eq!(graph.edges().len() * 2, directed);
    }

    #[test]
    fn test_unknown_adjacent_city_rejects_load() {
        let table = CityTable {
            records: vec![record("A", "red", &["B"]), record("C", "red", &[])],
        };

        match CityGraph::load(&table) {
            Err(ConfigError::UnknownAdjacentCity { city, adjacent }) => {
                assert_eq!(city, "A");
                assert_eq!(adjacent, "B");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_oversized_table_rejects_load() {
        let names: Vec<String> = (0..300).map(|i| format!("C{i}")).collect();
        let table = CityTable {
            records: names.iter().map(|name| record(name, "red", &[])).collect(),
        };

        assert!(matches!(CityGraph::load(&table), Err(ConfigError::TooManyCities(300))));

        let table = CityTable {
            records: names[..256].iter().map(|name| record(name, "red", &[])).collect(),
        };
        let graph = CityGraph::load(&table).unwrap();
        assert_eq!(graph.get(graph.require("C255").unwrap()).name, "C255");
    }

    #[test]
    fn test_one_way_adjacency_rejects_load() {
        let table = CityTable {
            records: vec![record("A", "red", &["B"]), record("B", "red", &[])],
        };

        assert!(matches!(CityGraph::load(&table), Err(ConfigError::AsymmetricAdjacency { .. })));
    }

    #[test]
    fn test_bad_color_and_duplicates_reject_load() {
        let bad_color = CityTable { records: vec![record("A", "green", &[])] };
        assert!(matches!(CityGraph::load(&bad_color), Err(ConfigError::UnknownColor { .. })));

        let duplicate = CityTable {
            records: vec![record("A", "red", &[]), record("A", "blue", &[])],
        };
        assert!(matches!(CityGraph::load(&duplicate), Err(ConfigError::DuplicateCity(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(CityTable::from_json("{"), Err(ConfigError::MalformedTable(_))));
    }
}
