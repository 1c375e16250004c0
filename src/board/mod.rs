//! The map and its diseases.
//!
//! - `city`: colors, city ids and per-city cube counts
//! - `graph`: the city arena, loaded and validated from a `CityTable`
//! - `disease`: the per-color cube pool and cure flags
//! - `state`: `Board`, which ties the above together with the outbreak and
//!   research station counters
//! - `infection`: the outbreak-aware `Board::infect`
//! - `view`: read-only export for renderers

pub mod city;
pub mod disease;
pub mod graph;
pub mod infection;
pub mod state;
pub mod view;

pub use city::{City, CityId, Color};
pub use disease::{DiseaseLedger, DiseaseState};
pub use graph::{CityGraph, CityRecord, CityTable};
pub use infection::CascadeReport;
pub use state::Board;
pub use view::{BoardView, CityView};
