//! Turn engine: the state machine that drives play.
//!
//! - `state`: the `Turn` record and `Phase`
//! - `options`: legal action enumeration for the current state
//! - `execute`: applying an offered action
//! - `epidemic`: the draw and infect steps, epidemic resolution

pub(crate) mod epidemic;
pub(crate) mod execute;
pub mod options;
pub mod state;

pub use options::{is_offered, legal_actions};
pub use state::{Phase, Turn};
