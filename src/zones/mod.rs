//! Card locations.
//!
//! Each deck owns one `ZoneManager`. Draw pile, discard pile, hands, saved
//! slots and the removed pile are all zones of that manager, which is what
//! makes "a card is in exactly one place" hold by construction.

pub mod manager;

pub use manager::{Zone, ZoneManager, ZonePosition};
