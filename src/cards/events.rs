//! Event cards. Events cost no action and can be played in any phase
//! except while someone is discarding down to the hand limit.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventKind {
    /// Move any pawn to any city.
    Airlift,
    /// Look at the top six infection cards and put them back in any order.
    Forecast,
    /// Build a research station anywhere.
    GovernmentGrant,
    /// Skip the next infection step.
    OneQuietNight,
    /// Remove one card in the infection discard pile from the game.
    ResilientPopulation,
}

impl EventKind {
    /// Player deck contents, in build order.
    pub const ALL: [EventKind; 5] = [
        EventKind::Airlift,
        EventKind::Forecast,
        EventKind::GovernmentGrant,
        EventKind::OneQuietNight,
        EventKind::ResilientPopulation,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::Airlift => "Airlift",
            EventKind::Forecast => "Forecast",
            EventKind::GovernmentGrant => "Government Grant",
            EventKind::OneQuietNight => "One Quiet Night",
            EventKind::ResilientPopulation => "Resilient Population",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
