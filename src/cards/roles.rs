//! Roles and the capabilities they grant.
//!
//! Rules code never asks "is this the Medic?". It asks whether the player's
//! role has a `Capability`, and `Role::has` answers with an exhaustive match
//! so a new role cannot be added without deciding every capability.

use serde::{Deserialize, Serialize};

/// A rule a role bends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Treat removes every cube of the color.
    TreatFully,
    /// Arriving in a city clears the cubes of every cured color there.
    TreatOnArrival,
    /// Cure with 4 cards instead of 5.
    ReducedCure,
    /// Build a research station without a city card.
    FreeStationBuild,
    /// Once per turn, fly from a research station to any city by
    /// discarding any city card.
    OperationsFlight,
    /// Move other pawns as if they were your own, and convene pawns.
    MoveOthers,
    /// Take an event card back from the discard pile into a saved slot.
    SaveEvent,
    /// Give any city card, not just the one matching the current city.
    ShareAnyCard,
    /// No infection in the role's city or the cities next to it.
    Quarantine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Dispatcher,
    Medic,
    Scientist,
    Researcher,
    OperationsExpert,
    QuarantineSpecialist,
    ContingencyPlanner,
}

impl Role {
    /// Role deck contents, in build order.
    pub const ALL: [Role; 7] = [
        Role::Dispatcher,
        Role::Medic,
        Role::Scientist,
        Role::Researcher,
        Role::OperationsExpert,
        Role::QuarantineSpecialist,
        Role::ContingencyPlanner,
    ];

    #[must_use]
    pub const fn has(self, capability: Capability) -> bool {
        use Capability::*;

        match self {
            Role::Dispatcher => matches!(capability, MoveOthers),
            Role::Medic => matches!(capability, TreatFully | TreatOnArrival),
            Role::Scientist => matches!(capability, ReducedCure),
            Role::Researcher => matches!(capability, ShareAnyCard),
            Role::OperationsExpert => matches!(capability, FreeStationBuild | OperationsFlight),
            Role::QuarantineSpecialist => matches!(capability, Quarantine),
            Role::ContingencyPlanner => matches!(capability, SaveEvent),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Dispatcher => "Dispatcher",
            Role::Medic => "Medic",
            Role::Scientist => "Scientist",
            Role::Researcher => "Researcher",
            Role::OperationsExpert => "Operations Expert",
            Role::QuarantineSpecialist => "Quarantine Specialist",
            Role::ContingencyPlanner => "Contingency Planner",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
