//! Action representation: one variant per thing a player can do.
//!
//! Every variant carries exactly the payload its execution needs, so the turn
//! engine can offer a `Vec<Action>` and later execute any element of it
//! without further lookups or choices. Movement variants name the `pawn`
//! being moved, which is the active player except when a Dispatcher moves
//! someone else.
//!
//! `CardId`s are scoped to their deck: player-deck ids everywhere except
//! `EventPlay::ResilientPopulation` and `EventPlay::Forecast`, which point
//! into the infection deck.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::FORECAST_DEPTH;
use super::player::PlayerId;
use crate::board::{CityId, Color};
use crate::cards::CardId;

/// A complete game action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move a pawn to an adjacent city.
    Drive { pawn: PlayerId, to: CityId },

    /// Discard a city card to move a pawn to that city.
    DirectFlight { pawn: PlayerId, card: CardId },

    /// Discard the card of the pawn's current city to move it anywhere.
    CharterFlight { pawn: PlayerId, card: CardId, to: CityId },

    /// Move between two cities that both have research stations.
    ShuttleFlight { pawn: PlayerId, to: CityId },

    /// Dispatcher: move a pawn to a city that holds another pawn.
    Convene { pawn: PlayerId, to: CityId },

    /// Operations Expert, once per turn: from a research station, discard
    /// any city card to move anywhere.
    OperationsFlight { card: CardId, to: CityId },

    /// Build a research station in the active player's city. `card` is the
    /// matching city card, or `None` for roles that build for free.
    BuildStation { card: Option<CardId> },

    /// Remove cubes of one color from the active player's city.
    Treat { color: Color },

    /// Hand a city card between two co-located players.
    ShareCard { card: CardId, from: PlayerId, to: PlayerId },

    /// Discard same-colored city cards at a research station to cure.
    DiscoverCure { color: Color, cards: SmallVec<[CardId; 5]> },

    /// Contingency Planner: take an event card back from the player discard
    /// pile into the saved slot.
    RetrieveEvent { card: CardId },

    /// Give up the remaining actions this turn.
    Pass,

    /// Play an event card from the active player's hand or saved slot.
    PlayEvent { card: CardId, play: EventPlay },

    /// Drop a card from an overflowing hand.
    Discard { player: PlayerId, card: CardId },

    /// Draw the end-of-turn player cards.
    DrawCards,

    /// Run the infection step.
    InfectCities,

    /// Hand the turn to the next player.
    EndTurn,
}

/// Target of an event card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventPlay {
    /// Move any pawn to any city.
    Airlift { pawn: PlayerId, to: CityId },

    /// Build a research station anywhere without a card.
    GovernmentGrant { city: CityId },

    /// Skip this turn's infection step.
    OneQuietNight,

    /// Remove an infection card from the infection discard pile for good.
    ResilientPopulation { card: CardId },

    /// Put the top infection cards back in this order (top first).
    Forecast { order: SmallVec<[CardId; FORECAST_DEPTH]> },
}

impl Action {
    /// Does executing this action spend one of the turn's actions?
    ///
    /// Events, overflow discards and the end-of-turn steps are free. `Pass`
    /// is handled separately because it spends all of them.
    #[must_use]
    pub fn costs_action(&self) -> bool {
        !matches!(
            self,
            Action::Pass
                | Action::PlayEvent { .. }
                | Action::Discard { .. }
                | Action::DrawCards
                | Action::InfectCities
                | Action::EndTurn
        )
    }

    /// Pawn moved by this action, if any.
    #[must_use]
    pub fn moved_pawn(&self) -> Option<PlayerId> {
        match self {
            Action::Drive { pawn, .. }
            | Action::DirectFlight { pawn, .. }
            | Action::CharterFlight { pawn, .. }
            | Action::ShuttleFlight { pawn, .. }
            | Action::Convene { pawn, .. } => Some(*pawn),
            Action::PlayEvent {
                play: EventPlay::Airlift { pawn, .. },
                ..
            } => Some(*pawn),
            _ => None,
        }
    }
}

/// A recorded action with metadata for history tracking and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player whose turn it was.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_costs() {
        let p = PlayerId::new(0);

        assert!(Action::Drive { pawn: p, to: CityId::new(3) }.costs_action());
        assert!(Action::Treat { color: Color::Red }.costs_action());
        assert!(Action::RetrieveEvent { card: CardId::new(2) }.costs_action());

        assert!(!Action::DrawCards.costs_action());
        assert!(!Action::InfectCities.costs_action());
        assert!(!Action::EndTurn.costs_action());
        assert!(!Action::Pass.costs_action());
        assert!(!Action::Discard { player: p, card: CardId::new(1) }.costs_action());
        assert!(!Action::PlayEvent {
            card: CardId::new(1),
            play: EventPlay::OneQuietNight,
        }
        .costs_action());
    }

    #[test]
    fn test_moved_pawn() {
        let p1 = PlayerId::new(1);

        assert_eq!(Action::ShuttleFlight { pawn: p1, to: CityId::new(0) }.moved_pawn(), Some(p1));
        assert_eq!(
            Action::PlayEvent {
                card: CardId::new(50),
                play: EventPlay::Airlift { pawn: p1, to: CityId::new(4) },
            }
            .moved_pawn(),
            Some(p1)
        );
        assert_eq!(Action::BuildStation { card: None }.moved_pawn(), None);
    }

    #[test]
    fn test_action_equality_includes_payload() {
        let a1 = Action::Drive { pawn: PlayerId::new(0), to: CityId::new(5) };
        let a2 = Action::Drive { pawn: PlayerId::new(0), to: CityId::new(5) };
        let a3 = Action::Drive { pawn: PlayerId::new(0), to: CityId::new(6) };

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
    }

    #[test]
    fn test_action_record_serialization() {
        let action = Action::ShareCard {
            card: CardId::new(4),
            from: PlayerId::new(0),
            to: PlayerId::new(1),
        };
        let record = ActionRecord::new(PlayerId::new(0), action, 2, 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
