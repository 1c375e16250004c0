//! The per-turn record and the phase it implies.

use serde::{Deserialize, Serialize};

use crate::core::config::ACTIONS_PER_TURN;
use crate::core::player::PlayerId;

/// Where a turn is in its act, draw, infect, end cycle.
///
/// `Discarding` overrides the others while any hand is above the limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Discarding(PlayerId),
    Acting,
    Drawing,
    Infecting,
    Ending,
}

/// One player's turn.
///
/// Mutated while the turn is played; the next player gets a fresh `Turn`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub player: PlayerId,
    /// 1-based turn counter across the game.
    pub number: u32,
    pub actions_remaining: u8,
    pub drawn: bool,
    pub infected: bool,
    /// Set by One Quiet Night.
    pub skip_infect: bool,
    /// Operations Expert's once-per-turn flight.
    pub operations_flight_used: bool,
    /// Actions applied so far, including free ones.
    pub applied: u32,
}

impl Turn {
    #[must_use]
    pub fn new(player: PlayerId, number: u32) -> Self {
        Self {
            player,
            number,
            actions_remaining: ACTIONS_PER_TURN,
            drawn: false,
            infected: false,
            skip_infect: false,
            operations_flight_used: false,
            applied: 0,
        }
    }

    /// The turn that follows this one.
    #[must_use]
    pub fn next(&self, player_count: usize) -> Self {
        Self::new(self.player.next(player_count), self.number + 1)
    }

    /// Phase ignoring hand overflow.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.actions_remaining > 0 {
            Phase::Acting
        } else if !self.drawn {
            Phase::Drawing
        } else if !self.infected && !self.skip_infect {
            Phase::Infecting
        } else {
            Phase::Ending
        }
    }

    /// Is the infection step still ahead of us?
    #[must_use]
    pub fn infection_pending(&self) -> bool {
        !self.infected && !self.skip_infect
    }
}
