//! The game session: owner of every piece of game state.
//!
//! ## Lifecycle
//!
//! 1. `SessionBuilder::build` validates the configuration, loads the map,
//!    builds and deals the decks, assigns roles and runs the opening
//!    infection.
//! 2. The host loops on `legal_actions` / `apply_action` (see
//!    [`RulesEngine`]).
//! 3. The first `Defeat`, or the fourth cure, makes the session terminal.
//!    From then on every action is refused with `ActionError::GameOver`.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardView, CascadeReport, CityId, Color};
use crate::cards::{CardId, Capability, Deck};
use crate::core::action::{Action, ActionRecord};
use crate::core::config::{infection_rate, SessionConfig, HAND_LIMIT};
use crate::core::player::{Player, PlayerId};
use crate::error::{ActionError, Defeat};
use crate::rules::{GameResult, RulesEngine};
use crate::turn::execute::execute;
use crate::turn::{is_offered, legal_actions, Phase, Turn};

/// A game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) config: SessionConfig,
    pub(crate) board: Board,
    pub(crate) infection: Deck,
    pub(crate) player_deck: Deck,
    pub(crate) role_deck: Deck,
    pub(crate) players: Vec<Player>,
    /// The turn being played.
    pub(crate) turn: Turn,
    /// Finished turns, oldest first.
    pub(crate) turns: Vector<Turn>,
    pub(crate) history: Vector<ActionRecord>,
    pub(crate) infection_rate_index: usize,
    pub(crate) result: Option<GameResult>,
}

impl Session {
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn infection_deck(&self) -> &Deck {
        &self.infection
    }

    #[must_use]
    pub fn player_deck(&self) -> &Deck {
        &self.player_deck
    }

    #[must_use]
    pub fn role_deck(&self) -> &Deck {
        &self.role_deck
    }

    /// Direct deck access for hosts staging a position (tutorials, tests).
    /// Cards can only be moved between zones, never created or dropped.
    pub fn infection_deck_mut(&mut self) -> &mut Deck {
        &mut self.infection
    }

    /// See [`Session::infection_deck_mut`].
    pub fn player_deck_mut(&mut self) -> &mut Deck {
        &mut self.player_deck
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// A player's hand, newest first.
    #[must_use]
    pub fn hand(&self, id: PlayerId) -> &[CardId] {
        self.player_deck.hand(id)
    }

    #[must_use]
    pub fn current_turn(&self) -> &Turn {
        &self.turn
    }

    /// Every turn so far, the current one last.
    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter().chain(std::iter::once(&self.turn))
    }

    /// Every applied action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn infection_rate_index(&self) -> usize {
        self.infection_rate_index
    }

    /// Cities infected per infection step right now.
    #[must_use]
    pub fn infection_rate(&self) -> u8 {
        infection_rate(self.infection_rate_index)
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// First player over the hand limit, the active player checked first.
    #[must_use]
    pub fn overflowing(&self) -> Option<PlayerId> {
        std::iter::once(self.turn.player)
            .chain(PlayerId::all(self.players.len()))
            .find(|&player| self.hand(player).len() > HAND_LIMIT)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.overflowing() {
            Some(player) => Phase::Discarding(player),
            None => self.turn.phase(),
        }
    }

    /// Cities no infection can reach: every quarantine role's city and its
    /// neighbors.
    #[must_use]
    pub fn shielded_cities(&self) -> FxHashSet<CityId> {
        self.players
            .iter()
            .filter(|player| player.can(Capability::Quarantine))
            .flat_map(|player| {
                std::iter::once(player.location).chain(self.board.cities.adjacent(player.location).iter().copied())
            })
            .collect()
    }

    /// Put a pawn in a city. A role that treats on arrival clears every
    /// cured color there.
    pub fn move_pawn(&mut self, pawn: PlayerId, to: CityId) {
        let player = &mut self.players[pawn.index()];
        player.location = to;
        log::debug!("{} moved to {}", pawn, self.board.cities.get(to).name);

        if player.can(Capability::TreatOnArrival) {
            let cleared = self.board.clear_cured(to);
            if cleared > 0 {
                log::debug!("{} cleared {} cured cubes on arrival", pawn, cleared);
            }
        }
    }

    /// Infect a city, honoring quarantine. A defeat also ends the session.
    pub fn infect(&mut self, city: CityId, amount: u8, color: Option<Color>) -> Result<CascadeReport, Defeat> {
        let shielded = self.shielded_cities();
        let report = self.board.infect(city, amount, color, &shielded);
        if let Err(defeat) = &report {
            self.finish(GameResult::Defeat(*defeat));
        }
        report
    }

    /// Build a research station. Returns false if the city has one or the
    /// supply is empty.
    pub fn build_station(&mut self, city: CityId) -> bool {
        self.board.build_station(city)
    }

    /// Render export: per-city totals and stations plus the edge list.
    #[must_use]
    pub fn board_view(&self) -> BoardView {
        self.board.view()
    }

    pub(crate) fn finish(&mut self, result: GameResult) {
        if self.result.is_none() {
            log::info!("game over after turn {}: {:?}", self.turn.number, result);
            self.result = Some(result);
        }
    }
}

impl RulesEngine for Session {
    fn active_player(&self) -> PlayerId {
        self.turn.player
    }

    fn legal_actions(&self) -> Vec<Action> {
        legal_actions(self)
    }

    fn is_legal(&self, action: &Action) -> bool {
        is_offered(self, action)
    }

    /// Apply an offered action.
    ///
    /// Returns `Ok` even when the action loses the game; check
    /// [`RulesEngine::is_terminal`] afterwards.
    fn apply_action(&mut self, action: &Action) -> Result<(), ActionError> {
        if let Some(result) = self.result {
            log::warn!("action refused, game is over: {:?}", action);
            return Err(ActionError::GameOver(result));
        }
        if !self.is_legal(action) {
            log::warn!("illegal action refused: {:?}", action);
            return Err(ActionError::Illegal(action.clone()));
        }

        log::debug!("{} (turn {}): {:?}", self.turn.player, self.turn.number, action);
        self.history.push_back(ActionRecord::new(
            self.turn.player,
            action.clone(),
            self.turn.number,
            self.turn.applied,
        ));
        self.turn.applied += 1;

        match execute(self, action) {
            Ok(()) if self.board.diseases.all_cured() => self.finish(GameResult::Victory),
            Ok(()) => {}
            Err(defeat) => self.finish(GameResult::Defeat(defeat)),
        }
        Ok(())
    }

    fn is_terminal(&self) -> Option<GameResult> {
        self.result
    }
}
