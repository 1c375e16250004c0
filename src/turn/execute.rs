//! Action execution.
//!
//! Called by the session only with actions it has already checked against
//! the offered set, so the card and pawn ids in the payload are known to be
//! where the action expects them. A `Defeat` returned from here ends the
//! game on the spot; whatever the cascade already did stays on the board.

use super::epidemic::{draw_step, infect_step};
use crate::cards::{CardId, Capability};
use crate::core::action::{Action, EventPlay};
use crate::error::Defeat;
use crate::session::Session;
use crate::zones::Zone;

/// Apply one offered action and charge its cost.
pub(crate) fn execute(session: &mut Session, action: &Action) -> Result<(), Defeat> {
    let active = session.turn.player;
    let here = session.players[active.index()].location;

    match action {
        Action::Drive { pawn, to } | Action::ShuttleFlight { pawn, to } | Action::Convene { pawn, to } => {
            session.move_pawn(*pawn, *to);
        }
        Action::DirectFlight { pawn, card } => {
            let to = session.player_deck.card(*card).city();
            session.player_deck.discard(*card);
            if let Some(to) = to {
                session.move_pawn(*pawn, to);
            }
        }
        Action::CharterFlight { pawn, card, to } => {
            session.player_deck.discard(*card);
            session.move_pawn(*pawn, *to);
        }
        Action::OperationsFlight { card, to } => {
            session.player_deck.discard(*card);
            session.turn.operations_flight_used = true;
            session.move_pawn(active, *to);
        }
        Action::BuildStation { card } => {
            if let Some(card) = card {
                session.player_deck.discard(*card);
            }
            session.build_station(here);
        }
        Action::Treat { color } => {
            let fully = session.players[active.index()].can(Capability::TreatFully);
            let removed = session.board.treat(here, *color, fully);
            log::debug!("{} treated {} {} cubes", active, removed, color);
        }
        Action::ShareCard { card, to, .. } => {
            session.player_deck.give(*card, *to);
        }
        Action::DiscoverCure { color, cards } => {
            for &card in cards {
                session.player_deck.discard(card);
            }
            session.board.diseases.cure(*color);
            log::info!("{} discovered the {} cure", active, color);
        }
        Action::RetrieveEvent { card } => {
            session.player_deck.save(*card, active);
        }
        Action::Pass => {
            session.turn.actions_remaining = 0;
        }
        Action::PlayEvent { card, play } => play_event(session, *card, play),
        Action::Discard { card, .. } => {
            session.player_deck.discard(*card);
        }
        Action::DrawCards => draw_step(session)?,
        Action::InfectCities => infect_step(session)?,
        Action::EndTurn => {
            let next = session.turn.next(session.players.len());
            let finished = std::mem::replace(&mut session.turn, next);
            session.turns.push_back(finished);
            log::debug!("turn {} begins for {}", session.turn.number, session.turn.player);
        }
    }

    if action.costs_action() {
        session.turn.actions_remaining = session.turn.actions_remaining.saturating_sub(1);
    }
    Ok(())
}

/// Events cost nothing. A card played from a saved slot leaves the game;
/// one played from a hand goes to the discard pile.
fn play_event(session: &mut Session, card: CardId, play: &EventPlay) {
    match session.player_deck.zone_of(card) {
        Some(Zone::Saved(_)) => session.player_deck.remove(card),
        _ => session.player_deck.discard(card),
    }
    log::debug!("event {} played", session.player_deck.card(card).name);

    match play {
        EventPlay::Airlift { pawn, to } => session.move_pawn(*pawn, *to),
        EventPlay::GovernmentGrant { city } => {
            session.build_station(*city);
        }
        EventPlay::OneQuietNight => session.turn.skip_infect = true,
        EventPlay::ResilientPopulation { card } => session.infection.remove(*card),
        EventPlay::Forecast { order } => {
            if !session.infection.reorder_top(order) {
                log::warn!("forecast order {:?} refused, infection deck left as it was", order);
            }
        }
    }
}
