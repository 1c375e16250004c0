//! The end-of-turn steps: drawing player cards (with epidemics) and
//! infecting cities.

use crate::core::config::{infection_rate, CARDS_DRAWN_PER_TURN, EPIDEMIC_CUBES};
use crate::error::Defeat;
use crate::session::Session;

/// Draw the end-of-turn player cards into the active hand.
///
/// Epidemics are resolved the moment they are drawn and go straight to the
/// player discard pile.
pub(crate) fn draw_step(session: &mut Session) -> Result<(), Defeat> {
    let player = session.turn.player;

    for _ in 0..CARDS_DRAWN_PER_TURN {
        let Some(card) = session.player_deck.draw()? else {
            break;
        };

        if session.player_deck.card(card).is_epidemic() {
            resolve_epidemic(session)?;
            session.player_deck.discard(card);
        } else {
            session.player_deck.give(card, player);
        }
    }

    session.turn.drawn = true;
    Ok(())
}

/// Increase, infect, intensify.
///
/// The bottom infection card gets 3 cubes; then the infection discard pile
/// goes back on top of the draw pile in its current order and the bottom
/// card starts the new discard pile.
pub(crate) fn resolve_epidemic(session: &mut Session) -> Result<(), Defeat> {
    session.infection_rate_index += 1;
    log::info!(
        "epidemic: infection rate now {}",
        infection_rate(session.infection_rate_index)
    );

    let bottom = session.infection.draw_bottom();
    if let Some(city) = bottom.and_then(|card| session.infection.card(card).city()) {
        session.infect(city, EPIDEMIC_CUBES, None)?;
    }

    session.infection.intensify();
    if let Some(card) = bottom {
        session.infection.discard(card);
    }
    Ok(())
}

/// Infect as many cities as the current infection rate says, one cube each.
pub(crate) fn infect_step(session: &mut Session) -> Result<(), Defeat> {
    for _ in 0..infection_rate(session.infection_rate_index) {
        let Some(card) = session.infection.draw()? else {
            break;
        };

        if let Some(city) = session.infection.card(card).city() {
            session.infect(city, 1, None)?;
        }
        session.infection.discard(card);
    }

    session.turn.infected = true;
    Ok(())
}
