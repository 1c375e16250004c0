//! Event card tests.
//!
//! Events cost no action, can be played by whoever holds them, and are
//! offered in every phase except while a hand is over the limit.

use pandemic_rules::board::CityId;
use pandemic_rules::cards::{CardId, Role};
use pandemic_rules::core::{Action, EventPlay, PlayerId};
use pandemic_rules::error::ActionError;
use pandemic_rules::rules::RulesEngine;
use pandemic_rules::session::{Session, SessionBuilder};
use pandemic_rules::turn::Phase;
use pandemic_rules::zones::Zone;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn table() -> Session {
    let mut session = SessionBuilder::new()
        .roles(vec![Role::Medic, Role::Scientist])
        .seed(23)
        .without_initial_infection()
        .build()
        .unwrap();

    for player in [P0, P1] {
        for card in session.hand(player).to_vec() {
            session.player_deck_mut().discard(card);
        }
    }
    session
}

fn city(session: &Session, name: &str) -> CityId {
    session.board().cities.require(name).unwrap()
}

fn give(session: &mut Session, player: PlayerId, name: &str) -> CardId {
    let card = session.player_deck().iter().find(|c| c.name == name).unwrap().id;
    session.player_deck_mut().give(card, player);
    card
}

fn event_plays(session: &Session) -> usize {
    session
        .legal_actions()
        .iter()
        .filter(|a| matches!(a, Action::PlayEvent { .. }))
        .count()
}

/// Airlift moves any pawn anywhere, for free, even from another hand.
#[test]
fn test_airlift() {
    let mut session = table();
    let tokyo = city(&session, "Tokyo");
    let airlift = give(&mut session, P1, "Airlift");

    let play = Action::PlayEvent {
        card: airlift,
        play: EventPlay::Airlift { pawn: P0, to: tokyo },
    };
    session.apply_action(&play).unwrap();

    assert_eq!(session.player(P0).location, tokyo);
    assert_eq!(session.current_turn().actions_remaining, 4);
    assert_eq!(session.player_deck().zone_of(airlift), Some(Zone::Discard));
    assert_eq!(event_plays(&session), 0);
}

/// Government Grant builds a station in any city without one.
#[test]
fn test_government_grant() {
    let mut session = table();
    let atlanta = city(&session, "Atlanta");
    let tokyo = city(&session, "Tokyo");
    let grant = give(&mut session, P0, "Government Grant");

    assert!(!session.is_legal(&Action::PlayEvent {
        card: grant,
        play: EventPlay::GovernmentGrant { city: atlanta },
    }));
    assert_eq!(event_plays(&session), 47);

    session
        .apply_action(&Action::PlayEvent {
            card: grant,
            play: EventPlay::GovernmentGrant { city: tokyo },
        })
        .unwrap();

    assert!(session.board().has_station(tokyo));
    assert_eq!(session.board().station_supply(), 4);
}

/// One Quiet Night skips the coming infection step.
#[test]
fn test_one_quiet_night() {
    let mut session = table();
    let quiet = give(&mut session, P0, "One Quiet Night");
    let play = Action::PlayEvent {
        card: quiet,
        play: EventPlay::OneQuietNight,
    };

    session.apply_action(&Action::Pass).unwrap();
    assert!(session.is_legal(&play));
    session.apply_action(&play).unwrap();
    assert!(session.current_turn().skip_infect);

    session.apply_action(&Action::DrawCards).unwrap();
    assert_eq!(session.phase(), Phase::Ending);
    assert!(!session.legal_actions().contains(&Action::InfectCities));

    session.apply_action(&Action::EndTurn).unwrap();
    assert!(!session.current_turn().skip_infect);
    let finished = session.turns().next().unwrap();
    assert!(finished.skip_infect && !finished.infected);
}

/// Resilient Population takes an infection card out of the game.
#[test]
fn test_resilient_population() {
    let mut session = table();
    let resilient = give(&mut session, P0, "Resilient Population");
    assert_eq!(event_plays(&session), 0);

    let target = session.infection_deck().find("Tokyo").unwrap();
    session.infection_deck_mut().discard(target);

    let play = Action::PlayEvent {
        card: resilient,
        play: EventPlay::ResilientPopulation { card: target },
    };
    session.apply_action(&play).unwrap();

    let infection = session.infection_deck();
    assert_eq!(infection.zone_of(target), Some(Zone::Removed));
    assert!(infection.discard_pile().is_empty());
    assert_eq!(infection.total(), 48);
}

/// Forecast accepts any order of the top six infection cards.
#[test]
fn test_forecast_reorders_top_cards() {
    let mut session = table();
    let forecast = give(&mut session, P0, "Forecast");

    let top: Vec<CardId> = session.infection_deck().draw_pile()[..6].to_vec();
    let reversed: Vec<CardId> = top.iter().rev().copied().collect();
    let play = Action::PlayEvent {
        card: forecast,
        play: EventPlay::Forecast {
            order: reversed.iter().copied().collect(),
        },
    };

    session.apply_action(&play).unwrap();

    assert_eq!(&session.infection_deck().draw_pile()[..6], reversed.as_slice());
    assert_eq!(session.infection_deck().remaining(), 48);
}

/// A Forecast order naming any other card is refused.
#[test]
fn test_forecast_rejects_foreign_cards() {
    let mut session = table();
    let forecast = give(&mut session, P0, "Forecast");

    let pile = session.infection_deck().draw_pile();
    let mut order: Vec<CardId> = pile[..5].to_vec();
    order.push(pile[6]);
    let play = Action::PlayEvent {
        card: forecast,
        play: EventPlay::Forecast {
            order: order.into_iter().collect(),
        },
    };

    assert!(matches!(session.apply_action(&play), Err(ActionError::Illegal(_))));
}

/// Events stay playable after the actions run out.
#[test]
fn test_events_offered_while_drawing() {
    let mut session = table();
    give(&mut session, P1, "Airlift");

    session.apply_action(&Action::Pass).unwrap();

    assert_eq!(session.phase(), Phase::Drawing);
    assert!(event_plays(&session) > 0);
}

/// Nobody plays events while a hand is over the limit.
#[test]
fn test_no_events_while_discarding() {
    let mut session = table();
    give(&mut session, P0, "Airlift");
    for name in ["Paris", "Milan", "Essen", "London", "Madrid", "Lima", "Tokyo"] {
        give(&mut session, P0, name);
    }

    assert_eq!(session.phase(), Phase::Discarding(P0));
    assert_eq!(event_plays(&session), 0);
    assert_eq!(session.legal_actions().len(), 8);
}
