//! Legal action enumeration.
//!
//! [`legal_actions`] is a pure function of the session. Nothing is cached:
//! every call reads the current board, hands and turn, so the offered set
//! can never go stale after a mutation.
//!
//! ## What is offered
//!
//! - `Discarding`: only discards from the overflowing hand.
//! - `Acting`: movement, station building, treating, sharing, curing, role
//!   actions and `Pass`.
//! - `Drawing` / `Infecting` / `Ending`: the single step action.
//!
//! Outside `Discarding`, every event card held by any player is offered too.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::state::Phase;
use crate::board::{CityId, Color};
use crate::cards::{CardId, Capability, EventKind};
use crate::core::action::{Action, EventPlay};
use crate::core::config::{CURE_CARD_COUNT, FORECAST_DEPTH, REDUCED_CURE_CARD_COUNT};
use crate::core::player::{Player, PlayerId};
use crate::session::Session;

/// Every action the session accepts right now.
#[must_use]
pub fn legal_actions(session: &Session) -> Vec<Action> {
    let mut actions = Vec::new();
    if session.is_over() {
        return actions;
    }

    match session.phase() {
        Phase::Discarding(player) => {
            actions.extend(session.hand(player).iter().map(|&card| Action::Discard { player, card }));
            return actions;
        }
        Phase::Acting => acting(session, &mut actions),
        Phase::Drawing => actions.push(Action::DrawCards),
        Phase::Infecting => actions.push(Action::InfectCities),
        Phase::Ending => actions.push(Action::EndTurn),
    }

    events(session, &mut actions);
    actions
}

/// Is `action` one of the offered actions?
///
/// Forecast is offered with the current top-of-deck order; any permutation
/// of those cards is accepted.
#[must_use]
pub fn is_offered(session: &Session, action: &Action) -> bool {
    let offered = legal_actions(session);
    match action {
        Action::PlayEvent {
            card,
            play: EventPlay::Forecast { order },
        } => offered.iter().any(|candidate| match candidate {
            Action::PlayEvent {
                card: offered_card,
                play: EventPlay::Forecast { order: current },
            } => offered_card == card && is_permutation(current, order),
            _ => false,
        }),
        _ => offered.contains(action),
    }
}

fn is_permutation(a: &[CardId], b: &[CardId]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// City cards in a player's hand, newest first.
fn city_cards(session: &Session, player: PlayerId) -> Vec<(CardId, CityId)> {
    let deck = session.player_deck();
    deck.hand(player)
        .iter()
        .filter_map(|&card| deck.card(card).city().map(|city| (card, city)))
        .collect()
}

fn acting(session: &Session, out: &mut Vec<Action>) {
    let active = session.player(session.current_turn().player);
    let hand = city_cards(session, active.id);

    movement(session, active, &hand, out);
    operations_flight(session, active, &hand, out);
    build_station(session, active, &hand, out);
    treat(session, active, out);
    share(session, active, out);
    cure(session, active, &hand, out);
    retrieve_event(session, active, out);
    out.push(Action::Pass);
}

fn movement(session: &Session, active: &Player, hand: &[(CardId, CityId)], out: &mut Vec<Action>) {
    let cities = &session.board().cities;
    let dispatcher = active.can(Capability::MoveOthers);
    let pawns: Vec<&Player> = if dispatcher {
        session.players().iter().collect()
    } else {
        vec![active]
    };

    for pawn in pawns {
        let here = pawn.location;

        for &to in cities.adjacent(here) {
            out.push(Action::Drive { pawn: pawn.id, to });
        }

        for &(card, city) in hand {
            if city != here {
                out.push(Action::DirectFlight { pawn: pawn.id, card });
            }
        }

        if let Some(&(card, _)) = hand.iter().find(|&&(_, city)| city == here) {
            for to in cities.ids().filter(|&to| to != here) {
                out.push(Action::CharterFlight { pawn: pawn.id, card, to });
            }
        }

        if session.board().has_station(here) {
            for to in cities.stations().filter(|&to| to != here) {
                out.push(Action::ShuttleFlight { pawn: pawn.id, to });
            }
        }

        if dispatcher {
            let mut destinations = FxHashSet::default();
            for other in session.players() {
                if other.location != here && destinations.insert(other.location) {
                    out.push(Action::Convene { pawn: pawn.id, to: other.location });
                }
            }
        }
    }
}

fn operations_flight(session: &Session, active: &Player, hand: &[(CardId, CityId)], out: &mut Vec<Action>) {
    let here = active.location;
    if !active.can(Capability::OperationsFlight)
        || session.current_turn().operations_flight_used
        || !session.board().has_station(here)
    {
        return;
    }

    for &(card, _) in hand {
        for to in session.board().cities.ids().filter(|&to| to != here) {
            out.push(Action::OperationsFlight { card, to });
        }
    }
}

fn build_station(session: &Session, active: &Player, hand: &[(CardId, CityId)], out: &mut Vec<Action>) {
    let here = active.location;
    if !session.board().can_build_station(here) {
        return;
    }

    if active.can(Capability::FreeStationBuild) {
        out.push(Action::BuildStation { card: None });
    } else if let Some(&(card, _)) = hand.iter().find(|&&(_, city)| city == here) {
        out.push(Action::BuildStation { card: Some(card) });
    }
}

fn treat(session: &Session, active: &Player, out: &mut Vec<Action>) {
    let city = session.board().cities.get(active.location);
    for color in Color::ALL {
        if city.cubes(color) > 0 {
            out.push(Action::Treat { color });
        }
    }
}

/// Give or take with every co-located player.
///
/// Normally only the card of the shared city changes hands. A giver who can
/// share any card widens that to every city card they hold. The same
/// transfer can qualify under both rules; it is offered once.
fn share(session: &Session, active: &Player, out: &mut Vec<Action>) {
    let here = active.location;
    let mut seen = FxHashSet::default();

    for other in session.players() {
        if other.id == active.id || other.location != here {
            continue;
        }

        for (giver, receiver) in [(active, other), (other, active)] {
            for (card, city) in city_cards(session, giver.id) {
                if city != here && !giver.can(Capability::ShareAnyCard) {
                    continue;
                }
                let action = Action::ShareCard {
                    card,
                    from: giver.id,
                    to: receiver.id,
                };
                if seen.insert(action.clone()) {
                    out.push(action);
                }
            }
        }
    }
}

fn cure(session: &Session, active: &Player, hand: &[(CardId, CityId)], out: &mut Vec<Action>) {
    let board = session.board();
    if !board.has_station(active.location) {
        return;
    }

    let needed = if active.can(Capability::ReducedCure) {
        REDUCED_CURE_CARD_COUNT
    } else {
        CURE_CARD_COUNT
    };

    for color in Color::ALL {
        if board.diseases.is_cured(color) {
            continue;
        }

        let matching: Vec<CardId> = hand
            .iter()
            .filter(|&&(_, city)| board.cities.get(city).color == color)
            .map(|&(card, _)| card)
            .collect();

        for cards in combinations(&matching, needed) {
            out.push(Action::DiscoverCure { color, cards });
        }
    }
}

fn retrieve_event(session: &Session, active: &Player, out: &mut Vec<Action>) {
    let deck = session.player_deck();
    if !active.can(Capability::SaveEvent) || !deck.saved(active.id).is_empty() {
        return;
    }

    for &card in deck.discard_pile() {
        if deck.card(card).event().is_some() {
            out.push(Action::RetrieveEvent { card });
        }
    }
}

fn events(session: &Session, out: &mut Vec<Action>) {
    let deck = session.player_deck();
    for player in session.players() {
        for &card in deck.hand(player.id).iter().chain(deck.saved(player.id)) {
            if let Some(event) = deck.card(card).event() {
                event_plays(session, card, event, out);
            }
        }
    }
}

fn event_plays(session: &Session, card: CardId, event: EventKind, out: &mut Vec<Action>) {
    let board = session.board();

    match event {
        EventKind::Airlift => {
            for pawn in session.players() {
                for to in board.cities.ids().filter(|&to| to != pawn.location) {
                    out.push(Action::PlayEvent {
                        card,
                        play: EventPlay::Airlift { pawn: pawn.id, to },
                    });
                }
            }
        }
        EventKind::GovernmentGrant => {
            for city in board.cities.ids().filter(|&city| board.can_build_station(city)) {
                out.push(Action::PlayEvent {
                    card,
                    play: EventPlay::GovernmentGrant { city },
                });
            }
        }
        EventKind::OneQuietNight => {
            if session.current_turn().infection_pending() {
                out.push(Action::PlayEvent {
                    card,
                    play: EventPlay::OneQuietNight,
                });
            }
        }
        EventKind::ResilientPopulation => {
            for &target in session.infection_deck().discard_pile() {
                out.push(Action::PlayEvent {
                    card,
                    play: EventPlay::ResilientPopulation { card: target },
                });
            }
        }
        EventKind::Forecast => {
            let pile = session.infection_deck().draw_pile();
            let top = &pile[..pile.len().min(FORECAST_DEPTH)];
            if !top.is_empty() {
                out.push(Action::PlayEvent {
                    card,
                    play: EventPlay::Forecast {
                        order: top.iter().copied().collect(),
                    },
                });
            }
        }
    }
}

/// Every `k`-card subset of `items`, keeping their relative order.
fn combinations(items: &[CardId], k: usize) -> Vec<SmallVec<[CardId; CURE_CARD_COUNT]>> {
    fn choose(
        items: &[CardId],
        k: usize,
        picked: &mut SmallVec<[CardId; CURE_CARD_COUNT]>,
        out: &mut Vec<SmallVec<[CardId; CURE_CARD_COUNT]>>,
    ) {
        let needed = k - picked.len();
        if needed == 0 {
            out.push(picked.clone());
            return;
        }
        if items.len() < needed {
            return;
        }

        for i in 0..=items.len() - needed {
            picked.push(items[i]);
            choose(&items[i + 1..], k, picked, out);
            picked.pop();
        }
    }

    let mut out = Vec::new();
    choose(items, k, &mut SmallVec::new(), &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(ids: &[u16]) -> Vec<CardId> {
        ids.iter().map(|&id| CardId::new(id)).collect()
    }

    #[test]
    fn test_combinations_count() {
        let seven = cards(&[0, 1, 2, 3, 4, 5, 6]);

        assert_eq!(combinations(&seven, 5).len(), 21);
        assert_eq!(combinations(&seven, 4).len(), 35);
        assert_eq!(combinations(&seven[..5], 5).len(), 1);
        assert!(combinations(&seven[..3], 5).is_empty());
    }

    #[test]
    fn test_combinations_keep_hand_order() {
        let hand = cards(&[9, 4, 7, 1, 3]);
        let combos = combinations(&hand, 4);

        assert_eq!(combos[0].as_slice(), &cards(&[9, 4, 7, 1])[..]);
        assert!(combos.iter().all(|c| c.len() == 4));
        let distinct: FxHashSet<_> = combos.iter().cloned().collect();
        assert_eq!(distinct.len(), 5);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&cards(&[1, 2, 3]), &cards(&[3, 1, 2])));
        assert!(!is_permutation(&cards(&[1, 2, 3]), &cards(&[1, 2])));
        assert!(!is_permutation(&cards(&[1, 2, 3]), &cards(&[1, 2, 2])));
    }
}
