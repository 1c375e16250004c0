//! Property tests over random seeds and random play.
//!
//! Whatever the seed and whatever offered actions are chosen, cubes and
//! cards are conserved and every cascade terminates.

use proptest::prelude::*;

use pandemic_rules::board::Color;
use pandemic_rules::cards::Role;
use pandemic_rules::core::PlayerId;
use pandemic_rules::rules::RulesEngine;
use pandemic_rules::session::{Session, SessionBuilder};
use pandemic_rules::zones::Zone;

fn assert_conserved(session: &Session) {
    for color in Color::ALL {
        assert_eq!(session.board().cube_total(color), 24, "{color} cubes");
        for city in session.board().cities.iter() {
            assert!(city.cubes(color) <= 3, "{} holds {} {color}", city.name, city.cubes(color));
        }
    }

    let players = session.players().len();
    for deck in [session.player_deck(), session.infection_deck()] {
        let zones = deck.zones();
        let mut placed = zones.len(Zone::Draw) + zones.len(Zone::Discard);
        placed += zones.len(Zone::Revealed) + zones.len(Zone::Removed);
        for player in PlayerId::all(players) {
            placed += zones.len(Zone::Hand(player)) + zones.len(Zone::Saved(player));
        }
        assert_eq!(placed, deck.total());
    }
    assert_eq!(session.infection_deck().total(), 48);
    assert!(session.board().outbreaks() <= 8);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Random offered actions never break conservation.
    #[test]
    fn prop_random_play_conserves(seed in any::<u64>(), players in 2usize..=4, choices in prop::collection::vec(any::<prop::sample::Index>(), 120)) {
        let mut session = SessionBuilder::new().player_count(players).seed(seed).build().unwrap();
        assert_conserved(&session);

        for choice in choices {
            if session.is_terminal().is_some() {
                break;
            }
            let offered = session.legal_actions();
            prop_assert!(!offered.is_empty());
            let action = offered[choice.index(offered.len())].clone();
            prop_assert!(session.apply_action(&action).is_ok());
            assert_conserved(&session);
        }
    }

    /// Saturating any set of cities terminates and keeps every city at or
    /// below three cubes.
    #[test]
    fn prop_cascades_terminate(seed in any::<u64>(), targets in prop::collection::vec(0u8..48, 1..40)) {
        let mut session = SessionBuilder::new()
            .roles(vec![Role::Medic, Role::Scientist])
            .seed(seed)
            .without_initial_infection()
            .build()
            .unwrap();

        for target in targets {
            let city = session.board().cities.ids().nth(usize::from(target)).unwrap();
            if session.infect(city, 3, None).is_err() {
                break;
            }
        }

        assert_conserved(&session);
    }

    /// Setup is a pure function of the seed.
    #[test]
    fn prop_setup_is_deterministic(seed in any::<u64>(), players in 2usize..=4) {
        let a = SessionBuilder::new().player_count(players).seed(seed).build().unwrap();
        let b = SessionBuilder::new().player_count(players).seed(seed).build().unwrap();
        prop_assert_eq!(a, b);
    }
}
