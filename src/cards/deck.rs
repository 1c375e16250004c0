//! Decks: a card arena plus a `ZoneManager` saying where each card is.
//!
//! ## Kinds
//!
//! - Role: one card per role. Drawn once per player at setup.
//! - Infection: one city card per city.
//! - Player: one city card per city plus one card per event, with epidemic
//!   cards synthesized and seeded in by [`Deck::deal`].
//!
//! Every deck is shuffled right after it is built.
//!
//! ## Conservation
//!
//! Cards move between zones and are never dropped. After `build` the only
//! way the card count changes is `deal` adding the epidemic cards.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, CardKind};
use super::events::EventKind;
use super::roles::Role;
use crate::board::{CityGraph, Color};
use crate::core::config::{cards_per_player, Difficulty};
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::error::{ConfigError, Defeat, Result};
use crate::zones::{Zone, ZoneManager, ZonePosition};

/// Minimum player deck size for a draw to be allowed.
const MIN_PLAYER_DRAW: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    Role,
    Infection,
    Player,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    kind: DeckKind,
    /// Arena; `CardId` is the index.
    cards: Vec<Card>,
    zones: ZoneManager,
}

impl Deck {
    /// Build and shuffle a deck of the given kind.
    #[must_use]
    pub fn build(kind: DeckKind, graph: &CityGraph, rng: &mut GameRng) -> Self {
        let mut deck = Self {
            kind,
            cards: Vec::new(),
            zones: ZoneManager::new(),
        };

        match kind {
            DeckKind::Role => {
                for role in Role::ALL {
                    deck.push(role.name(), CardKind::Role(role), Zone::Draw);
                }
            }
            DeckKind::Infection => {
                for city in graph.iter() {
                    deck.push(city.name.as_str(), CardKind::City(city.id), Zone::Draw);
                }
            }
            DeckKind::Player => {
                for city in graph.iter() {
                    deck.push(city.name.as_str(), CardKind::City(city.id), Zone::Draw);
                }
                for event in EventKind::ALL {
                    deck.push(event.name(), CardKind::Event(event), Zone::Draw);
                }
            }
        }

        deck.shuffle(rng);
        deck
    }

    fn push(&mut self, name: &str, kind: CardKind, zone: Zone) -> CardId {
        let id = CardId::new(self.cards.len() as u16);
        self.cards.push(Card::new(id, name, kind));
        self.zones.add(id, zone, ZonePosition::Bottom);
        id
    }

    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }

    /// Every card of the deck, wherever it is.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    /// Draw pile, top first.
    #[must_use]
    pub fn draw_pile(&self) -> &[CardId] {
        self.zones.cards(Zone::Draw)
    }

    /// Discard pile, most recent first.
    #[must_use]
    pub fn discard_pile(&self) -> &[CardId] {
        self.zones.cards(Zone::Discard)
    }

    /// A player's hand, newest first.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[CardId] {
        self.zones.cards(Zone::Hand(player))
    }

    /// A player's saved-card slot.
    #[must_use]
    pub fn saved(&self, player: PlayerId) -> &[CardId] {
        self.zones.cards(Zone::Saved(player))
    }

    /// Cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.zones.len(Zone::Draw)
    }

    /// Cards in the deck, in any zone.
    #[must_use]
    pub fn total(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn zone_of(&self, card: CardId) -> Option<Zone> {
        self.zones.zone_of(card)
    }

    /// Player holding a card in hand or saved slot.
    #[must_use]
    pub fn holder(&self, card: CardId) -> Option<PlayerId> {
        match self.zones.zone_of(card)? {
            Zone::Hand(player) | Zone::Saved(player) => Some(player),
            _ => None,
        }
    }

    /// Color of the city a card names, for city cards.
    #[must_use]
    pub fn city_color(&self, card: CardId, graph: &CityGraph) -> Option<Color> {
        self.card(card).city().map(|city| graph.get(city).color)
    }

    /// Shuffle the draw pile.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        self.zones.shuffle(Zone::Draw, rng);
    }

    /// Deal opening hands round-robin and seed the epidemics.
    ///
    /// The undealt cards are split into `difficulty.epidemics()` contiguous
    /// groups whose sizes differ by at most one (earlier groups take the
    /// remainder). Each group gets one epidemic, is shuffled on its own, and
    /// the groups are stacked back in order.
    pub fn deal(&mut self, player_count: usize, difficulty: Difficulty, rng: &mut GameRng) -> Result<()> {
        let per_player = cards_per_player(player_count).ok_or(ConfigError::UnsupportedPlayerCount(player_count))?;

        self.shuffle(rng);
        for _ in 0..per_player {
            for player in PlayerId::all(player_count) {
                self.zones.move_top(Zone::Draw, Zone::Hand(player), ZonePosition::Top);
            }
        }

        let undealt = self.draw_pile().to_vec();
        let groups = difficulty.epidemics();
        let size = undealt.len() / groups;
        let extra = undealt.len() % groups;

        let mut order = Vec::with_capacity(undealt.len() + groups);
        let mut start = 0;
        for group in 0..groups {
            let len = size + usize::from(group < extra);
            let mut slice = undealt[start..start + len].to_vec();
            start += len;

            slice.push(self.push("Epidemic", CardKind::Epidemic, Zone::Draw));
            rng.shuffle(&mut slice);
            order.extend(slice);
        }

        if !self.zones.set_order(Zone::Draw, order) {
            return Err(ConfigError::DeckSeeding);
        }
        log::debug!("dealt {} cards each, {} epidemics seeded", per_player, groups);
        Ok(())
    }

    /// Take the top card of the draw pile and reveal it.
    ///
    /// The player deck refuses to draw once fewer than two cards remain,
    /// which loses the game. Other decks return `None` when empty.
    pub fn draw(&mut self) -> std::result::Result<Option<CardId>, Defeat> {
        if self.kind == DeckKind::Player && self.remaining() < MIN_PLAYER_DRAW {
            return Err(Defeat::PlayerDeckExhausted);
        }
        Ok(self.zones.move_top(Zone::Draw, Zone::Revealed, ZonePosition::Bottom))
    }

    /// Take the bottom card of the draw pile and reveal it.
    pub fn draw_bottom(&mut self) -> Option<CardId> {
        self.zones.move_bottom(Zone::Draw, Zone::Revealed, ZonePosition::Bottom)
    }

    /// Put a card into a player's hand as the newest card.
    pub fn give(&mut self, card: CardId, player: PlayerId) {
        self.zones.move_to(card, Zone::Hand(player), ZonePosition::Top);
    }

    /// Put a card in a player's saved slot.
    pub fn save(&mut self, card: CardId, player: PlayerId) {
        self.zones.move_to(card, Zone::Saved(player), ZonePosition::Top);
    }

    /// Move a card from wherever it is to the front of the discard pile.
    pub fn discard(&mut self, card: CardId) {
        self.zones.move_to(card, Zone::Discard, ZonePosition::Top);
    }

    /// Take a card out of the game.
    pub fn remove(&mut self, card: CardId) {
        self.zones.move_to(card, Zone::Removed, ZonePosition::Top);
    }

    /// Put the whole discard pile on top of the draw pile, unshuffled.
    pub fn intensify(&mut self) {
        self.zones.stack_onto(Zone::Discard, Zone::Draw);
    }

    /// Put the top cards of the draw pile in a new order.
    ///
    /// Returns false unless `order` is a permutation of exactly those cards.
    pub fn reorder_top(&mut self, order: &[CardId]) -> bool {
        self.zones.reorder_top(Zone::Draw, order)
    }

    /// Locate a card by name in the draw pile.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<CardId> {
        self.draw_pile()
            .iter()
            .copied()
            .find(|&id| self.card(id).name == name)
    }

    /// Locate a card by name in the draw pile and reveal it, leaving the
    /// rest of the pile in order.
    pub fn pull(&mut self, name: &str) -> Option<CardId> {
        let card = self.find(name)?;
        self.zones.move_to(card, Zone::Revealed, ZonePosition::Bottom);
        Some(card)
    }
}
