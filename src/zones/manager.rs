//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` is the single source of truth for where each card of a
//! deck is. It supports:
//! - Ordered zones with explicit position control (index 0 is the top of a
//!   pile, the front of the discard pile, the newest card of a hand)
//! - Card lookup by id
//! - Whole-zone moves that keep order (used by epidemic intensify)
//!
//! Cards only ever move, they are never dropped, so `total_cards` is fixed
//! once a deck is built.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;

/// Every place a card can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Face-down draw pile.
    Draw,
    /// Face-up discard pile.
    Discard,
    /// A player's hand.
    Hand(PlayerId),
    /// A role's saved-card slot (Contingency Planner).
    Saved(PlayerId),
    /// Drawn and face up, waiting to be resolved (infection draws, epidemics).
    Revealed,
    /// Out of the game for good.
    Removed,
}

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Index 0: top of a pile, front of a hand.
    Top,
    /// Last index.
    Bottom,
    /// Insert at specific index, clamped to the zone length.
    Index(usize),
}

/// Manages card locations across zones.
///
/// ## Usage
///
/// ```
/// use pandemic_rules::cards::CardId;
/// use pandemic_rules::zones::{Zone, ZoneManager, ZonePosition};
///
/// let mut manager = ZoneManager::new();
/// manager.add(CardId::new(10), Zone::Draw, ZonePosition::Bottom);
/// manager.add(CardId::new(11), Zone::Draw, ZonePosition::Bottom);
///
/// let drawn = manager.move_top(Zone::Draw, Zone::Discard, ZonePosition::Top);
/// assert_eq!(drawn, Some(CardId::new(10)));
/// assert_eq!(manager.cards(Zone::Discard), &[CardId::new(10)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneManager {
    /// Card locations: card -> zone
    locations: FxHashMap<CardId, Zone>,

    /// Card order per zone.
    zone_order: FxHashMap<Zone, Vec<CardId>>,
}

impl ZoneManager {
    /// Create a new empty zone manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(order: &mut Vec<CardId>, card: CardId, position: ZonePosition) {
        match position {
            ZonePosition::Top => order.insert(0, card),
            ZonePosition::Bottom => order.push(card),
            ZonePosition::Index(i) => order.insert(i.min(order.len()), card),
        }
    }

    /// Start tracking a new card.
    ///
    /// Panics if the card is already tracked: a card has exactly one home.
    pub fn add(&mut self, card: CardId, zone: Zone, position: ZonePosition) {
        if self.locations.contains_key(&card) {
            panic!("{} already tracked in {:?}", card, self.locations[&card]);
        }

        self.locations.insert(card, zone);
        Self::insert(self.zone_order.entry(zone).or_default(), card, position);
    }

    /// Move a card to another zone (or another position in the same zone).
    ///
    /// Returns the old zone, or `None` if the card isn't tracked.
    pub fn move_to(&mut self, card: CardId, zone: Zone, position: ZonePosition) -> Option<Zone> {
        let old_zone = self.locations.get(&card).copied()?;

        if let Some(order) = self.zone_order.get_mut(&old_zone) {
            order.retain(|&c| c != card);
        }

        self.locations.insert(card, zone);
        Self::insert(self.zone_order.entry(zone).or_default(), card, position);

        Some(old_zone)
    }

    /// Move the top card of `from` into `to`.
    pub fn move_top(&mut self, from: Zone, to: Zone, position: ZonePosition) -> Option<CardId> {
        let card = self.top(from)?;
        self.move_to(card, to, position);
        Some(card)
    }

    /// Move the bottom card of `from` into `to`.
    pub fn move_bottom(&mut self, from: Zone, to: Zone, position: ZonePosition) -> Option<CardId> {
        let card = self.bottom(from)?;
        self.move_to(card, to, position);
        Some(card)
    }

    /// Put every card of `from` on top of `to`, keeping `from`'s order.
    pub fn stack_onto(&mut self, from: Zone, to: Zone) {
        let moved = self.zone_order.remove(&from).unwrap_or_default();
        for &card in &moved {
            self.locations.insert(card, to);
        }

        let target = self.zone_order.entry(to).or_default();
        let rest = std::mem::take(target);
        *target = moved;
        target.extend(rest);
    }

    /// Replace the order of a zone with a permutation of its current cards.
    ///
    /// Returns false (and changes nothing) if `order` is not a permutation.
    pub fn set_order(&mut self, zone: Zone, order: Vec<CardId>) -> bool {
        let current = self.cards(zone);
        if current.len() != order.len() || !order.iter().all(|c| current.contains(c)) {
            return false;
        }

        self.zone_order.insert(zone, order);
        true
    }

    /// Rearrange the top `order.len()` cards of a zone.
    ///
    /// Returns false (and changes nothing) unless `order` is a permutation
    /// of exactly those cards.
    pub fn reorder_top(&mut self, zone: Zone, order: &[CardId]) -> bool {
        let current = self.cards(zone);
        if order.len() > current.len() {
            return false;
        }

        let top = &current[..order.len()];
        let mut seen = top.to_vec();
        for card in order {
            match seen.iter().position(|c| c == card) {
                Some(i) => {
                    seen.swap_remove(i);
                }
                None => return false,
            }
        }

        let mut reordered = order.to_vec();
        reordered.extend_from_slice(&current[order.len()..]);
        self.zone_order.insert(zone, reordered);
        true
    }

    /// Get the zone a card is in.
    #[must_use]
    pub fn zone_of(&self, card: CardId) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in(&self, card: CardId, zone: Zone) -> bool {
        self.locations.get(&card) == Some(&zone)
    }

    /// Cards in a zone, top/front first.
    #[must_use]
    pub fn cards(&self, zone: Zone) -> &[CardId] {
        self.zone_order.get(&zone).map_or(&[], |v| v.as_slice())
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn len(&self, zone: Zone) -> usize {
        self.cards(zone).len()
    }

    /// Top card of a zone.
    #[must_use]
    pub fn top(&self, zone: Zone) -> Option<CardId> {
        self.cards(zone).first().copied()
    }

    /// Bottom card of a zone.
    #[must_use]
    pub fn bottom(&self, zone: Zone) -> Option<CardId> {
        self.cards(zone).last().copied()
    }

    /// Shuffle a zone.
    pub fn shuffle(&mut self, zone: Zone, rng: &mut GameRng) {
        if let Some(order) = self.zone_order.get_mut(&zone) {
            rng.shuffle(order);
        }
    }

    /// Total number of cards tracked.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }
}
