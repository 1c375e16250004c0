//! Session construction and setup.

use im::Vector;
use rustc_hash::FxHashSet;

use super::state::Session;
use crate::board::{Board, CityGraph, CityTable};
use crate::cards::{CardKind, Deck, DeckKind, Role};
use crate::core::config::{
    cards_per_player, Difficulty, SessionConfig, INITIAL_INFECTION_GROUPS, INITIAL_INFECTION_GROUP_SIZE,
    STARTING_CITY,
};
use crate::core::player::{Player, PlayerId};
use crate::core::rng::GameRng;
use crate::error::{ConfigError, Defeat, Result};
use crate::rules::GameResult;
use crate::turn::Turn;

/// Builder for creating a `Session`.
///
/// ```
/// use pandemic_rules::core::Difficulty;
/// use pandemic_rules::session::SessionBuilder;
///
/// let session = SessionBuilder::new()
///     .player_count(3)
///     .difficulty(Difficulty::Medium)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(session.players().len(), 3);
/// assert_eq!(session.board().station_supply(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct SessionBuilder {
    config: SessionConfig,
    table: Option<CityTable>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            config: SessionConfig::new(2),
            table: None,
        }
    }
}

impl SessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a complete configuration.
    #[must_use]
    pub fn from_config(config: SessionConfig) -> Self {
        Self { config, table: None }
    }

    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    #[must_use]
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.config = self.config.with_difficulty(difficulty);
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Fix the role of each seat instead of dealing them.
    #[must_use]
    pub fn roles(mut self, roles: Vec<Role>) -> Self {
        self.config = self.config.with_roles(roles);
        self
    }

    #[must_use]
    pub fn names(mut self, names: Vec<String>) -> Self {
        self.config = self.config.with_names(names);
        self
    }

    /// Skip the nine-card opening infection (clean board).
    #[must_use]
    pub fn without_initial_infection(mut self) -> Self {
        self.config = self.config.without_initial_infection();
        self
    }

    /// Use a custom map instead of the built-in one.
    #[must_use]
    pub fn city_table(mut self, table: CityTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Validate, set up the table and start the first turn.
    pub fn build(self) -> Result<Session> {
        let config = self.config;
        let player_count = config.player_count;
        cards_per_player(player_count).ok_or(ConfigError::UnsupportedPlayerCount(player_count))?;
        check_roles(&config)?;

        let table = match self.table {
            Some(table) => table,
            None => CityTable::standard()?,
        };
        let graph = CityGraph::load(&table)?;
        let start = graph.require(STARTING_CITY)?;

        let rng = GameRng::new(config.seed);
        let mut role_deck = Deck::build(DeckKind::Role, &graph, &mut rng.for_context("roles"));
        let infection = Deck::build(DeckKind::Infection, &graph, &mut rng.for_context("infection"));
        let mut player_rng = rng.for_context("player");
        let mut player_deck = Deck::build(DeckKind::Player, &graph, &mut player_rng);

        let mut players = Vec::with_capacity(player_count);
        for seat in PlayerId::all(player_count) {
            let fixed = config.roles.as_ref().map(|roles| roles[seat.index()]);
            let role = assign_role(&mut role_deck, seat, fixed).ok_or(ConfigError::NotEnoughRoles {
                given: Role::ALL.len(),
                players: player_count,
            })?;
            players.push(Player::new(seat, config.name_for(seat.index()), start, role));
        }

        player_deck.deal(player_count, config.difficulty, &mut player_rng)?;

        let mut board = Board::new(graph);
        board.build_station(start);

        let mut session = Session {
            board,
            infection,
            player_deck,
            role_deck,
            players,
            turn: Turn::new(PlayerId::new(0), 1),
            turns: Vector::new(),
            history: Vector::new(),
            infection_rate_index: 0,
            result: None,
            config,
        };

        if session.config.initial_infection {
            if let Err(defeat) = initial_infection(&mut session) {
                session.finish(GameResult::Defeat(defeat));
            }
        }

        log::info!(
            "session started: {} players, {:?}, seed {}",
            player_count,
            session.config.difficulty,
            session.config.seed
        );
        Ok(session)
    }
}

fn check_roles(config: &SessionConfig) -> Result<()> {
    let Some(roles) = &config.roles else {
        return Ok(());
    };

    if roles.len() < config.player_count {
        return Err(ConfigError::NotEnoughRoles {
            given: roles.len(),
            players: config.player_count,
        });
    }

    let mut seen = FxHashSet::default();
    for role in roles.iter().take(config.player_count) {
        if !seen.insert(*role) {
            return Err(ConfigError::DuplicateRole(role.name().to_string()));
        }
    }
    Ok(())
}

/// Move a role card into the seat's hand of the role deck. With no fixed
/// role the top of the shuffled role deck is used.
fn assign_role(role_deck: &mut Deck, seat: PlayerId, fixed: Option<Role>) -> Option<Role> {
    let card = match fixed {
        Some(role) => role_deck.pull(role.name())?,
        None => role_deck.draw().ok().flatten()?,
    };
    role_deck.give(card, seat);

    match role_deck.card(card).kind {
        CardKind::Role(role) => Some(role),
        _ => None,
    }
}

/// Nine infection cards: three cities get 1 cube, three get 2, three get 3.
fn initial_infection(session: &mut Session) -> std::result::Result<(), Defeat> {
    for &cubes in &INITIAL_INFECTION_GROUPS {
        for _ in 0..INITIAL_INFECTION_GROUP_SIZE {
            let Some(card) = session.infection.draw()? else {
                return Ok(());
            };
            if let Some(city) = session.infection.card(card).city() {
                session.infect(city, cubes, None)?;
            }
            session.infection.discard(card);
        }
    }
    Ok(())
}
