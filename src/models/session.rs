//! Session model
//!
//! One independent game: the board's mutable state, the seated players, turn
//! order, outbreak track and the session's own random source.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use super::actor::{Actor, ActorProfile};
use super::constants::{Category, INFECTION_RATE, MAX_OUTBREAKS, MAX_PLAYERS, STARTING_CITY};
use super::draw::LocationDraw;
use super::errors::{GameError, GameResult};
use super::ledger::DiseaseLedger;
use super::snapshot::{CityView, PlayerView, SessionSnapshot};
use super::turn::TurnOrder;
use super::world_map::{LocationId, WorldMap};

pub struct Session {
    id: String,
    map: Arc<WorldMap>,
    ledger: DiseaseLedger,
    actors: Vec<Actor>,
    turn: TurnOrder,
    outbreaks: u8,
    /// Cities with a station, in build order.
    stations: Vec<LocationId>,
    infection_rate: usize,
    last_activity: Instant,
    draw: Box<dyn LocationDraw>,
}

impl Session {
    /// Open a lobby seated with its host. The host and every later player
    /// start in the starting city, which also holds the first station.
    pub fn new(
        id: &str,
        map: Arc<WorldMap>,
        host: ActorProfile,
        draw: Box<dyn LocationDraw>,
    ) -> GameResult<Self> {
        if map.is_empty() {
            return Err(GameError::InvalidMap("board has no cities".to_string()));
        }
        let mut ledger = DiseaseLedger::new(map.len());
        let start = map.location(STARTING_CITY).unwrap_or(0);
        ledger.set_station(start);

        Ok(Session {
            id: id.to_string(),
            ledger,
            actors: vec![Actor::new(host, start)],
            turn: TurnOrder::default(),
            outbreaks: 0,
            stations: vec![start],
            infection_rate: INFECTION_RATE,
            last_activity: Instant::now(),
            draw,
            map,
        })
    }

    // ========== Accessor Methods ==========

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    /// Shared handle to the board, for callers that also need the ledger mutably.
    pub fn map_handle(&self) -> Arc<WorldMap> {
        Arc::clone(&self.map)
    }

    pub fn ledger(&self) -> &DiseaseLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut DiseaseLedger {
        &mut self.ledger
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn actor(&self, index: usize) -> &Actor {
        &self.actors[index]
    }

    pub fn actor_mut(&mut self, index: usize) -> &mut Actor {
        &mut self.actors[index]
    }

    pub fn turn(&self) -> &TurnOrder {
        &self.turn
    }

    pub fn turn_mut(&mut self) -> &mut TurnOrder {
        &mut self.turn
    }

    pub fn outbreaks(&self) -> u8 {
        self.outbreaks
    }

    pub fn stations(&self) -> &[LocationId] {
        &self.stations
    }

    pub fn infection_rate(&self) -> usize {
        self.infection_rate
    }

    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }

    // ========== End Accessor Methods ==========

    /// Seat another player in the lobby.
    pub fn add_actor(&mut self, profile: ActorProfile) -> GameResult<()> {
        if self.turn.is_started() {
            return Err(GameError::SessionAlreadyStarted);
        }
        if self.actors.len() >= MAX_PLAYERS {
            return Err(GameError::SessionFull);
        }
        if self.actors.iter().any(|a| a.id == profile.id) {
            return Err(GameError::ActorAlreadyJoined(profile.id));
        }
        let start = self.map.location(STARTING_CITY).unwrap_or(0);
        self.actors.push(Actor::new(profile, start));
        Ok(())
    }

    pub fn actor_index(&self, actor_id: &str) -> GameResult<usize> {
        self.actors
            .iter()
            .position(|a| a.id == actor_id)
            .ok_or_else(|| GameError::ActorNotFound(actor_id.to_string()))
    }

    /// Uniform pick over every city on the board.
    pub fn draw_location(&mut self) -> LocationId {
        self.draw.pick(self.map.len())
    }

    /// Advance the outbreak track, saturating at the loss threshold.
    pub fn record_outbreaks(&mut self, count: u32) {
        let next = (self.outbreaks as u32 + count).min(MAX_OUTBREAKS as u32);
        self.outbreaks = next as u8;
    }

    pub fn add_station(&mut self, id: LocationId) {
        self.ledger.set_station(id);
        self.stations.push(id);
    }

    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let map = &self.map;
        let players = self
            .actors
            .iter()
            .map(|a| PlayerView {
                id: a.id.clone(),
                name: a.name.clone(),
                role: a.role,
                location: map.name_of(a.location).to_string(),
                cards: a.cards.clone(),
                actions: a.actions,
            })
            .collect();

        let cities = map
            .ids()
            .map(|id| {
                let state = self.ledger.city(id);
                let view = CityView {
                    color: map.category_of(id),
                    infections: Category::ALL
                        .iter()
                        .map(|&c| (c, state.cubes[c as usize]))
                        .collect(),
                    research_station: state.station,
                };
                (map.name_of(id).to_string(), view)
            })
            .collect();

        SessionSnapshot {
            game_id: self.id.clone(),
            started: self.turn.is_started(),
            players,
            current_player_index: self.turn.current(),
            diseases: Category::ALL
                .iter()
                .map(|&c| (c, *self.ledger.disease(c)))
                .collect(),
            infection_rate: self.infection_rate,
            outbreaks: self.outbreaks,
            research_stations: self
                .stations
                .iter()
                .map(|&id| map.name_of(id).to_string())
                .collect(),
            game_over: self.turn.is_over(),
            game_won: self.turn.is_won(),
            cities,
        }
    }
}

// Custom Debug that doesn't expose the random source
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("players", &self.actors.len())
            .field("turn", &self.turn)
            .field("outbreaks", &self.outbreaks)
            .finish_non_exhaustive()
    }
}
