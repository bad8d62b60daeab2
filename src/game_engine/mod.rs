//! Game state machine
//!
//! The GameEngine owns one Session and is the only way its state changes. It
//! runs the checks every action shares, hands the action to its service and
//! then settles victory and defeat.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::actor::ActorProfile;
use crate::models::constants::{Category, MAX_OUTBREAKS};
use crate::models::errors::{GameError, GameResult};
use crate::models::session::Session;
use crate::models::snapshot::SessionSnapshot;
use crate::services::actions;
use crate::services::cards::CardRules;
use crate::services::setup::seed_infections;

/// A player intent, already addressed to a game and a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Move { to: String },
    Treat { category: Category },
    BuildStation,
    DiscoverCure { category: Category },
    EndTurn,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Move { .. } => "move",
            Action::Treat { .. } => "treat",
            Action::BuildStation => "build station",
            Action::DiscoverCure { .. } => "discover cure",
            Action::EndTurn => "end turn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Lobby,
    Playing,
    Victory,
    Defeat,
}

/// Core game engine that applies actions to one session
pub struct GameEngine {
    session: Session,
    cards: Arc<dyn CardRules>,
}

impl GameEngine {
    pub fn new(session: Session, cards: Arc<dyn CardRules>) -> Self {
        Self { session, cards }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn state(&self) -> GameState {
        let turn = self.session.turn();
        if !turn.is_started() {
            GameState::Lobby
        } else if turn.is_won() {
            GameState::Victory
        } else if turn.is_over() {
            GameState::Defeat
        } else {
            GameState::Playing
        }
    }

    /// Seat a player in the lobby.
    pub fn join(&mut self, profile: ActorProfile) -> GameResult<SessionSnapshot> {
        let id = profile.id.clone();
        self.session.add_actor(profile)?;
        self.session.touch();
        log::info!("game {}: {} joined", self.session.id(), id);
        Ok(self.snapshot())
    }

    /// Leave the lobby: first player acts, opening infections are placed.
    pub fn start(&mut self) -> GameResult<SessionSnapshot> {
        let seated = self.session.actors().len();
        self.session.turn_mut().start(seated)?;
        seed_infections(&mut self.session);
        self.check_game_over();
        self.session.touch();
        log::info!("game {}: started with {} players", self.session.id(), seated);
        Ok(self.snapshot())
    }

    /// Validate and apply one action for `actor_id`.
    ///
    /// Nothing is mutated unless every check passes.
    pub fn apply(&mut self, actor_id: &str, action: Action) -> GameResult<SessionSnapshot> {
        let actor = self.session.actor_index(actor_id)?;
        let turn = self.session.turn();
        if !turn.is_started() {
            return Err(GameError::SessionNotStarted);
        }
        if turn.is_over() {
            return Err(GameError::GameOver);
        }
        if turn.current() != actor {
            return Err(GameError::NotYourTurn);
        }
        if action != Action::EndTurn && self.session.actor(actor).actions == 0 {
            return Err(GameError::NoActionsRemaining);
        }

        log::debug!("game {}: {} -> {}", self.session.id(), actor_id, action.name());
        match action {
            Action::Move { to } => actions::move_actor(&mut self.session, actor, &to)?,
            Action::Treat { category } => {
                actions::treat_disease(&mut self.session, actor, category)?
            }
            Action::BuildStation => actions::build_station(&mut self.session, actor)?,
            Action::DiscoverCure { category } => {
                actions::discover_cure(&mut self.session, actor, category, self.cards.as_ref())?
            }
            Action::EndTurn => actions::end_turn(&mut self.session, actor),
        }

        self.check_game_over();
        self.session.touch();
        Ok(self.snapshot())
    }

    /// Checks for game over conditions and updates the game state
    ///
    /// # Returns
    ///
    /// * `Some(GameState)` if the game has ended (Victory or Defeat)
    /// * `None` if the game is still in progress or still in the lobby
    ///
    /// # Victory Conditions
    ///
    /// Every disease is cured.
    ///
    /// # Defeat Conditions
    ///
    /// The outbreak track reaches its maximum.
    pub fn check_game_over(&mut self) -> Option<GameState> {
        match self.state() {
            GameState::Lobby => return None,
            GameState::Victory | GameState::Defeat => return Some(self.state()),
            GameState::Playing => {}
        }

        if self.session.ledger().all_cured() {
            self.session.turn_mut().finish(true);
            log::info!("game {}: all diseases cured", self.session.id());
            return Some(GameState::Victory);
        }

        if self.session.outbreaks() >= MAX_OUTBREAKS {
            self.session.turn_mut().finish(false);
            log::info!("game {}: outbreak limit reached", self.session.id());
            return Some(GameState::Defeat);
        }

        None
    }
}
