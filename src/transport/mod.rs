//! Message routing between clients and the session store
//!
//! [`dispatch`] turns one inbound message into a [`Delivery`]: the frames it
//! produces and who should see each one. Failures go back to the sender
//! only; successes go to everyone in the game. The [`hub::Hub`] carries the
//! group frames to the other connections.

pub mod hub;
pub mod protocol;

use serde::Serialize;

use crate::game_engine::Action;
use crate::models::errors::{GameError, GameResult};
use crate::store::SessionStore;
use protocol::{ClientMessage, ServerMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// Only the connection that sent the message.
    Sender,
    /// Every connection in the game, sender included.
    Game,
    /// Every connection in the game except the sender.
    Others,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub audience: Audience,
    pub message: ServerMessage,
}

/// How the sender's membership of the game group changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Unchanged,
    /// The sender joins the group before any frame goes out.
    Enter,
    /// The group is dissolved after the frames go out.
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub game_id: String,
    pub membership: Membership,
    pub frames: Vec<Frame>,
}

impl Delivery {
    pub fn new(game_id: &str) -> Self {
        Delivery {
            game_id: game_id.to_string(),
            membership: Membership::Unchanged,
            frames: Vec::new(),
        }
    }

    pub fn reply(game_id: &str, message: ServerMessage) -> Self {
        Delivery::new(game_id).send(Audience::Sender, message)
    }

    pub fn send(mut self, audience: Audience, message: ServerMessage) -> Self {
        self.frames.push(Frame { audience, message });
        self
    }

    fn with_membership(mut self, membership: Membership) -> Self {
        self.membership = membership;
        self
    }

    /// Was this message refused?
    pub fn is_error(&self) -> bool {
        matches!(
            self.frames.as_slice(),
            [Frame {
                message: ServerMessage::Error { .. },
                ..
            }]
        )
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.frames.iter().map(|f| f.message.kind()).collect()
    }
}

/// Run one client message against the store.
pub async fn dispatch(store: &SessionStore, message: ClientMessage) -> Delivery {
    let game_id = message.game_id().to_string();
    match handle(store, &message).await {
        Ok(delivery) => delivery,
        Err(err) => Delivery::reply(&game_id, ServerMessage::error(&err)),
    }
}

async fn handle(store: &SessionStore, message: &ClientMessage) -> GameResult<Delivery> {
    match message {
        ClientMessage::CreateGame { game_id, player } => {
            let snapshot = store.create_session(game_id, player.clone()).await?;
            Ok(Delivery::new(game_id)
                .with_membership(Membership::Enter)
                .send(Audience::Sender, ServerMessage::state(snapshot)))
        }
        ClientMessage::JoinGame { game_id, player } => {
            let snapshot = store.join_session(game_id, player.clone()).await?;
            let joined = snapshot.player(&player.id).cloned();
            let mut delivery = Delivery::new(game_id)
                .with_membership(Membership::Enter)
                .send(Audience::Game, ServerMessage::state(snapshot));
            if let Some(view) = joined {
                delivery = delivery.send(Audience::Others, ServerMessage::PlayerJoined { player: view });
            }
            Ok(delivery)
        }
        ClientMessage::StartGame { game_id } => {
            let snapshot = store.start_session(game_id).await?;
            Ok(Delivery::new(game_id).send(
                Audience::Game,
                ServerMessage::GameStarted {
                    game_state: snapshot,
                },
            ))
        }
        ClientMessage::MovePlayer {
            game_id,
            player_id,
            location,
        } => {
            let action = Action::Move {
                to: location.clone(),
            };
            play(store, game_id, player_id, "MOVE_PLAYER", action).await
        }
        ClientMessage::TreatDisease {
            game_id,
            player_id,
            color,
        } => {
            let action = Action::Treat { category: *color };
            play(store, game_id, player_id, "TREAT_DISEASE", action).await
        }
        ClientMessage::BuildResearchStation { game_id, player_id } => {
            play(store, game_id, player_id, "BUILD_RESEARCH_STATION", Action::BuildStation).await
        }
        ClientMessage::DiscoverCure {
            game_id,
            player_id,
            color,
        } => {
            let action = Action::DiscoverCure { category: *color };
            play(store, game_id, player_id, "DISCOVER_CURE", action).await
        }
        ClientMessage::EndTurn { game_id, player_id } => {
            play(store, game_id, player_id, "END_TURN", Action::EndTurn).await
        }
        ClientMessage::ResetGame { game_id } => {
            if !store.reset_session(game_id).await {
                return Err(GameError::SessionNotFound(game_id.clone()));
            }
            Ok(Delivery::new(game_id)
                .with_membership(Membership::Close)
                .send(Audience::Game, ServerMessage::reset(game_id)))
        }
    }
}

/// Apply an in-game action and broadcast the result, followed by
/// `GAME_OVER` when the action ended the game.
async fn play(
    store: &SessionStore,
    game_id: &str,
    player_id: &str,
    label: &str,
    action: Action,
) -> GameResult<Delivery> {
    let snapshot = store.apply_action(game_id, player_id, action).await?;
    let mut delivery = Delivery::new(game_id).send(
        Audience::Game,
        ServerMessage::after(snapshot.clone(), label, player_id),
    );
    // the action was accepted, so the game was still running before it
    if snapshot.game_over {
        let won = snapshot.game_won;
        delivery = delivery.send(
            Audience::Game,
            ServerMessage::GameOver {
                game_state: snapshot,
                won,
            },
        );
    }
    Ok(delivery)
}
