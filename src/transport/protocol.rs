//! Wire messages
//!
//! Every frame is a JSON object `{"type": "...", "payload": {...}}`. Type
//! names are SCREAMING_SNAKE_CASE and payload keys are camelCase.

use serde::{Deserialize, Serialize};

use crate::models::actor::ActorProfile;
use crate::models::constants::Category;
use crate::models::errors::GameError;
use crate::models::snapshot::{PlayerView, SessionSnapshot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum ClientMessage {
    CreateGame { game_id: String, player: ActorProfile },
    JoinGame { game_id: String, player: ActorProfile },
    StartGame { game_id: String },
    MovePlayer { game_id: String, player_id: String, location: String },
    TreatDisease { game_id: String, player_id: String, color: Category },
    BuildResearchStation { game_id: String, player_id: String },
    DiscoverCure { game_id: String, player_id: String, color: Category },
    EndTurn { game_id: String, player_id: String },
    ResetGame { game_id: String },
}

impl ClientMessage {
    pub fn game_id(&self) -> &str {
        match self {
            ClientMessage::CreateGame { game_id, .. }
            | ClientMessage::JoinGame { game_id, .. }
            | ClientMessage::StartGame { game_id }
            | ClientMessage::MovePlayer { game_id, .. }
            | ClientMessage::TreatDisease { game_id, .. }
            | ClientMessage::BuildResearchStation { game_id, .. }
            | ClientMessage::DiscoverCure { game_id, .. }
            | ClientMessage::EndTurn { game_id, .. }
            | ClientMessage::ResetGame { game_id } => game_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum ServerMessage {
    GameUpdate(GameUpdate),
    PlayerJoined { player: PlayerView },
    GameStarted { game_state: SessionSnapshot },
    GameOver { game_state: SessionSnapshot, won: bool },
    Error { code: String, message: String },
}

/// Payload of GAME_UPDATE: either a fresh state or a reset notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum GameUpdate {
    State {
        game_state: SessionSnapshot,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        action: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        player: Option<String>,
    },
    Reset { reset: bool, game_id: String },
}

impl ServerMessage {
    pub fn state(game_state: SessionSnapshot) -> Self {
        ServerMessage::GameUpdate(GameUpdate::State {
            game_state,
            action: None,
            player: None,
        })
    }

    /// State update naming the action that produced it.
    pub fn after(game_state: SessionSnapshot, action: &str, player: &str) -> Self {
        ServerMessage::GameUpdate(GameUpdate::State {
            game_state,
            action: Some(action.to_string()),
            player: Some(player.to_string()),
        })
    }

    pub fn reset(game_id: &str) -> Self {
        ServerMessage::GameUpdate(GameUpdate::Reset {
            reset: true,
            game_id: game_id.to_string(),
        })
    }

    pub fn error(err: &GameError) -> Self {
        ServerMessage::Error {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }

    /// Error for a frame that could not be read at all.
    pub fn malformed(detail: &str) -> Self {
        ServerMessage::Error {
            code: "MalformedMessage".to_string(),
            message: detail.to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ServerMessage::GameUpdate(_) => "GAME_UPDATE",
            ServerMessage::PlayerJoined { .. } => "PLAYER_JOINED",
            ServerMessage::GameStarted { .. } => "GAME_STARTED",
            ServerMessage::GameOver { .. } => "GAME_OVER",
            ServerMessage::Error { .. } => "ERROR",
        }
    }
}
