use thiserror::Error;

/// Every way an intent can be refused.
///
/// Validation runs before any mutation, so a returned error always means the
/// session is exactly as it was before the intent arrived.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game {0} not found")]
    SessionNotFound(String),
    #[error("game {0} already exists")]
    SessionAlreadyExists(String),
    #[error("game is full")]
    SessionFull,
    #[error("game has already started")]
    SessionAlreadyStarted,
    #[error("game has not started yet")]
    SessionNotStarted,
    #[error("need at least {required} players to start, have {present}")]
    NotEnoughActors { required: usize, present: usize },
    #[error("player {0} not found")]
    ActorNotFound(String),
    #[error("player {0} has already joined")]
    ActorAlreadyJoined(String),
    #[error("the game is over")]
    GameOver,
    #[error("not your turn")]
    NotYourTurn,
    #[error("no actions left")]
    NoActionsRemaining,
    #[error("unknown city {0}")]
    UnknownLocation(String),
    #[error("cannot move directly from {from} to {to}")]
    CitiesNotConnected { from: String, to: String },
    #[error("no {0} cubes to treat here")]
    NoInfectionToTreat(&'static str),
    #[error("research station already exists in {0}")]
    StationAlreadyExists(String),
    #[error("missing the {0} city card")]
    MissingRequiredCard(String),
    #[error("need {required} cards to discover a cure")]
    InsufficientCards { required: usize },
    #[error("need a research station to discover a cure")]
    NoResearchStationHere,
    #[error("{0} disease already cured")]
    AlreadyCured(&'static str),
    #[error("invalid map: {0}")]
    InvalidMap(String),
}

impl GameError {
    /// Stable machine-readable name, sent alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::SessionNotFound(_) => "SessionNotFound",
            GameError::SessionAlreadyExists(_) => "SessionAlreadyExists",
            GameError::SessionFull => "SessionFull",
            GameError::SessionAlreadyStarted => "SessionAlreadyStarted",
            GameError::SessionNotStarted => "SessionNotStarted",
            GameError::NotEnoughActors { .. } => "NotEnoughActors",
            GameError::ActorNotFound(_) => "ActorNotFound",
            GameError::ActorAlreadyJoined(_) => "ActorAlreadyJoined",
            GameError::GameOver => "GameOver",
            GameError::NotYourTurn => "NotYourTurn",
            GameError::NoActionsRemaining => "NoActionsRemaining",
            GameError::UnknownLocation(_) => "UnknownLocation",
            GameError::CitiesNotConnected { .. } => "CitiesNotConnected",
            GameError::NoInfectionToTreat(_) => "NoInfectionToTreat",
            GameError::StationAlreadyExists(_) => "StationAlreadyExists",
            GameError::MissingRequiredCard(_) => "MissingRequiredCard",
            GameError::InsufficientCards { .. } => "InsufficientCards",
            GameError::NoResearchStationHere => "NoResearchStationHere",
            GameError::AlreadyCured(_) => "AlreadyCured",
            GameError::InvalidMap(_) => "InvalidMap",
        }
    }
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;
