use super::constants::MIN_PLAYERS;
use super::errors::{GameError, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for players.
    Lobby,
    /// Someone is taking a turn.
    Active,
    /// Terminal until the session is reset.
    Over { won: bool },
}

/// Whose turn it is, in join order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOrder {
    phase: Phase,
    current: usize,
}

impl Default for TurnOrder {
    fn default() -> Self {
        TurnOrder {
            phase: Phase::Lobby,
            current: 0,
        }
    }
}

impl TurnOrder {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the acting player. Frozen once the game is over.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_started(&self) -> bool {
        self.phase != Phase::Lobby
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Over { .. })
    }

    pub fn is_won(&self) -> bool {
        self.phase == Phase::Over { won: true }
    }

    /// Lobby to the first player's turn.
    pub fn start(&mut self, actor_count: usize) -> GameResult<()> {
        if self.phase != Phase::Lobby {
            return Err(GameError::SessionAlreadyStarted);
        }
        if actor_count < MIN_PLAYERS {
            return Err(GameError::NotEnoughActors {
                required: MIN_PLAYERS,
                present: actor_count,
            });
        }
        self.phase = Phase::Active;
        self.current = 0;
        Ok(())
    }

    /// Pass the turn to the next player, wrapping around.
    pub fn advance(&mut self, actor_count: usize) {
        if self.phase == Phase::Active && actor_count > 0 {
            self.current = (self.current + 1) % actor_count;
        }
    }

    pub fn finish(&mut self, won: bool) {
        if self.phase == Phase::Active {
            self.phase = Phase::Over { won };
        }
    }
}
