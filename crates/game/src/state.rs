//! Game state machine.

use serde::{Deserialize, Serialize};

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Title screen, nothing moves.
    #[default]
    Start,
    /// Obstacles advance and the player can jump.
    Playing,
    /// Frozen after a collision until restarted.
    GameOver,
}

impl GameState {
    /// Legal transitions: Start→Playing, Playing→GameOver, GameOver→Playing.
    pub fn can_transition(self, next: GameState) -> bool {
        matches!(
            (self, next),
            (GameState::Start, GameState::Playing)
                | (GameState::Playing, GameState::GameOver)
                | (GameState::GameOver, GameState::Playing)
        )
    }

    #[inline]
    pub fn is_playing(self) -> bool {
        self == GameState::Playing
    }

    /// Whether a start command from the player is meaningful here.
    #[inline]
    pub fn accepts_start(self) -> bool {
        self.can_transition(GameState::Playing)
    }
}
