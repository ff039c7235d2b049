//! Player input handling.
//!
//! The host turns key presses and button clicks into a [`PlayerInput`] each
//! frame. Inputs are edge-triggered: a field is `true` only on the frame the
//! key went down, holding a key does nothing more.

use serde::{Deserialize, Serialize};

/// Commands issued by the player during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Jump key pressed.
    pub jump: bool,

    /// Start or restart requested (key or overlay button).
    pub start: bool,
}

impl PlayerInput {
    pub const fn jump() -> Self {
        Self {
            jump: true,
            start: false,
        }
    }

    pub const fn start() -> Self {
        Self {
            jump: false,
            start: true,
        }
    }

    /// Combine two inputs from the same frame.
    pub fn merge(self, other: PlayerInput) -> Self {
        Self {
            jump: self.jump || other.jump,
            start: self.start || other.start,
        }
    }
}
