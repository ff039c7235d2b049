//! Overlay model.
//!
//! The game decides which panels are visible and what the score labels say;
//! the host draws them however it likes.

use serde::{Deserialize, Serialize};

/// Visibility and text of the on-screen panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    /// Title screen with the start button.
    pub start_visible: bool,

    /// Live score while playing.
    pub play_visible: bool,

    /// Final score and restart button.
    pub game_over_visible: bool,

    pub score_text: String,
    pub final_score_text: String,
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Overlay {
    /// Overlay for the title screen.
    pub fn new() -> Self {
        Self {
            start_visible: true,
            play_visible: false,
            game_over_visible: false,
            score_text: Self::score_label(0),
            final_score_text: String::new(),
        }
    }

    /// Show the play panel, hide the others.
    pub fn show_play(&mut self, score: u32) {
        self.start_visible = false;
        self.play_visible = true;
        self.game_over_visible = false;
        self.set_score(score);
    }

    /// Show the game-over panel with `final_score`, hide the play panel.
    pub fn show_game_over(&mut self, final_score: u32) {
        self.start_visible = false;
        self.play_visible = false;
        self.game_over_visible = true;
        self.final_score_text = format!("Final score: {final_score}");
    }

    pub fn set_score(&mut self, score: u32) {
        self.score_text = Self::score_label(score);
    }

    fn score_label(score: u32) -> String {
        format!("Score: {score}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_title() {
        let overlay = Overlay::new();
        assert!(overlay.start_visible);
        assert!(!overlay.play_visible);
        assert!(!overlay.game_over_visible);
        assert_eq!(overlay.score_text, "Score: 0");
    }

    #[test]
    fn test_play_then_game_over() {
        let mut overlay = Overlay::new();
        overlay.show_play(0);
        assert!(overlay.play_visible);
        assert!(!overlay.start_visible);

        overlay.set_score(3);
        assert_eq!(overlay.score_text, "Score: 3");

        overlay.show_game_over(3);
        assert!(overlay.game_over_visible);
        assert!(!overlay.play_visible);
        assert_eq!(overlay.final_score_text, "Final score: 3");
    }
}
