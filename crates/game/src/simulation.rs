//! Game simulation - the main game loop.
//!
//! Holds every piece of mutable game state. The host owns one [`Simulation`],
//! calls [`Simulation::tick`] once per display frame and forwards input through
//! [`Simulation::apply_input`].

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::hud::Overlay;
use crate::input::PlayerInput;
use crate::obstacle::{self, Obstacle};
use crate::player::Player;
use crate::state::GameState;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Obstacles moved to the back of the row this frame.
    pub recycled: u32,

    /// The player hit an obstacle this frame.
    pub game_over: bool,
}

/// The main game simulation.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Frames ticked since creation.
    pub frame: u64,

    /// Game configuration. Changes apply from the next frame or jump.
    pub config: GameConfig,

    state: GameState,
    score: u32,
    player: Player,
    obstacles: Vec<Obstacle>,
    overlay: Overlay,
}

impl Simulation {
    /// Create a simulation sitting on the title screen.
    pub fn new(config: GameConfig) -> Self {
        let player = Player::new(&config.player);
        let obstacles = obstacle::spawn_row(&config.obstacles, config.player.ground_y);

        Self {
            frame: 0,
            config,
            state: GameState::Start,
            score: 0,
            player,
            obstacles,
            overlay: Overlay::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[inline]
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Start (or restart) a run.
    ///
    /// Works from any state: score, player and obstacles always go back to
    /// their starting values.
    pub fn start(&mut self) {
        self.state = GameState::Playing;
        self.score = 0;
        self.player.reset();
        obstacle::reset_row(&mut self.obstacles, &self.config.obstacles);
        self.overlay.show_play(self.score);

        log::info!("Run started");
    }

    /// End the current run.
    ///
    /// Only a running game can end; otherwise this does nothing.
    pub fn end(&mut self) {
        if !self.state.can_transition(GameState::GameOver) {
            log::debug!("Ignoring end() in state {:?}", self.state);
            return;
        }

        self.state = GameState::GameOver;
        self.overlay.show_game_over(self.score);

        log::info!("Game over, final score {}", self.score);
    }

    /// Ask the player to jump.
    ///
    /// Returns `true` if a jump started. Requests outside a run, or while a
    /// jump is already in flight, are dropped.
    pub fn request_jump(&mut self) -> bool {
        if !self.state.is_playing() {
            return false;
        }

        let player_config = &self.config.player;
        self.player.begin_jump(
            player_config.jump_height,
            player_config.jump_duration_ms,
            player_config.jump_easing,
        )
    }

    /// Apply one frame of player commands.
    pub fn apply_input(&mut self, input: &PlayerInput) {
        if input.start && self.state.accepts_start() {
            self.start();
        }
        if input.jump {
            self.request_jump();
        }
    }

    /// Advance the game by one display frame.
    ///
    /// # Arguments
    ///
    /// * `elapsed_ms` - Wall-clock time since the previous frame, drives the jump
    pub fn tick(&mut self, elapsed_ms: f32) -> TickReport {
        self.frame += 1;

        let mut report = TickReport::default();

        // Jump runs to completion in every state
        self.player.update_jump(elapsed_ms);
        self.player.clamp_to_ground();

        if !self.state.is_playing() {
            return report;
        }

        let obstacle_config = &self.config.obstacles;
        obstacle::advance_row(&mut self.obstacles, obstacle_config.step);

        report.recycled = obstacle::recycle_row(
            &mut self.obstacles,
            obstacle_config.recycle_threshold,
            obstacle_config.spacing,
        );
        if report.recycled > 0 {
            self.score += report.recycled;
            self.overlay.set_score(self.score);
        }

        let player_box = self.player.collision_box();
        let hit = self
            .obstacles
            .iter()
            .find(|o| o.collision_box().intersects(&player_box));

        if let Some(obstacle) = hit {
            log::debug!(
                "Player hit obstacle {} at {:.2} on frame {}",
                obstacle.index,
                obstacle.offset(),
                self.frame
            );
            self.end();
            report.game_over = true;
        }

        report
    }
}

// ============================================================================
// Tests
// ============================================================================
