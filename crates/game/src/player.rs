//! Player entity and state.

use donut_physics::{Aabb, Easing, Tween, TweenStatus};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::PlayerConfig;

/// The player-controlled torus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Centre of the torus. Only `y` changes during play.
    pub position: Vec3,

    /// Collision half-extents.
    pub half_extents: Vec3,

    /// Resting height.
    ground_y: f32,

    /// In-flight jump. `Some` exactly while a jump is in progress.
    jump: Option<Tween>,
}

impl Player {
    /// Create a player standing on the ground.
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            position: Vec3::new(config.x, config.ground_y, 0.0),
            half_extents: config.half_extents,
            ground_y: config.ground_y,
            jump: None,
        }
    }

    /// Get the player's current position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    /// Check if a jump is in progress.
    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.jump.is_some()
    }

    /// Check if the player is resting on the ground.
    #[inline]
    pub fn on_ground(&self) -> bool {
        !self.is_jumping() && self.position.y == self.ground_y
    }

    /// Box used for obstacle hits, centred on the player.
    pub fn collision_box(&self) -> Aabb {
        Aabb::from_center(self.position, self.half_extents)
    }

    /// Start a jump up to `height` above ground and back.
    ///
    /// Returns `false` without touching anything if a jump is already in
    /// flight.
    pub fn begin_jump(&mut self, height: f32, duration_ms: f32, easing: Easing) -> bool {
        if self.is_jumping() {
            return false;
        }

        let tween = Tween::new(self.ground_y, self.ground_y + height, duration_ms, easing)
            .with_yoyo(true);
        self.jump = Some(tween);
        true
    }

    /// Advance the jump by `delta_ms`.
    ///
    /// When the jump completes the flag is cleared and the player is snapped
    /// exactly to ground.
    pub fn update_jump(&mut self, delta_ms: f32) {
        let Some(tween) = self.jump.as_mut() else {
            return;
        };

        match tween.advance(delta_ms) {
            TweenStatus::Running => {
                self.position.y = tween.value();
            }
            TweenStatus::Finished => {
                self.jump = None;
                self.position.y = self.ground_y;
            }
        }
    }

    /// Never let the player sink below ground.
    pub fn clamp_to_ground(&mut self) {
        if self.position.y < self.ground_y {
            self.position.y = self.ground_y;
        }
    }

    /// Put the player back on the ground with no jump in flight.
    pub fn reset(&mut self) {
        self.jump = None;
        self.position.y = self.ground_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(&PlayerConfig::default())
    }

    #[test]
    fn test_player_creation() {
        let player = player();
        assert_eq!(player.position(), Vec3::ZERO);
        assert!(player.on_ground());
        assert!(!player.is_jumping());
    }

    #[test]
    fn test_jump_rises_and_lands() {
        let mut player = player();
        assert!(player.begin_jump(2.0, 300.0, Easing::QuadraticOut));
        assert!(player.is_jumping());

        player.update_jump(150.0);
        assert!(player.position.y > 0.0);

        player.update_jump(150.0);
        assert!((player.position.y - 2.0).abs() < 1e-4);
        assert!(player.is_jumping());

        player.update_jump(300.0);
        assert!(!player.is_jumping());
        assert_eq!(player.position.y, 0.0);
        assert!(player.on_ground());
    }

    #[test]
    fn test_second_jump_is_dropped() {
        let mut player = player();
        assert!(player.begin_jump(2.0, 300.0, Easing::Linear));
        player.update_jump(100.0);
        let mid_air = player.clone();

        assert!(!player.begin_jump(5.0, 1000.0, Easing::Linear));
        assert_eq!(player.position, mid_air.position);

        // Still lands when the first jump ends
        player.update_jump(500.0);
        assert!(!player.is_jumping());
    }

    #[test]
    fn test_landing_snaps_exactly() {
        let mut player = player();
        player.begin_jump(2.0, 300.0, Easing::SineInOut);
        for _ in 0..37 {
            player.update_jump(16.6);
        }
        assert!(!player.is_jumping());
        assert_eq!(player.position.y, player.ground_y());
    }

    #[test]
    fn test_clamp_to_ground() {
        let mut player = player();
        player.position.y = -3.0;
        player.clamp_to_ground();
        assert_eq!(player.position.y, 0.0);

        player.position.y = 1.0;
        player.clamp_to_ground();
        assert_eq!(player.position.y, 1.0);
    }

    #[test]
    fn test_collision_box() {
        let player = player();
        let aabb = player.collision_box();
        assert_eq!(aabb.min, Vec3::splat(-0.35));
        assert_eq!(aabb.max, Vec3::splat(0.35));
    }

    #[test]
    fn test_reset_cancels_jump() {
        let mut player = player();
        player.begin_jump(2.0, 300.0, Easing::Linear);
        player.update_jump(200.0);
        player.reset();
        assert!(player.on_ground());
    }
}
