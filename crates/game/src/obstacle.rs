//! The obstacle row.
//!
//! Obstacles are created once and never destroyed. Each frame they slide
//! towards the player; any that fall behind the recycle threshold jump to the
//! back of the row, one spacing past the furthest obstacle.

use donut_physics::Aabb;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::ObstacleConfig;

/// A cube the player has to jump over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Position in the row at creation. Decides the restart offset.
    pub index: usize,

    /// Centre of the cube. Only `x` changes.
    pub position: Vec3,

    /// Collision half-extents.
    pub half_extents: Vec3,
}

impl Obstacle {
    pub fn new(index: usize, offset: f32, ground_y: f32, half_extents: Vec3) -> Self {
        Self {
            index,
            position: Vec3::new(offset, ground_y, 0.0),
            half_extents,
        }
    }

    /// Horizontal offset along the track.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.position.x
    }

    /// Tight box around the cube.
    pub fn collision_box(&self) -> Aabb {
        Aabb::from_center(self.position, self.half_extents)
    }
}

/// Create the row at its index-based offsets.
pub fn spawn_row(config: &ObstacleConfig, ground_y: f32) -> Vec<Obstacle> {
    (0..config.count)
        .map(|i| Obstacle::new(i, config.initial_offset(i), ground_y, config.half_extents))
        .collect()
}

/// Move every obstacle back to its index-based offset.
pub fn reset_row(obstacles: &mut [Obstacle], config: &ObstacleConfig) {
    for obstacle in obstacles {
        obstacle.position.x = config.initial_offset(obstacle.index);
    }
}

/// Slide every obstacle towards the player by `step`.
pub fn advance_row(obstacles: &mut [Obstacle], step: f32) {
    for obstacle in obstacles {
        obstacle.position.x -= step;
    }
}

/// Furthest offset in the row.
pub fn max_offset(obstacles: &[Obstacle]) -> Option<f32> {
    obstacles.iter().map(Obstacle::offset).reduce(f32::max)
}

/// Recycle obstacles that fell below `threshold`.
///
/// Each one is moved to the current furthest offset plus `spacing`. Obstacles
/// are handled in order, so two recycled in the same frame keep their spacing.
/// Returns how many were recycled.
pub fn recycle_row(obstacles: &mut [Obstacle], threshold: f32, spacing: f32) -> u32 {
    let mut recycled = 0;

    for i in 0..obstacles.len() {
        if obstacles[i].offset() >= threshold {
            continue;
        }

        // Non-empty: `i` is a valid index
        let furthest = max_offset(obstacles).unwrap_or(threshold);
        obstacles[i].position.x = furthest + spacing;
        recycled += 1;

        log::debug!(
            "Recycled obstacle {} to {:.2}",
            obstacles[i].index,
            obstacles[i].position.x
        );
    }

    recycled
}
