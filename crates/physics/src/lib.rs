//! Donut Runner Physics
//!
//! The small amount of math the runner needs, kept free of any rendering types
//! so the game crate can run it headless.
//!
//! # Architecture
//!
//! - **Collision**: axis-aligned boxes and overlap tests
//! - **Movement**: easing curves and the yoyo tween that drives the jump
//!
//! Everything here is deterministic: the same inputs always produce the same
//! outputs.

pub mod collision;
pub mod movement;

// Re-export commonly used types
pub use collision::Aabb;
pub use movement::{Easing, Tween, TweenStatus};
