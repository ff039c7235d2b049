//! Time-driven motion.
//!
//! The runner has no velocity integration: the only thing that moves over time
//! rather than per frame is the player's jump, which is a [`Tween`] of the
//! vertical position shaped by an [`Easing`] curve.
//!
//! Tweens are advanced by the host's frame time, so a jump lasts the same
//! wall-clock duration regardless of frame rate.

mod easing;
mod tween;

pub use easing::Easing;
pub use tween::{Tween, TweenStatus};
