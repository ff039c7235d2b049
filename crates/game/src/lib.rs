//! Donut Runner Game Logic
//!
//! This crate contains the whole game simulation:
//!
//! - Game state machine and score
//! - The player torus and its jump
//! - The recycled obstacle row
//! - Configuration loading
//! - The overlay model the host draws on top of the scene
//!
//! # Architecture
//!
//! The host calls [`Simulation::tick`] once per display frame and forwards key
//! presses as [`PlayerInput`]. Nothing here knows about the renderer; the host
//! reads positions back out and moves its scene objects to match.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                   Game Simulation                      │
//! │  ┌─────────┐    ┌───────────┐    ┌─────────────────┐  │
//! │  │ Input   │───►│ Game loop │───►│ State / score / │  │
//! │  │ (keys)  │    │ (tick)    │    │ overlay         │  │
//! │  └─────────┘    └───────────┘    └─────────────────┘  │
//! └───────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod hud;
pub mod input;
pub mod obstacle;
pub mod player;
pub mod simulation;
pub mod state;

// Re-export main types
pub use config::{ConfigError, GameConfig};
pub use hud::Overlay;
pub use input::PlayerInput;
pub use obstacle::Obstacle;
pub use player::Player;
pub use simulation::{Simulation, TickReport};
pub use state::GameState;

// Re-export physics types for convenience
pub use donut_physics::{Aabb, Easing, Tween};
