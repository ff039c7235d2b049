//! Donut Runner Renderer
//!
//! A three-d based scene for the runner.
//!
//! # Features
//!
//! - Procedural torus for the player, scaled cubes for obstacles
//! - Ambient plus directional lighting
//! - Orbit camera around the track
//! - Title text meshed from a TrueType font
//! - egui overlay (score, start and game-over panels) and a tuning panel
//!
//! # Usage
//!
//! The renderer is driven by game state from `donut-game`. Each frame, sync the
//! scene from the simulation and render it.

pub mod camera;
pub mod error;
pub mod gui;
pub mod meshes;
pub mod scene;

pub use camera::OrbitRig;
pub use error::AssetError;
pub use gui::GameGui;
pub use scene::{ObjectHandle, Scene};
