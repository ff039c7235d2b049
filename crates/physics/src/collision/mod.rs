//! Collision volumes.
//!
//! Only axis-aligned bounding boxes are needed: the player and every obstacle
//! are tested as boxes, and nothing ever rotates its collision volume.
//!
//! # Key Types
//!
//! - [`Aabb`]: Box described by its min and max corners

mod aabb;

pub use aabb::Aabb;
