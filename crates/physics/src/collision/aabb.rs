//! Axis-aligned bounding box.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box centred on `center` reaching `half_extents` in each direction.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        let half_extents = half_extents.abs();
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Overlap test. Touching faces count as an intersection.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center() {
        let aabb = Aabb::from_center(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(0.5));
        assert_eq!(aabb.min, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(aabb.max, Vec3::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn test_intersection() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::splat(0.5));

        let overlapping = Aabb::from_center(Vec3::new(0.9, 0.0, 0.0), Vec3::splat(0.5));
        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));

        let apart = Aabb::from_center(Vec3::new(1.1, 0.0, 0.0), Vec3::splat(0.5));
        assert!(!a.intersects(&apart));

        // Separated on Y only
        let above = Aabb::from_center(Vec3::new(0.0, 2.0, 0.0), Vec3::splat(0.5));
        assert!(!a.intersects(&above));
    }

    #[test]
    fn test_touching_faces_intersect() {
        let a = Aabb::from_center(Vec3::ZERO, Vec3::splat(0.5));
        let b = Aabb::from_center(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(0.5));
        assert!(a.intersects(&b));
    }
}
