//! Orbit camera rig.
//!
//! The rig describes where the camera starts; once running, three-d's
//! `OrbitControl` moves it around the target with the mouse.

use glam::Vec3;

/// Orbit camera placement.
#[derive(Debug, Clone)]
pub struct OrbitRig {
    /// Point the camera looks at and orbits around.
    pub target: Vec3,

    /// Horizontal angle around the target (radians). 0 looks down -Z.
    pub yaw: f32,

    /// Elevation above the target's horizontal plane (radians).
    pub pitch: f32,

    /// Distance from the target.
    pub distance: f32,

    /// Zoom limits for the orbit control.
    pub min_distance: f32,
    pub max_distance: f32,

    /// Field of view in degrees.
    pub fov: f32,

    /// Near clipping plane.
    pub near: f32,

    /// Far clipping plane.
    pub far: f32,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            // Slightly ahead of the player so incoming cubes are in view
            target: Vec3::new(4.0, 0.5, 0.0),
            yaw: -0.35,
            pitch: 0.3,
            distance: 12.0,
            min_distance: 3.0,
            max_distance: 40.0,
            fov: 60.0,
            near: 0.1,
            far: 200.0,
        }
    }
}

impl OrbitRig {
    /// Camera position in world space.
    pub fn eye(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();

        let offset = Vec3::new(
            cos_pitch * sin_yaw,
            sin_pitch,
            cos_pitch * cos_yaw,
        );
        self.target + offset * self.distance
    }

    /// Build the three-d camera for `viewport`.
    pub fn camera(&self, viewport: three_d::Viewport) -> three_d::Camera {
        let eye = self.eye();
        let target = self.target;
        three_d::Camera::new_perspective(
            viewport,
            three_d::vec3(eye.x, eye.y, eye.z),
            three_d::vec3(target.x, target.y, target.z),
            three_d::vec3(0.0, 1.0, 0.0),
            three_d::degrees(self.fov),
            self.near,
            self.far,
        )
    }

    /// Mouse orbit/zoom control around the target.
    pub fn control(&self) -> three_d::OrbitControl {
        let target = self.target;
        three_d::OrbitControl::new(
            three_d::vec3(target.x, target.y, target.z),
            self.min_distance,
            self.max_distance,
        )
    }
}
