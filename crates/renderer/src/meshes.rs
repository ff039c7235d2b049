//! Procedural mesh generators.
//!
//! three-d ships cubes and spheres but no torus, so the player's donut is built
//! here. The torus lies in the XY plane with its hole along Z, facing the
//! default camera.

use std::f32::consts::TAU;

use glam::Vec3;
use three_d::{CpuMesh, Indices, Positions};

/// Triangle mesh data independent of the GPU.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Upload-ready three-d mesh.
    pub fn to_cpu_mesh(&self) -> CpuMesh {
        let convert = |v: &Vec3| three_d::vec3(v.x, v.y, v.z);
        CpuMesh {
            positions: Positions::F32(self.positions.iter().map(convert).collect()),
            normals: Some(self.normals.iter().map(convert).collect()),
            indices: Indices::U32(self.indices.clone()),
            ..Default::default()
        }
    }
}

/// Create a torus.
///
/// # Arguments
///
/// * `major_radius` - Distance from the centre to the middle of the tube
/// * `minor_radius` - Radius of the tube
/// * `rings` - Segments around the hole
/// * `sides` - Segments around the tube
pub fn create_torus(major_radius: f32, minor_radius: f32, rings: u32, sides: u32) -> MeshData {
    let rings = rings.max(3);
    let sides = sides.max(3);

    let mut mesh = MeshData::default();

    // Duplicate the seam vertices so every ring/side closes cleanly
    for ring in 0..=rings {
        let u = ring as f32 / rings as f32 * TAU;
        let (sin_u, cos_u) = u.sin_cos();
        let ring_center = Vec3::new(cos_u, sin_u, 0.0) * major_radius;

        for side in 0..=sides {
            let v = side as f32 / sides as f32 * TAU;
            let (sin_v, cos_v) = v.sin_cos();

            let normal = Vec3::new(cos_u * cos_v, sin_u * cos_v, sin_v);
            mesh.positions.push(ring_center + normal * minor_radius);
            mesh.normals.push(normal);
        }
    }

    let stride = sides + 1;
    for ring in 0..rings {
        for side in 0..sides {
            let a = ring * stride + side;
            let b = (ring + 1) * stride + side;
            let c = b + 1;
            let d = a + 1;

            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    mesh
}
