//! Scene bootstrap and object handles.
//!
//! The scene owns every GPU object. Game code never touches them directly: it
//! moves objects through an [`ObjectHandle`], and [`Scene::sync`] copies the
//! simulation's positions across once per frame.

use std::borrow::Cow;
use std::path::Path;

use donut_game::config::RenderConfig;
use donut_game::Simulation;
use glam::Vec3;
use three_d::{
    degrees, radians, vec3, AmbientLight, Camera, ColorMaterial, Context, CpuMaterial, CpuMesh,
    DirectionalLight, Event, Gm, Light, Mat4, Mesh, OrbitControl, PhysicalMaterial, Srgba,
    TextGenerator, TextLayoutOptions, Viewport,
};

use crate::camera::OrbitRig;
use crate::error::AssetError;
use crate::meshes;

/// Opaque reference to an object in the [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(usize);

#[derive(Debug, Clone, Copy)]
struct Placement {
    position: Vec3,
    spin: f32,
    scale: Vec3,
}

/// Transforms of every scene object, addressed by [`ObjectHandle`].
#[derive(Debug, Default)]
struct Placements {
    entries: Vec<Placement>,
}

impl Placements {
    fn add(&mut self, scale: Vec3) -> ObjectHandle {
        self.entries.push(Placement {
            position: Vec3::ZERO,
            spin: 0.0,
            scale,
        });
        ObjectHandle(self.entries.len() - 1)
    }

    fn position(&self, handle: ObjectHandle) -> Vec3 {
        self.entries[handle.0].position
    }

    /// Returns true if the object moved.
    fn set_position(&mut self, handle: ObjectHandle, position: Vec3) -> bool {
        let entry = &mut self.entries[handle.0];
        let moved = entry.position != position;
        entry.position = position;
        moved
    }

    fn set_spin(&mut self, handle: ObjectHandle, spin: f32) {
        self.entries[handle.0].spin = spin;
    }

    fn transformation(&self, handle: ObjectHandle) -> Mat4 {
        let Placement { position: p, spin, scale } = self.entries[handle.0];
        Mat4::from_translation(vec3(p.x, p.y, p.z))
            * Mat4::from_angle_y(radians(spin))
            * Mat4::from_nonuniform_scale(scale.x, scale.y, scale.z)
    }
}

/// Everything drawn in 3D: camera, lights, player, obstacles, title.
pub struct Scene {
    camera: Camera,
    control: OrbitControl,
    ambient: AmbientLight,
    directional: DirectionalLight,
    models: Vec<Gm<Mesh, PhysicalMaterial>>,
    placements: Placements,
    player: ObjectHandle,
    obstacles: Vec<ObjectHandle>,
    title: Option<Gm<Mesh, ColorMaterial>>,
}

impl Scene {
    /// Build the scene for the simulation's current layout.
    pub fn new(context: &Context, viewport: Viewport, simulation: &Simulation) -> Self {
        let config = &simulation.config;
        let render = &config.render;

        let rig = OrbitRig::default();
        let camera = rig.camera(viewport);
        let control = rig.control();

        let ambient = AmbientLight::new(context, render.ambient_intensity, Srgba::WHITE);
        let directional = DirectionalLight::new(
            context,
            render.directional_intensity,
            Srgba::WHITE,
            vec3(-1.0, -1.0, -0.5),
        );

        let mut scene = Self {
            camera,
            control,
            ambient,
            directional,
            models: Vec::new(),
            placements: Placements::default(),
            player: ObjectHandle(0),
            obstacles: Vec::new(),
            title: None,
        };

        let torus = meshes::create_torus(0.5, 0.2, 48, 24).to_cpu_mesh();
        scene.player = scene.add_object(context, &torus, render.player_color, Vec3::ONE);

        // CpuMesh::cube spans -1..1, so scaling by the half-extents gives a
        // cube whose bounds are exactly the obstacle's collision box
        let cube = CpuMesh::cube();
        for obstacle in simulation.obstacles() {
            let handle =
                scene.add_object(context, &cube, render.obstacle_color, obstacle.half_extents);
            scene.obstacles.push(handle);
        }

        scene.title = match build_title(context, render) {
            Ok(title) => Some(title),
            Err(e) => {
                log::warn!("Title text disabled: {e}");
                None
            }
        };

        scene.sync(simulation, 0.0);
        log::info!("Scene built with {} obstacles", scene.obstacles.len());

        scene
    }

    fn add_object(
        &mut self,
        context: &Context,
        mesh: &CpuMesh,
        color: [u8; 3],
        scale: Vec3,
    ) -> ObjectHandle {
        let [r, g, b] = color;
        let material = PhysicalMaterial::new_opaque(
            context,
            &CpuMaterial {
                albedo: Srgba::new(r, g, b, 255),
                roughness: 0.6,
                metallic: 0.1,
                ..Default::default()
            },
        );

        let handle = self.placements.add(scale);
        self.models.push(Gm::new(Mesh::new(context, mesh), material));
        self.update_transformation(handle);
        handle
    }

    fn update_transformation(&mut self, handle: ObjectHandle) {
        let transformation = self.placements.transformation(handle);
        self.models[handle.0].set_transformation(transformation);
    }

    /// Get an object's position.
    pub fn position(&self, handle: ObjectHandle) -> Vec3 {
        self.placements.position(handle)
    }

    /// Move an object.
    pub fn set_position(&mut self, handle: ObjectHandle, position: Vec3) {
        if self.placements.set_position(handle, position) {
            self.update_transformation(handle);
        }
    }

    /// Rotate an object about the vertical axis (radians).
    pub fn set_spin(&mut self, handle: ObjectHandle, spin: f32) {
        self.placements.set_spin(handle, spin);
        self.update_transformation(handle);
    }

    /// Copy positions from the simulation and spin the player.
    pub fn sync(&mut self, simulation: &Simulation, player_spin: f32) {
        self.set_position(self.player, simulation.player().position());
        self.set_spin(self.player, player_spin);

        for (i, obstacle) in simulation.obstacles().iter().enumerate() {
            if let Some(&handle) = self.obstacles.get(i) {
                self.set_position(handle, obstacle.position);
            }
        }
    }

    /// Apply light intensities from config.
    pub fn apply_lighting(&mut self, render: &RenderConfig) {
        self.ambient.intensity = render.ambient_intensity;
        self.directional.intensity = render.directional_intensity;
    }

    /// Resize and let the orbit control consume mouse events.
    pub fn handle_events(&mut self, viewport: Viewport, events: &mut [Event]) {
        self.camera.set_viewport(viewport);
        self.control.handle_events(&mut self.camera, events);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn lights(&self) -> [&dyn Light; 2] {
        [&self.ambient, &self.directional]
    }

    /// Lit meshes: player and obstacles.
    pub fn models(&self) -> impl Iterator<Item = &Gm<Mesh, PhysicalMaterial>> {
        self.models.iter()
    }

    /// Title text, if a font was loaded.
    pub fn title(&self) -> Option<&Gm<Mesh, ColorMaterial>> {
        self.title.as_ref()
    }
}

/// Cantarell Regular (OFL), used unless the config names another font.
static TITLE_FONT: &[u8] = include_bytes!("../../../assets/fonts/Cantarell-Regular.ttf");

/// Font bytes for the title: the configured file if it can be read, else the
/// bundled font.
fn title_font(render: &RenderConfig) -> Cow<'static, [u8]> {
    let Some(path) = render.font_path.as_deref() else {
        return Cow::Borrowed(TITLE_FONT);
    };

    match read_font(path) {
        Ok(bytes) => {
            log::info!("Loaded title font from {}", path.display());
            Cow::Owned(bytes)
        }
        Err(e) => {
            log::warn!("{e}, using bundled font");
            Cow::Borrowed(TITLE_FONT)
        }
    }
}

fn read_font(path: &Path) -> Result<Vec<u8>, AssetError> {
    std::fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn title_mesh(font: &[u8], text: &str) -> Result<CpuMesh, AssetError> {
    let generator = TextGenerator::new(font, 0, 64.0)?;
    Ok(generator.generate(text, TextLayoutOptions::default()))
}

/// Mesh the title text above the track.
fn build_title(context: &Context, render: &RenderConfig) -> Result<Gm<Mesh, ColorMaterial>, AssetError> {
    let font = title_font(render);
    let cpu_mesh = match title_mesh(&font, &render.title) {
        Ok(mesh) => mesh,
        Err(e) if render.font_path.is_some() => {
            log::warn!("Configured title font unusable ({e}), using bundled font");
            title_mesh(TITLE_FONT, &render.title)?
        }
        Err(e) => return Err(e),
    };

    let mut title = Gm::new(
        Mesh::new(context, &cpu_mesh),
        ColorMaterial {
            color: Srgba::new(255, 220, 120, 255),
            ..Default::default()
        },
    );

    // Glyph units are pixels at the generator size; shrink to world units
    title.set_transformation(
        Mat4::from_translation(vec3(-2.0, 3.0, -3.0))
            * Mat4::from_angle_y(degrees(-20.0))
            * Mat4::from_scale(1.0 / 64.0),
    );

    Ok(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_position_round_trip() {
        let mut placements = Placements::default();
        let player = placements.add(Vec3::ONE);
        let obstacle = placements.add(Vec3::splat(0.5));
        assert_ne!(player, obstacle);

        assert!(placements.set_position(obstacle, Vec3::new(7.0, 0.0, 0.0)));
        assert_eq!(placements.position(obstacle), Vec3::new(7.0, 0.0, 0.0));
        assert_eq!(placements.position(player), Vec3::ZERO);

        // same position again is not a move
        assert!(!placements.set_position(obstacle, Vec3::new(7.0, 0.0, 0.0)));
    }

    #[test]
    fn test_transformation_places_object() {
        let mut placements = Placements::default();
        let handle = placements.add(Vec3::splat(0.5));
        placements.set_position(handle, Vec3::new(3.0, 2.0, -1.0));
        placements.set_spin(handle, 1.0);

        let m = placements.transformation(handle);
        assert!((m.w.x - 3.0).abs() < 1e-6);
        assert!((m.w.y - 2.0).abs() < 1e-6);
        assert!((m.w.z + 1.0).abs() < 1e-6);
        // spin is about y, so the y axis keeps the scale
        assert!((m.y.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_bundled_font_meshes_title() {
        let mesh = title_mesh(TITLE_FONT, "Donut Runner").unwrap();
        assert!(mesh.positions.len() > 0);
    }

    #[test]
    fn test_default_uses_bundled_font() {
        let render = RenderConfig::default();
        assert_eq!(title_font(&render).as_ref(), TITLE_FONT);
    }

    #[test]
    fn test_unreadable_font_falls_back() {
        let render = RenderConfig {
            font_path: Some("does/not/exist.ttf".into()),
            ..Default::default()
        };
        assert_eq!(title_font(&render).as_ref(), TITLE_FONT);
    }
}
