// Scene model consumed by the renderer.
//
// A [`Scene`] is built once per mount and mutated in place every frame; the
// object list never changes after construction, so the renderer can pair GPU
// resources with objects by position.

use crate::constants::{CAMERA_FOV_DEG, CAMERA_NEAR, DRIFT_BOUND, DRIFT_POINTER_SPIN};
use crate::geometry::Shape;
use crate::motion::{self, PointerState};
use glam::{Mat4, Vec3};
use smallvec::SmallVec;

/// Perspective camera looking down -Z from `position`.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(aspect: f32, far: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, z),
            fov_y_deg: CAMERA_FOV_DEG,
            aspect,
            near: CAMERA_NEAR,
            far,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    /// Ignores zero-sized dimensions so a hidden container keeps the last aspect.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

/// Something whose drawable size can be changed, e.g. a renderer surface.
pub trait Viewport {
    fn set_viewport_size(&mut self, width: u32, height: u32);
}

/// Resize handling shared by both scenes: camera aspect first, then the
/// drawable size, once each.
pub fn apply_resize<V: Viewport + ?Sized>(
    camera: &mut Camera,
    viewport: &mut V,
    width: u32,
    height: u32,
) {
    camera.set_aspect(width, height);
    viewport.set_viewport_size(width, height);
}

#[derive(Clone, Copy, Debug)]
pub struct Fog {
    pub color: u32,
    pub near: f32,
    pub far: f32,
}

#[derive(Clone, Copy, Debug)]
pub enum Light {
    Ambient {
        color: u32,
        intensity: f32,
    },
    Point {
        color: u32,
        intensity: f32,
        distance: f32,
        position: Vec3,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub emissive: f32,
    pub metalness: f32,
    pub roughness: f32,
}

/// Translucent back-face shell drawn around a solid, inheriting its transform.
#[derive(Clone, Copy, Debug)]
pub struct GlowShell {
    pub scale: f32,
    pub color: u32,
    pub opacity: f32,
}

#[derive(Clone, Debug)]
pub struct Solid {
    pub shape: Shape,
    pub position: Vec3,
    pub rotation: Vec3,
    pub palette: SmallVec<[u32; 6]>,
    pub material: Material,
    pub glow: Option<GlowShell>,
}

impl Solid {
    pub fn model_matrix(&self) -> Mat4 {
        motion::model_matrix(self.position, self.rotation, 1.0)
    }

    pub fn face_colors(&self) -> Vec<Vec3> {
        self.palette.iter().map(|&hex| motion::hex_to_linear(hex)).collect()
    }
}

/// A solid that drifts through a cubic volume, bouncing off its walls.
#[derive(Clone, Debug)]
pub struct DriftingSolid {
    pub solid: Solid,
    pub velocity: Vec3,
    pub spin: Vec3,
}

impl DriftingSolid {
    pub fn step(&mut self, pointer: PointerState) {
        motion::integrate_bounce(&mut self.solid.position, &mut self.velocity, DRIFT_BOUND);
        let r = &mut self.solid.rotation;
        r.x += self.spin.x + pointer.y * DRIFT_POINTER_SPIN;
        r.y += self.spin.y + pointer.x * DRIFT_POINTER_SPIN;
        r.z += self.spin.z;
    }
}

/// Flat xyz position buffer plus per-point colors for a point swarm.
///
/// `dirty` is raised whenever `positions` changes and cleared by the renderer
/// after upload.
#[derive(Clone, Debug)]
pub struct PointBuffer {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub rotation: Vec3,
    pub size: f32,
    pub opacity: f32,
    pub dirty: bool,
}

impl PointBuffer {
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn spin(&mut self, dx: f32, dy: f32) {
        self.rotation.x += dx;
        self.rotation.y += dy;
    }

    pub fn model_matrix(&self) -> Mat4 {
        motion::model_matrix(Vec3::ZERO, self.rotation, 1.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Star {
    pub angle: f32,
    pub radius: f32,
    pub speed: f32,
    pub base_z: f32,
    pub color: u32,
}

/// Stars orbiting a pointer-offset center.
#[derive(Clone, Debug)]
pub struct Starfield {
    pub stars: Vec<Star>,
    pub points: PointBuffer,
}

impl Starfield {
    /// Advance every orbit and rewrite the whole position buffer.
    pub fn step(&mut self, pointer: PointerState, t: f32) {
        for (star, slot) in self
            .stars
            .iter_mut()
            .zip(self.points.positions.chunks_exact_mut(3))
        {
            star.angle += star.speed;
            let p = motion::star_position(star.angle, star.radius, star.base_z, pointer, t);
            slot.copy_from_slice(&p.to_array());
        }
        self.points.dirty = true;
    }
}

/// Static point cloud; only its swarm rotation changes.
#[derive(Clone, Debug)]
pub struct ParticleCloud {
    pub points: PointBuffer,
}

/// Everything a scene can hold.
#[derive(Clone, Debug)]
pub enum VisualObject {
    Solid(Solid),
    Drifting(DriftingSolid),
    Starfield(Starfield),
    Particles(ParticleCloud),
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub camera: Camera,
    pub background: u32,
    pub fog: Option<Fog>,
    pub lights: Vec<Light>,
    pub objects: Vec<VisualObject>,
}

impl Scene {
    pub fn new(camera: Camera, background: u32) -> Self {
        Self {
            camera,
            background,
            fog: None,
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }

    pub fn add(&mut self, object: VisualObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Solids in draw order, drifting or fixed.
    pub fn solids(&self) -> impl Iterator<Item = &Solid> {
        self.objects.iter().filter_map(|o| match o {
            VisualObject::Solid(s) => Some(s),
            VisualObject::Drifting(d) => Some(&d.solid),
            _ => None,
        })
    }

    pub fn point_buffers(&self) -> impl Iterator<Item = &PointBuffer> {
        self.objects.iter().filter_map(|o| match o {
            VisualObject::Starfield(s) => Some(&s.points),
            VisualObject::Particles(p) => Some(&p.points),
            _ => None,
        })
    }

    pub fn point_buffers_mut(&mut self) -> impl Iterator<Item = &mut PointBuffer> {
        self.objects.iter_mut().filter_map(|o| match o {
            VisualObject::Starfield(s) => Some(&mut s.points),
            VisualObject::Particles(p) => Some(&mut p.points),
            _ => None,
        })
    }

    pub fn solid_mut(&mut self, index: usize) -> Option<&mut Solid> {
        match self.objects.get_mut(index)? {
            VisualObject::Solid(s) => Some(s),
            VisualObject::Drifting(d) => Some(&mut d.solid),
            _ => None,
        }
    }
}
