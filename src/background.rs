// Full-viewport decorative scene: starfield, drifting solids and a particle
// cloud that react weakly to the pointer.

use crate::constants::*;
use crate::geometry::Shape;
use crate::motion::{self, Clock, PointerState};
use crate::scene::{
    Camera, DriftingSolid, Fog, Light, Material, ParticleCloud, PointBuffer, Scene, Solid, Star,
    Starfield, VisualObject,
};
use glam::Vec3;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::{PI, TAU};

pub struct BackgroundScene {
    pub scene: Scene,
    pub pointer: PointerState,
    pub clock: Clock,
}

impl BackgroundScene {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, aspect: f32) -> Self {
        let camera = Camera::new(aspect, BG_CAMERA_FAR, BG_CAMERA_Z);
        let mut scene = Scene::new(camera, SCENE_BACKGROUND_HEX);
        scene.fog = Some(Fog {
            color: SCENE_BACKGROUND_HEX,
            near: BG_FOG_NEAR,
            far: BG_FOG_FAR,
        });

        scene.add(VisualObject::Starfield(build_starfield(rng)));
        for _ in 0..DRIFT_TETRA_COUNT {
            let shape = Shape::Tetrahedron {
                radius: DRIFT_TETRA_RADIUS,
            };
            let solid = drifting_solid(rng, shape, &TETRA_PALETTE, DRIFT_TETRA_SPEED);
            scene.add(VisualObject::Drifting(solid));
        }
        for _ in 0..DRIFT_CUBE_COUNT {
            let shape = Shape::Cuboid {
                size: DRIFT_CUBE_SIZE,
            };
            let solid = drifting_solid(rng, shape, &CUBE_PALETTE, DRIFT_CUBE_SPEED);
            scene.add(VisualObject::Drifting(solid));
        }
        scene.add(VisualObject::Particles(build_particles(rng)));

        scene.add_light(Light::Ambient {
            color: 0xffffff,
            intensity: BG_AMBIENT_INTENSITY,
        });
        for (pos, color) in BG_LIGHTS {
            scene.add_light(Light::Point {
                color,
                intensity: BG_LIGHT_INTENSITY,
                distance: BG_LIGHT_DISTANCE,
                position: Vec3::from(pos),
            });
        }

        Self {
            scene,
            pointer: PointerState::default(),
            clock: Clock::default(),
        }
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    /// Advance the scene by one display frame (rendering excluded).
    pub fn step(&mut self) {
        let t = self.clock.advance();
        let pointer = self.pointer;
        for object in &mut self.scene.objects {
            match object {
                VisualObject::Starfield(field) => {
                    field.step(pointer, t);
                    field.points.spin(SWARM_SPIN[0], SWARM_SPIN[1]);
                }
                VisualObject::Particles(cloud) => {
                    cloud.points.spin(SWARM_SPIN[0], SWARM_SPIN[1]);
                }
                VisualObject::Drifting(solid) => solid.step(pointer),
                VisualObject::Solid(_) => {}
            }
        }
        let cam = &mut self.scene.camera.position;
        cam.x = pointer.x * BG_CAMERA_PARALLAX;
        cam.y = pointer.y * BG_CAMERA_PARALLAX;
    }
}

#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

fn random_cube_point<R: Rng + ?Sized>(rng: &mut R, span: f32) -> Vec3 {
    Vec3::new(centered(rng, span), centered(rng, span), centered(rng, span))
}

fn build_starfield<R: Rng + ?Sized>(rng: &mut R) -> Starfield {
    let mut stars = Vec::with_capacity(STAR_COUNT);
    let mut positions = Vec::with_capacity(STAR_COUNT * 3);
    let mut colors = Vec::with_capacity(STAR_COUNT * 3);
    for _ in 0..STAR_COUNT {
        let start = random_cube_point(rng, STAR_SPREAD);
        let color = STAR_PALETTE[rng.gen_range(0..STAR_PALETTE.len())];
        stars.push(Star {
            angle: rng.gen::<f32>() * TAU,
            radius: rng.gen::<f32>() * STAR_RADIUS_SPAN + STAR_RADIUS_MIN,
            speed: rng.gen::<f32>() * STAR_SPEED_SPAN + STAR_SPEED_MIN,
            base_z: start.z,
            color,
        });
        positions.extend_from_slice(&start.to_array());
        // vertex colors are raw channel values, unlike material colors
        colors.extend_from_slice(&srgb_hex(color));
    }
    Starfield {
        stars,
        points: PointBuffer {
            positions,
            colors,
            rotation: Vec3::ZERO,
            size: STAR_SIZE,
            opacity: STAR_OPACITY,
            dirty: true,
        },
    }
}

fn build_particles<R: Rng + ?Sized>(rng: &mut R) -> ParticleCloud {
    let mut positions = Vec::with_capacity(PARTICLE_COUNT * 3);
    for _ in 0..PARTICLE_COUNT {
        positions.extend_from_slice(&random_cube_point(rng, PARTICLE_SPREAD).to_array());
    }
    let color = motion::hex_to_linear(PARTICLE_HEX).to_array();
    let colors = color.repeat(PARTICLE_COUNT);
    ParticleCloud {
        points: PointBuffer {
            positions,
            colors,
            rotation: Vec3::ZERO,
            size: PARTICLE_SIZE,
            opacity: PARTICLE_OPACITY,
            dirty: true,
        },
    }
}

fn drifting_solid<R: Rng + ?Sized>(
    rng: &mut R,
    shape: Shape,
    palette: &[u32],
    speed_span: f32,
) -> DriftingSolid {
    let position = random_cube_point(rng, DRIFT_SPAWN_SPREAD);
    let rotation = Vec3::new(
        rng.gen::<f32>() * PI,
        rng.gen::<f32>() * PI,
        rng.gen::<f32>() * PI,
    );
    DriftingSolid {
        solid: Solid {
            shape,
            position,
            rotation,
            palette: SmallVec::from_slice(palette),
            material: Material {
                emissive: DRIFT_EMISSIVE,
                metalness: DRIFT_METALNESS,
                roughness: DRIFT_ROUGHNESS,
            },
            glow: None,
        },
        velocity: random_cube_point(rng, speed_span),
        spin: random_cube_point(rng, DRIFT_SPIN_SPAN),
    }
}

fn srgb_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
