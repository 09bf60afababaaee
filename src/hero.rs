// Hero-section scene: one pyramid and one cube, each wrapped in a glow shell.

use crate::constants::*;
use crate::geometry::Shape;
use crate::motion::{self, PointerState};
use crate::scene::{Camera, GlowShell, Light, Material, Scene, Solid, VisualObject};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;
use std::f32::consts::PI;

pub struct HeroScene {
    pub scene: Scene,
    pub pointer: PointerState,
    /// Pyramid target rotation: `x` is pitch, `y` is yaw.
    pub target: Vec2,
    pyramid: usize,
    cube: usize,
}

impl HeroScene {
    pub fn new(aspect: f32) -> Self {
        let camera = Camera::new(aspect, HERO_CAMERA_FAR, HERO_CAMERA_Z);
        let mut scene = Scene::new(camera, SCENE_BACKGROUND_HEX);
        let material = Material {
            emissive: HERO_EMISSIVE,
            metalness: HERO_METALNESS,
            roughness: HERO_ROUGHNESS,
        };

        let pyramid = scene.add(VisualObject::Solid(Solid {
            shape: Shape::Tetrahedron {
                radius: HERO_PYRAMID_RADIUS,
            },
            position: Vec3::new(HERO_PYRAMID_X, 0.0, 0.0),
            rotation: Vec3::ZERO,
            palette: SmallVec::from_slice(&HERO_PYRAMID_PALETTE),
            material,
            glow: Some(GlowShell {
                scale: HERO_PYRAMID_GLOW_SCALE,
                color: HERO_PYRAMID_GLOW_HEX,
                opacity: HERO_PYRAMID_GLOW_OPACITY,
            }),
        }));
        let cube = scene.add(VisualObject::Solid(Solid {
            shape: Shape::Cuboid {
                size: HERO_CUBE_SIZE,
            },
            position: Vec3::new(HERO_CUBE_X, 0.0, 0.0),
            rotation: Vec3::ZERO,
            palette: SmallVec::from_slice(&CUBE_PALETTE),
            material,
            glow: Some(GlowShell {
                scale: HERO_CUBE_GLOW_SCALE,
                color: HERO_CUBE_GLOW_HEX,
                opacity: HERO_CUBE_GLOW_OPACITY,
            }),
        }));

        scene.add_light(Light::Ambient {
            color: 0xffffff,
            intensity: HERO_AMBIENT_INTENSITY,
        });
        for (pos, color) in HERO_LIGHTS {
            scene.add_light(Light::Point {
                color,
                intensity: HERO_LIGHT_INTENSITY,
                distance: HERO_LIGHT_DISTANCE,
                position: Vec3::from(pos),
            });
        }

        Self {
            scene,
            pointer: PointerState::default(),
            target: Vec2::ZERO,
            pyramid,
            cube,
        }
    }

    /// Record the pointer and derive the pyramid's target rotation from it.
    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
        self.target = Vec2::new(pointer.y * PI, pointer.x * PI);
    }

    #[allow(dead_code)]
    pub fn pyramid(&self) -> Option<&Solid> {
        self.solid(self.pyramid)
    }

    #[allow(dead_code)]
    pub fn cube(&self) -> Option<&Solid> {
        self.solid(self.cube)
    }

    #[allow(dead_code)]
    fn solid(&self, index: usize) -> Option<&Solid> {
        match self.scene.objects.get(index)? {
            VisualObject::Solid(s) => Some(s),
            _ => None,
        }
    }

    /// Advance one display frame; `now_ms` is wall-clock milliseconds.
    pub fn step(&mut self, now_ms: f64) {
        let (target, pointer) = (self.target, self.pointer);
        if let Some(pyramid) = self.scene.solid_mut(self.pyramid) {
            let r = &mut pyramid.rotation;
            r.x = motion::ease_toward(r.x, target.x, HERO_EASE);
            r.y = motion::ease_toward(r.y, target.y, HERO_EASE);
            r.z += HERO_PYRAMID_SPIN_Z;
        }
        if let Some(cube) = self.scene.solid_mut(self.cube) {
            cube.rotation.x += pointer.y * HERO_CUBE_POINTER_SPIN;
            cube.rotation.y += pointer.x * HERO_CUBE_POINTER_SPIN;
            cube.rotation.z += HERO_CUBE_SPIN_Z;
            cube.position.y = (now_ms * HERO_CUBE_BOB_RATE).sin() as f32 * HERO_CUBE_BOB_AMP;
        }
    }
}
