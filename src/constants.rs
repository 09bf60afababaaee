/// Scene tuning constants shared by the background and hero scenes.
///
/// Colors are `0xRRGGBB` hex values; distances are world units; per-frame
/// rates are applied once per display frame, not scaled by elapsed time.
// Shared palette
pub const SCENE_BACKGROUND_HEX: u32 = 0x0a0e27;
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;

// Per-frame clock step used to phase secondary motion
pub const CLOCK_STEP: f32 = 0.01;

// ---------------- Background scene ----------------
pub const BG_MOUNT_ID: &str = "3d-background";
pub const BG_CAMERA_FAR: f32 = 10_000.0;
pub const BG_CAMERA_Z: f32 = 50.0;
pub const BG_FOG_NEAR: f32 = 150.0;
pub const BG_FOG_FAR: f32 = 500.0;

// Parallax: camera x/y follow the pointer by this factor
pub const BG_CAMERA_PARALLAX: f32 = 10.0;

// Starfield
pub const STAR_COUNT: usize = 300;
pub const STAR_SPREAD: f32 = 400.0; // initial cube edge
pub const STAR_SPEED_MIN: f32 = 0.005;
pub const STAR_SPEED_SPAN: f32 = 0.03;
pub const STAR_RADIUS_MIN: f32 = 10.0;
pub const STAR_RADIUS_SPAN: f32 = 30.0;
pub const STAR_POINTER_OFFSET: f32 = 20.0; // orbit center shift per unit pointer
pub const STAR_Z_WOBBLE_RATE: f32 = 0.5;
pub const STAR_Z_WOBBLE_AMP: f32 = 0.5;
pub const STAR_SIZE: f32 = 1.5;
pub const STAR_OPACITY: f32 = 0.8;
pub const STAR_PALETTE: [u32; 4] = [0xffffff, 0xccddff, 0x99ccff, 0x00ffff];

// Particle cloud
pub const PARTICLE_COUNT: usize = 200;
pub const PARTICLE_SPREAD: f32 = 300.0;
pub const PARTICLE_HEX: u32 = 0x00ffff;
pub const PARTICLE_SIZE: f32 = 0.5;
pub const PARTICLE_OPACITY: f32 = 0.6;

// Slow spin applied to both point swarms each frame (x, y)
pub const SWARM_SPIN: [f32; 2] = [0.0001, 0.0002];

// Drifting solids
pub const DRIFT_TETRA_COUNT: usize = 8;
pub const DRIFT_CUBE_COUNT: usize = 6;
pub const DRIFT_TETRA_RADIUS: f32 = 2.0;
pub const DRIFT_CUBE_SIZE: f32 = 2.5;
pub const DRIFT_SPAWN_SPREAD: f32 = 200.0;
pub const DRIFT_BOUND: f32 = 100.0;
pub const DRIFT_TETRA_SPEED: f32 = 0.2; // full span, centered on zero
pub const DRIFT_CUBE_SPEED: f32 = 0.15;
pub const DRIFT_SPIN_SPAN: f32 = 0.01;
pub const DRIFT_POINTER_SPIN: f32 = 0.0002;
pub const DRIFT_EMISSIVE: f32 = 0.3;
pub const DRIFT_METALNESS: f32 = 0.6;
pub const DRIFT_ROUGHNESS: f32 = 0.3;

pub const TETRA_PALETTE: [u32; 4] = [0x00ffff, 0xff00ff, 0x00ff88, 0xffff00];
pub const CUBE_PALETTE: [u32; 6] = [0xff0080, 0x00ffff, 0xff00ff, 0x00ff88, 0xffff00, 0xff6600];

// Lighting
pub const BG_AMBIENT_INTENSITY: f32 = 0.2;
pub const BG_LIGHT_INTENSITY: f32 = 1.0;
pub const BG_LIGHT_DISTANCE: f32 = 300.0;
pub const BG_LIGHTS: [([f32; 3], u32); 4] = [
    ([100.0, 100.0, 100.0], 0x00ffff),
    ([-100.0, 100.0, 100.0], 0xff00ff),
    ([100.0, -100.0, 100.0], 0x00ff88),
    ([-100.0, -100.0, 100.0], 0xffff00),
];

// ---------------- Hero scene ----------------
pub const HERO_MOUNT_ID: &str = "threejs-container";
pub const HERO_CAMERA_FAR: f32 = 1000.0;
pub const HERO_CAMERA_Z: f32 = 4.0;

pub const HERO_PYRAMID_RADIUS: f32 = 1.0;
pub const HERO_PYRAMID_X: f32 = -1.5;
pub const HERO_PYRAMID_PALETTE: [u32; 4] = [0x00ffff, 0xff00ff, 0x00ff00, 0xffff00];
pub const HERO_PYRAMID_GLOW_SCALE: f32 = 1.1;
pub const HERO_PYRAMID_GLOW_HEX: u32 = 0x00ffff;
pub const HERO_PYRAMID_GLOW_OPACITY: f32 = 0.2;

pub const HERO_CUBE_SIZE: f32 = 1.0;
pub const HERO_CUBE_X: f32 = 1.5;
pub const HERO_CUBE_GLOW_SCALE: f32 = 1.15;
pub const HERO_CUBE_GLOW_HEX: u32 = 0xff00ff;
pub const HERO_CUBE_GLOW_OPACITY: f32 = 0.15;

pub const HERO_EMISSIVE: f32 = 0.5;
pub const HERO_METALNESS: f32 = 0.7;
pub const HERO_ROUGHNESS: f32 = 0.2;

// Pyramid eases toward the pointer-driven target: new = old + (target - old) * k
pub const HERO_EASE: f32 = 0.1;
pub const HERO_PYRAMID_SPIN_Z: f32 = 0.001;
// Cube follows the raw pointer offset
pub const HERO_CUBE_POINTER_SPIN: f32 = 0.015;
pub const HERO_CUBE_SPIN_Z: f32 = 0.002;
pub const HERO_CUBE_BOB_RATE: f64 = 0.001; // per wall-clock millisecond
pub const HERO_CUBE_BOB_AMP: f32 = 0.3;

pub const HERO_AMBIENT_INTENSITY: f32 = 0.4;
pub const HERO_LIGHT_INTENSITY: f32 = 1.5;
pub const HERO_LIGHT_DISTANCE: f32 = 100.0;
pub const HERO_LIGHTS: [([f32; 3], u32); 5] = [
    ([5.0, 5.0, 5.0], 0x00ffff),
    ([-5.0, 5.0, 5.0], 0xff00ff),
    ([5.0, -5.0, 5.0], 0x00ff88),
    ([-5.0, -5.0, 5.0], 0xffff00),
    ([0.0, 0.0, 5.0], 0xff0080),
];

// Click tone
pub const TONE_FREQ_MIN_HZ: f32 = 200.0;
pub const TONE_FREQ_SPAN_HZ: f32 = 600.0;
pub const TONE_GAIN_START: f32 = 0.3;
pub const TONE_GAIN_END: f32 = 0.01;
pub const TONE_DURATION_SEC: f64 = 0.2;
