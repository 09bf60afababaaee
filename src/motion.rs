// Per-frame motion math shared by both scenes.
//
// Everything here is plain data and arithmetic so it can be exercised on the
// host without a browser.

use crate::constants::{
    CLOCK_STEP, STAR_POINTER_OFFSET, STAR_Z_WOBBLE_AMP, STAR_Z_WOBBLE_RATE,
};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Last observed pointer position in normalized device units.
///
/// `x` grows to the right and `y` grows upward; both are roughly in \[-1, 1\]
/// while the pointer is inside the window.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Normalize client pixel coordinates against the window size.
    /// A degenerate window reports the centered pointer.
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self::new(
            (client_x / width) * 2.0 - 1.0,
            -(client_y / height) * 2.0 + 1.0,
        )
    }
}

/// Frame-count clock: advances by a fixed step per frame, not by wall time.
#[derive(Default, Clone, Copy, Debug)]
pub struct Clock {
    pub t: f32,
}

impl Clock {
    #[inline]
    pub fn advance(&mut self) -> f32 {
        self.t += CLOCK_STEP;
        self.t
    }
}

/// Integrate `position` by `velocity`, then reflect every velocity component
/// whose coordinate left `[-bound, bound]`.
///
/// The position is not clamped, so it may overshoot by one frame's step.
#[inline]
pub fn integrate_bounce(position: &mut Vec3, velocity: &mut Vec3, bound: f32) {
    *position += *velocity;
    for axis in 0..3 {
        if position[axis] > bound || position[axis] < -bound {
            velocity[axis] = -velocity[axis];
        }
    }
}

/// Position of a star on its orbit for the given frame.
///
/// The orbit center follows the pointer; depth wobbles with the clock.
#[inline]
pub fn star_position(angle: f32, radius: f32, base_z: f32, pointer: PointerState, t: f32) -> Vec3 {
    Vec3::new(
        angle.cos() * radius + pointer.x * STAR_POINTER_OFFSET,
        angle.sin() * radius + pointer.y * STAR_POINTER_OFFSET,
        base_z + (t * STAR_Z_WOBBLE_RATE).sin() * STAR_Z_WOBBLE_AMP,
    )
}

/// One step of exponential smoothing toward `target`.
#[inline]
pub fn ease_toward(current: f32, target: f32, k: f32) -> f32 {
    current + (target - current) * k
}

/// Model matrix for a translation, XYZ Euler rotation and uniform scale.
#[inline]
pub fn model_matrix(position: Vec3, rotation: Vec3, scale: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(scale),
        Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z),
        position,
    )
}

/// Convert a `0xRRGGBB` sRGB color into linear RGB.
pub fn hex_to_linear(hex: u32) -> Vec3 {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec3::new(channel(16), channel(8), channel(0))
}
