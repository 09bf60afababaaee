// Host-side tests for the per-frame motion math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod motion {
    include!("../src/motion.rs");
}

use glam::Vec3;
use motion::*;

#[test]
fn bounce_flips_velocity_past_the_wall() {
    let mut pos = Vec3::new(99.0, 0.0, 0.0);
    let mut vel = Vec3::new(2.0, 0.0, 0.0);
    integrate_bounce(&mut pos, &mut vel, 100.0);
    assert_eq!(pos.x, 101.0); // not clamped
    assert_eq!(vel.x, -2.0);
}

#[test]
fn bounce_keeps_velocity_on_the_wall() {
    let mut pos = Vec3::new(98.0, -98.0, 0.0);
    let mut vel = Vec3::new(2.0, -2.0, 0.5);
    integrate_bounce(&mut pos, &mut vel, 100.0);
    assert_eq!(pos, Vec3::new(100.0, -100.0, 0.5));
    assert_eq!(vel, Vec3::new(2.0, -2.0, 0.5));
}

#[test]
fn bounce_only_touches_offending_axes() {
    let mut pos = Vec3::new(0.0, -100.0, 50.0);
    let mut vel = Vec3::new(0.1, -0.1, 0.1);
    integrate_bounce(&mut pos, &mut vel, 100.0);
    assert_eq!(vel, Vec3::new(0.1, 0.1, 0.1));
}

#[test]
fn bounced_solid_returns_inside_bound() {
    let bound = 100.0;
    let mut pos = Vec3::new(95.0, -95.0, 0.0);
    let mut vel = Vec3::new(0.09, -0.07, 0.05);
    for _ in 0..10_000 {
        integrate_bounce(&mut pos, &mut vel, bound);
        for axis in 0..3 {
            assert!(
                pos[axis].abs() <= bound + vel[axis].abs() + 1e-4,
                "axis {} escaped: {}",
                axis,
                pos[axis]
            );
        }
    }
}

#[test]
fn star_orbits_pointer_offset_center() {
    let p = star_position(0.0, 10.0, -5.0, PointerState::default(), 0.0);
    assert!((p - Vec3::new(10.0, 0.0, -5.0)).length() < 1e-5);

    let pointer = PointerState::new(0.5, -1.0);
    let angle = std::f32::consts::FRAC_PI_2;
    let t = 1.0;
    let p = star_position(angle, 20.0, 3.0, pointer, t);
    let expected = Vec3::new(
        angle.cos() * 20.0 + 0.5 * 20.0,
        angle.sin() * 20.0 - 20.0,
        3.0 + (t * 0.5).sin() * 0.5,
    );
    assert!((p - expected).length() < 1e-4);
}

#[test]
fn ease_moves_strictly_between_current_and_target() {
    let cases = [(0.0, 1.0), (1.0, -2.0), (-0.3, 3.14), (5.0, 5.0001)];
    for (cur, target) in cases {
        let next = ease_toward(cur, target, 0.1);
        let (lo, hi) = if cur < target { (cur, target) } else { (target, cur) };
        assert!(next > lo && next < hi, "{} -> {} gave {}", cur, target, next);
        assert!((next - (cur + (target - cur) * 0.1)).abs() < 1e-6);
    }
    assert_eq!(ease_toward(2.0, 2.0, 0.1), 2.0);
}

#[test]
fn ease_converges_without_overshoot() {
    let target = 1.5;
    let mut x = 0.0_f32;
    for _ in 0..200 {
        let next = ease_toward(x, target, 0.1);
        assert!(next >= x && next <= target);
        x = next;
    }
    assert!((x - target).abs() < 1e-3);
}

#[test]
fn pointer_normalization() {
    let center = PointerState::from_client(400.0, 300.0, 800.0, 600.0);
    assert_eq!(center, PointerState::new(0.0, 0.0));

    let top_left = PointerState::from_client(0.0, 0.0, 800.0, 600.0);
    assert_eq!(top_left, PointerState::new(-1.0, 1.0));

    let bottom_right = PointerState::from_client(800.0, 600.0, 800.0, 600.0);
    assert_eq!(bottom_right, PointerState::new(1.0, -1.0));
}

#[test]
fn pointer_from_degenerate_window_is_centered() {
    assert_eq!(
        PointerState::from_client(10.0, 10.0, 0.0, 600.0),
        PointerState::default()
    );
}

#[test]
fn clock_advances_by_fixed_step() {
    let mut clock = Clock::default();
    for _ in 0..100 {
        clock.advance();
    }
    assert!((clock.t - 1.0).abs() < 1e-4);
}

#[test]
fn hex_to_linear_endpoints() {
    assert_eq!(hex_to_linear(0x000000), Vec3::ZERO);
    let white = hex_to_linear(0xffffff);
    assert!((white - Vec3::ONE).length() < 1e-5);
    let cyan = hex_to_linear(0x00ffff);
    assert_eq!(cyan.x, 0.0);
    assert!((cyan.y - 1.0).abs() < 1e-5);
    // mid-grey is darker in linear space
    assert!(hex_to_linear(0x808080).x < 0.25);
}

#[test]
fn model_matrix_places_origin_at_position() {
    let m = model_matrix(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.3, 0.2, 0.1), 1.0);
    let origin = m.transform_point3(Vec3::ZERO);
    assert!((origin - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-5);
}
