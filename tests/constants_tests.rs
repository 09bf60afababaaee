// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn cameras_see_their_scenes() {
    // Fog must end before the far plane so distant stars fade out
    assert!(BG_FOG_NEAR < BG_FOG_FAR);
    assert!(BG_FOG_FAR < BG_CAMERA_FAR);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < HERO_CAMERA_Z);

    // Drifting solids and stars stay in front of the far plane
    assert!(BG_CAMERA_Z + DRIFT_BOUND < BG_CAMERA_FAR);
    assert!(BG_CAMERA_Z + STAR_SPREAD < BG_CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn drift_spawns_inside_bounce_volume() {
    assert!(DRIFT_SPAWN_SPREAD * 0.5 <= DRIFT_BOUND);
    assert!(DRIFT_TETRA_SPEED * 0.5 < DRIFT_BOUND);
    assert!(DRIFT_CUBE_SPEED < DRIFT_TETRA_SPEED);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tone_envelope_is_a_decay() {
    // Exponential ramps cannot reach zero
    assert!(TONE_GAIN_END > 0.0);
    assert!(TONE_GAIN_END < TONE_GAIN_START);
    assert!(TONE_DURATION_SEC > 0.0);
    assert!(TONE_FREQ_MIN_HZ > 20.0 && TONE_FREQ_MIN_HZ + TONE_FREQ_SPAN_HZ < 20_000.0);
}

#[test]
fn palettes_cover_every_face() {
    assert_eq!(TETRA_PALETTE.len(), 4);
    assert_eq!(HERO_PYRAMID_PALETTE.len(), 4);
    assert_eq!(CUBE_PALETTE.len(), 6);
    assert!(STAR_PALETTE.iter().all(|&c| c <= 0xffffff));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn glow_shells_enclose_their_solids() {
    assert!(HERO_PYRAMID_GLOW_SCALE > 1.0);
    assert!(HERO_CUBE_GLOW_SCALE > 1.0);
    assert!(HERO_PYRAMID_GLOW_OPACITY > 0.0 && HERO_PYRAMID_GLOW_OPACITY < 1.0);
    assert!(HERO_CUBE_GLOW_OPACITY > 0.0 && HERO_CUBE_GLOW_OPACITY < 1.0);
}

#[test]
fn light_counts_fit_the_shader_block() {
    // solids.wgsl holds at most 8 point lights
    assert!(BG_LIGHTS.len() <= 8);
    assert!(HERO_LIGHTS.len() <= 8);
}
