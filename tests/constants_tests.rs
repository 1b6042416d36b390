// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_configuration_matches_published_values() {
    assert_eq!(PARTICLE_COUNT, 50);
    assert_eq!(NOISE_COUNT, 20);
    assert_eq!(REVEAL_THRESHOLD, 0.15);
    assert_eq!(HEADER_SCROLL_THRESHOLD, 50.0);
    assert_eq!(FORM_SENDING_MS, 1500.0);
    assert_eq!(FORM_SENT_MS, 3000.0);
    assert_eq!(CAMERA_FOV_DEG, 45.0);
    assert_eq!(FOG_DENSITY, 0.05);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacities_and_alphas_are_fractions() {
    for a in [
        PARTICLE_ALPHA,
        TRAIL_FILL_ALPHA,
        NOISE_BRIGHT_OPACITY,
        NOISE_DIM_OPACITY,
        GLOW_OPACITY,
    ] {
        assert!(a > 0.0 && a <= 1.0);
    }
    assert!(NOISE_BRIGHT_OPACITY > NOISE_DIM_OPACITY);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_layout_keeps_noise_outside_core() {
    // outer shell radius is 2.0
    assert!(NOISE_RING_MIN > 2.0);
    assert!(CAMERA_Z > NOISE_RING_MIN + NOISE_RING_SPAN);
    assert!(CAMERA_NEAR < CAMERA_Z && CAMERA_FAR > CAMERA_Z);
    assert!(GLOW_PULSE < GLOW_BASE_SCALE);
}

#[test]
fn hex_rgb_unpacks_channels() {
    assert_eq!(hex_rgb(0xFF0000), [1.0, 0.0, 0.0]);
    assert_eq!(hex_rgb(0x000000), [0.0, 0.0, 0.0]);
    let c = hex_rgb(CORE_COLOR);
    assert!((c[0] - 46.0 / 255.0).abs() < 1e-6);
    assert!((c[1] - 92.0 / 255.0).abs() < 1e-6);
    assert!((c[2] - 1.0).abs() < 1e-6);
}
