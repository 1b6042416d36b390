// Host-side tests for the wireframe scene model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use site::constants::*;
use site::scene::*;

fn scene(seed: u64) -> WireframeScene {
    WireframeScene::new(&mut StdRng::seed_from_u64(seed))
}

#[test]
fn shell_rotation_is_a_pure_function_of_time() {
    let mut s = scene(1);
    s.update(3.25, PointerState::default());
    let first: Vec<Vec3> = s.shells.iter().map(|c| c.rotation).collect();
    s.update(10.0, PointerState { x: 0.3, y: -0.7 });
    s.update(3.25, PointerState::default());
    let again: Vec<Vec3> = s.shells.iter().map(|c| c.rotation).collect();
    assert_eq!(first, again);
    assert_eq!(first, shell_rotations(3.25).to_vec());
}

#[test]
fn shell_rates_match_layering() {
    let t = 2.0;
    let [nucleus, middle, outer] = shell_rotations(t);
    assert_eq!(nucleus, Vec3::new(0.0, 0.4, 0.2));
    assert!((middle.x - (t * 0.5_f32).sin() * 0.1).abs() < 1e-6);
    assert!((middle.y + 0.3).abs() < 1e-6);
    assert!((outer.y - 0.1).abs() < 1e-6);
}

#[test]
fn shells_get_bigger_and_fainter_outward() {
    let shells = core_shells();
    for pair in shells.windows(2) {
        assert!(pair[1].radius > pair[0].radius);
        assert!(pair[1].style.opacity < pair[0].style.opacity);
    }
    assert_eq!(shells[0].detail, 0);
    assert_eq!(shells[2].detail, 1);
}

#[test]
fn noise_float_height_has_no_path_dependence() {
    let mut a = scene(7);
    let mut b = scene(7);
    a.update(1.0, PointerState::default());
    a.update(9.5, PointerState::default());
    for t in [0.5_f32, 2.0, 4.75, 9.5] {
        b.update(t, PointerState::default());
    }
    for (sa, sb) in a.noise.iter().zip(&b.noise) {
        assert_eq!(sa.position.y, sb.position.y);
        let expected = sa.origin.y + NOISE_FLOAT_AMPLITUDE * (9.5 + sa.offset).sin();
        assert_eq!(sa.position.y, expected);
        // x/z never move
        assert_eq!(sa.position.x, sa.origin.x);
        assert_eq!(sa.position.z, sa.origin.z);
    }
}

#[test]
fn noise_origin_is_never_modified() {
    let mut s = scene(8);
    let origins: Vec<Vec3> = s.noise.iter().map(|n| n.origin).collect();
    for i in 0..500 {
        s.update(i as f32 * 0.016, PointerState::default());
    }
    let after: Vec<Vec3> = s.noise.iter().map(|n| n.origin).collect();
    assert_eq!(origins, after);
}

#[test]
fn noise_rotation_accumulates_per_update() {
    let mut s = scene(9);
    let start: Vec<Vec3> = s.noise.iter().map(|n| n.rotation).collect();
    let frames = 120;
    for i in 0..frames {
        s.update(i as f32 / 60.0, PointerState::default());
    }
    for (n, r0) in s.noise.iter().zip(start) {
        assert!((n.rotation.x - (r0.x + n.spin.x * frames as f32)).abs() < 1e-4);
        assert!((n.rotation.y - (r0.y + n.spin.y * frames as f32)).abs() < 1e-4);
        assert_eq!(n.rotation.z, r0.z);
    }
}

#[test]
fn noise_shapes_are_placed_on_the_ring() {
    let s = scene(10);
    assert_eq!(s.noise.len(), NOISE_COUNT);
    for n in &s.noise {
        let r = (n.origin.x * n.origin.x + n.origin.z * n.origin.z).sqrt();
        assert!(r >= NOISE_RING_MIN - 1e-4 && r <= NOISE_RING_MIN + NOISE_RING_SPAN + 1e-4);
        assert!(n.origin.y.abs() <= NOISE_VERTICAL_SPREAD * 0.5);
        assert!(n.spin.x.abs() <= NOISE_SPIN_RANGE * 0.5);
        assert!(n.spin.y.abs() <= NOISE_SPIN_RANGE * 0.5);
        assert!(n.drift_speed >= NOISE_DRIFT_MIN && n.drift_speed <= NOISE_DRIFT_MIN + NOISE_DRIFT_SPAN);
        assert!(n.offset >= 0.0 && n.offset < NOISE_PHASE_SPAN);
        assert!(n.rotation.x >= 0.0 && n.rotation.x <= std::f32::consts::PI);
        assert_eq!(n.rotation.z, 0.0);
    }
}

#[test]
fn random_choices_cover_every_kind_and_tier() {
    let mut kinds = std::collections::HashSet::new();
    let mut tiers = (false, false);
    for seed in 0..20 {
        for n in scene(seed).noise {
            kinds.insert(n.kind);
            match n.tier {
                OpacityTier::Bright => tiers.0 = true,
                OpacityTier::Dim => tiers.1 = true,
            }
        }
    }
    assert_eq!(kinds.len(), ShapeKind::ALL.len());
    assert!(tiers.0 && tiers.1);
}

#[test]
fn same_seed_builds_same_scene() {
    let a = scene(11);
    let b = scene(11);
    for (x, y) in a.noise.iter().zip(&b.noise) {
        assert_eq!(x.kind, y.kind);
        assert_eq!(x.origin, y.origin);
        assert_eq!(x.offset, y.offset);
    }
}

#[test]
fn pointer_tilt_is_small_and_proportional() {
    let mut s = scene(12);
    s.update(0.0, PointerState { x: 1.0, y: -1.0 });
    assert!((s.tilt.x - TILT_GAIN).abs() < 1e-6);
    assert!((s.tilt.y - TILT_GAIN).abs() < 1e-6);
    s.update(0.0, PointerState { x: -0.5, y: 0.5 });
    assert!((s.tilt.x + 0.5 * TILT_GAIN).abs() < 1e-6);
    assert!((s.tilt.y + 0.5 * TILT_GAIN).abs() < 1e-6);
    assert_eq!(s.tilt.z, 0.0);
}

#[test]
fn pointer_normalizes_client_coordinates() {
    assert_eq!(
        PointerState::from_client(0.0, 0.0, 800.0, 600.0),
        PointerState { x: -1.0, y: 1.0 }
    );
    assert_eq!(
        PointerState::from_client(400.0, 300.0, 800.0, 600.0),
        PointerState { x: 0.0, y: 0.0 }
    );
    assert_eq!(
        PointerState::from_client(800.0, 600.0, 800.0, 600.0),
        PointerState { x: 1.0, y: -1.0 }
    );
    assert_eq!(
        PointerState::from_client(10.0, 10.0, 0.0, 600.0),
        PointerState::default()
    );
}

#[test]
fn glow_pulses_around_base_scale() {
    let mut s = scene(13);
    assert_eq!(s.glow_scale, GLOW_INITIAL_SCALE);
    for t in [0.0_f32, 0.4, 1.3, 100.0] {
        s.update(t, PointerState::default());
        assert!((s.glow_scale - (GLOW_BASE_SCALE + (t * 2.0).sin() * GLOW_PULSE)).abs() < 1e-5);
        assert!(s.glow_scale >= GLOW_BASE_SCALE - GLOW_PULSE - 1e-5);
        assert!(s.glow_scale <= GLOW_BASE_SCALE + GLOW_PULSE + 1e-5);
    }
}

#[test]
fn models_compose_scene_tilt() {
    let mut s = scene(14);
    s.update(0.0, PointerState::default());
    assert!(s.shell_model(0).abs_diff_eq(Mat4::IDENTITY, 1e-6));
    let n0 = s.noise[0].position;
    let p = s.noise_model(0).transform_point3(Vec3::ZERO);
    assert!((p - n0).length() < 1e-5);

    s.update(0.0, PointerState { x: 1.0, y: 0.0 });
    let tilted = s.noise_model(0).transform_point3(Vec3::ZERO);
    let expected = Mat4::from_rotation_y(TILT_GAIN).transform_point3(n0);
    assert!((tilted - expected).length() < 1e-4);
}

#[test]
fn camera_tracks_viewport_aspect() {
    let mut cam = Camera::scene_default(1200.0, 600.0);
    assert!((cam.aspect - 2.0).abs() < 1e-6);
    assert!((cam.fovy_radians - CAMERA_FOV_DEG.to_radians()).abs() < 1e-6);
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, CAMERA_Z));
    cam.set_viewport(300.0, 600.0);
    assert!((cam.aspect - 0.5).abs() < 1e-6);
    cam.set_viewport(0.0, 600.0);
    assert!((cam.aspect - 0.5).abs() < 1e-6);
    // origin projects to the center of clip space
    let clip = cam.projection_matrix() * cam.view_matrix() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((clip.x / clip.w).abs() < 1e-6 && (clip.y / clip.w).abs() < 1e-6);
}
