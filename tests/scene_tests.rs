// Host-side tests for viewport, orbit camera and rotation math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod scene {
    include!("../src/core/scene.rs");
}

use scene::*;

#[test]
fn viewport_aspect_matches_dimensions() {
    let vp = Viewport::new(800.0, 600.0, 1.0);
    assert!((vp.aspect() - 800.0 / 600.0).abs() < 1e-6);

    let wide = Viewport::new(2560.0, 1080.0, 1.0);
    assert!((wide.aspect() - 2560.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn viewport_zero_height_is_guarded() {
    let vp = Viewport::new(800.0, 0.0, 1.0);
    assert!(vp.aspect().is_finite());
    let (_, h) = vp.physical_size();
    assert!(h >= 1);
}

#[test]
fn viewport_pixel_ratio_clamped_to_two() {
    assert_eq!(Viewport::new(100.0, 100.0, 1.0).clamped_pixel_ratio(), 1.0);
    assert_eq!(Viewport::new(100.0, 100.0, 2.0).clamped_pixel_ratio(), 2.0);
    assert_eq!(Viewport::new(100.0, 100.0, 3.0).clamped_pixel_ratio(), 2.0);

    // a 3x display renders at no more than 2x
    let (w, h) = Viewport::new(400.0, 300.0, 3.0).physical_size();
    assert_eq!((w, h), (800, 600));
}

#[test]
fn viewport_physical_size_scales_by_ratio() {
    let (w, h) = Viewport::new(800.0, 600.0, 1.5).physical_size();
    assert_eq!((w, h), (1200, 900));
}

#[test]
fn viewport_resized_returns_new_state() {
    let vp = Viewport::new(800.0, 600.0, 1.0);
    let next = vp.resized(1024.0, 768.0, 2.0);
    // original untouched, replacement carries the new dimensions
    assert_eq!(vp, Viewport::new(800.0, 600.0, 1.0));
    assert!((next.aspect() - 1024.0 / 768.0).abs() < 1e-6);
    assert_eq!(next.clamped_pixel_ratio(), 2.0);
}

#[test]
fn orbit_polar_stays_off_the_poles() {
    let mut cam = OrbitCamera::default();
    cam.rotate(0.0, 1e6);
    assert!(cam.polar >= ORBIT_POLAR_EPS);
    cam.rotate(0.0, -1e6);
    assert!(cam.polar <= std::f32::consts::PI - ORBIT_POLAR_EPS);
}

#[test]
fn orbit_radius_is_clamped() {
    let mut cam = OrbitCamera::default();
    cam.zoom(1e6);
    assert_eq!(cam.radius, ORBIT_RADIUS_MAX);
    cam.zoom(-1e6);
    assert_eq!(cam.radius, ORBIT_RADIUS_MIN);
}

#[test]
fn orbit_eye_keeps_target_distance() {
    let mut cam = OrbitCamera::default();
    for (dx, dy) in [(35.0, -12.0), (-80.0, 44.0), (200.0, 5.0)] {
        cam.rotate(dx, dy);
        let dist = (cam.eye() - cam.target).length();
        assert!(
            (dist - cam.radius).abs() < 1e-4,
            "eye drifted off the orbit sphere: {dist} vs {}",
            cam.radius
        );
    }
}

#[test]
fn orbit_drag_changes_azimuth() {
    let mut cam = OrbitCamera::default();
    let before = cam.azimuth;
    cam.rotate(100.0, 0.0);
    assert!((cam.azimuth - before).abs() > 1e-6);
}

#[test]
fn orbit_view_proj_is_finite() {
    let mut cam = OrbitCamera::default();
    cam.rotate(123.0, -45.0);
    cam.zoom(3.0);
    let m = cam.view_proj(800.0 / 600.0);
    for c in m.to_cols_array() {
        assert!(c.is_finite());
    }
}

#[test]
fn mesh_rotation_uses_fixed_rates() {
    let (rx, ry) = mesh_rotation(10.0);
    assert!((rx - 0.2).abs() < 1e-6);
    assert!((ry - 0.3).abs() < 1e-6);
}

#[test]
fn mesh_rotation_is_monotonic_in_elapsed_time() {
    let mut prev = mesh_rotation(0.0);
    for i in 1..=100 {
        let t = i as f32 * 0.16;
        let cur = mesh_rotation(t);
        assert!(cur.0 >= prev.0 && cur.1 >= prev.1);
        prev = cur;
    }
}

#[test]
fn model_matrix_at_zero_is_identity() {
    let m = model_matrix(0.0);
    let id = glam::Mat4::IDENTITY;
    for (a, b) in m.to_cols_array().iter().zip(id.to_cols_array()) {
        assert!((a - b).abs() < 1e-6);
    }
}
