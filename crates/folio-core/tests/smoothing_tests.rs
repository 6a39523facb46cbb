// Host-side tests for exponential smoothing, projection and pointer helpers.

use folio_core::config::Viewport;
use folio_core::interaction::{mouse_force, spotlight, TiltState};
use folio_core::projection::{depth_alpha, Projector};
use folio_core::smoothing::{ease, CameraState, CameraTargets, Mode};
use glam::{Vec2, Vec3};

#[test]
fn ease_converges_monotonically_without_overshoot() {
    for &(start, target) in &[(0.0_f32, 1.0_f32), (10.0, -3.0), (-5.0, -5.5)] {
        for &k in &[0.01_f32, 0.05, 0.3, 0.9] {
            let mut current = start;
            let mut prev_gap = (target - current).abs();
            for _ in 0..5000 {
                current = ease(current, target, k);
                let gap = (target - current).abs();
                assert!(gap <= prev_gap, "gap grew: {prev_gap} -> {gap}");
                // never crosses the target
                assert!((current - target) * (start - target) >= -1e-6);
                prev_gap = gap;
            }
            assert!(prev_gap < 1e-3, "k={k} did not converge: {prev_gap}");
        }
    }
}

#[test]
fn ease_is_a_no_op_at_the_target() {
    assert_eq!(ease(0.4, 0.4, 0.5), 0.4);
}

#[test]
fn camera_settles_on_new_mode_targets() {
    let mut cam = CameraState::settled(Mode::Ambient);
    cam.set_mode(Mode::Focused);
    let target = CameraTargets::for_mode(Mode::Focused);
    let mut prev = (cam.fov - target.fov).abs();
    for _ in 0..400 {
        cam.step(0.05);
        let gap = (cam.fov - target.fov).abs();
        assert!(gap <= prev);
        prev = gap;
    }
    assert!((cam.fov - target.fov).abs() < 1e-2);
    assert!((cam.saturation - target.saturation).abs() < 1e-4);
    assert!((cam.reactivity - target.reactivity).abs() < 1e-4);
    assert!(cam.center.distance(target.center) < 1e-4);
}

#[test]
fn focused_mode_is_more_reactive_and_saturated() {
    let a = CameraTargets::for_mode(Mode::Ambient);
    let f = CameraTargets::for_mode(Mode::Focused);
    assert!(f.reactivity > a.reactivity);
    assert!(f.saturation > a.saturation);
}

#[test]
fn projection_centres_the_origin_and_shrinks_far_points() {
    let center = Vec2::new(400.0, 300.0);
    let proj = Projector::new(Vec2::ZERO, center, 500.0, 200.0);
    let origin = proj.project(Vec3::ZERO);
    assert_eq!(origin.screen, center);
    assert!((origin.scale - 1.0).abs() < 1e-6);

    let near = proj.project(Vec3::new(100.0, 0.0, -100.0));
    let far = proj.project(Vec3::new(100.0, 0.0, 100.0));
    assert!(near.scale > far.scale);
    assert!(near.screen.x > far.screen.x);
    assert!(near.alpha > far.alpha);
    assert!(far.depth > near.depth);
}

#[test]
fn rotation_turns_x_into_depth() {
    let proj = Projector::new(
        Vec2::new(0.0, std::f32::consts::FRAC_PI_2),
        Vec2::ZERO,
        500.0,
        200.0,
    );
    let p = proj.project(Vec3::new(100.0, 0.0, 0.0));
    assert!((p.depth.abs() - 100.0).abs() < 1e-3);
    assert!(p.screen.x.abs() < 1e-3);
}

#[test]
fn depth_alpha_is_clamped() {
    assert_eq!(depth_alpha(-200.0, 200.0), 1.0);
    assert!((depth_alpha(0.0, 200.0) - 0.5).abs() < 1e-6);
    assert_eq!(depth_alpha(500.0, 200.0), folio_core::constants::MIN_DEPTH_ALPHA);
}

#[test]
fn mouse_force_falls_off_linearly() {
    assert_eq!(mouse_force(0.0, 100.0), 1.0);
    assert!((mouse_force(25.0, 100.0) - 0.75).abs() < 1e-6);
    assert_eq!(mouse_force(100.0, 100.0), 0.0);
    assert_eq!(mouse_force(250.0, 100.0), 0.0);
    assert_eq!(mouse_force(0.0, 0.0), 0.0);
}

#[test]
fn tilt_follows_pointer_and_returns_to_rest() {
    let vp = Viewport::new(1000.0, 500.0, 1.0);
    let mut tilt = TiltState::default();
    tilt.aim(Some(Vec2::new(1000.0, 250.0)), &vp, 0.5, 1.0);
    assert!((tilt.target.y - 0.5).abs() < 1e-6);
    assert!(tilt.target.x.abs() < 1e-6);
    for _ in 0..500 {
        tilt.step(0.06);
    }
    assert!((tilt.current.y - 0.5).abs() < 1e-3);

    // Reactivity scales the tilt.
    tilt.aim(Some(Vec2::new(1000.0, 250.0)), &vp, 0.5, 0.5);
    assert!((tilt.target.y - 0.25).abs() < 1e-6);

    tilt.aim(None, &vp, 0.5, 1.0);
    assert_eq!(tilt.target, Vec2::ZERO);
}

#[test]
fn spotlight_reports_clamped_percentages() {
    let origin = Vec2::new(100.0, 50.0);
    let size = Vec2::new(200.0, 100.0);
    assert_eq!(spotlight(Vec2::new(200.0, 100.0), origin, size), Vec2::new(50.0, 50.0));
    assert_eq!(spotlight(Vec2::new(0.0, 500.0), origin, size), Vec2::new(0.0, 100.0));
    assert_eq!(spotlight(Vec2::new(10.0, 10.0), origin, Vec2::ZERO), Vec2::splat(50.0));
}
