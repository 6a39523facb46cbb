// Host-side tests for tuning constants and their relationships.

use folio_core::constants::*;
use folio_core::config::{FieldConfig, SizeClass, Variant};

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_proper_fractions() {
    for k in [CAMERA_EASE, ROTATION_EASE, OPACITY_EASE] {
        assert!(k > 0.0 && k < 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pulse_timing_is_consistent() {
    assert!(PULSE_DURATION_SEC > 0.0);
    assert!(PULSE_RAMP_FRACTION > 0.0 && PULSE_RAMP_FRACTION < 1.0);
    assert!(PULSE_ECHO_DELAY + PULSE_RAMP_FRACTION < 1.0);
    assert!(PULSE_ECHO_STRENGTH > 0.0 && PULSE_ECHO_STRENGTH < 1.0);
    assert!(PULSE_COOLDOWN_FOCUSED_SEC < PULSE_COOLDOWN_AMBIENT_SEC);
    assert!((1.5..=3.0).contains(&PULSE_COOLDOWN_FOCUSED_SEC));
    assert!((1.5..=3.0).contains(&PULSE_COOLDOWN_AMBIENT_SEC));
    assert!(PULSE_TRIGGER_PROBABILITY > 0.0 && PULSE_TRIGGER_PROBABILITY < 0.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn links_are_sparse() {
    assert!(LINK_FAN_OUT.0 >= 2 && LINK_FAN_OUT.1 <= 4);
    assert!(LINK_KEEP_PROBABILITY > 0.5 && LINK_KEEP_PROBABILITY < 1.0);
}

#[test]
fn scene_fits_in_front_of_the_camera() {
    // fov + z must stay positive for every point, or the perspective divide flips.
    for variant in [Variant::Cloud, Variant::Sphere] {
        for class in [SizeClass::Mobile, SizeClass::Desktop] {
            let c = FieldConfig::for_variant(variant, class);
            let deepest = c.extent * 3f32.sqrt();
            assert!(FOV_AMBIENT.min(FOV_FOCUSED) > deepest, "{variant:?} {class:?}");
            assert!(c.validate().is_ok());
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ambient_rotation_turns_both_axes() {
    assert!(AMBIENT_ROTATION[0] > 0.0, "no tumble around X");
    assert!(AMBIENT_ROTATION[1] > 0.0, "no spin around Y");
    // Slow enough that a point takes several seconds to cross the field.
    assert!(AMBIENT_ROTATION.iter().all(|r| *r < 0.5));
}
