//! Exponential smoothing of camera and transition state.

use crate::constants::*;
use glam::Vec2;

/// One smoothing step: `current + (target - current) * k`.
///
/// For `0 < k < 1` the result lies between `current` and `target`, so
/// repeated application converges monotonically.
#[inline]
pub fn ease(current: f32, target: f32, k: f32) -> f32 {
    current + (target - current) * k
}

#[inline]
pub fn ease_vec2(current: Vec2, target: Vec2, k: f32) -> Vec2 {
    current + (target - current) * k
}

/// Interaction mode; decides camera targets and pulse cooldown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Ambient,
    Focused,
}

/// Target values for a [`CameraState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTargets {
    /// Projection centre as a fraction of the viewport.
    pub center: Vec2,
    pub fov: f32,
    pub reactivity: f32,
    pub saturation: f32,
}

impl CameraTargets {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Ambient => Self {
                center: Vec2::new(0.5, 0.5),
                fov: FOV_AMBIENT,
                reactivity: 0.45,
                saturation: 0.35,
            },
            Mode::Focused => Self {
                center: Vec2::new(0.55, 0.48),
                fov: FOV_FOCUSED,
                reactivity: 1.0,
                saturation: 1.0,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct CameraState {
    pub center: Vec2,
    pub fov: f32,
    pub reactivity: f32,
    pub saturation: f32,
    pub target: CameraTargets,
}

impl CameraState {
    /// Start settled on the mode's targets.
    pub fn settled(mode: Mode) -> Self {
        let t = CameraTargets::for_mode(mode);
        Self {
            center: t.center,
            fov: t.fov,
            reactivity: t.reactivity,
            saturation: t.saturation,
            target: t,
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.target = CameraTargets::for_mode(mode);
    }

    pub fn step(&mut self, k: f32) {
        self.center = ease_vec2(self.center, self.target.center, k);
        self.fov = ease(self.fov, self.target.fov, k);
        self.reactivity = ease(self.reactivity, self.target.reactivity, k);
        self.saturation = ease(self.saturation, self.target.saturation, k);
    }
}
