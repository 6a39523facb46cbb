use crate::constants::MIN_DEPTH_ALPHA;
use glam::{Mat3, Vec2, Vec3};

/// Screen-space result of projecting one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    /// CSS pixels.
    pub screen: Vec2,
    /// Perspective scale, 1.0 at depth zero.
    pub scale: f32,
    /// Rotated z; larger is farther from the viewer. Used as the draw-order key.
    pub depth: f32,
    pub alpha: f32,
}

/// Rotate around Y by `angles.y`, then around X by `angles.x`.
#[inline]
pub fn rotation_matrix(angles: Vec2) -> Mat3 {
    Mat3::from_rotation_x(angles.x) * Mat3::from_rotation_y(angles.y)
}

/// Perspective projection around a screen-space centre.
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    pub rotation: Mat3,
    pub center_px: Vec2,
    pub fov: f32,
    /// Half-depth of the scene, used to map depth to alpha.
    pub extent: f32,
}

impl Projector {
    pub fn new(angles: Vec2, center_px: Vec2, fov: f32, extent: f32) -> Self {
        Self {
            rotation: rotation_matrix(angles),
            center_px,
            fov,
            extent: extent.max(f32::EPSILON),
        }
    }

    pub fn project(&self, p: Vec3) -> Projected {
        let r = self.rotation * p;
        let scale = self.fov / (self.fov + r.z).max(1.0);
        let screen = self.center_px + Vec2::new(r.x, r.y) * scale;
        Projected {
            screen,
            scale,
            depth: r.z,
            alpha: depth_alpha(r.z, self.extent),
        }
    }
}

/// 1.0 at the front of the scene, fading to [`MIN_DEPTH_ALPHA`] at the back.
#[inline]
pub fn depth_alpha(depth: f32, extent: f32) -> f32 {
    ((extent - depth) / (2.0 * extent)).clamp(MIN_DEPTH_ALPHA, 1.0)
}
