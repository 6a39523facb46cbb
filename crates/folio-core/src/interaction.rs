use crate::config::Viewport;
use crate::smoothing::ease_vec2;
use glam::Vec2;

/// Linear falloff of pointer influence: 1.0 at the pointer, 0.0 at `radius`.
#[inline]
pub fn mouse_force(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / radius).max(0.0)
}

/// Force at `at` for an optional pointer position.
#[inline]
pub fn force_at(pointer: Option<Vec2>, at: Vec2, radius: f32) -> f32 {
    pointer.map_or(0.0, |p| mouse_force(p.distance(at), radius))
}

/// Pointer-driven tilt, eased toward a target every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltState {
    /// x: rotation around X (from vertical offset), y: around Y (horizontal).
    pub current: Vec2,
    pub target: Vec2,
}

impl TiltState {
    /// Aim at the pointer's offset from the viewport centre, in `[-1, 1]`
    /// per axis, scaled by `max_tilt * reactivity`. No pointer aims at rest.
    pub fn aim(&mut self, pointer: Option<Vec2>, viewport: &Viewport, max_tilt: f32, reactivity: f32) {
        self.target = match pointer {
            Some(p) => {
                let nx = (p.x / viewport.width * 2.0 - 1.0).clamp(-1.0, 1.0);
                let ny = (p.y / viewport.height * 2.0 - 1.0).clamp(-1.0, 1.0);
                Vec2::new(ny, nx) * max_tilt * reactivity
            }
            None => Vec2::ZERO,
        };
    }

    pub fn step(&mut self, k: f32) {
        self.current = ease_vec2(self.current, self.target, k);
    }
}

/// Pointer position over an element as percentages clamped to `[0, 100]`,
/// for the `--spot-x` / `--spot-y` hover spotlight.
pub fn spotlight(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return Vec2::splat(50.0);
    }
    ((client - rect_origin) / rect_size * 100.0).clamp(Vec2::ZERO, Vec2::splat(100.0))
}
