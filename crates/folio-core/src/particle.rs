use crate::config::FieldConfig;
use glam::Vec3;
use rand::Rng;

/// A single point of either field variant.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    /// Rest position; set for sphere neurons, which never move on their own.
    pub origin: Option<Vec3>,
    /// Units per reference frame. Zero for neurons.
    pub velocity: Vec3,
    pub size: f32,
    pub opacity: f32,
    pub target_opacity: f32,
    pub base_opacity: f32,
}

impl Particle {
    pub fn at_rest(position: Vec3, size: f32, base_opacity: f32) -> Self {
        Self {
            position,
            origin: Some(position),
            velocity: Vec3::ZERO,
            size,
            opacity: base_opacity,
            target_opacity: base_opacity,
            base_opacity,
        }
    }

    /// Integrate one step and bounce off the walls of `[-bound, bound]^3`.
    ///
    /// A component that leaves the cube is clamped back onto the wall and
    /// its velocity reversed, so the particle never ends a step outside.
    pub fn integrate(&mut self, frames: f32, bound: f32) {
        self.position += self.velocity * frames;
        for axis in 0..3 {
            let p = self.position[axis];
            if p > bound {
                self.position[axis] = bound;
                self.velocity[axis] = -self.velocity[axis].abs();
            } else if p < -bound {
                self.position[axis] = -bound;
                self.velocity[axis] = self.velocity[axis].abs();
            }
        }
    }
}

#[inline]
pub(crate) fn sample_range<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}

/// Spawn `config.count` particles uniformly inside the cube.
pub fn spawn_cloud<R: Rng + ?Sized>(config: &FieldConfig, rng: &mut R) -> Vec<Particle> {
    let bound = config.extent;
    let speed = config.speed;
    (0..config.count)
        .map(|_| {
            let position = Vec3::new(
                rng.gen_range(-bound..=bound),
                rng.gen_range(-bound..=bound),
                rng.gen_range(-bound..=bound),
            );
            let velocity = if speed > 0.0 {
                Vec3::new(
                    rng.gen_range(-speed..=speed),
                    rng.gen_range(-speed..=speed),
                    rng.gen_range(-speed..=speed),
                )
            } else {
                Vec3::ZERO
            };
            let base_opacity = sample_range(rng, config.opacity_range);
            Particle {
                position,
                origin: None,
                velocity,
                size: sample_range(rng, config.size_range),
                opacity: base_opacity,
                target_opacity: base_opacity,
                base_opacity,
            }
        })
        .collect()
}
