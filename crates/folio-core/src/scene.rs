//! Per-frame field update producing a display list.
//!
//! [`Renderer`] owns the whole field state: particles, links, camera,
//! tilt, pulse and its random source. Each call to [`Renderer::frame`]
//! advances the simulation to `now` and rebuilds the [`DisplayList`],
//! which the platform layer paints without further decisions.

use crate::config::{FieldConfig, Variant, Viewport};
use crate::constants::*;
use crate::error::ConfigError;
use crate::graph::{neighbours_of, spawn_sphere, Connection};
use crate::interaction::{force_at, mouse_force, TiltState};
use crate::palette::{mix, Palette, Rgb};
use crate::particle::{spawn_cloud, Particle};
use crate::projection::{Projected, Projector};
use crate::pulse::PulseState;
use crate::smoothing::{ease, CameraState, Mode};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug, PartialEq)]
pub struct LineDraw {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub opacity: f32,
    pub from_color: Rgb,
    pub to_color: Rgb,
    pub depth: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointDraw {
    pub center: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub color: Rgb,
    /// Halo strength; 0.0 draws no halo.
    pub glow: f32,
    /// Bright core colour for neurons facing the viewer.
    pub core: Option<Rgb>,
    pub depth: f32,
}

/// Lines are painted before points; both are ordered far to near.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    pub lines: Vec<LineDraw>,
    pub points: Vec<PointDraw>,
}

impl DisplayList {
    fn clear(&mut self) {
        self.lines.clear();
        self.points.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.points.is_empty()
    }
}

pub struct Renderer {
    config: FieldConfig,
    viewport: Viewport,
    particles: Vec<Particle>,
    connections: Vec<Connection>,
    camera: CameraState,
    tilt: TiltState,
    pulse: PulseState,
    mode: Mode,
    pointer: Option<Vec2>,
    palette: Palette,
    rng: StdRng,
    generation: u64,
    started_at: Option<f64>,
    last_frame: Option<f64>,
    projected: Vec<Projected>,
    pulse_levels: Vec<f32>,
    display: DisplayList,
}

impl Renderer {
    /// Build a renderer for `viewport`. The config is re-derived for the
    /// viewport's size class before the first spawn.
    pub fn new(
        config: FieldConfig,
        viewport: Viewport,
        palette: Palette,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let config = config.resized(viewport.size_class());
        config.validate()?;
        let mut renderer = Self {
            pulse: PulseState::new(config.pulse.clone()),
            config,
            viewport,
            particles: Vec::new(),
            connections: Vec::new(),
            camera: CameraState::settled(Mode::Ambient),
            tilt: TiltState::default(),
            mode: Mode::Ambient,
            pointer: None,
            palette,
            rng: StdRng::seed_from_u64(seed),
            generation: 0,
            started_at: None,
            last_frame: None,
            projected: Vec::new(),
            pulse_levels: Vec::new(),
            display: DisplayList::default(),
        };
        renderer.reinit();
        Ok(renderer)
    }

    /// Replace the whole geometry with a fresh batch.
    fn reinit(&mut self) {
        let (particles, connections) = match self.config.variant {
            Variant::Cloud => (spawn_cloud(&self.config, &mut self.rng), Vec::new()),
            Variant::Sphere => spawn_sphere(&self.config, &mut self.rng),
        };
        self.particles = particles;
        self.connections = connections;
        // Between frames the last frame time is the best estimate of "now".
        self.pulse.reset(self.last_frame.unwrap_or(0.0));
        self.display.clear();
        self.generation += 1;
        log::debug!(
            "[field] {} reinit gen={} class={:?} particles={} links={}",
            self.config.variant.as_attr(),
            self.generation,
            self.config.size_class,
            self.particles.len(),
            self.connections.len()
        );
    }

    /// New surface size; always rebuilds the geometry, and switches counts
    /// and extents when the size class changed.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.config = self.config.resized(viewport.size_class());
        self.reinit();
    }

    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            self.camera.set_mode(mode);
        }
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn pulse(&self) -> &PulseState {
        &self.pulse
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Incremented every time the geometry is rebuilt.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Pulse contribution per particle from the last frame.
    pub fn pulse_levels(&self) -> &[f32] {
        &self.pulse_levels
    }

    pub fn display(&self) -> &DisplayList {
        &self.display
    }

    /// Advance to `now` (seconds) and rebuild the display list.
    pub fn frame(&mut self, now: f64) -> &DisplayList {
        let start = *self.started_at.get_or_insert(now);
        let dt = self
            .last_frame
            .map_or(0.0, |t| (now - t) as f32)
            .clamp(0.0, MAX_FRAME_DT_SEC);
        self.last_frame = Some(now);
        let elapsed = (now - start) as f32;

        self.camera.step(CAMERA_EASE);
        self.tilt.aim(
            self.pointer,
            &self.viewport,
            MAX_POINTER_TILT,
            self.camera.reactivity,
        );
        self.tilt.step(ROTATION_EASE);

        self.pulse.update(now);
        let connections = &self.connections;
        self.pulse.maybe_trigger(
            now,
            self.mode,
            self.particles.len(),
            &mut self.rng,
            |source| neighbours_of(connections, source),
        );

        let extent = self.config.extent;
        if self.config.variant == Variant::Cloud {
            let frames = dt * REFERENCE_FPS;
            for p in &mut self.particles {
                p.integrate(frames, extent);
            }
        }

        let orientation = match self.config.variant {
            Variant::Cloud => Vec2::ZERO,
            Variant::Sphere => Vec2::from(SPHERE_ORIENTATION),
        };
        let angles = orientation + self.tilt.current + Vec2::from(AMBIENT_ROTATION) * elapsed;
        let center_px = self.camera.center * Vec2::new(self.viewport.width, self.viewport.height);
        let projector = Projector::new(angles, center_px, self.camera.fov, extent);

        self.projected.clear();
        self.projected.extend(
            self.particles
                .iter()
                .map(|p| projector.project(p.origin.unwrap_or(p.position))),
        );
        self.compute_pulse_levels(now);

        self.display.clear();
        self.build_lines(now);
        self.build_points();
        &self.display
    }

    fn compute_pulse_levels(&mut self, now: f64) {
        self.pulse_levels.clear();
        self.pulse_levels.resize(self.particles.len(), 0.0);
        let Some(active) = self.pulse.active() else {
            return;
        };
        match self.config.variant {
            Variant::Sphere => {
                for (i, level) in self.pulse_levels.iter_mut().enumerate() {
                    *level = self.pulse.intensity(i, now);
                }
            }
            Variant::Cloud => {
                // Point shock: the source flares, nearby particles on screen catch some of it.
                let Some(src) = self.projected.get(active.source) else {
                    return;
                };
                let flare = self.pulse.source_intensity(now);
                let echo = self.pulse.echo_intensity(now);
                for (i, level) in self.pulse_levels.iter_mut().enumerate() {
                    *level = if i == active.source {
                        flare
                    } else {
                        let d = self.projected[i].screen.distance(src.screen);
                        mouse_force(d, CLOUD_PULSE_RADIUS_PX) * echo
                    };
                }
            }
        }
    }

    fn build_lines(&mut self, now: f64) {
        match self.config.variant {
            Variant::Cloud => self.build_proximity_lines(),
            Variant::Sphere => self.build_link_lines(now),
        }
        self.display
            .lines
            .sort_by(|x, y| y.depth.total_cmp(&x.depth));
    }

    /// Cloud lines join any two points that are close on screen. Nothing is
    /// stored between frames.
    fn build_proximity_lines(&mut self) {
        let saturation = self.camera.saturation;
        let idle = self.palette.primary_at(saturation);
        let hot = self.palette.secondary_at(saturation);
        let pointer = self.pointer;
        let hovered = |at: Vec2| force_at(pointer, at, HOVER_RADIUS_PX) > 0.0;

        for (i, pa) in self.projected.iter().enumerate() {
            let hot_a = hovered(pa.screen);
            for pb in &self.projected[i + 1..] {
                let allowed = CLOUD_LINK_DIST_PX * (pa.scale + pb.scale) * CLOUD_LINK_SCALE_FACTOR;
                let d = pa.screen.distance(pb.screen);
                if d >= allowed {
                    continue;
                }
                let active = hot_a || hovered(pb.screen);
                let base = if active {
                    CLOUD_LINK_ACTIVE_OPACITY
                } else {
                    CLOUD_LINK_BASE_OPACITY
                };
                let opacity = (base * (1.0 - d / allowed) * pa.alpha.min(pb.alpha)).clamp(0.0, 1.0);
                if opacity < 0.005 {
                    continue;
                }
                let color = if active { hot } else { idle };
                self.display.lines.push(LineDraw {
                    from: pa.screen,
                    to: pb.screen,
                    width: LINK_WIDTH * (pa.scale + pb.scale) * 0.5,
                    opacity,
                    from_color: color,
                    to_color: color,
                    depth: (pa.depth + pb.depth) * 0.5,
                });
            }
        }
    }

    fn build_link_lines(&mut self, now: f64) {
        let saturation = self.camera.saturation;
        let from_color = self.palette.primary_at(saturation);
        let to_color = self.palette.secondary_at(saturation);
        let source = self.pulse.active().map(|p| p.source);
        let flare = self.pulse.source_intensity(now);

        for c in &mut self.connections {
            let (pa, pb) = (&self.projected[c.a], &self.projected[c.b]);
            let mid = (pa.screen + pb.screen) * 0.5;
            let force = force_at(self.pointer, mid, HOVER_RADIUS_PX) * HOVER_LINK_GAIN;
            let pulse = match source {
                Some(s) if c.touches(s) => flare,
                _ => 0.0,
            };
            let depth_alpha = (pa.alpha + pb.alpha) * 0.5;
            c.target_opacity = (c.base_opacity * depth_alpha).max(force).max(pulse).clamp(0.0, 1.0);
            c.opacity = ease(c.opacity, c.target_opacity, OPACITY_EASE);
            if c.opacity < 0.005 {
                continue;
            }
            self.display.lines.push(LineDraw {
                from: pa.screen,
                to: pb.screen,
                width: LINK_WIDTH * (pa.scale + pb.scale) * 0.5 * (1.0 + pulse),
                opacity: c.opacity,
                from_color,
                to_color,
                depth: (pa.depth + pb.depth) * 0.5,
            });
        }
    }

    fn build_points(&mut self) {
        let saturation = self.camera.saturation;
        let base_color = self.palette.primary_at(saturation);
        let hot_color = self.palette.secondary_at(saturation);
        let facing_depth = CORE_FACING_DEPTH * self.config.extent;
        let with_core = self.config.variant == Variant::Sphere;

        for (i, p) in self.particles.iter_mut().enumerate() {
            let pr = &self.projected[i];
            let force = force_at(self.pointer, pr.screen, HOVER_RADIUS_PX);
            let pulse = self.pulse_levels[i];
            let perturb = force.max(pulse).min(1.0);
            p.target_opacity = (p.base_opacity * pr.alpha).max(perturb).clamp(0.0, 1.0);
            p.opacity = ease(p.opacity, p.target_opacity, OPACITY_EASE);
            let radius = p.size * pr.scale * (1.0 + PERTURB_SIZE_GAIN * perturb);
            if p.opacity < 0.01 || radius < 0.05 {
                continue;
            }
            self.display.points.push(PointDraw {
                center: pr.screen,
                radius,
                opacity: p.opacity,
                color: mix(base_color, hot_color, perturb),
                glow: if perturb > GLOW_THRESHOLD { perturb } else { 0.0 },
                core: (with_core && pr.depth < facing_depth).then_some(self.palette.core),
                depth: pr.depth,
            });
        }
        self.display
            .points
            .sort_by(|x, y| y.depth.total_cmp(&x.depth));
    }
}
