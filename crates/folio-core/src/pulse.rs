//! Shock pulses: a single source neuron flares up and its neighbours echo.
//!
//! The state machine is `Idle -> Active -> Idle`. Leaving Idle needs the
//! mode's cooldown to have passed since the previous pulse ended and a
//! per-frame random draw to succeed; leaving Active happens exactly when
//! the configured duration has elapsed.

use crate::config::PulseTiming;
use crate::graph::Neighbours;
use crate::smoothing::Mode;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct ActivePulse {
    pub source: usize,
    pub started_at: f64,
    pub neighbours: Neighbours,
}

#[derive(Clone, Debug)]
pub struct PulseState {
    timing: PulseTiming,
    active: Option<ActivePulse>,
    last_end: Option<f64>,
}

/// Pulse envelope over normalised progress `p` in `[0, 1)`.
///
/// Linear ramp to 1.0 over `ramp`, exponential decay afterwards, 0.0
/// outside the window.
#[inline]
pub fn envelope(p: f32, ramp: f32, decay: f32) -> f32 {
    if !(0.0..1.0).contains(&p) {
        return 0.0;
    }
    if p < ramp {
        p / ramp
    } else {
        (-decay * (p - ramp)).exp()
    }
}

impl PulseState {
    pub fn new(timing: PulseTiming) -> Self {
        Self {
            timing,
            active: None,
            last_end: None,
        }
    }

    pub fn timing(&self) -> &PulseTiming {
        &self.timing
    }

    #[inline]
    pub fn active(&self) -> Option<&ActivePulse> {
        self.active.as_ref()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn last_end(&self) -> Option<f64> {
        self.last_end
    }

    pub fn cooldown(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Ambient => self.timing.cooldown_ambient,
            Mode::Focused => self.timing.cooldown_focused,
        }
    }

    pub fn cooldown_elapsed(&self, now: f64, mode: Mode) -> bool {
        self.last_end
            .map_or(true, |end| now - end >= self.cooldown(mode))
    }

    /// Expire the active pulse once its duration has passed.
    pub fn update(&mut self, now: f64) {
        if let Some(p) = &self.active {
            if now - p.started_at >= self.timing.duration {
                self.last_end = Some(p.started_at + self.timing.duration);
                self.active = None;
            }
        }
    }

    /// Start a pulse if allowed. `neighbours` is asked for the source's
    /// linked indices only when a pulse actually starts.
    pub fn maybe_trigger<R, F>(
        &mut self,
        now: f64,
        mode: Mode,
        count: usize,
        rng: &mut R,
        neighbours: F,
    ) -> bool
    where
        R: Rng + ?Sized,
        F: FnOnce(usize) -> Neighbours,
    {
        if self.active.is_some() || count == 0 || !self.cooldown_elapsed(now, mode) {
            return false;
        }
        if !rng.gen_bool(self.timing.trigger_probability) {
            return false;
        }
        let source = rng.gen_range(0..count);
        let neighbours = neighbours(source);
        log::trace!(
            "[pulse] source={} neighbours={} t={:.2}",
            source,
            neighbours.len(),
            now
        );
        self.active = Some(ActivePulse {
            source,
            started_at: now,
            neighbours,
        });
        true
    }

    /// Drop the active pulse. Used when the geometry is rebuilt and old
    /// indices no longer mean anything. A pulse cut off this way ends at
    /// `now`, so the cooldown still runs from there.
    pub fn reset(&mut self, now: f64) {
        if let Some(p) = self.active.take() {
            let end = now.clamp(p.started_at, p.started_at + self.timing.duration);
            self.last_end = Some(end);
        }
    }

    /// Normalised progress of the active pulse, if any.
    pub fn progress(&self, now: f64) -> Option<f32> {
        self.active
            .as_ref()
            .map(|p| ((now - p.started_at) / self.timing.duration) as f32)
    }

    /// Intensity of the source flare at `now`.
    pub fn source_intensity(&self, now: f64) -> f32 {
        self.progress(now).map_or(0.0, |p| {
            envelope(p, self.timing.ramp_fraction, self.timing.decay)
        })
    }

    /// Delayed, weaker echo felt by the source's neighbours.
    pub fn echo_intensity(&self, now: f64) -> f32 {
        self.progress(now).map_or(0.0, |p| {
            self.timing.echo_strength
                * envelope(
                    p - self.timing.echo_delay,
                    self.timing.ramp_fraction,
                    self.timing.decay,
                )
        })
    }

    /// Pulse contribution for particle `index`.
    pub fn intensity(&self, index: usize, now: f64) -> f32 {
        match &self.active {
            Some(p) if p.source == index => self.source_intensity(now),
            Some(p) if p.neighbours.contains(&index) => self.echo_intensity(now),
            _ => 0.0,
        }
    }
}
