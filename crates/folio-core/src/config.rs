//! Field configuration: viewport classes and per-variant tuning.
//!
//! A [`FieldConfig`] is built from the constants for a given variant and
//! [`SizeClass`], and validated before a renderer accepts it.

use crate::constants::*;
use crate::error::ConfigError;

/// Coarse device class, picked from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeClass {
    Mobile,
    Desktop,
}

impl SizeClass {
    #[inline]
    pub fn from_width(css_width: f32) -> Self {
        if css_width < MOBILE_BREAKPOINT_PX {
            SizeClass::Mobile
        } else {
            SizeClass::Desktop
        }
    }
}

/// Drawing surface size in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            dpr: if dpr > 0.0 { dpr } else { 1.0 },
        }
    }

    #[inline]
    pub fn size_class(&self) -> SizeClass {
        SizeClass::from_width(self.width)
    }

    /// Backing store size in device pixels.
    #[inline]
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.dpr) as u32;
        let h = (self.height * self.dpr) as u32;
        (w.max(1), h.max(1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Drifting particles bouncing inside a cube.
    Cloud,
    /// Fixed neurons on a sphere, linked to their nearest neighbours.
    Sphere,
}

impl Variant {
    pub fn from_attr(v: &str) -> Option<Self> {
        match v {
            "cloud" => Some(Variant::Cloud),
            "sphere" | "neurons" => Some(Variant::Sphere),
            _ => None,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Variant::Cloud => "cloud",
            Variant::Sphere => "sphere",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkConfig {
    /// Inclusive range of neighbours each neuron tries to link to.
    pub fan_out: (usize, usize),
    pub keep_probability: f64,
    /// Maximum 3D distance for a link.
    pub cutoff: f32,
    pub base_opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PulseTiming {
    pub duration: f64,
    pub trigger_probability: f64,
    pub cooldown_ambient: f64,
    pub cooldown_focused: f64,
    pub ramp_fraction: f32,
    pub decay: f32,
    pub echo_delay: f32,
    pub echo_strength: f32,
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self {
            duration: PULSE_DURATION_SEC,
            trigger_probability: PULSE_TRIGGER_PROBABILITY,
            cooldown_ambient: PULSE_COOLDOWN_AMBIENT_SEC,
            cooldown_focused: PULSE_COOLDOWN_FOCUSED_SEC,
            ramp_fraction: PULSE_RAMP_FRACTION,
            decay: PULSE_DECAY,
            echo_delay: PULSE_ECHO_DELAY,
            echo_strength: PULSE_ECHO_STRENGTH,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub variant: Variant,
    pub size_class: SizeClass,
    pub count: usize,
    /// Cube half-extent for the cloud, sphere radius for neurons.
    pub extent: f32,
    pub size_range: (f32, f32),
    pub opacity_range: (f32, f32),
    /// Max velocity component per reference frame (cloud only).
    pub speed: f32,
    pub latitude_band: f32,
    pub links: Option<LinkConfig>,
    pub pulse: PulseTiming,
}

impl FieldConfig {
    pub fn for_variant(variant: Variant, size_class: SizeClass) -> Self {
        match variant {
            Variant::Cloud => Self::cloud(size_class),
            Variant::Sphere => Self::sphere(size_class),
        }
    }

    pub fn cloud(size_class: SizeClass) -> Self {
        let (count, extent) = match size_class {
            SizeClass::Mobile => (CLOUD_COUNT_MOBILE, CLOUD_BOUND_MOBILE),
            SizeClass::Desktop => (CLOUD_COUNT_DESKTOP, CLOUD_BOUND_DESKTOP),
        };
        Self {
            variant: Variant::Cloud,
            size_class,
            count,
            extent,
            size_range: CLOUD_SIZE_RANGE,
            opacity_range: CLOUD_OPACITY_RANGE,
            speed: CLOUD_SPEED,
            latitude_band: 1.0,
            links: None,
            pulse: PulseTiming::default(),
        }
    }

    pub fn sphere(size_class: SizeClass) -> Self {
        let (count, extent) = match size_class {
            SizeClass::Mobile => (SPHERE_COUNT_MOBILE, SPHERE_RADIUS_MOBILE),
            SizeClass::Desktop => (SPHERE_COUNT_DESKTOP, SPHERE_RADIUS_DESKTOP),
        };
        Self {
            variant: Variant::Sphere,
            size_class,
            count,
            extent,
            size_range: SPHERE_SIZE_RANGE,
            opacity_range: SPHERE_OPACITY_RANGE,
            speed: 0.0,
            latitude_band: SPHERE_LATITUDE_BAND,
            links: Some(LinkConfig {
                fan_out: LINK_FAN_OUT,
                keep_probability: LINK_KEEP_PROBABILITY,
                cutoff: extent * LINK_CUTOFF_FACTOR,
                base_opacity: LINK_BASE_OPACITY,
            }),
            pulse: PulseTiming::default(),
        }
    }

    /// Re-derive the size-dependent parts for a new size class, keeping the
    /// pulse timing and link probabilities.
    pub fn resized(&self, size_class: SizeClass) -> Self {
        if size_class == self.size_class {
            return self.clone();
        }
        let mut next = Self::for_variant(self.variant, size_class);
        next.pulse = self.pulse.clone();
        if let (Some(prev), Some(links)) = (&self.links, next.links.as_mut()) {
            links.fan_out = prev.fan_out;
            links.keep_probability = prev.keep_probability;
        }
        next
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyField);
        }
        if self.extent <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "extent",
                value: self.extent as f64,
            });
        }
        check_range("size", self.size_range)?;
        check_range("opacity", self.opacity_range)?;
        if self.opacity_range.1 > 1.0 {
            return Err(ConfigError::InvalidRange {
                name: "opacity",
                min: self.opacity_range.0,
                max: self.opacity_range.1,
            });
        }
        if !(self.latitude_band > 0.0 && self.latitude_band <= 1.0) {
            return Err(ConfigError::InvalidRange {
                name: "latitude band",
                min: 0.0,
                max: self.latitude_band,
            });
        }
        if let Some(links) = &self.links {
            let (lo, hi) = links.fan_out;
            if lo == 0 || lo > hi {
                return Err(ConfigError::FanOut { min: lo, max: hi });
            }
            check_probability("link keep", links.keep_probability)?;
            if links.cutoff <= 0.0 {
                return Err(ConfigError::NonPositive {
                    name: "link cutoff",
                    value: links.cutoff as f64,
                });
            }
        }
        let p = &self.pulse;
        if p.duration <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "pulse duration",
                value: p.duration,
            });
        }
        check_probability("pulse trigger", p.trigger_probability)?;
        check_probability("pulse ramp", p.ramp_fraction as f64)?;
        Ok(())
    }
}

fn check_range(name: &'static str, (min, max): (f32, f32)) -> Result<(), ConfigError> {
    if min < 0.0 || min > max {
        return Err(ConfigError::InvalidRange { name, min, max });
    }
    Ok(())
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::Probability { name, value });
    }
    Ok(())
}
