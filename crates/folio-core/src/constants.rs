// Shared field tuning constants used by the web frontend and the tests.

// Viewport classes
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0; // widths below this are treated as mobile

// Cloud variant (hero background)
pub const CLOUD_COUNT_DESKTOP: usize = 90;
pub const CLOUD_COUNT_MOBILE: usize = 45;
pub const CLOUD_BOUND_DESKTOP: f32 = 480.0; // half-extent of the cube
pub const CLOUD_BOUND_MOBILE: f32 = 300.0;
pub const CLOUD_SPEED: f32 = 0.35; // max velocity component, units per 60 Hz frame
pub const CLOUD_SIZE_RANGE: (f32, f32) = (1.0, 2.6);
pub const CLOUD_OPACITY_RANGE: (f32, f32) = (0.25, 0.75);
pub const CLOUD_PULSE_RADIUS_PX: f32 = 90.0; // on-screen reach of a point shock
pub const CLOUD_LINK_DIST_PX: f32 = 110.0; // proximity line reach at unit scale
pub const CLOUD_LINK_SCALE_FACTOR: f32 = 0.6; // reach = dist * (scale_a + scale_b) * factor
pub const CLOUD_LINK_BASE_OPACITY: f32 = 0.2;
pub const CLOUD_LINK_ACTIVE_OPACITY: f32 = 0.6; // either endpoint hovered

// Sphere variant (neuron globe)
pub const SPHERE_COUNT_DESKTOP: usize = 140;
pub const SPHERE_COUNT_MOBILE: usize = 70;
pub const SPHERE_RADIUS_DESKTOP: f32 = 210.0;
pub const SPHERE_RADIUS_MOBILE: f32 = 130.0;
pub const SPHERE_LATITUDE_BAND: f32 = 0.82; // fraction of the poles kept
pub const SPHERE_SIZE_RANGE: (f32, f32) = (1.4, 3.0);
pub const SPHERE_OPACITY_RANGE: (f32, f32) = (0.35, 0.8);
pub const SPHERE_ORIENTATION: [f32; 2] = [0.35, -0.2]; // fixed x/y tilt in radians

// Neighbour links
pub const LINK_FAN_OUT: (usize, usize) = (2, 4); // inclusive
pub const LINK_KEEP_PROBABILITY: f64 = 0.7;
pub const LINK_CUTOFF_FACTOR: f32 = 0.55; // fraction of the sphere radius
pub const LINK_BASE_OPACITY: f32 = 0.12;
pub const LINK_WIDTH: f32 = 0.8;

// Smoothing factors, applied once per frame
pub const CAMERA_EASE: f32 = 0.05;
pub const ROTATION_EASE: f32 = 0.06;
pub const OPACITY_EASE: f32 = 0.12;

// Rotation
pub const AMBIENT_ROTATION: [f32; 2] = [0.06, 0.12]; // radians per second around X and Y
pub const MAX_POINTER_TILT: f32 = 0.45; // radians at the viewport edge

// Pointer interaction
pub const HOVER_RADIUS_PX: f32 = 140.0;
pub const HOVER_LINK_GAIN: f32 = 0.7;
pub const GLOW_THRESHOLD: f32 = 0.3;
pub const PERTURB_SIZE_GAIN: f32 = 0.8;
pub const CORE_FACING_DEPTH: f32 = -0.35; // fraction of the radius; nearer than this gets a core

// Pulses
pub const PULSE_DURATION_SEC: f64 = 1.6;
pub const PULSE_RAMP_FRACTION: f32 = 0.2;
pub const PULSE_DECAY: f32 = 4.5;
pub const PULSE_ECHO_DELAY: f32 = 0.15; // fraction of the duration
pub const PULSE_ECHO_STRENGTH: f32 = 0.55;
pub const PULSE_TRIGGER_PROBABILITY: f64 = 0.015; // per frame
pub const PULSE_COOLDOWN_AMBIENT_SEC: f64 = 3.0;
pub const PULSE_COOLDOWN_FOCUSED_SEC: f64 = 1.5;

// Perspective
pub const FOV_AMBIENT: f32 = 900.0;
pub const FOV_FOCUSED: f32 = 1000.0;
pub const MIN_DEPTH_ALPHA: f32 = 0.12;

// Frame integration reference
pub const REFERENCE_FPS: f32 = 60.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // larger gaps (tab switches) are clamped

// Theme preference
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

// Carousel
pub const CAROUSEL_INTERVAL_SEC: f64 = 5.0;
