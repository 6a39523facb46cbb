//! Platform-free logic for the portfolio site's decorative fields and widgets.
//!
//! Nothing in here touches the DOM; the web frontend feeds in viewport
//! sizes, pointer positions and timestamps, and paints what comes back.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod graph;
pub mod interaction;
pub mod palette;
pub mod particle;
pub mod projection;
pub mod pulse;
pub mod scene;
pub mod smoothing;
pub mod terminal;
pub mod theme;

pub use carousel::Carousel;
pub use config::*;
pub use error::ConfigError;
pub use graph::{Connection, Neighbours};
pub use palette::{Palette, Rgb};
pub use particle::Particle;
pub use projection::{Projected, Projector};
pub use pulse::{ActivePulse, PulseState};
pub use scene::{DisplayList, LineDraw, PointDraw, Renderer};
pub use smoothing::{CameraState, Mode};
pub use terminal::{Profile, ProjectEntry, Terminal};
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemeController};
