// DOM hooks the page markup provides. Anything missing is skipped at startup.

// Canvases opt in with data-field="cloud" | "sphere"
pub const FIELD_SELECTOR: &str = "canvas[data-field]";
pub const FIELD_ATTR: &str = "data-field";

// Theme
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_ATTR: &str = "data-theme";
pub const DARK_CLASS: &str = "dark";
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// Terminal
pub const TERMINAL_ID: &str = "terminal";
pub const TERMINAL_INPUT_ID: &str = "terminal-input";
pub const TERMINAL_OUTPUT_ID: &str = "terminal-output";
pub const TERMINAL_LINE_CLASS: &str = "terminal-line";
pub const OPEN_LINK_DELAY_MS: i32 = 500; // reply first, then follow the link

// Profile attributes on the terminal element
pub const PROFILE_NAME_ATTR: &str = "data-name";
pub const PROFILE_ROLE_ATTR: &str = "data-role";
pub const PROFILE_ABOUT_ATTR: &str = "data-about";
pub const PROFILE_SKILLS_ATTR: &str = "data-skills"; // comma separated
pub const PROFILE_CONTACTS_ATTR: &str = "data-contacts"; // "email=...; linkedin=handle; github=handle"

// Carousel
pub const CAROUSEL_ID: &str = "project-carousel";
pub const CAROUSEL_TRACK_SELECTOR: &str = ".carousel-track";
pub const CAROUSEL_SLIDE_SELECTOR: &str = ".carousel-slide";
pub const CAROUSEL_PREV_SELECTOR: &str = ".carousel-prev";
pub const CAROUSEL_NEXT_SELECTOR: &str = ".carousel-next";
pub const CAROUSEL_ACTIVE_CLASS: &str = "active";
pub const CAROUSEL_TICK_MS: i32 = 500;

// Slide attributes, also used to fill the terminal's `projects`
pub const SLIDE_TITLE_ATTR: &str = "data-title";
pub const SLIDE_SUMMARY_ATTR: &str = "data-summary";
pub const SLIDE_URL_ATTR: &str = "data-url";

// Hover spotlight cards
pub const SPOTLIGHT_SELECTOR: &str = ".spotlight";
pub const SPOT_X_VAR: &str = "--spot-x";
pub const SPOT_Y_VAR: &str = "--spot-y";
