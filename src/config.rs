use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// At or below this width (CSS px) the page renders the stacked mobile layout
pub const MOBILE_MAX_WIDTH: f64 = 767.0;
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 767px)";

// width plus margin of one sprocket hole
pub const SPROCKET_HOLE_UNIT: f64 = 60.0;

pub const COUNTDOWN_START: u32 = 5;
pub const COUNTDOWN_TICK_MS: u32 = 1_000;
pub const COUNTDOWN_DONE_LABEL: &str = "ACTN";

// parallax drift as a fraction of the image's own width
pub const PARALLAX_SHIFT: f64 = 0.10;

pub const REVEAL_OFFSET_PX: f64 = 30.0;
pub const REVEAL_DURATION_MS: u32 = 1_000;
pub const REVEAL_STAGGER_MS: u32 = 100;

pub const CURSOR_EASE_MS: f64 = 100.0;
pub const CURSOR_DEFAULT_LABEL: &str = "VIEW";

// roughly how long the pinned track takes to catch up with the scrollbar
pub const SCRUB_LAG_MS: f64 = 1_000.0;

pub const SITE_TITLE: &str = "AdVerse.media | Cinematic B2B";
