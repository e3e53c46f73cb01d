use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose wiring logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Scroll offsets in CSS pixels
pub const HEADER_SCROLL_THRESHOLD: f64 = 20.0;
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;
pub const PARALLAX_SPEED: f64 = 0.5;

// Viewport widths in CSS pixels, upper bounds are exclusive
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

pub const MOBILE_BANNER: &str = "assets/mobile-banner.png";
pub const TABLET_BANNER: &str = "assets/tablet-banner.png";
pub const DESKTOP_BANNER: &str = "assets/desktop-banner.png";

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease-out, transform 0.6s ease-out";

/// `stagger-<N>` delays its animation by `N / STAGGER_STEP_DIVISOR` seconds.
pub const STAGGER_STEP_DIVISOR: f64 = 10.0;
