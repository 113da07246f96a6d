//! Application constants and configuration

pub const HEADER_FRAGMENT_URL: &str =
    "https://raw.githubusercontent.com/liquidlabs-studio/liquid-landing-content/main/header.json";
pub const FOOTER_FRAGMENT_URL: &str =
    "https://raw.githubusercontent.com/liquidlabs-studio/liquid-landing-content/main/footer.json";
pub const APP_NAME: &str = "Liquid Landing";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Window width below which the nav collapses behind the hamburger button
pub const NARROW_WIDTH: f32 = 640.0;

/// Vertical scroll offset past which the scroll-to-top button appears
pub const SCROLL_TOP_THRESHOLD: f32 = 300.0;
