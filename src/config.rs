//! Frontend configuration
//!
//! The site is static, so there is nothing to read at runtime; every knob
//! lives here with its default.

use tracing::Level;

/// Footer build stamp, set by build.rs
pub const BUILD_HASH: &str = env!("BUILD_HASH");
pub const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP");

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// Catalog document, relative to the page
    pub catalog_url: &'static str,
    /// Local storage key holding the favorites array
    pub favorites_key: &'static str,
    /// Quiet interval before a typed title query is applied
    pub search_debounce_ms: u32,
    /// Live search in the prompt waits for at least this many characters
    pub live_search_min_chars: usize,
    pub toast_duration_ms: u32,
    /// Pause between confirming a reload and reloading
    pub reload_delay_ms: u32,
    /// How long a screen-reader announcement stays in the live region
    pub announcement_ms: u32,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: "data/games.json",
            favorites_key: "newsgames-favorites",
            search_debounce_ms: 300,
            live_search_min_chars: 2,
            toast_duration_ms: 3000,
            reload_delay_ms: 500,
            announcement_ms: 1000,
            log_level: Level::DEBUG,
        }
    }
}
