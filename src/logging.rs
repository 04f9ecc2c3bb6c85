//! Logging setup for the browser
//!
//! `tracing` events go to the developer console through `tracing-wasm`'s
//! layer, installed on a `tracing-subscriber` registry.

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_wasm::{ConsoleConfig, WASMLayer, WASMLayerConfigBuilder};

/// Install the console subscriber. Safe to call more than once.
pub fn init_logging(max_level: Level) {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(max_level)
        .set_report_logs_in_timings(false)
        .set_console_config(ConsoleConfig::ReportWithoutConsoleColor)
        .build();

    if let Err(e) = tracing_subscriber::registry().with(WASMLayer::new(config)).try_init() {
        web_sys::console::warn_1(&format!("Logging already initialized: {}", e).into());
    }
}
