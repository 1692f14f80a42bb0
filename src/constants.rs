//! Application constants and configuration

pub const APP_NAME: &str = "Catalog Viewer";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Time between autoplay advances
pub const AUTOPLAY_INTERVAL_MS: u64 = 3000;
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 100;
