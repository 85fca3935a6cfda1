//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change a timing default, only edit this file.

/// Number of devices seeded into the fleet
pub const DEVICE_COUNT: usize = 50;

/// Number of alerts seeded into the feed
pub const ALERT_COUNT: usize = 25;

/// Number of incidents seeded into the queue
pub const INCIDENT_COUNT: usize = 15;

/// Default simulated initial load delay (milliseconds)
pub const DEFAULT_LOAD_DELAY_MS: u64 = 500;

/// Default telemetry perturbation interval (seconds)
pub const DEFAULT_REFRESH_INTERVAL: u64 = 5;

/// Default simulated login round-trip (milliseconds)
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "SOC Console";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get initial load delay from environment or use default
pub fn get_load_delay_ms() -> u64 {
    std::env::var("SOC_CONSOLE_LOAD_DELAY_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_LOAD_DELAY_MS)
}

/// Get refresh interval from environment or use default
pub fn get_refresh_interval() -> u64 {
    std::env::var("SOC_CONSOLE_REFRESH_INTERVAL")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_REFRESH_INTERVAL)
}

/// Get login delay from environment or use default
pub fn get_login_delay_ms() -> u64 {
    std::env::var("SOC_CONSOLE_LOGIN_DELAY_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_LOGIN_DELAY_MS)
}
