use log::Level;

pub const BRAND: &str = "AITOMATICLY";
pub const CONTACT_EMAIL: &str = "info@aitomaticly.com";
pub const LOCATION: &str = "Bern, Schweiz";

// Booking calendar
pub const CAL_ORIGIN: &str = "https://app.cal.eu";
pub const CAL_EMBED_SCRIPT: &str = "https://app.cal.eu/embed/embed.js";
pub const CAL_NAMESPACE: &str = "erstgesprach";
pub const CAL_LINK: &str = "automaticly/erstgesprach";
pub const CAL_CONTAINER_ID: &str = "my-cal-inline-erstgesprach";

// Chat launcher
pub const CHAT_POLL_INTERVAL_MS: u32 = 100;
pub const CHAT_POLL_ATTEMPTS: u32 = 150;
pub const CHAT_REVEAL_DELAY_MS: u32 = 500;

// Section timing
pub const SHOWCASE_PERIOD_MS: u64 = 4000;
pub const SHOWCASE_COOLDOWN_MS: u64 = 8000;
pub const TEAM_WORD_PERIOD_MS: u64 = 3000;
pub const DASHBOARD_TICK_MS: u32 = 533;
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_DELAY_MS: f64 = 500.0;
pub const NAV_REVEAL_DELAY_MS: u32 = 300;
pub const NAV_SCROLLED_OFFSET: f64 = 20.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
