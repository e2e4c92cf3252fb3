// Configuration constants for the application

/// Feed timing (in milliseconds)
pub const INITIAL_LOAD_DELAY_MS: u64 = 1200;

/// Event loop timing (in milliseconds)
pub const EVENT_POLL_TIMEOUT_MS: u64 = 50;
pub const UI_UPDATE_RATE_MS: u64 = 1000;

/// Trend highlight settings
pub const TREND_HIGHLIGHT_MS: u128 = 1000; // Highlight price moves for 1 second

/// Mock feed perturbation bounds (fraction per tick)
pub const PRICE_JITTER: f64 = 0.01;
pub const VOLUME_JITTER: f64 = 0.025;

/// UI settings
pub const PAGE_SIZE: usize = 10;
pub const SKELETON_ROWS: usize = 8;

/// Default CLI values
pub const DEFAULT_TICK_INTERVAL: f64 = 1.0;
pub const DEFAULT_TOKEN_COUNT: usize = 24;
