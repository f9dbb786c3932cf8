// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "sentinel.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Seed ---
pub const DEFAULT_NORMAL_COUNT: usize = 40;
pub const DEFAULT_ANOMALOUS_COUNT: usize = 10;
pub const DEFAULT_LOGIN_WINDOW_HOURS: u32 = 7 * 24;
pub const DEFAULT_MAX_SESSION_HOURS: u32 = 8;

// --- Dashboard ---
pub const DEFAULT_DETECTION_ACCURACY: f64 = crate::constants::DETECTION_ACCURACY;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 30;
pub const DEFAULT_TIMELINE_LEN: usize = 20;
pub const DEFAULT_ACKNOWLEDGED_PREVIEW: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
