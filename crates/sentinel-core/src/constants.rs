/// Sentinel system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of every stored risk score.
pub const RISK_SCORE_MIN: f64 = 0.0;

/// Upper bound of every stored risk score.
pub const RISK_SCORE_MAX: f64 = 100.0;

/// Inclusive lower bounds of the threat-level buckets.
/// `[0,20)` normal, `[20,40)` low, `[40,60)` medium, `[60,80)` high, `[80,100]` critical.
pub const LOW_THRESHOLD: f64 = 20.0;
pub const MEDIUM_THRESHOLD: f64 = 40.0;
pub const HIGH_THRESHOLD: f64 = 60.0;
pub const CRITICAL_THRESHOLD: f64 = 80.0;

/// Detection accuracy shown on the dashboard (percent).
/// Fixed value; never computed from stored model metrics.
pub const DETECTION_ACCURACY: f64 = 94.5;

/// Maximum rows accepted by a single bulk insert.
pub const MAX_BULK_BATCH_SIZE: usize = 1000;

/// Upper bound of `seed.login_window_hours` (100 years).
pub const MAX_LOGIN_WINDOW_HOURS: u32 = 24 * 365 * 100;

/// Upper bound of `seed.max_session_hours` (one week).
pub const MAX_SESSION_HOURS: u32 = 24 * 7;
