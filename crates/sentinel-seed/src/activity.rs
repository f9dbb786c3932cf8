//! One synthetic activity draft per call.

use chrono::{DateTime, Duration, Utc};

use sentinel_core::config::SeedConfig;
use sentinel_core::constants::{MAX_LOGIN_WINDOW_HOURS, MAX_SESSION_HOURS};
use sentinel_core::models::{ThreatLevel, UserActivityDraft};

use crate::identity;
use crate::profile::BehaviorProfile;
use crate::random::RandomSource;
use crate::risk::RiskWeights;

/// Probability that a generated session has a recorded logout.
pub const LOGOUT_PROBABILITY: f64 = 0.8;

/// Builds activity drafts from the two behavior profiles.
#[derive(Debug, Clone)]
pub struct ActivityGenerator {
    pub normal: BehaviorProfile,
    pub anomalous: BehaviorProfile,
    pub weights: RiskWeights,
    pub login_window: Duration,
    pub max_session: Duration,
}

impl Default for ActivityGenerator {
    fn default() -> Self {
        Self::from_config(&SeedConfig::default())
    }
}

impl ActivityGenerator {
    /// Windows are capped at the validated maxima, so an unvalidated config
    /// cannot push timestamps out of chrono's range.
    pub fn from_config(config: &SeedConfig) -> Self {
        Self {
            normal: BehaviorProfile::normal(),
            anomalous: BehaviorProfile::anomalous(),
            weights: RiskWeights::default(),
            login_window: Duration::hours(i64::from(
                config.login_window_hours.min(MAX_LOGIN_WINDOW_HOURS),
            )),
            max_session: Duration::hours(i64::from(
                config.max_session_hours.min(MAX_SESSION_HOURS),
            )),
        }
    }

    /// Generate one draft as of `now`.
    ///
    /// `login_time` lies in `(now - login_window, now]`. A logout that would
    /// land after `now` is dropped, leaving the session open.
    pub fn generate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        is_anomalous: bool,
        now: DateTime<Utc>,
    ) -> UserActivityDraft {
        let login_time = now - scale(self.login_window, rng.next_f64());
        let logout_time = if rng.chance(LOGOUT_PROBABILITY) {
            let logout = login_time + scale(self.max_session, rng.next_f64());
            (logout <= now).then_some(logout)
        } else {
            None
        };

        let profile = if is_anomalous {
            &self.anomalous
        } else {
            &self.normal
        };
        let signals = profile.sample(rng);
        let risk_score = self.weights.score(&signals);

        UserActivityDraft {
            user_identifier: identity::user_identifier(rng),
            username: identity::username(rng),
            department: identity::department(rng),
            login_time,
            logout_time,
            access_frequency: signals.access_frequency,
            files_accessed: signals.files_accessed,
            failed_login_attempts: signals.failed_login_attempts,
            after_hours_access: signals.after_hours_access,
            unusual_data_transfer: signals.unusual_data_transfer,
            sensitive_files_accessed: signals.sensitive_files_accessed,
            risk_score,
            threat_level: ThreatLevel::from_score(risk_score),
            is_anomaly: is_anomalous,
        }
    }
}

/// `fraction` of `span`, at millisecond resolution.
fn scale(span: Duration, fraction: f64) -> Duration {
    Duration::milliseconds((span.num_milliseconds() as f64 * fraction) as i64)
}
