//! Composite risk score: a capped weighted sum of behavior signals.

use sentinel_core::constants::{RISK_SCORE_MAX, RISK_SCORE_MIN};
use sentinel_core::models::BehaviorSignals;

/// Per-signal weights and caps. Each term is capped before summation so no
/// single signal saturates the total.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskWeights {
    pub access_frequency_cap: f64,
    pub files_weight: f64,
    pub files_cap: f64,
    pub failed_login_weight: f64,
    pub failed_login_cap: f64,
    pub after_hours: f64,
    pub unusual_transfer: f64,
    pub sensitive_weight: f64,
    pub sensitive_cap: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            access_frequency_cap: 20.0,
            files_weight: 0.6,
            files_cap: 30.0,
            failed_login_weight: 10.0,
            failed_login_cap: 40.0,
            after_hours: 15.0,
            unusual_transfer: 25.0,
            sensitive_weight: 3.0,
            sensitive_cap: 30.0,
        }
    }
}

impl RiskWeights {
    /// Score `signals`: clamped to `[0, 100]`, rounded to two decimals.
    pub fn score(&self, signals: &BehaviorSignals) -> f64 {
        let mut total = f64::from(signals.access_frequency).min(self.access_frequency_cap);
        total += (f64::from(signals.files_accessed) * self.files_weight).min(self.files_cap);
        total += (f64::from(signals.failed_login_attempts) * self.failed_login_weight)
            .min(self.failed_login_cap);
        if signals.after_hours_access {
            total += self.after_hours;
        }
        if signals.unusual_data_transfer {
            total += self.unusual_transfer;
        }
        total += (f64::from(signals.sensitive_files_accessed) * self.sensitive_weight)
            .min(self.sensitive_cap);

        round2(total.clamp(RISK_SCORE_MIN, RISK_SCORE_MAX))
    }
}

/// Score with the default weights.
pub fn risk_score(signals: &BehaviorSignals) -> f64 {
    RiskWeights::default().score(signals)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(access: u32, files: u32, failed: u32, sensitive: u32, ah: bool, ut: bool) -> BehaviorSignals {
        BehaviorSignals {
            access_frequency: access,
            files_accessed: files,
            failed_login_attempts: failed,
            sensitive_files_accessed: sensitive,
            after_hours_access: ah,
            unusual_data_transfer: ut,
        }
    }

    #[test]
    fn quiet_user_scores_low() {
        assert_eq!(risk_score(&signals(4, 10, 0, 0, false, false)), 10.0);
        assert_eq!(risk_score(&signals(0, 0, 0, 0, false, false)), 0.0);
    }

    #[test]
    fn fractional_files_term_rounds_to_two_decimals() {
        // 7 + 0.6 * 13 = 14.8
        assert_eq!(risk_score(&signals(7, 13, 0, 0, false, false)), 14.8);
    }

    #[test]
    fn each_term_is_capped() {
        let capped = signals(500, 500, 500, 500, false, false);
        assert_eq!(risk_score(&capped), 100.0);

        let weights = RiskWeights::default();
        assert_eq!(weights.score(&signals(80, 0, 0, 0, false, false)), 20.0);
        assert_eq!(weights.score(&signals(0, 249, 0, 0, false, false)), 30.0);
        assert_eq!(weights.score(&signals(0, 0, 10, 0, false, false)), 40.0);
        assert_eq!(weights.score(&signals(0, 0, 0, 34, false, false)), 30.0);
    }

    #[test]
    fn flags_add_fixed_amounts() {
        assert_eq!(risk_score(&signals(0, 0, 0, 0, true, false)), 15.0);
        assert_eq!(risk_score(&signals(0, 0, 0, 0, false, true)), 25.0);
    }

    #[test]
    fn total_is_clamped() {
        assert_eq!(risk_score(&signals(79, 249, 10, 34, true, true)), 100.0);
    }
}
