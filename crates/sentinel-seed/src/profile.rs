//! Behavior profiles: the ranges and flag probabilities each class of
//! synthetic user is drawn from.

use sentinel_core::models::BehaviorSignals;

use crate::random::RandomSource;

/// Uniform integer range `min..min + span`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: u32,
    pub span: u32,
}

impl CountRange {
    pub const fn new(min: u32, span: u32) -> Self {
        Self { min, span }
    }

    /// Largest value the range can produce.
    pub fn max(&self) -> u32 {
        self.min + self.span.saturating_sub(1)
    }

    pub fn mean(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max())) / 2.0
    }

    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.count(self.min, self.span)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorProfile {
    pub access_frequency: CountRange,
    pub files_accessed: CountRange,
    pub failed_login_attempts: CountRange,
    pub sensitive_files_accessed: CountRange,
    pub after_hours_probability: f64,
    pub unusual_transfer_probability: f64,
}

impl BehaviorProfile {
    /// Ordinary office behavior.
    pub fn normal() -> Self {
        Self {
            access_frequency: CountRange::new(1, 15),
            files_accessed: CountRange::new(1, 20),
            failed_login_attempts: CountRange::new(0, 2),
            sensitive_files_accessed: CountRange::new(0, 3),
            after_hours_probability: 0.1,
            unusual_transfer_probability: 0.05,
        }
    }

    /// Insider-threat behavior: every counter and flag skews higher.
    pub fn anomalous() -> Self {
        Self {
            access_frequency: CountRange::new(30, 50),
            files_accessed: CountRange::new(50, 200),
            failed_login_attempts: CountRange::new(3, 8),
            sensitive_files_accessed: CountRange::new(5, 30),
            after_hours_probability: 0.7,
            unusual_transfer_probability: 0.6,
        }
    }

    /// Draw one set of signals. Draw order is fixed: the four counters, then
    /// the two flags.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> BehaviorSignals {
        BehaviorSignals {
            access_frequency: self.access_frequency.sample(rng),
            files_accessed: self.files_accessed.sample(rng),
            failed_login_attempts: self.failed_login_attempts.sample(rng),
            sensitive_files_accessed: self.sensitive_files_accessed.sample(rng),
            after_hours_access: rng.chance(self.after_hours_probability),
            unusual_data_transfer: rng.chance(self.unusual_transfer_probability),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;

    #[test]
    fn anomalous_profile_dominates_normal() {
        let n = BehaviorProfile::normal();
        let a = BehaviorProfile::anomalous();
        assert!(a.access_frequency.mean() > n.access_frequency.mean());
        assert!(a.files_accessed.mean() > n.files_accessed.mean());
        assert!(a.failed_login_attempts.mean() > n.failed_login_attempts.mean());
        assert!(a.sensitive_files_accessed.mean() > n.sensitive_files_accessed.mean());
        assert!(a.after_hours_probability > n.after_hours_probability);
        assert!(a.unusual_transfer_probability > n.unusual_transfer_probability);
    }

    #[test]
    fn sample_hits_range_bounds() {
        let low = BehaviorProfile::anomalous().sample(&mut SequenceSource::constant(0.0));
        assert_eq!(low.access_frequency, 30);
        assert_eq!(low.files_accessed, 50);
        assert_eq!(low.failed_login_attempts, 3);
        assert_eq!(low.sensitive_files_accessed, 5);
        assert!(low.after_hours_access);
        assert!(low.unusual_data_transfer);

        let high = BehaviorProfile::normal().sample(&mut SequenceSource::constant(0.999));
        assert_eq!(high.access_frequency, 15);
        assert_eq!(high.files_accessed, 20);
        assert_eq!(high.failed_login_attempts, 1);
        assert_eq!(high.sensitive_files_accessed, 2);
        assert!(!high.after_hours_access);
        assert!(!high.unusual_data_transfer);
    }
}
