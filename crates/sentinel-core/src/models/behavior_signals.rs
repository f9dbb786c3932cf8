use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The behavioral inputs of one session: four counters and two flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BehaviorSignals {
    pub access_frequency: u32,
    pub files_accessed: u32,
    pub failed_login_attempts: u32,
    pub sensitive_files_accessed: u32,
    pub after_hours_access: bool,
    pub unusual_data_transfer: bool,
}
