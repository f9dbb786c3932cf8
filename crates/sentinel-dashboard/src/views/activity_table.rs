//! Activity table rows with search and threat-level filtering.

use serde::Serialize;

use sentinel_core::models::{ThreatLevel, UserActivity};

use super::grades::RiskBand;

/// Threat-level selector of the activity table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LevelFilter {
    #[default]
    All,
    Only(ThreatLevel),
}

/// Case-insensitive substring search over username, department, and user
/// identifier, combined with a level filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    pub search: String,
    pub level: LevelFilter,
}

impl ActivityFilter {
    pub fn new(search: impl Into<String>, level: LevelFilter) -> Self {
        Self {
            search: search.into(),
            level,
        }
    }

    pub fn matches(&self, activity: &UserActivity) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = activity.username.to_lowercase().contains(&needle)
            || activity.department.to_lowercase().contains(&needle)
            || activity.user_identifier.to_lowercase().contains(&needle);
        let matches_level = match self.level {
            LevelFilter::All => true,
            LevelFilter::Only(level) => activity.threat_level == level,
        };
        matches_search && matches_level
    }

    /// Matching activities, input order preserved.
    pub fn apply<'a>(&self, activities: &'a [UserActivity]) -> Vec<&'a UserActivity> {
        activities.iter().filter(|a| self.matches(a)).collect()
    }
}

/// One table row: the activity plus its gauge band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRow {
    #[serde(flatten)]
    pub activity: UserActivity,
    pub risk_band: RiskBand,
}

impl From<&UserActivity> for ActivityRow {
    fn from(activity: &UserActivity) -> Self {
        Self {
            activity: activity.clone(),
            risk_band: RiskBand::from_score(activity.risk_score),
        }
    }
}
