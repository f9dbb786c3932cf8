//! Alerts panel: active alerts, a short acknowledged list, relative times.

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use sentinel_core::models::{Severity, ThreatAlert};

/// `{m}m ago` under an hour, `{h}h ago` under a day, else `{d}d ago`.
/// Units are floored; a timestamp after `now` reads as `0m ago`.
pub fn format_time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - created_at).max(chrono::Duration::zero());
    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", elapsed.num_days())
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct AlertEntry {
    pub id: String,
    pub alert_type: String,
    pub severity: Severity,
    pub description: String,
    pub is_acknowledged: bool,
    /// Username of the embedded activity, when the join returned one.
    pub username: Option<String>,
    pub department: Option<String>,
    pub time_ago: String,
}

impl AlertEntry {
    pub fn new(alert: &ThreatAlert, now: DateTime<Utc>) -> Self {
        Self {
            id: alert.id.clone(),
            alert_type: alert.alert_type.clone(),
            severity: alert.severity,
            description: alert.description.clone(),
            is_acknowledged: alert.is_acknowledged,
            username: alert.user_activity.as_ref().map(|a| a.username.clone()),
            department: alert.user_activity.as_ref().map(|a| a.department.clone()),
            time_ago: format_time_ago(alert.created_at, now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct AlertsPanelView {
    /// Number of unacknowledged alerts.
    pub active_count: usize,
    pub active: Vec<AlertEntry>,
    /// The first acknowledged alerts in input order.
    pub recently_acknowledged: Vec<AlertEntry>,
}

impl AlertsPanelView {
    /// Partition `alerts` (already newest first) by acknowledgement.
    pub fn new(alerts: &[ThreatAlert], acknowledged_preview: usize, now: DateTime<Utc>) -> Self {
        let active: Vec<AlertEntry> = alerts
            .iter()
            .filter(|a| !a.is_acknowledged)
            .map(|a| AlertEntry::new(a, now))
            .collect();
        let recently_acknowledged = alerts
            .iter()
            .filter(|a| a.is_acknowledged)
            .take(acknowledged_preview)
            .map(|a| AlertEntry::new(a, now))
            .collect();
        Self {
            active_count: active.len(),
            active,
            recently_acknowledged,
        }
    }
}
