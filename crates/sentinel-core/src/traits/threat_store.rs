use crate::errors::SentinelResult;
use crate::models::{
    MlModelMetrics, MlModelMetricsDraft, ThreatAlert, ThreatAlertDraft, UserActivity,
    UserActivityDraft,
};
use crate::query::{AlertExpansion, AlertPatch, Query};

/// The external data store: select + insert + update over the three tables.
///
/// Each call is serialized by the store; nothing spans calls. Inserts return
/// the inserted rows with their store-assigned `id` and `created_at`.
pub trait IThreatStore: Send + Sync {
    // --- user_activities ---
    fn select_activities(&self, query: &Query) -> SentinelResult<Vec<UserActivity>>;
    fn insert_activities(&self, drafts: &[UserActivityDraft]) -> SentinelResult<Vec<UserActivity>>;

    // --- threat_alerts ---
    fn select_alerts(
        &self,
        query: &Query,
        expansion: AlertExpansion,
    ) -> SentinelResult<Vec<ThreatAlert>>;
    fn insert_alerts(&self, drafts: &[ThreatAlertDraft]) -> SentinelResult<Vec<ThreatAlert>>;
    /// Apply `patch` to every alert matching `query`. Returns rows affected.
    /// A query without filters is rejected.
    fn update_alerts(&self, patch: &AlertPatch, query: &Query) -> SentinelResult<usize>;

    // --- ml_model_metrics ---
    fn select_model_metrics(&self, query: &Query) -> SentinelResult<Vec<MlModelMetrics>>;
    fn insert_model_metrics(
        &self,
        drafts: &[MlModelMetricsDraft],
    ) -> SentinelResult<Vec<MlModelMetrics>>;
}
