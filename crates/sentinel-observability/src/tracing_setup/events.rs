//! Structured log events for key operations.

/// A seed stage finished with the given outcome label.
pub fn seed_stage_finished(stage: &str, outcome: &str, rows: usize) {
    tracing::info!(
        event = "seed_stage_finished",
        stage = %stage,
        outcome = %outcome,
        rows = rows,
        "seed stage finished"
    );
}

/// A seed stage failed. The pipeline continues with the next stage.
pub fn seed_stage_failed(stage: &str, error: &str) {
    tracing::error!(
        event = "seed_stage_failed",
        stage = %stage,
        error = %error,
        "seed stage failed"
    );
}

/// Seeding was skipped because the store already holds activities.
pub fn seed_skipped() {
    tracing::info!(event = "seed_skipped", "store already seeded");
}

pub fn alert_acknowledged(alert_id: &str, affected: usize) {
    tracing::info!(
        event = "alert_acknowledged",
        alert_id = %alert_id,
        affected = affected,
        "alert acknowledged"
    );
}

/// A dashboard section could not be loaded and renders empty.
pub fn section_unavailable(section: &str, error: &str) {
    tracing::warn!(
        event = "section_unavailable",
        section = %section,
        error = %error,
        "dashboard section unavailable"
    );
}
