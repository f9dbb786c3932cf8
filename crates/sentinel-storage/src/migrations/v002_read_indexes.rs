//! v002: indexes for the dashboard read paths.

pub const MIGRATION_SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_activities_risk_score ON user_activities(risk_score);
CREATE INDEX IF NOT EXISTS idx_activities_threat_level ON user_activities(threat_level);
CREATE INDEX IF NOT EXISTS idx_alerts_activity ON threat_alerts(user_activity_id);
CREATE INDEX IF NOT EXISTS idx_alerts_created_at ON threat_alerts(created_at);
CREATE INDEX IF NOT EXISTS idx_metrics_created_at ON ml_model_metrics(created_at);
";
