//! Insert, select, and acknowledge for `threat_alerts`.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use sentinel_core::errors::{SentinelError, SentinelResult, StorageError};
use sentinel_core::models::{Severity, ThreatAlert, ThreatAlertDraft};
use sentinel_core::query::{AlertExpansion, AlertPatch, Query, Table};

use super::activity_ops::{self, col, row_to_activity};
use super::filter::{select_suffix, where_clause};
use super::timestamps;
use crate::to_storage_err;

const ALERT_COLUMN_COUNT: usize = 7;

fn alert_columns() -> String {
    Table::ThreatAlerts
        .columns()
        .iter()
        .map(|c| format!("t.{c}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn row_to_alert(row: &Row<'_>, expansion: AlertExpansion) -> SentinelResult<ThreatAlert> {
    let table = Table::ThreatAlerts.name();
    let severity: String = col(row, 3)?;
    let severity: Severity = severity.parse().map_err(|_| StorageError::InvalidRow {
        table: table.to_string(),
        reason: format!("unknown severity {severity:?}"),
    })?;
    let created_at: String = col(row, 6)?;

    // LEFT JOIN leaves every activity column NULL when the reference dangles.
    let user_activity = match expansion {
        AlertExpansion::None => None,
        AlertExpansion::UserActivity => {
            let joined_id: Option<String> = col(row, ALERT_COLUMN_COUNT)?;
            match joined_id {
                Some(_) => Some(Box::new(row_to_activity(row, ALERT_COLUMN_COUNT)?)),
                None => None,
            }
        }
    };

    Ok(ThreatAlert {
        id: col(row, 0)?,
        user_activity_id: col(row, 1)?,
        alert_type: col(row, 2)?,
        severity,
        description: col(row, 4)?,
        is_acknowledged: col(row, 5)?,
        created_at: timestamps::decode(table, &created_at)?,
        user_activity,
    })
}

/// Select alerts matching `query`, optionally embedding the referenced
/// activity.
pub fn select_alerts(
    conn: &Connection,
    query: &Query,
    expansion: AlertExpansion,
) -> SentinelResult<Vec<ThreatAlert>> {
    let suffix = select_suffix(query, Table::ThreatAlerts, Some("t"))?;
    let sql = match expansion {
        AlertExpansion::None => {
            format!("SELECT {} FROM threat_alerts t{}", alert_columns(), suffix.sql)
        }
        AlertExpansion::UserActivity => format!(
            "SELECT {}, {} FROM threat_alerts t \
             LEFT JOIN user_activities a ON a.id = t.user_activity_id{}",
            alert_columns(),
            activity_ops::column_list(Some("a")),
            suffix.sql
        ),
    };

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params_from_iter(suffix.params.iter()), |row| {
            Ok(row_to_alert(row, expansion))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    tracing::debug!(rows = result.len(), ?expansion, "selected threat_alerts");
    Ok(result)
}

/// Get a single alert by ID, without expansion.
pub fn get_alert(conn: &Connection, id: &str) -> SentinelResult<Option<ThreatAlert>> {
    let sql = format!("SELECT {} FROM threat_alerts t WHERE t.id = ?1", alert_columns());
    conn.query_row(&sql, params![id], |row| {
        Ok(row_to_alert(row, AlertExpansion::None))
    })
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))?
    .transpose()
}

/// Bulk insert alerts in one transaction. A dangling `user_activity_id`
/// fails the whole batch.
pub fn insert_alerts(
    conn: &Connection,
    drafts: &[ThreatAlertDraft],
) -> SentinelResult<Vec<ThreatAlert>> {
    if drafts.is_empty() {
        return Ok(Vec::new());
    }
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("insert_alerts begin: {e}")))?;

    let mut inserted = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let id = uuid::Uuid::new_v4().to_string();
        let result = tx
            .execute(
                "INSERT INTO threat_alerts (
                    id, user_activity_id, alert_type, severity, description, is_acknowledged
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    id,
                    draft.user_activity_id,
                    draft.alert_type,
                    draft.severity.as_str(),
                    draft.description,
                    draft.is_acknowledged,
                ],
            )
            .map_err(|e| to_storage_err(e.to_string()))
            .and_then(|_| {
                get_alert(&tx, &id)?
                    .ok_or_else(|| to_storage_err(format!("inserted alert {id} not found")))
            });
        match result {
            Ok(alert) => inserted.push(alert),
            Err(e) => {
                let _ = tx.rollback();
                return Err(e);
            }
        }
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("insert_alerts commit: {e}")))?;
    tracing::debug!(rows = inserted.len(), "inserted threat_alerts");
    Ok(inserted)
}

/// Apply `patch` to every alert matching the filters of `query`.
/// Ordering and limit are ignored. Returns rows affected.
pub fn update_alerts(conn: &Connection, patch: &AlertPatch, query: &Query) -> SentinelResult<usize> {
    let Some(acknowledged) = patch.is_acknowledged() else {
        return Err(SentinelError::InvalidQuery {
            reason: "alert patch sets no columns".to_string(),
        });
    };
    if query.filters.is_empty() {
        return Err(SentinelError::InvalidQuery {
            reason: "refusing to update threat_alerts without a filter".to_string(),
        });
    }

    let clause = where_clause(query, Table::ThreatAlerts, None)?;
    let mut values = Vec::with_capacity(clause.params.len() + 1);
    values.push(Value::Integer(i64::from(acknowledged)));
    values.extend(clause.params);

    let sql = format!("UPDATE threat_alerts SET is_acknowledged = ?{}", clause.sql);
    let affected = conn
        .execute(&sql, params_from_iter(values.iter()))
        .map_err(|e| to_storage_err(e.to_string()))?;
    tracing::debug!(affected, acknowledged, "updated threat_alerts");
    Ok(affected)
}
