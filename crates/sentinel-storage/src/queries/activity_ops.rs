//! Insert and select for `user_activities`.

use rusqlite::types::FromSql;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use sentinel_core::errors::{SentinelResult, StorageError};
use sentinel_core::models::{ThreatLevel, UserActivity, UserActivityDraft};
use sentinel_core::query::{Query, Table};

use super::filter::select_suffix;
use super::timestamps;
use crate::to_storage_err;

/// Comma-separated column list, optionally qualified with a table alias.
pub fn column_list(alias: Option<&str>) -> String {
    Table::UserActivities
        .columns()
        .iter()
        .map(|c| match alias {
            Some(a) => format!("{a}.{c}"),
            None => (*c).to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn col<T: FromSql>(row: &Row<'_>, idx: usize) -> SentinelResult<T> {
    row.get(idx).map_err(|e| to_storage_err(e.to_string()))
}

/// Decode one activity starting at column `offset`.
pub fn row_to_activity(row: &Row<'_>, offset: usize) -> SentinelResult<UserActivity> {
    let table = Table::UserActivities.name();
    let threat_level: String = col(row, offset + 13)?;
    let threat_level: ThreatLevel = threat_level.parse().map_err(|_| StorageError::InvalidRow {
        table: table.to_string(),
        reason: format!("unknown threat_level {threat_level:?}"),
    })?;
    let login_time: String = col(row, offset + 4)?;
    let logout_time: Option<String> = col(row, offset + 5)?;
    let created_at: String = col(row, offset + 15)?;

    Ok(UserActivity {
        id: col(row, offset)?,
        user_identifier: col(row, offset + 1)?,
        username: col(row, offset + 2)?,
        department: col(row, offset + 3)?,
        login_time: timestamps::decode(table, &login_time)?,
        logout_time: logout_time
            .map(|raw| timestamps::decode(table, &raw))
            .transpose()?,
        access_frequency: col(row, offset + 6)?,
        files_accessed: col(row, offset + 7)?,
        failed_login_attempts: col(row, offset + 8)?,
        after_hours_access: col(row, offset + 9)?,
        unusual_data_transfer: col(row, offset + 10)?,
        sensitive_files_accessed: col(row, offset + 11)?,
        risk_score: col(row, offset + 12)?,
        threat_level,
        is_anomaly: col(row, offset + 14)?,
        created_at: timestamps::decode(table, &created_at)?,
    })
}

/// Select activities matching `query`.
pub fn select_activities(conn: &Connection, query: &Query) -> SentinelResult<Vec<UserActivity>> {
    let suffix = select_suffix(query, Table::UserActivities, None)?;
    let sql = format!("SELECT {} FROM user_activities{}", column_list(None), suffix.sql);
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params_from_iter(suffix.params.iter()), |row| {
            Ok(row_to_activity(row, 0))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    tracing::debug!(rows = result.len(), "selected user_activities");
    Ok(result)
}

/// Get a single activity by ID.
pub fn get_activity(conn: &Connection, id: &str) -> SentinelResult<Option<UserActivity>> {
    let sql = format!("SELECT {} FROM user_activities WHERE id = ?1", column_list(None));
    conn.query_row(&sql, params![id], |row| Ok(row_to_activity(row, 0)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?
        .transpose()
}

fn insert_one(conn: &Connection, draft: &UserActivityDraft) -> SentinelResult<UserActivity> {
    let id = uuid::Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO user_activities (
            id, user_identifier, username, department, login_time, logout_time,
            access_frequency, files_accessed, failed_login_attempts,
            after_hours_access, unusual_data_transfer, sensitive_files_accessed,
            risk_score, threat_level, is_anomaly
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        params![
            id,
            draft.user_identifier,
            draft.username,
            draft.department,
            timestamps::encode(&draft.login_time),
            draft.logout_time.as_ref().map(timestamps::encode),
            draft.access_frequency,
            draft.files_accessed,
            draft.failed_login_attempts,
            draft.after_hours_access,
            draft.unusual_data_transfer,
            draft.sensitive_files_accessed,
            draft.risk_score,
            draft.threat_level.as_str(),
            draft.is_anomaly,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    get_activity(conn, &id)?.ok_or_else(|| to_storage_err(format!("inserted activity {id} not found")))
}

/// Bulk insert activities in one transaction. Returns the stored rows in
/// draft order. A failure inserts nothing.
pub fn insert_activities(
    conn: &Connection,
    drafts: &[UserActivityDraft],
) -> SentinelResult<Vec<UserActivity>> {
    if drafts.is_empty() {
        return Ok(Vec::new());
    }
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("insert_activities begin: {e}")))?;

    let mut inserted = Vec::with_capacity(drafts.len());
    for draft in drafts {
        match insert_one(&tx, draft) {
            Ok(activity) => inserted.push(activity),
            Err(e) => {
                let _ = tx.rollback();
                return Err(e);
            }
        }
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("insert_activities commit: {e}")))?;
    tracing::debug!(rows = inserted.len(), "inserted user_activities");
    Ok(inserted)
}
