//! Insert and select for `ml_model_metrics`.

use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use sentinel_core::errors::SentinelResult;
use sentinel_core::models::{MlModelMetrics, MlModelMetricsDraft};
use sentinel_core::query::{Query, Table};

use super::activity_ops::col;
use super::filter::select_suffix;
use super::timestamps;
use crate::to_storage_err;

const COLUMNS: &str = "id, model_type, accuracy, precision_score, recall_score, f1_score, \
                       false_positive_rate, training_date, created_at";

fn row_to_metrics(row: &Row<'_>) -> SentinelResult<MlModelMetrics> {
    let table = Table::MlModelMetrics.name();
    let training_date: String = col(row, 7)?;
    let created_at: String = col(row, 8)?;
    Ok(MlModelMetrics {
        id: col(row, 0)?,
        model_type: col(row, 1)?,
        accuracy: col(row, 2)?,
        precision_score: col(row, 3)?,
        recall_score: col(row, 4)?,
        f1_score: col(row, 5)?,
        false_positive_rate: col(row, 6)?,
        training_date: timestamps::decode(table, &training_date)?,
        created_at: timestamps::decode(table, &created_at)?,
    })
}

pub fn select_model_metrics(conn: &Connection, query: &Query) -> SentinelResult<Vec<MlModelMetrics>> {
    let suffix = select_suffix(query, Table::MlModelMetrics, None)?;
    let sql = format!("SELECT {COLUMNS} FROM ml_model_metrics{}", suffix.sql);
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params_from_iter(suffix.params.iter()), |row| {
            Ok(row_to_metrics(row))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(result)
}

fn get_model_metrics(conn: &Connection, id: &str) -> SentinelResult<Option<MlModelMetrics>> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM ml_model_metrics WHERE id = ?1"),
        params![id],
        |row| Ok(row_to_metrics(row)),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))?
    .transpose()
}

/// Bulk insert metrics rows in one transaction.
pub fn insert_model_metrics(
    conn: &Connection,
    drafts: &[MlModelMetricsDraft],
) -> SentinelResult<Vec<MlModelMetrics>> {
    if drafts.is_empty() {
        return Ok(Vec::new());
    }
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("insert_model_metrics begin: {e}")))?;

    let mut inserted = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let id = uuid::Uuid::new_v4().to_string();
        let result = tx
            .execute(
                "INSERT INTO ml_model_metrics (
                    id, model_type, accuracy, precision_score, recall_score,
                    f1_score, false_positive_rate, training_date
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    id,
                    draft.model_type,
                    draft.accuracy,
                    draft.precision_score,
                    draft.recall_score,
                    draft.f1_score,
                    draft.false_positive_rate,
                    timestamps::encode(&draft.training_date),
                ],
            )
            .map_err(|e| to_storage_err(e.to_string()))
            .and_then(|_| {
                get_model_metrics(&tx, &id)?
                    .ok_or_else(|| to_storage_err(format!("inserted metrics {id} not found")))
            });
        match result {
            Ok(metrics) => inserted.push(metrics),
            Err(e) => {
                let _ = tx.rollback();
                return Err(e);
            }
        }
    }

    tx.commit()
        .map_err(|e| to_storage_err(format!("insert_model_metrics commit: {e}")))?;
    tracing::debug!(rows = inserted.len(), "inserted ml_model_metrics");
    Ok(inserted)
}
