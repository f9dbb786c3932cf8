//! Translate a [`Query`] into a WHERE / ORDER BY / LIMIT suffix.
//!
//! Column names are checked against the table's column list before they are
//! spliced into SQL; values are always bound parameters.

use rusqlite::types::Value;

use sentinel_core::errors::SentinelResult;
use sentinel_core::query::{FilterValue, Query, Table};

/// A SQL fragment plus its positional parameters.
#[derive(Debug, Default)]
pub struct SqlClause {
    pub sql: String,
    pub params: Vec<Value>,
}

pub fn to_sql_value(value: &FilterValue) -> Value {
    match value {
        FilterValue::Text(s) => Value::Text(s.clone()),
        FilterValue::Integer(i) => Value::Integer(*i),
        FilterValue::Real(r) => Value::Real(*r),
        FilterValue::Bool(b) => Value::Integer(i64::from(*b)),
    }
}

fn qualified(alias: Option<&str>, column: &str) -> String {
    match alias {
        Some(a) => format!("{a}.{column}"),
        None => column.to_string(),
    }
}

/// ` WHERE a = ? AND b = ?` (empty when there are no filters).
pub fn where_clause(query: &Query, table: Table, alias: Option<&str>) -> SentinelResult<SqlClause> {
    query.validate(table)?;
    let mut clause = SqlClause::default();
    for (i, filter) in query.filters.iter().enumerate() {
        clause.sql.push_str(if i == 0 { " WHERE " } else { " AND " });
        clause.sql.push_str(&qualified(alias, &filter.column));
        clause.sql.push_str(" = ?");
        clause.params.push(to_sql_value(&filter.value));
    }
    Ok(clause)
}

/// Full select suffix: filters, ordering, limit.
///
/// Rows equal on the ordering column keep insertion order in the requested
/// direction. Without an ordering, rows come back in insertion order.
pub fn select_suffix(query: &Query, table: Table, alias: Option<&str>) -> SentinelResult<SqlClause> {
    let mut clause = where_clause(query, table, alias)?;
    let rowid = qualified(alias, "rowid");
    match &query.order {
        Some(order) => {
            let dir = order.direction.as_sql();
            clause.sql.push_str(&format!(
                " ORDER BY {} {dir}, {rowid} {dir}",
                qualified(alias, &order.column)
            ));
        }
        None => clause.sql.push_str(&format!(" ORDER BY {rowid} ASC")),
    }
    if let Some(limit) = query.limit {
        clause.sql.push_str(" LIMIT ?");
        clause.params.push(Value::Integer(limit as i64));
    }
    Ok(clause)
}
