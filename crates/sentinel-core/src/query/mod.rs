//! Read/write shapes of the data store: equality filters, ordering, limits,
//! the alert patch, and relationship expansion.

pub mod table;

pub use table::Table;

use crate::errors::{SentinelError, SentinelResult};

/// Sort direction for [`Query::order_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// A value compared for equality in a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Real(f64),
    Bool(bool),
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Integer(v)
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Real(v)
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        FilterValue::Bool(v)
    }
}

/// One `column = value` predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: FilterValue,
}

/// Ordering by a named column.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub column: String,
    pub direction: Direction,
}

/// A select/update predicate: equality filters (AND-ed), optional ordering,
/// optional row limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order: Option<OrderBy>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality predicate.
    pub fn eq(mut self, column: &str, value: impl Into<FilterValue>) -> Self {
        self.filters.push(Filter {
            column: column.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn order_by(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some(OrderBy {
            column: column.to_string(),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check every referenced column exists on `table`.
    pub fn validate(&self, table: Table) -> SentinelResult<()> {
        let referenced = self
            .filters
            .iter()
            .map(|f| f.column.as_str())
            .chain(self.order.iter().map(|o| o.column.as_str()));
        for column in referenced {
            if !table.has_column(column) {
                return Err(SentinelError::UnknownColumn {
                    table: table.name().to_string(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Patch applied by an alert update. Acknowledgement is the only mutation
/// alerts support, and it is one-way: a patch can set `is_acknowledged` to
/// true but never back to false. The default patch sets nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertPatch {
    is_acknowledged: Option<bool>,
}

impl AlertPatch {
    /// The acknowledge patch: `is_acknowledged = true`.
    pub fn acknowledge() -> Self {
        Self {
            is_acknowledged: Some(true),
        }
    }

    /// Value written to `is_acknowledged`, if any.
    pub fn is_acknowledged(&self) -> Option<bool> {
        self.is_acknowledged
    }

    pub fn is_empty(&self) -> bool {
        self.is_acknowledged.is_none()
    }
}

/// Relationship expansion requested when reading alerts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertExpansion {
    #[default]
    None,
    /// Embed each alert's referenced `user_activities` row.
    UserActivity,
}
