//! Per-table query functions operating on a borrowed connection.

pub mod activity_ops;
pub mod alert_ops;
pub mod filter;
pub mod metrics_ops;
pub mod timestamps;
