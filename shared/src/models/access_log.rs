//! Order access log model
//!
//! One row per stretch of time an employee had an order open on a
//! terminal. An open session has no end time yet; a closed session never
//! reopens.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AccessLogRecord {
    pub id: i64,
    pub order_id: i64,
    pub employee_id: i64,
    pub start_time: i64,
    /// `None` while the session is still open. When set, >= start_time.
    pub end_time: Option<i64>,
}
