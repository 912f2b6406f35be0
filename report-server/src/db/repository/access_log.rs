//! Access log repository
//!
//! Loads the order-access sessions for a reporting window. Sessions are
//! tied to the orders in the window; the optional employee filter narrows
//! to that employee's sessions (orders stay unfiltered so touched orders
//! can still be enriched).

use shared::models::AccessLogRecord;
use sqlx::SqlitePool;

use super::RepoResult;

#[derive(Clone)]
pub struct AccessLogRepository {
    pool: SqlitePool,
}

impl AccessLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn load_window(
        &self,
        business_id: i64,
        start: i64,
        end: i64,
        employee_filter: Option<i64>,
    ) -> RepoResult<Vec<AccessLogRecord>> {
        let logs: Vec<AccessLogRecord> = sqlx::query_as(
            r#"
            SELECT l.id, l.order_id, l.employee_id, l.start_time, l.end_time
            FROM order_access_logs l
            JOIN orders o ON o.id = l.order_id
            WHERE o.business_id = ?1 AND o.created_at >= ?2 AND o.created_at < ?3
              AND (?4 IS NULL OR l.employee_id = ?4)
            ORDER BY l.start_time, l.id
            "#,
        )
        .bind(business_id)
        .bind(start)
        .bind(end)
        .bind(employee_filter)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }
}
