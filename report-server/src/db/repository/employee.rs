//! Employee repository

use std::collections::HashMap;

use shared::models::Employee;
use sqlx::SqlitePool;

use super::RepoResult;

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Whether the employee exists under this business. Used to reject a
    /// foreign employee filter before any snapshot is loaded.
    pub async fn belongs_to(&self, business_id: i64, employee_id: i64) -> RepoResult<bool> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM employees WHERE id = ?1 AND business_id = ?2",
        )
        .bind(employee_id)
        .bind(business_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    /// Employee id → display name map for activity report labels
    pub async fn names(&self, business_id: i64) -> RepoResult<HashMap<i64, String>> {
        let rows: Vec<Employee> = sqlx::query_as(
            "SELECT id, business_id, name, is_active FROM employees WHERE business_id = ?1",
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|e| (e.id, e.name)).collect())
    }
}
