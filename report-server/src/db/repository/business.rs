//! Business repository

use shared::models::Business;
use sqlx::SqlitePool;

use super::RepoResult;

#[derive(Clone)]
pub struct BusinessRepository {
    pool: SqlitePool,
}

impl BusinessRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, id: i64) -> RepoResult<Option<Business>> {
        let business: Option<Business> = sqlx::query_as(
            "SELECT id, name, food_tax_percent FROM businesses WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(business)
    }
}
