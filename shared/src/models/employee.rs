//! Employee model

use serde::{Deserialize, Serialize};

/// Employee row — only what reporting needs (filter validation, labels)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub business_id: i64,
    pub name: String,
    pub is_active: bool,
}
