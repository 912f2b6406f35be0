//! Business (tenant) model

use serde::{Deserialize, Serialize};

/// Business row (tenant). The configured food-tax percentage feeds the
/// single-rate tax breakdown; `None` falls back to the server default.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub food_tax_percent: Option<f64>,
}
