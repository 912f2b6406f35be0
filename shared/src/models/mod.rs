//! Data models
//!
//! Read-only projections consumed by the report calculators, plus the
//! report payload types returned over the API.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY); all timestamps are
//! Unix milliseconds.

pub mod access_log;
pub mod business;
pub mod employee;
pub mod order;
pub mod report;

// Re-exports
pub use access_log::*;
pub use business::*;
pub use employee::*;
pub use order::*;
pub use report::*;
