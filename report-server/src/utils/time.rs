//! Time helpers — business timezone conversion
//!
//! All date → timestamp conversion happens at the API handler layer;
//! the repository layer only ever sees `i64` Unix millis.

use chrono::{NaiveDate, TimeZone, Timelike};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::report_param(format!("Invalid date format: {}", date)))
}

/// Current date in the business timezone
pub fn today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// Date + hour/min/sec → Unix millis (business timezone)
///
/// DST gap fallback: if the local time does not exist, fall back to UTC.
pub fn date_hms_to_millis(date: NaiveDate, hour: u32, min: u32, sec: u32, tz: Tz) -> i64 {
    let naive = date.and_hms_opt(hour, min, sec).unwrap();
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Start of day (00:00:00) → Unix millis (business timezone)
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    date_hms_to_millis(date, 0, 0, 0, tz)
}

/// End of day → next day's 00:00:00 Unix millis (business timezone)
///
/// Callers use `< end` (exclusive) semantics, which covers the full
/// business day inclusive of 23:59:59.999.
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    date_hms_to_millis(next_day, 0, 0, 0, tz)
}

/// Hour of day (0-23) of a Unix-millis timestamp in the business timezone
pub fn local_hour(millis: i64, tz: Tz) -> u32 {
    tz.timestamp_millis_opt(millis)
        .latest()
        .map(|dt| dt.hour())
        .unwrap_or(0)
}
